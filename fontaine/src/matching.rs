// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-variant selection over a family's declared set.

use smallvec::SmallVec;

use crate::attributes::{FontStyle, FontVariant};

/// Returns the index of the declared variant nearest to the request.
///
/// Discrimination order is stretch, then style, then weight. Each axis keeps
/// only the candidates with the best available value before the next axis is
/// considered, so an exact weight never outbids a closer stretch.
pub(crate) fn match_variant(set: &[FontVariant], request: FontVariant) -> Option<usize> {
    match set.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }
    #[derive(Copy, Clone)]
    struct Candidate {
        index: usize,
        stretch: i32,
        style: FontStyle,
        weight: f32,
    }
    let mut set: SmallVec<[Candidate; 8]> = set
        .iter()
        .enumerate()
        .map(|(i, variant)| Candidate {
            index: i,
            stretch: per_mille(variant.stretch.ratio()),
            style: variant.style,
            weight: variant.weight.value(),
        })
        .collect();
    // Stretch is tried first. For condensed or normal requests, stretches
    // below the desired value are checked in descending order, then
    // stretches above in ascending order. Expanded requests search the
    // other way around.
    let stretch = per_mille(request.stretch.ratio());
    let mut use_stretch = stretch;
    if !set.iter().any(|c| c.stretch == stretch) {
        if stretch <= 1000 {
            if let Some(found) = set
                .iter()
                .filter(|c| c.stretch < stretch)
                .max_by_key(|c| c.stretch)
            {
                use_stretch = found.stretch;
            } else if let Some(found) = set
                .iter()
                .filter(|c| c.stretch > stretch)
                .min_by_key(|c| c.stretch)
            {
                use_stretch = found.stretch;
            }
        } else if let Some(found) = set
            .iter()
            .filter(|c| c.stretch > stretch)
            .min_by_key(|c| c.stretch)
        {
            use_stretch = found.stretch;
        } else if let Some(found) = set
            .iter()
            .filter(|c| c.stretch < stretch)
            .max_by_key(|c| c.stretch)
        {
            use_stretch = found.stretch;
        }
    }
    set.retain(|c| c.stretch == use_stretch);
    // Style is tried next. Without oblique angles this reduces to a fixed
    // preference order per requested style.
    let order = match request.style {
        FontStyle::Normal => [FontStyle::Normal, FontStyle::Oblique, FontStyle::Italic],
        FontStyle::Italic => [FontStyle::Italic, FontStyle::Oblique, FontStyle::Normal],
        FontStyle::Oblique => [FontStyle::Oblique, FontStyle::Italic, FontStyle::Normal],
    };
    let use_style = order
        .into_iter()
        .find(|style| set.iter().any(|c| c.style == *style))?;
    set.retain(|c| c.style == use_style);
    // Weight is matched last.
    use core::cmp::Ordering::Less;
    let weight = request.weight.value();
    if let Some(found) = set.iter().find(|c| c.weight == weight) {
        return Some(found.index);
    }
    if (400.0..=500.0).contains(&weight) {
        // Weights above the target are checked in ascending order until 500
        // is hit, followed by weights below the target in descending order,
        // followed by weights above 500.
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight > weight && c.weight <= 500.0)
            .min_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight < weight)
            .max_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight > 500.0)
            .min_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
    } else if weight < 400.0 {
        // Light requests check weights below the target in descending order
        // first.
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight < weight)
            .max_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight > weight)
            .min_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
    } else {
        // Heavy requests check weights above the target in ascending order
        // first.
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight > weight)
            .min_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
        if let Some(found) = set
            .iter()
            .filter(|c| c.weight < weight)
            .max_by(|x, y| x.weight.partial_cmp(&y.weight).unwrap_or(Less))
        {
            return Some(found.index);
        }
    }
    None
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "stretch ratios are small; per-mille conversion stays well within i32"
)]
fn per_mille(ratio: f32) -> i32 {
    (ratio * 1000.0) as i32
}
