// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of directives and their argument lists.

use alloc::string::String;
use alloc::vec::Vec;

use crate::diag::{Diagnostic, Span, Spanned};
use crate::source::Source;
use crate::value::{Length, Value};

/// A parsed directive: its name and argument list.
#[derive(Clone, PartialEq, Debug)]
pub struct Directive {
    /// The directive name, e.g. `font`.
    pub name: Spanned<String>,
    /// The arguments between the name and the closing bracket.
    pub args: Args,
}

/// A parsed argument list, in source order.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Args {
    /// The parsed arguments.
    pub items: Vec<Arg>,
}

/// A single argument.
#[derive(Clone, PartialEq, Debug)]
pub struct Arg {
    /// The span of the whole argument, including its name.
    pub span: Span,
    /// The name, for named arguments.
    pub name: Option<Spanned<String>>,
    /// The value.
    pub value: Spanned<Value>,
}

impl Directive {
    /// Parses a directive of the form `#[name arg, ...]`.
    ///
    /// Only syntax problems surface here, as an error diagnostic that
    /// aborts parsing; whether the arguments make sense is decided during
    /// evaluation.
    pub fn parse(source: &Source) -> Result<Self, Diagnostic> {
        Parser::new(source.text()).directive()
    }
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn directive(&mut self) -> Result<Directive, Diagnostic> {
        self.skip_ws();
        if !self.eat(b'#') || !self.eat(b'[') {
            return Err(Diagnostic::error(Span::at(self.pos), "expected directive"));
        }
        self.skip_ws();
        let Some(name) = self.ident() else {
            return Err(Diagnostic::error(
                Span::at(self.pos),
                "expected function name",
            ));
        };
        let mut args = Args::default();
        loop {
            self.skip_ws();
            match self.peek() {
                None => {
                    return Err(Diagnostic::error(
                        Span::at(self.pos),
                        "expected closing bracket",
                    ));
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => {}
            }
            args.items.push(self.arg()?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(Diagnostic::error(Span::at(self.pos), "expected comma")),
            }
        }
        Ok(Directive { name, args })
    }

    fn arg(&mut self) -> Result<Arg, Diagnostic> {
        // A leading ident followed by a colon names the argument; otherwise
        // the ident is itself the value.
        let checkpoint = self.pos;
        let name = match self.ident() {
            Some(ident) => {
                self.skip_ws();
                if self.eat(b':') {
                    self.skip_ws();
                    Some(ident)
                } else {
                    self.pos = checkpoint;
                    None
                }
            }
            None => None,
        };
        let value = self.value()?;
        let span = match &name {
            Some(name) => name.span.join(value.span),
            None => value.span,
        };
        Ok(Arg { span, name, value })
    }

    fn value(&mut self) -> Result<Spanned<Value>, Diagnostic> {
        match self.peek() {
            Some(b'"') => self.string(),
            Some(b'(') => self.array(),
            Some(b) if b.is_ascii_digit() || b == b'-' || b == b'.' => self.number(),
            Some(b) if is_ident_start(b) => {
                let Some(ident) = self.ident() else {
                    return Err(Diagnostic::error(Span::at(self.pos), "expected expression"));
                };
                Ok(match ident.v.as_str() {
                    "true" => Spanned::new(Value::Bool(true), ident.span),
                    "false" => Spanned::new(Value::Bool(false), ident.span),
                    _ => ident.map(Value::Ident),
                })
            }
            _ => Err(Diagnostic::error(Span::at(self.pos), "expected expression")),
        }
    }

    fn string(&mut self) -> Result<Spanned<Value>, Diagnostic> {
        let open = self.pos;
        self.pos += 1;
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'"' {
                let content = String::from(&self.src[start..self.pos]);
                self.pos += 1;
                return Ok(Spanned::new(Value::Str(content), Span::new(open, self.pos)));
            }
            self.pos += 1;
        }
        Err(Diagnostic::error(
            Span::new(open, self.pos),
            "unterminated string",
        ))
    }

    fn array(&mut self) -> Result<Spanned<Value>, Diagnostic> {
        let open = self.pos;
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                None => {
                    return Err(Diagnostic::error(
                        Span::new(open, self.pos),
                        "expected closing paren",
                    ));
                }
                Some(b')') => {
                    self.pos += 1;
                    break;
                }
                _ => {}
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b')') => {
                    self.pos += 1;
                    break;
                }
                None => {
                    return Err(Diagnostic::error(
                        Span::new(open, self.pos),
                        "expected closing paren",
                    ));
                }
                _ => return Err(Diagnostic::error(Span::at(self.pos), "expected comma")),
            }
        }
        Ok(Spanned::new(Value::Array(items), Span::new(open, self.pos)))
    }

    fn number(&mut self) -> Result<Spanned<Value>, Diagnostic> {
        let start = self.pos;
        self.eat(b'-');
        let mut is_float = false;
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() {
                self.pos += 1;
            } else if b == b'.' && !is_float {
                is_float = true;
                self.pos += 1;
            } else {
                break;
            }
        }
        let unit_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let span = Span::new(start, self.pos);
        let digits = &self.src[start..unit_start];
        let unit = &self.src[unit_start..self.pos];
        if unit.is_empty() {
            if is_float {
                match digits.parse::<f64>() {
                    Ok(v) => Ok(Spanned::new(Value::Float(v), span)),
                    Err(_) => Err(Diagnostic::error(span, "expected expression")),
                }
            } else {
                match digits.parse::<i64>() {
                    Ok(v) => Ok(Spanned::new(Value::Int(v), span)),
                    Err(_) => Err(Diagnostic::error(span, "expected expression")),
                }
            }
        } else {
            let Ok(v) = digits.parse::<f64>() else {
                return Err(Diagnostic::error(span, "expected expression"));
            };
            let length = match unit {
                "pt" => Length::pt(v),
                "mm" => Length::mm(v),
                "cm" => Length::cm(v),
                "in" => Length::inches(v),
                _ => return Err(Diagnostic::error(span, "unknown unit")),
            };
            Ok(Spanned::new(Value::Length(length), span))
        }
    }

    fn ident(&mut self) -> Option<Spanned<String>> {
        let start = self.pos;
        match self.peek() {
            Some(b) if is_ident_start(b) => self.pos += 1,
            _ => return None,
        }
        while matches!(self.peek(), Some(b) if is_ident_continue(b)) {
            self.pos += 1;
        }
        Some(Spanned::new(
            String::from(&self.src[start..self.pos]),
            Span::new(start, self.pos),
        ))
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::{Directive, Value};
    use crate::diag::Span;
    use crate::source::Source;

    fn parse(text: &str) -> Directive {
        Directive::parse(&Source::new(text)).unwrap()
    }

    fn parse_err(text: &str) -> crate::diag::Diagnostic {
        Directive::parse(&Source::new(text)).unwrap_err()
    }

    #[test]
    fn parse_positional_bool_spans() {
        let directive = parse("#[font false]");
        assert_eq!(directive.name.v, "font");
        assert_eq!(directive.name.span, Span::new(2, 6));
        let arg = &directive.args.items[0];
        assert_eq!(arg.name, None);
        assert_eq!(arg.value.v, Value::Bool(false));
        assert_eq!(arg.span, Span::new(7, 12));
    }

    #[test]
    fn parse_named_argument_spans() {
        let directive = parse("#[font weight: 2700]");
        let arg = &directive.args.items[0];
        assert_eq!(arg.name.as_ref().unwrap().v, "weight");
        assert_eq!(arg.name.as_ref().unwrap().span, Span::new(7, 13));
        assert_eq!(arg.value.v, Value::Int(2700));
        assert_eq!(arg.value.span, Span::new(15, 19));
        assert_eq!(arg.span, Span::new(7, 19));
    }

    #[test]
    fn parse_lengths() {
        let directive = parse("#[font 20pt]");
        let arg = &directive.args.items[0];
        assert_eq!(arg.value.v, Value::Length(crate::value::Length::pt(20.0)));
        assert_eq!(arg.value.span, Span::new(7, 11));

        let directive = parse("#[font size: 2.54cm]");
        let arg = &directive.args.items[0];
        let Value::Length(length) = arg.value.v else {
            panic!("expected a length value");
        };
        assert!((length.to_pt() - 72.0).abs() < 1e-9, "cm should normalize");
    }

    #[test]
    fn parse_array_of_families() {
        let directive = parse("#[font serif: (\"Vollkorn\", serif)]");
        let arg = &directive.args.items[0];
        assert_eq!(arg.name.as_ref().unwrap().v, "serif");
        let Value::Array(items) = &arg.value.v else {
            panic!("expected an array value");
        };
        assert_eq!(items[0].v, Value::Str("Vollkorn".into()));
        assert_eq!(items[1].v, Value::Ident("serif".into()));
    }

    #[test]
    fn parse_multiple_arguments_and_trailing_comma() {
        let directive = parse("#[font \"PT Sans\", style: italic, weight: 600,]");
        assert_eq!(directive.args.items.len(), 3);
        assert_eq!(
            directive.args.items[1].value.v,
            Value::Ident("italic".into())
        );
    }

    #[test]
    fn parse_hyphenated_idents() {
        let directive = parse("#[font sans-serif]");
        assert_eq!(
            directive.args.items[0].value.v,
            Value::Ident("sans-serif".into())
        );
    }

    #[test]
    fn parse_unterminated_string() {
        let diag = parse_err("#[font \"PT Sans]");
        assert_eq!(diag.message, "unterminated string");
        assert_eq!(diag.span, Span::new(7, 16));
    }

    #[test]
    fn parse_missing_comma() {
        let diag = parse_err("#[font \"A\" \"B\"]");
        assert_eq!(diag.message, "expected comma");
        assert_eq!(diag.span, Span::at(11));
    }

    #[test]
    fn parse_missing_closing_bracket() {
        let diag = parse_err("#[font \"A\"");
        assert_eq!(diag.message, "expected closing bracket");
    }

    #[test]
    fn parse_unknown_unit() {
        let diag = parse_err("#[font size: 20px]");
        assert_eq!(diag.message, "unknown unit");
        assert_eq!(diag.span, Span::new(13, 17));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_err("#[font @]").message, "expected expression");
        assert_eq!(parse_err("font false").message, "expected directive");
    }
}
