//! printf-style column format specifiers.
//!
//! A specifier holds exactly one conversion, optionally surrounded by literal
//! text (`$%.2f`, `%10s`, `%-8d units`). `%%` is a literal percent sign.
//!
//! Supported syntax: `%[flags][width][.precision]conversion` where flags are
//! any of `-`, `0`, `+` and space, and the conversion is one of
//! `s d i f F e E x X o`.

use crate::core::error::{TableError, TableResult};
use crate::core::types::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Str,
    Int,
    Float { upper: bool },
    Exp { upper: bool },
    Hex { upper: bool },
    Octal,
}

/// A parsed column format specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    source: String,
    prefix: String,
    suffix: String,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl FormatSpec {
    /// Parse a specifier.
    pub fn parse(source: &str) -> TableResult<Self> {
        let invalid = |reason: &str| TableError::InvalidFormatSpec {
            spec: source.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = source.chars().peekable();
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut parsed: Option<(Flags, Option<usize>, Option<usize>, Conversion)> = None;

        while let Some(c) = chars.next() {
            let literal = if parsed.is_some() { &mut suffix } else { &mut prefix };
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if parsed.is_some() {
                return Err(invalid("more than one conversion"));
            }

            let mut flags = Flags::default();
            while let Some(&f) = chars.peek() {
                match f {
                    '-' => flags.left = true,
                    '0' => flags.zero = true,
                    '+' => flags.plus = true,
                    ' ' => flags.space = true,
                    _ => break,
                }
                chars.next();
            }

            let width = take_number(&mut chars);
            let precision = if chars.peek() == Some(&'.') {
                chars.next();
                Some(take_number(&mut chars).unwrap_or(0))
            } else {
                None
            };

            let conversion = match chars.next() {
                Some('s') => Conversion::Str,
                Some('d') | Some('i') => Conversion::Int,
                Some('f') => Conversion::Float { upper: false },
                Some('F') => Conversion::Float { upper: true },
                Some('e') => Conversion::Exp { upper: false },
                Some('E') => Conversion::Exp { upper: true },
                Some('x') => Conversion::Hex { upper: false },
                Some('X') => Conversion::Hex { upper: true },
                Some('o') => Conversion::Octal,
                Some(other) => {
                    return Err(invalid(&format!("unsupported conversion '{}'", other)))
                }
                None => return Err(invalid("incomplete conversion")),
            };

            parsed = Some((flags, width, precision, conversion));
        }

        let (flags, width, precision, conversion) =
            parsed.ok_or_else(|| invalid("no conversion"))?;

        Ok(Self {
            source: source.to_string(),
            prefix,
            suffix,
            flags,
            width,
            precision,
            conversion,
        })
    }

    /// The specifier as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a value through this specifier.
    pub fn apply(&self, value: &Value) -> TableResult<String> {
        let body = match self.conversion {
            Conversion::Str => {
                let text = value.to_string();
                let text = match self.precision {
                    Some(p) => text.chars().take(p).collect(),
                    None => text,
                };
                self.pad(String::new(), text, false)
            }
            Conversion::Int => {
                let (negative, digits) = self.decimal_of(value)?;
                let digits = self.min_digits(digits);
                self.pad(self.sign(negative), digits, true)
            }
            Conversion::Hex { upper } => {
                let n = self.integer_of(value)?;
                let digits = if upper {
                    format!("{:X}", n.unsigned_abs())
                } else {
                    format!("{:x}", n.unsigned_abs())
                };
                let digits = self.min_digits(digits);
                self.pad(self.sign(n < 0), digits, true)
            }
            Conversion::Octal => {
                let n = self.integer_of(value)?;
                let digits = self.min_digits(format!("{:o}", n.unsigned_abs()));
                self.pad(self.sign(n < 0), digits, true)
            }
            Conversion::Float { upper } => {
                let f = self.float_of(value)?;
                let precision = self.precision.unwrap_or(6);
                match non_finite(f, upper) {
                    Some(text) => self.pad(self.sign(f.is_sign_negative()), text, false),
                    None => {
                        let digits = format!("{:.*}", precision, f.abs());
                        self.pad(self.sign(f.is_sign_negative()), digits, true)
                    }
                }
            }
            Conversion::Exp { upper } => {
                let f = self.float_of(value)?;
                let precision = self.precision.unwrap_or(6);
                match non_finite(f, upper) {
                    Some(text) => self.pad(self.sign(f.is_sign_negative()), text, false),
                    None => {
                        let digits = exponent_form(f.abs(), precision, upper);
                        self.pad(self.sign(f.is_sign_negative()), digits, true)
                    }
                }
            }
        };

        Ok(format!("{}{}{}", self.prefix, body, self.suffix))
    }

    fn rejects(&self, value: &Value) -> TableError {
        TableError::FormatValue {
            spec: self.source.clone(),
            value: value.clone(),
        }
    }

    fn integer_of(&self, value: &Value) -> TableResult<i64> {
        match value {
            Value::Integer(i) => Ok(*i),
            Value::Boolean(b) => Ok(i64::from(*b)),
            _ => Err(self.rejects(value)),
        }
    }

    // Sign and decimal digits for `%d`. Floats are truncated toward zero and
    // printed exactly, whatever their magnitude.
    fn decimal_of(&self, value: &Value) -> TableResult<(bool, String)> {
        match value {
            Value::Float(f) if f.is_finite() => {
                let whole = f.trunc();
                Ok((whole < 0.0, format!("{:.0}", whole.abs())))
            }
            other => {
                let n = self.integer_of(other)?;
                Ok((n < 0, n.unsigned_abs().to_string()))
            }
        }
    }

    fn float_of(&self, value: &Value) -> TableResult<f64> {
        match value {
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => other.as_number().ok_or_else(|| self.rejects(value)),
        }
    }

    fn sign(&self, negative: bool) -> String {
        if negative {
            "-".to_string()
        } else if self.flags.plus {
            "+".to_string()
        } else if self.flags.space {
            " ".to_string()
        } else {
            String::new()
        }
    }

    // For integer conversions the precision is a minimum digit count.
    fn min_digits(&self, digits: String) -> String {
        match self.precision {
            Some(p) if digits.len() < p => format!("{}{}", "0".repeat(p - digits.len()), digits),
            _ => digits,
        }
    }

    fn pad(&self, sign: String, digits: String, numeric: bool) -> String {
        let len = sign.chars().count() + digits.chars().count();
        let width = self.width.unwrap_or(0);
        if len >= width {
            return format!("{}{}", sign, digits);
        }
        let fill = width - len;
        if self.flags.left {
            format!("{}{}{}", sign, digits, " ".repeat(fill))
        } else if self.flags.zero && numeric {
            format!("{}{}{}", sign, "0".repeat(fill), digits)
        } else {
            format!("{}{}{}", " ".repeat(fill), sign, digits)
        }
    }
}

fn take_number<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

fn non_finite(f: f64, upper: bool) -> Option<String> {
    let text = if f.is_nan() {
        "nan"
    } else if f.is_infinite() {
        "inf"
    } else {
        return None;
    };
    Some(if upper { text.to_uppercase() } else { text.to_string() })
}

/// `d.ddddde+XX` with at least two exponent digits.
fn exponent_form(magnitude: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, magnitude);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:02}", mantissa, e, sign, exponent.abs())
}

impl FromStr for FormatSpec {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
