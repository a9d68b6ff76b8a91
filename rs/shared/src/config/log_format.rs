use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};

use crate::constant::LOG_FORMAT;

/// Attributes a log template can reference as `%(name)s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Placeholder {
    AscTime,
    Created,
    #[strum(serialize = "relativeCreated")]
    RelativeCreated,
    Msecs,
    LevelName,
    LevelNo,
    Name,
    Module,
    FileName,
    PathName,
    LineNo,
    #[strum(serialize = "funcName")]
    FuncName,
    Message,
    Process,
    #[strum(serialize = "processName")]
    ProcessName,
    Thread,
    #[strum(serialize = "threadName")]
    ThreadName,
    #[strum(serialize = "taskName")]
    TaskName,
}

impl Placeholder {
    /// Placeholders that accept the `d` and `f` conversions.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Placeholder::Created
                | Placeholder::RelativeCreated
                | Placeholder::Msecs
                | Placeholder::LevelNo
                | Placeholder::LineNo
                | Placeholder::Process
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Str,
    Int,
    Float,
}

/// Value of a placeholder for one event.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
}

/// A `%(name)[flags][width][.precision]conversion` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub placeholder: Placeholder,
    pub conversion: Conversion,
    pub width: usize,
    pub precision: Option<usize>,
    pub left_align: bool,
    pub zero_pad: bool,
}

impl Field {
    pub fn new(placeholder: Placeholder, conversion: Conversion) -> Self {
        Self {
            placeholder,
            conversion,
            width: 0,
            precision: None,
            left_align: false,
            zero_pad: false,
        }
    }

    pub fn render(&self, value: &FieldValue) -> String {
        match (self.conversion, value) {
            (_, FieldValue::Text(text)) => self.render_str(text),
            (Conversion::Str, FieldValue::Int(n)) => self.render_str(&n.to_string()),
            (Conversion::Str, FieldValue::Float(x)) => self.render_str(&x.to_string()),
            (Conversion::Int, FieldValue::Int(n)) => self.render_int(*n),
            (Conversion::Int, FieldValue::Float(x)) => self.render_int(x.trunc() as i64),
            (Conversion::Float, FieldValue::Int(n)) => self.render_float(*n as f64),
            (Conversion::Float, FieldValue::Float(x)) => self.render_float(*x),
        }
    }

    fn render_str(&self, text: &str) -> String {
        match self.precision {
            Some(max) => self.pad(&text.chars().take(max).collect::<String>()),
            None => self.pad(text),
        }
    }

    fn render_int(&self, n: i64) -> String {
        let digits = format!("{:0>min$}", n.unsigned_abs(), min = self.precision.unwrap_or(0));
        self.pad_number(n < 0, &digits)
    }

    fn render_float(&self, x: f64) -> String {
        let digits = format!("{:.prec$}", x.abs(), prec = self.precision.unwrap_or(6));
        self.pad_number(x < 0.0, &digits)
    }

    // zeros go between the sign and the digits
    fn pad_number(&self, negative: bool, digits: &str) -> String {
        let sign = if negative { "-" } else { "" };
        if self.zero_pad && !self.left_align {
            let fill = self.width.saturating_sub(sign.len() + digits.len());
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            self.pad(&format!("{sign}{digits}"))
        }
    }

    fn pad(&self, value: &str) -> String {
        if self.left_align {
            format!("{value:<width$}", width = self.width)
        } else {
            format!("{value:>width$}", width = self.width)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed `%(name)s` log line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    template: String,
    segments: Vec<Segment>,
}

impl LogFormat {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Field(f) if f.placeholder == placeholder))
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        LOG_FORMAT
            .parse()
            .expect("built-in log format is a valid template")
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(pos) = rest.find('%') {
            let offset = template.len() - rest.len() + pos;
            literal.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('%') {
                literal.push('%');
                rest = tail;
                continue;
            }
            let Some(after) = after.strip_prefix('(') else {
                return Err(format!(
                    "'%' at offset {offset} must start '%(name)s' or be escaped as '%%'"
                ));
            };
            let Some(close) = after.find(')') else {
                return Err(format!("unterminated placeholder at offset {offset}"));
            };
            let name = &after[..close];
            let placeholder = name
                .parse::<Placeholder>()
                .map_err(|_| format!("unknown placeholder '{name}'"))?;

            let (field, tail) = parse_conversion(placeholder, &after[close + 1..])?;
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Field(field));
            rest = tail;
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let format = LogFormat {
            template: template.to_owned(),
            segments,
        };
        if !format.contains(Placeholder::Message) {
            return Err("must contain %(message)s".to_owned());
        }
        Ok(format)
    }
}

// [flags][width][.precision](s|d|f), flags being any of '-' and '0'
fn parse_conversion(placeholder: Placeholder, rest: &str) -> Result<(Field, &str), String> {
    let flags_len = rest.len() - rest.trim_start_matches(|c: char| c == '-' || c == '0').len();
    let (flags, rest) = rest.split_at(flags_len);
    let (width, rest) = take_number(placeholder, rest)?;
    let (precision, rest) = match rest.strip_prefix('.') {
        Some(rest) => {
            let (precision, rest) = take_number(placeholder, rest)?;
            (Some(precision.unwrap_or(0)), rest)
        }
        None => (None, rest),
    };
    let conversion = match rest.chars().next() {
        Some('s') => Conversion::Str,
        Some('d' | 'f') if !placeholder.is_numeric() => {
            return Err(format!("placeholder '{placeholder}' is not numeric"))
        }
        Some('d') => Conversion::Int,
        Some('f') => Conversion::Float,
        _ => {
            return Err(format!(
                "expected conversion 's', 'd' or 'f' after '%({placeholder})'"
            ))
        }
    };
    let field = Field {
        placeholder,
        conversion,
        width: width.unwrap_or(0),
        precision,
        left_align: flags.contains('-'),
        zero_pad: flags.contains('0'),
    };
    Ok((field, &rest[1..]))
}

fn take_number(placeholder: Placeholder, s: &str) -> Result<(Option<usize>, &str), String> {
    let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return Ok((None, s));
    }
    let number = s[..digits]
        .parse::<usize>()
        .map_err(|e| format!("invalid width or precision for '{placeholder}': {e}"))?;
    Ok((Some(number), &s[digits..]))
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl Serialize for LogFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn field(placeholder: Placeholder, conversion: Conversion) -> Segment {
        Segment::Field(Field::new(placeholder, conversion))
    }

    #[test]
    fn test_default_format_segments() {
        let format = LogFormat::default();
        assert_eq!(format.template(), LOG_FORMAT);
        assert_eq!(
            format.segments(),
            &[
                field(Placeholder::AscTime, Conversion::Str),
                Segment::Literal(" - ".to_owned()),
                field(Placeholder::LevelName, Conversion::Str),
                Segment::Literal(" - ".to_owned()),
                field(Placeholder::FileName, Conversion::Str),
                Segment::Literal(":".to_owned()),
                field(Placeholder::LineNo, Conversion::Int),
                Segment::Literal(" - ".to_owned()),
                field(Placeholder::Message, Conversion::Str),
            ]
        );
    }

    #[test]
    fn test_width_and_escape() {
        let format: LogFormat = "%(levelname)-8s 100%% %(message)s".parse().unwrap();
        assert_eq!(
            format.segments(),
            &[
                Segment::Field(Field {
                    width: 8,
                    left_align: true,
                    ..Field::new(Placeholder::LevelName, Conversion::Str)
                }),
                Segment::Literal(" 100% ".to_owned()),
                field(Placeholder::Message, Conversion::Str),
            ]
        );
    }

    #[test]
    fn test_zero_padded_msecs() {
        let format: LogFormat = "%(asctime)s.%(msecs)03d %(message)s".parse().unwrap();
        assert_eq!(
            format.segments()[2],
            Segment::Field(Field {
                width: 3,
                zero_pad: true,
                ..Field::new(Placeholder::Msecs, Conversion::Int)
            })
        );
    }

    #[rstest]
    #[case("%(funcName)s %(threadName)s %(process)d %(message)s")]
    #[case("[%(name)s] %(module)s %(pathname)s %(created)d %(message)s")]
    #[case("%(asctime)s.%(msecs)03d %(message)s")]
    #[case("%(created)f %(message)s")]
    #[case("%(relativeCreated)6.1f %(message)s")]
    #[case("%(processName)s %(taskName)s %(message)s")]
    #[case("%(levelname)-8.3s %(lineno)-04d %(message)s")]
    #[case("%(message)s")]
    fn test_accepts_recognised_placeholders(#[case] template: &str) {
        assert!(template.parse::<LogFormat>().is_ok(), "{template}");
    }

    #[rstest]
    #[case("%(asctime)s %(user)s %(message)s", "unknown placeholder 'user'")]
    #[case("%(message)", "expected conversion")]
    #[case("%(message)x", "expected conversion")]
    #[case("%(msecs)03 %(message)s", "expected conversion")]
    #[case("%(levelname)d %(message)s", "not numeric")]
    #[case("%(asctime)f %(message)s", "not numeric")]
    #[case("%(message", "unterminated")]
    #[case("50% %(message)s", "offset 2")]
    #[case("%(asctime)s only", "must contain %(message)s")]
    #[case("%(MESSAGE)s", "unknown placeholder")]
    fn test_rejects_invalid_templates(#[case] template: &str, #[case] reason: &str) {
        let err = template.parse::<LogFormat>().unwrap_err();
        assert!(err.contains(reason), "{template}: {err}");
    }

    #[rstest]
    #[case("%(levelname)-7s", FieldValue::Text("INFO".to_owned()), "INFO   ")]
    #[case("%(levelname)7s", FieldValue::Text("INFO".to_owned()), "   INFO")]
    #[case("%(levelname).3s", FieldValue::Text("WARNING".to_owned()), "WAR")]
    #[case("%(msecs)03d", FieldValue::Float(7.9), "007")]
    #[case("%(msecs)03d", FieldValue::Float(896.2), "896")]
    #[case("%(lineno)05d", FieldValue::Int(-42), "-0042")]
    #[case("%(lineno)-5d", FieldValue::Int(42), "42   ")]
    #[case("%(lineno).3d", FieldValue::Int(7), "007")]
    #[case("%(created)f", FieldValue::Float(1.5), "1.500000")]
    #[case("%(relativeCreated)08.2f", FieldValue::Float(3.14159), "00003.14")]
    #[case("%(levelno)s", FieldValue::Int(20), "20")]
    fn test_render_field(
        #[case] field_ref: &str,
        #[case] value: FieldValue,
        #[case] expected: &str,
    ) {
        let template = format!("{field_ref}%(message)s");
        let format: LogFormat = template.parse().unwrap();
        let Segment::Field(field) = &format.segments()[0] else {
            panic!("expected a field in {template}");
        };
        assert_eq!(field.render(&value), expected);
    }
}
