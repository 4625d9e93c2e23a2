use crate::error::FormatError;
use std::fmt;

/// A runtime-typed argument for printf-style template substitution.
///
/// Conversions are type-checked against the variant when the template is
/// rendered, so `%d` with a string fails instead of printing garbage.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Null,
    Str(String),
    /// Signed integer plus the bit width of its source type, which bounds the
    /// two's complement digits `%x` prints for negatives.
    Int { value: i64, bits: u32 },
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl FormatArg {
    pub fn type_name(&self) -> &'static str {
        match self {
            FormatArg::Null => "null",
            FormatArg::Str(_) => "string",
            FormatArg::Int { .. } => "integer",
            FormatArg::UInt(_) => "unsigned integer",
            FormatArg::Float(_) => "float",
            FormatArg::Bool(_) => "boolean",
            FormatArg::Char(_) => "char",
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Null => f.write_str("null"),
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Int { value, .. } => write!(f, "{}", value),
            FormatArg::UInt(v) => write!(f, "{}", v),
            FormatArg::Float(v) => write!(f, "{}", v),
            FormatArg::Bool(v) => write!(f, "{}", v),
            FormatArg::Char(c) => write!(f, "{}", c),
        }
    }
}

macro_rules! impl_from_arg {
    ($variant:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    FormatArg::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    FormatArg::Int {
                        value: value as i64,
                        bits: <$source>::BITS,
                    }
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_arg!(UInt, u64: u8, u16, u32, u64);
impl_from_arg!(Float, f64: f32, f64);
impl_from_arg!(Bool, bool: bool);
impl_from_arg!(Char, char: char);
impl_from_arg!(Str, String: &str, String, &String);

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        FormatArg::UInt(value as u64)
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormatArg::Null, Into::into)
    }
}

const CONVERSIONS: &str = "sSdxXfbBcC%n";

struct Spec<'t> {
    text: &'t str,
    index: Option<usize>,
    left_justify: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Advances past a run of ASCII digits and returns it, if any.
fn digit_run<'t>(template: &'t str, pos: &mut usize) -> Option<&'t str> {
    let start = *pos;
    let len = template[start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    *pos += len;
    (len > 0).then(|| &template[start..*pos])
}

/// Counts are capped at `i32::MAX`, matching `java.util.Formatter`.
fn parse_count(digits: &str) -> Option<usize> {
    digits
        .parse::<i32>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
}

/// Parses `%[index$][flags][width][.precision]conversion` starting at the
/// `%` found at `offset`. Returns the spec and the byte offset just past it.
fn parse_spec(template: &str, offset: usize) -> Result<(Spec<'_>, usize), FormatError> {
    let bytes = template.as_bytes();
    let mut pos = offset + 1;

    let mut index_digits = None;
    let lookahead = pos;
    if let Some(digits) = digit_run(template, &mut pos) {
        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            index_digits = Some(digits);
        } else {
            pos = lookahead;
        }
    }

    let mut left_justify = false;
    let mut zero_pad = false;
    while let Some(flag) = bytes.get(pos).copied() {
        match flag {
            b'-' => left_justify = true,
            b'0' => zero_pad = true,
            _ => break,
        }
        pos += 1;
    }

    let width_digits = digit_run(template, &mut pos);

    let mut precision_digits = None;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        precision_digits = Some(digit_run(template, &mut pos).ok_or(
            FormatError::UnknownConversion {
                conversion: '.',
                offset,
            },
        )?);
    }

    let conversion = template[pos..]
        .chars()
        .next()
        .ok_or(FormatError::DanglingPercent { offset })?;
    if !CONVERSIONS.contains(conversion) {
        return Err(FormatError::UnknownConversion { conversion, offset });
    }
    let end = pos + conversion.len_utf8();
    let text = &template[offset..end];

    let index = match index_digits {
        Some(digits) => match parse_count(digits) {
            Some(n) if n > 0 => Some(n),
            _ => {
                return Err(FormatError::IllegalIndex {
                    specifier: text.to_string(),
                })
            }
        },
        None => None,
    };
    let width = width_digits
        .map(|digits| {
            parse_count(digits).ok_or_else(|| FormatError::IllegalWidth {
                specifier: text.to_string(),
            })
        })
        .transpose()?;
    let precision = precision_digits
        .map(|digits| {
            parse_count(digits).ok_or_else(|| FormatError::IllegalPrecision {
                specifier: text.to_string(),
            })
        })
        .transpose()?;

    let spec = Spec {
        text,
        index,
        left_justify,
        zero_pad,
        width,
        precision,
        conversion,
    };
    check_modifiers(&spec)?;
    Ok((spec, end))
}

/// Rejects flag, width and precision combinations a conversion cannot honor.
fn check_modifiers(spec: &Spec<'_>) -> Result<(), FormatError> {
    let specifier = || spec.text.to_string();

    if spec.precision.is_some()
        && matches!(spec.conversion, 'd' | 'x' | 'X' | 'c' | 'C' | '%' | 'n')
    {
        return Err(FormatError::IllegalPrecision {
            specifier: specifier(),
        });
    }
    if spec.conversion == 'n' {
        if spec.width.is_some() {
            return Err(FormatError::IllegalWidth {
                specifier: specifier(),
            });
        }
        if spec.left_justify || spec.zero_pad {
            return Err(FormatError::IllegalFlags {
                specifier: specifier(),
            });
        }
        return Ok(());
    }
    if spec.left_justify && spec.zero_pad {
        return Err(FormatError::IllegalFlags {
            specifier: specifier(),
        });
    }
    if (spec.left_justify || spec.zero_pad) && spec.width.is_none() {
        return Err(FormatError::MissingWidth {
            specifier: specifier(),
        });
    }
    if spec.zero_pad && !matches!(spec.conversion, 'd' | 'x' | 'X' | 'f') {
        return Err(FormatError::FlagMismatch {
            flag: '0',
            conversion: spec.conversion,
        });
    }
    Ok(())
}

fn mismatch(spec: &Spec<'_>, arg_index: usize, arg: &FormatArg) -> FormatError {
    FormatError::TypeMismatch {
        conversion: spec.conversion,
        index: arg_index + 1,
        found: arg.type_name(),
    }
}

fn truncate(spec: &Spec<'_>, text: String) -> String {
    match spec.precision {
        Some(max) => text.chars().take(max).collect(),
        None => text,
    }
}

fn convert(spec: &Spec<'_>, arg_index: usize, arg: &FormatArg) -> Result<String, FormatError> {
    let rendered = match (spec.conversion, arg) {
        ('b' | 'B', FormatArg::Null) => truncate(spec, "false".to_string()),
        ('b' | 'B', FormatArg::Bool(v)) => truncate(spec, v.to_string()),
        ('b' | 'B', _) => truncate(spec, "true".to_string()),
        ('s' | 'S', other) => truncate(spec, other.to_string()),
        (_, FormatArg::Null) => "null".to_string(),

        ('d', FormatArg::Int { value, .. }) => value.to_string(),
        ('d', FormatArg::UInt(v)) => v.to_string(),

        ('x' | 'X', FormatArg::Int { value, bits }) => {
            let mask = u64::MAX >> (64 - (*bits).clamp(1, 64));
            format!("{:x}", *value as u64 & mask)
        }
        ('x' | 'X', FormatArg::UInt(v)) => format!("{:x}", v),

        ('f', FormatArg::Float(v)) => format!("{:.*}", spec.precision.unwrap_or(6), v),

        ('c' | 'C', FormatArg::Char(c)) => c.to_string(),
        ('c' | 'C', FormatArg::Int { value, .. }) => u32::try_from(*value)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| mismatch(spec, arg_index, arg))?
            .to_string(),
        ('c' | 'C', FormatArg::UInt(v)) => u32::try_from(*v)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| mismatch(spec, arg_index, arg))?
            .to_string(),

        _ => return Err(mismatch(spec, arg_index, arg)),
    };

    Ok(match spec.conversion {
        'S' | 'X' | 'B' | 'C' => rendered.to_uppercase(),
        _ => rendered,
    })
}

fn pad(spec: &Spec<'_>, text: String) -> String {
    let len = text.chars().count();
    let width = match spec.width {
        Some(width) if width > len => width,
        _ => return text,
    };
    let fill = width - len;

    if spec.left_justify {
        return format!("{}{}", text, " ".repeat(fill));
    }

    if spec.zero_pad && text != "null" {
        match text.strip_prefix('-') {
            Some(digits) => format!("-{}{}", "0".repeat(fill), digits),
            None => format!("{}{}", "0".repeat(fill), text),
        }
    } else {
        format!("{}{}", " ".repeat(fill), text)
    }
}

/// Substitutes `args` into a printf-style `template`.
///
/// Ordinary specifiers consume arguments left to right; `%N$` picks the
/// N-th argument explicitly without advancing. Extra arguments are ignored.
pub fn format_template(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut next_ordinary = 0;
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find('%') {
        let offset = cursor + found;
        out.push_str(&template[cursor..offset]);

        let (spec, end) = parse_spec(template, offset)?;
        cursor = end;

        match spec.conversion {
            '%' => out.push_str(&pad(&spec, "%".to_string())),
            'n' => out.push('\n'),
            _ => {
                let arg_index = match spec.index {
                    Some(explicit) => explicit - 1,
                    None => {
                        next_ordinary += 1;
                        next_ordinary - 1
                    }
                };
                let arg = args
                    .get(arg_index)
                    .ok_or_else(|| FormatError::MissingArgument {
                        specifier: spec.text.to_string(),
                    })?;
                let rendered = convert(&spec, arg_index, arg)?;
                out.push_str(&pad(&spec, rendered));
            }
        }
    }

    out.push_str(&template[cursor..]);
    Ok(out)
}
