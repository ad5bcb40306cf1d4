//! Rendering of the optional user message attached to an assertion.
//!
//! The message-and-args list is interpreted as follows:
//!
//! * empty: no message
//! * one value: that value, rendered structurally
//! * a string followed by more values: the string is a printf-style
//!   template and the remaining values are its arguments
//! * anything else: the whole list, rendered structurally as `[a b c]`
//!
//! Structural rendering prints strings unquoted, `null` as `<nil>`, arrays
//! as `[a b]` and objects as `map[k1:v1 k2:v2]` in key order. Integers
//! print as-is; floats use the shortest `%g` form, so `1.0` prints as `1`
//! and `1e6` as `1e+06`.
//!
//! Nothing here panics: a bad template produces inline `%!...` markers.

use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt::Write;

/// Turns a message-and-args list into the user message, or `""` if empty.
pub fn msg_and_args_to_string(msg_and_args: &[Value]) -> String {
    match msg_and_args {
        [] => String::new(),
        [only] => render(only),
        [Value::String(format), args @ ..] => sprintf(format, args),
        all => render_list(all),
    }
}

/// Converts one message argument to a [`Value`].
///
/// Arguments that fail to serialize become a `%!(BADARG <error>)` string
/// instead of aborting the assertion.
pub fn to_arg<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|err| Value::String(format!("%!(BADARG {})", err)))
}

/// Structural rendering of a single value.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn render_list(values: &[Value]) -> String {
    let mut out = String::new();
    write_list(&mut out, values);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("<nil>"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => write_list(out, items),
        Value::Object(map) => {
            out.push_str("map[");
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(key);
                out.push(':');
                write_value(out, item);
            }
            out.push(']');
        }
    }
}

fn write_list(out: &mut String, items: &[Value]) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_value(out, item);
    }
    out.push(']');
}

/// Integers as-is, floats in shortest `%g` form (`1`, `1.5`, `1e+06`).
fn render_number(n: &Number) -> String {
    match (integer(n), n.as_f64()) {
        (Some(i), _) if !n.is_f64() => i.to_string(),
        (_, Some(f)) => with_sign(f, float_g(f.abs(), None, false)),
        _ => n.to_string(),
    }
}

/// Name used for a value in formatting diagnostics such as `%!d(string=x)`.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "<nil>",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float64",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "[]interface {}",
        Value::Object(_) => "map[string]interface {}",
    }
}

/// Widths and precisions at or above this are rejected.
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default)]
struct Directive {
    plus: bool,
    minus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Formats `args` into a printf-style `format` string.
///
/// Supported verbs are `%v`, `%s`, `%q`, `%d`, `%b`, `%o`, `%O`, `%x`,
/// `%X`, `%c`, `%U`, `%t`, `%e`, `%E`, `%f`, `%F`, `%g`, `%G` and the
/// literal `%%`, with the `+ - 0 space #` flags, width and precision,
/// either literal or taken from an argument with `*`.
///
/// Mismatches are written inline rather than failing: `%!d(MISSING)` for a
/// missing argument, `%!d(string=foo)` for a wrong type, `%!(BADWIDTH)` and
/// `%!(BADPREC)` for unusable widths and precisions, a trailing
/// `%!(EXTRA ...)` for unused arguments.
pub fn sprintf(format: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();
    let mut used = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '+' => directive.plus = true,
                '-' => directive.minus = true,
                '0' => directive.zero = true,
                ' ' => directive.space = true,
                '#' => directive.sharp = true,
                _ => break,
            }
            chars.next();
        }

        if chars.peek() == Some(&'*') {
            chars.next();
            match int_from_arg(args.get(used)) {
                Some(width) => {
                    if width < 0 {
                        directive.minus = true;
                        directive.zero = false;
                    }
                    directive.width = Some(width.unsigned_abs() as usize);
                }
                None => out.push_str("%!(BADWIDTH)"),
            }
            used = (used + 1).min(args.len());
        } else {
            match read_number(&mut chars) {
                Some(width) if width >= MAX_WIDTH => out.push_str("%!(BADWIDTH)"),
                width => directive.width = width,
            }
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            if chars.peek() == Some(&'*') {
                chars.next();
                match int_from_arg(args.get(used)) {
                    Some(precision) if precision >= 0 => {
                        directive.precision = Some(precision as usize)
                    }
                    _ => out.push_str("%!(BADPREC)"),
                }
                used = (used + 1).min(args.len());
            } else {
                match read_number(&mut chars).unwrap_or(0) {
                    precision if precision >= MAX_WIDTH => out.push_str("%!(BADPREC)"),
                    precision => directive.precision = Some(precision),
                }
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(used) else {
            let _ = write!(out, "%!{}(MISSING)", verb);
            continue;
        };
        used += 1;

        match format_verb(verb, &directive, arg) {
            Some((text, numeric)) => pad(&mut out, &text, &directive, numeric),
            None => bad_verb(&mut out, verb, arg),
        }
    }

    if used < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[used..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", type_name(arg), render(arg));
        }
        out.push(')');
    }

    out
}

/// Reads a decimal number, saturating instead of overflowing.
fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    number
}

/// Width or precision taken from an argument: an integer strictly inside
/// `(-MAX_WIDTH, MAX_WIDTH)`.
fn int_from_arg(arg: Option<&Value>) -> Option<i64> {
    let n = arg?.as_i64()?;
    (n.unsigned_abs() < MAX_WIDTH as u64).then_some(n)
}

/// Formats one argument; `None` means the verb does not apply to its type.
/// The flag tells `pad` whether zero padding is allowed.
fn format_verb(verb: char, directive: &Directive, arg: &Value) -> Option<(String, bool)> {
    match (verb, arg) {
        // `+` on %v selects field names, not a sign.
        ('v', Value::Number(n)) => Some((render_number(n), true)),
        ('v', _) => Some((render(arg), false)),
        ('s', Value::String(s)) => Some((truncate(s, directive.precision), false)),
        ('s', Value::Array(_) | Value::Object(_)) => Some((render(arg), false)),
        ('q', Value::String(s)) => Some((quote_string(s, directive.sharp), false)),
        ('q', Value::Number(n)) => integer(n).map(|i| (quote_char(code_point(i)), false)),
        ('t', Value::Bool(b)) => Some((b.to_string(), false)),
        ('d', Value::Number(n)) => integer(n).map(|i| (signed(i.to_string(), directive), true)),
        ('b' | 'o' | 'O' | 'x' | 'X', Value::Number(n)) => {
            integer(n).map(|i| (radix_integer(i, verb, directive), true))
        }
        ('x' | 'X', Value::String(s)) => Some((hex_bytes(s.as_bytes(), verb), false)),
        ('c', Value::Number(n)) => integer(n).map(|i| (code_point(i).to_string(), false)),
        ('U', Value::Number(n)) => integer(n).map(|i| (unicode_format(i, directive.sharp), false)),
        ('e' | 'E' | 'f' | 'F' | 'g' | 'G', Value::Number(n)) => n.as_f64().map(|f| {
            let body = match verb {
                'e' | 'E' => float_e(f.abs(), directive.precision.unwrap_or(6), verb == 'E'),
                'f' | 'F' => format!("{:.*}", directive.precision.unwrap_or(6), f.abs()),
                _ => float_g(f.abs(), directive.precision, verb == 'G'),
            };
            (signed(with_sign(f, body), directive), true)
        }),
        _ => None,
    }
}

fn bad_verb(out: &mut String, verb: char, arg: &Value) {
    match arg {
        Value::Null => {
            let _ = write!(out, "%!{}(<nil>)", verb);
        }
        _ => {
            let _ = write!(out, "%!{}({}={})", verb, type_name(arg), render(arg));
        }
    }
}

fn integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn signed(text: String, directive: &Directive) -> String {
    if text.starts_with('-') {
        text
    } else if directive.plus {
        format!("+{}", text)
    } else if directive.space {
        format!(" {}", text)
    } else {
        text
    }
}

fn with_sign(f: f64, body: String) -> String {
    if f < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn radix_integer(value: i128, verb: char, directive: &Directive) -> String {
    let magnitude = value.unsigned_abs();
    let (digits, prefix) = match verb {
        'b' => (format!("{:b}", magnitude), if directive.sharp { "0b" } else { "" }),
        'o' if magnitude == 0 => ("0".to_string(), ""),
        'o' => (format!("{:o}", magnitude), if directive.sharp { "0" } else { "" }),
        'O' => (format!("{:o}", magnitude), "0o"),
        'X' => (format!("{:X}", magnitude), if directive.sharp { "0X" } else { "" }),
        _ => (format!("{:x}", magnitude), if directive.sharp { "0x" } else { "" }),
    };
    let text = format!("{}{}", prefix, digits);
    if value < 0 {
        format!("-{}", text)
    } else {
        signed(text, directive)
    }
}

fn hex_bytes(bytes: &[u8], verb: char) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = if verb == 'X' {
            write!(out, "{:02X}", byte)
        } else {
            write!(out, "{:02x}", byte)
        };
    }
    out
}

/// Invalid code points become U+FFFD.
fn code_point(value: i128) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn unicode_format(value: i128, sharp: bool) -> String {
    let mut text = format!("U+{:04X}", value as u64);
    if sharp {
        if let Some(c) = u32::try_from(value).ok().and_then(char::from_u32) {
            if !c.is_control() {
                let _ = write!(text, " '{}'", c);
            }
        }
    }
    text
}

/// Scientific notation with a signed, at least two-digit exponent
/// (`1.500000e+00`). Expects a non-negative value.
fn float_e(f: f64, precision: usize, upper: bool) -> String {
    let (mantissa, exponent) = split_exponent(&format!("{:.*e}", precision, f));
    join_exponent(&mantissa, exponent, upper)
}

/// `%g`: shortest representation when `precision` is `None`, otherwise
/// that many significant digits, trailing zeros removed. Switches to
/// scientific notation for exponents below -4 or at/above the precision
/// (6 in shortest mode). Expects a non-negative value.
fn float_g(f: f64, precision: Option<usize>, upper: bool) -> String {
    let (mantissa, exponent, limit, digits) = match precision {
        None => {
            let (mantissa, exponent) = split_exponent(&format!("{:e}", f));
            let digits = significant_digits(&mantissa);
            (mantissa, exponent, 6, digits)
        }
        Some(precision) => {
            let precision = precision.max(1);
            let (mantissa, exponent) =
                split_exponent(&format!("{:.*e}", precision - 1, f));
            let mantissa = strip_trailing_zeros(&mantissa);
            let digits = significant_digits(&mantissa);
            let point = exponent + 1;
            let limit = if precision > digits && digits as i32 >= point {
                digits
            } else {
                precision
            };
            (mantissa, exponent, limit, digits)
        }
    };

    if exponent < -4 || exponent >= limit as i32 {
        return join_exponent(&mantissa, exponent, upper);
    }

    let decimals = (digits as i32 - (exponent + 1)).max(0) as usize;
    format!("{:.*}", decimals, f)
}

fn split_exponent(scientific: &str) -> (String, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (scientific.to_string(), 0),
    }
}

fn join_exponent(mantissa: &str, exponent: i32, upper: bool) -> String {
    format!("{}{}{:+03}", mantissa, if upper { 'E' } else { 'e' }, exponent)
}

fn significant_digits(mantissa: &str) -> usize {
    mantissa.chars().filter(char::is_ascii_digit).count()
}

fn strip_trailing_zeros(mantissa: &str) -> String {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        mantissa.to_string()
    }
}

/// Double-quoted with `\a \b \f \n \r \t \v \\ \"`, `\xNN` for other
/// ASCII controls and `\uNNNN`/`\UNNNNNNNN` for other non-printable
/// characters. With `#`, a backquoted raw string when the text allows it.
fn quote_string(s: &str, sharp: bool) -> String {
    if sharp && !s.contains('`') && !s.chars().any(|c| c.is_control() && c != '\t') {
        return format!("`{}`", s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        escape_char(&mut out, c, '"');
    }
    out.push('"');
    out
}

fn quote_char(c: char) -> String {
    let mut out = String::from("'");
    escape_char(&mut out, c, '\'');
    out.push('\'');
    out
}

fn escape_char(out: &mut String, c: char, quote: char) {
    match c {
        '\u{7}' => out.push_str("\\a"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{b}' => out.push_str("\\v"),
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if (c as u32) < 0x80 && c.is_control() => {
            let _ = write!(out, "\\x{:02x}", c as u32);
        }
        c if c.is_control() => {
            if (c as u32) < 0x10000 {
                let _ = write!(out, "\\u{:04x}", c as u32);
            } else {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
        c => out.push(c),
    }
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(max) => s.chars().take(max).collect(),
        None => s.to_string(),
    }
}

fn pad(out: &mut String, text: &str, directive: &Directive, numeric: bool) {
    let len = text.chars().count();
    let fill = directive.width.unwrap_or(0).saturating_sub(len);
    if fill == 0 {
        out.push_str(text);
        return;
    }

    if directive.minus {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if directive.zero && numeric {
        // Zeros go after the sign and any radix prefix.
        let body = text.trim_start_matches(&['-', '+', ' '][..]);
        let sign = &text[..text.len() - body.len()];
        let prefix_len = ["0x", "0X", "0b", "0o"]
            .iter()
            .find(|prefix| body.starts_with(*prefix))
            .map_or(0, |prefix| prefix.len());
        out.push_str(sign);
        out.push_str(&body[..prefix_len]);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(&body[prefix_len..]);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(text);
    }
}
