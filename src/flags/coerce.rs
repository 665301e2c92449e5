//! Value coercion — raw argument text → typed flag value.

use crate::error::FlagError;
use crate::flags::option::{FlagKind, FlagValue};

/// Coerce `raw` into a value of `kind` for the flag named `flag`.
///
/// Integers accept an optional sign and autodetect the base from the prefix
/// (`0x`/`0X` hex, leading `0` octal, decimal otherwise). The whole text must
/// be consumed and fit the target type.
pub fn coerce(flag: &str, kind: FlagKind, raw: &str) -> Result<FlagValue, FlagError> {
    let invalid = || FlagError::InvalidNumericLiteral {
        flag: flag.to_string(),
        value: raw.to_string(),
        kind,
    };

    match kind {
        FlagKind::String => Ok(FlagValue::Str(raw.to_string())),
        FlagKind::Integer => {
            let n = parse_auto_radix(raw).ok_or_else(invalid)?;
            i32::try_from(n).map(FlagValue::Int).map_err(|_| invalid())
        }
        FlagKind::UnsignedInteger => {
            let n = parse_auto_radix(raw).ok_or_else(invalid)?;
            u32::try_from(n).map(FlagValue::Uint).map_err(|_| invalid())
        }
    }
}

/// Parse an integer literal with base autodetection.
fn parse_auto_radix(raw: &str) -> Option<i64> {
    let text = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.bytes().all(|b| (b as char).is_digit(radix)) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
