use crate::server::error::AppError;

/// Parses a record id from a path segment.
///
/// The segment is read as a number the way a JavaScript `Number(..)` conversion reads
/// it: surrounding whitespace is ignored, and decimal, exponent and `0x`/`0o`/`0b` forms
/// are accepted, so `1`, `01`, `+1`, `1.0` and `1e0` all name record 1. An empty
/// segment, zero, a non-numeric value or an infinite value is rejected.
///
/// A valid number can still be one no record can have, such as `1.5` or a value outside
/// the `i32` range. Those pass the guard as `None` and behave like a missing record.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(Some(i32))` - Whole number that fits in an `i32`
/// - `Ok(None)` - Non-zero number that matches no record
/// - `Err(AppError::InvalidId)` - Empty, non-numeric, infinite, or zero
pub fn parse_record_id(value: &str) -> Result<Option<i32>, AppError> {
    let number = parse_number(value.trim()).ok_or(AppError::InvalidId)?;

    if number == 0.0 || !number.is_finite() {
        return Err(AppError::InvalidId);
    }

    let in_range = number >= f64::from(i32::MIN) && number <= f64::from(i32::MAX);
    if number.fract() == 0.0 && in_range {
        Ok(Some(number as i32))
    } else {
        Ok(None)
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let radix = match value.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return value.parse::<f64>().ok(),
    };

    let digits = &value[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
