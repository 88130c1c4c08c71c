//! Client-side checks run before a form is sent for prediction.

use shared::{
    domain::{FormInput, AGE_FIELD, DIASTOLIC_FIELD, SYSTOLIC_FIELD},
    error::ValidationError,
};

/// Checks `form` and returns the payload to post.
///
/// Every field must be non-empty, `age` must be a positive number and
/// diastolic pressure may not exceed systolic. Values are passed through as
/// the original strings; the numeric parses only gate submission.
pub fn validate_and_serialize(form: &FormInput) -> Result<FormInput, ValidationError> {
    if let Some(field) = form.iter().find(|field| field.value.is_empty()) {
        return Err(ValidationError::EmptyField {
            field: field.name.clone(),
        });
    }

    match numeric_field(form, AGE_FIELD) {
        Some(age) if age > 0.0 => {}
        _ => return Err(ValidationError::InvalidAge),
    }

    match (
        numeric_field(form, SYSTOLIC_FIELD),
        numeric_field(form, DIASTOLIC_FIELD),
    ) {
        (Some(systolic), Some(diastolic)) if diastolic <= systolic => {}
        _ => return Err(ValidationError::DiastolicAboveSystolic),
    }

    Ok(form.clone())
}

fn numeric_field(form: &FormInput, name: &str) -> Option<f64> {
    form.get(name).and_then(parse_float_prefix)
}

/// Lenient float parse: skips leading whitespace and reads the longest
/// numeric prefix, so `"52 years"` reads as `52` and `"abc"` as nothing.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
