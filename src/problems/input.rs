//! Lenient parsing of request fields
//!
//! Requests come from form fields as often as from JSON clients, so array
//! fields accept any of:
//!
//! - a JSON array: `[2, 7, 11, 15]`
//! - a string holding a JSON array: `"[2,7,11,15]"`
//! - a comma-separated string: `"2, 7, 11, 15"`
//!
//! A missing (`null`) or blank array field is the empty array. Integer fields
//! accept a JSON number or a numeric string.

use super::errors::InputError;
use serde_json::Value;

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

/// Parse a single integer from a number or numeric string
pub fn int(value: &Value) -> Result<i64, InputError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| InputError::ExpectedInteger {
                found: n.to_string(),
            }),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::ExpectedInteger { found: describe(value) }),
        Value::Null => Err(InputError::Missing),
        other => Err(InputError::ExpectedInteger {
            found: describe(other),
        }),
    }
}

/// Parse an integer that must fit in `[min, max]`
pub fn bounded(value: &Value, min: i64, max: i64) -> Result<i64, InputError> {
    let v = int(value)?;
    if v < min || v > max {
        return Err(InputError::OutOfRange { value: v, min, max });
    }
    Ok(v)
}

pub fn i32_value(value: &Value) -> Result<i32, InputError> {
    bounded(value, i32::MIN as i64, i32::MAX as i64).map(|v| v as i32)
}

/// Parse an integer array in any of the accepted shapes
pub fn int_array(value: &Value) -> Result<Vec<i64>, InputError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(int).collect(),
        Value::String(s) => {
            let cleaned = s.trim();
            if cleaned.is_empty() {
                Ok(Vec::new())
            } else if cleaned.starts_with('[') && cleaned.ends_with(']') {
                let items: Vec<Value> = serde_json::from_str(cleaned)?;
                items.iter().map(int).collect()
            } else {
                cleaned
                    .split(',')
                    .map(|token| int(&Value::String(token.to_string())))
                    .collect()
            }
        }
        other => Err(InputError::ExpectedArray {
            found: describe(other),
        }),
    }
}

/// Integer array whose elements fit in `[min, max]`
pub fn bounded_array(value: &Value, min: i64, max: i64) -> Result<Vec<i64>, InputError> {
    let values = int_array(value)?;
    if let Some(&bad) = values.iter().find(|&&v| v < min || v > max) {
        return Err(InputError::OutOfRange {
            value: bad,
            min,
            max,
        });
    }
    Ok(values)
}

pub fn i32_array(value: &Value) -> Result<Vec<i32>, InputError> {
    Ok(bounded_array(value, i32::MIN as i64, i32::MAX as i64)?
        .into_iter()
        .map(|v| v as i32)
        .collect())
}

/// Digits `0..=9`, least significant first
pub fn digit_array(value: &Value) -> Result<Vec<u8>, InputError> {
    Ok(bounded_array(value, 0, 9)?
        .into_iter()
        .map(|v| v as u8)
        .collect())
}

/// Text fields take strings as-is; other JSON is rendered and unquoted
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => {
            let rendered = other.to_string();
            let rendered = rendered.strip_prefix('"').unwrap_or(&rendered);
            rendered.strip_suffix('"').unwrap_or(rendered).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_shapes() {
        assert_eq!(int_array(&json!([2, 7, 11])).unwrap(), vec![2, 7, 11]);
        assert_eq!(int_array(&json!("[2,7,11]")).unwrap(), vec![2, 7, 11]);
        assert_eq!(int_array(&json!(" 2, 7 ,11 ")).unwrap(), vec![2, 7, 11]);
        assert_eq!(int_array(&json!(["2", 7])).unwrap(), vec![2, 7]);
        assert!(int_array(&json!("")).unwrap().is_empty());
        assert!(int_array(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_array_rejections() {
        assert!(matches!(
            int_array(&json!({"a": 1})),
            Err(InputError::ExpectedArray { .. })
        ));
        assert!(matches!(int_array(&json!("[1, 2")), Err(InputError::ExpectedInteger { .. })));
        assert!(matches!(int_array(&json!("[1, oops]")), Err(InputError::Json(_))));
        assert!(matches!(int_array(&json!("1,,2")), Err(InputError::ExpectedInteger { .. })));
        assert!(matches!(int_array(&json!([1.5])), Err(InputError::ExpectedInteger { .. })));
    }

    #[test]
    fn test_bounds() {
        assert!(matches!(
            digit_array(&json!([1, 10])),
            Err(InputError::OutOfRange { value: 10, .. })
        ));
        assert!(matches!(
            i32_value(&json!(2_147_483_648i64)),
            Err(InputError::OutOfRange { .. })
        ));
        assert_eq!(i32_value(&json!(" -42 ")).unwrap(), -42);
        assert_eq!(int(&json!(3.0)).unwrap(), 3);
    }

    #[test]
    fn test_text_unquotes_non_strings() {
        assert_eq!(text(&json!("abc")), "abc");
        assert_eq!(text(&json!(121)), "121");
        assert_eq!(text(&Value::Null), "");
    }
}
