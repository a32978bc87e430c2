//! Shared value formatting for the detail and step panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{style::Style, text::Span};
use serde_json::Value;

/// Compact one-line rendering: `[1, 2, 3]`, `{1: 0, 7: 1}`, `"abc"`
pub fn compact(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(compact).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, compact(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// Colored spans for a value; containers fall back to [`compact`]
pub fn value_span(value: &Value) -> Span<'static> {
    let color = match value {
        Value::Null | Value::Bool(_) => DEFAULT_THEME.keyword,
        Value::Number(_) => DEFAULT_THEME.number,
        Value::String(_) => DEFAULT_THEME.string,
        Value::Array(_) | Value::Object(_) => DEFAULT_THEME.fg,
    };
    Span::styled(compact(value), Style::default().fg(color))
}

/// `windowRange` -> `window range`
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Truncate to `max_chars` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact() {
        assert_eq!(compact(&json!([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(compact(&json!({"2": 0})), "{2: 0}");
        assert_eq!(compact(&json!("ab")), "\"ab\"");
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("maxLen"), "max len");
        assert_eq!(humanize_key("is_new_max"), "is new max");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
