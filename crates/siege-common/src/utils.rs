//! Shared formatting helpers.

/// Formats an integer with `,` thousands separators, e.g. `3444` -> `3,444`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Parses a whole number that may contain thousands separators.
///
/// Accepts `"1,833"`, `"1833"` and `" 1 833 "`; anything with a fractional
/// part or other text is rejected.
pub fn parse_grouped_int(input: &str) -> Option<i64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}' | '_'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}

/// Truncates a string to at most `max_chars` characters with an ellipsis.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
