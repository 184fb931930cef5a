//! Small, reusable text helpers used by multiple screens.

use crate::input::InputField;

/// Marker for an option row: chosen value and keyboard highlight.
pub fn option_marker(selected: bool, highlighted: bool) -> &'static str {
    match (selected, highlighted) {
        (true, true) => "▶ (•)",
        (true, false) => "  (•)",
        (false, true) => "▶ ( )",
        (false, false) => "  ( )",
    }
}

/// `◀ 3 ▶` with arrows dropped at the ends of the range.
pub fn stepper(value: u8, min: u8, max: u8) -> String {
    let left = if value > min { "◀" } else { " " };
    let right = if value < max { "▶" } else { " " };
    format!("{} {} {}", left, value, right)
}

/// One form row: focus marker, label and value (placeholder when empty).
pub fn field_line(label: &str, field: &InputField, focused: bool) -> String {
    let marker = if focused { "▶" } else { " " };
    let value = if focused {
        field.display_with_cursor()
    } else if field.is_empty() {
        format!("({})", field.placeholder)
    } else {
        field.value().to_string()
    };
    format!("{} {}: {}", marker, label, value)
}

/// Fixed-width text progress bar for the plain-text dump.
pub fn text_gauge(percent: u16, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = width * percent / 100;
    format!("[{}{}] {}%", "█".repeat(filled), "░".repeat(width - filled), percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepper_hides_arrows_at_bounds() {
        assert_eq!(stepper(1, 1, 5), "  1 ▶");
        assert_eq!(stepper(3, 1, 5), "◀ 3 ▶");
        assert_eq!(stepper(5, 1, 5), "◀ 5  ");
    }

    #[test]
    fn field_line_shows_placeholder_when_unfocused_and_empty() {
        let field = InputField::new("", "hello@avifolio.io");
        assert_eq!(
            field_line("Email", &field, false),
            "  Email: (hello@avifolio.io)"
        );
        assert_eq!(field_line("Email", &field, true), "▶ Email: │");
    }

    #[test]
    fn text_gauge_fills_proportionally() {
        assert_eq!(text_gauge(50, 4), "[██░░] 50%");
        assert_eq!(text_gauge(250, 2), "[██] 100%");
    }
}
