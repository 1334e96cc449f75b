//! Number formatting for the views.

/// Currency prefix used on every amount.
pub const RUPEE: &str = "रू";

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped amount with up to two decimals, trailing zeros dropped.
/// Non-finite values render as `-`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    match fraction {
        0 => format!("{}{}", sign, whole),
        f if f % 10 == 0 => format!("{}{}.{}", sign, whole, f / 10),
        f => format!("{}{}.{:02}", sign, whole, f),
    }
}

/// `182000.0` → `"रू 182,000"`.
pub fn format_rupees(value: f64) -> String {
    format!("{} {}", RUPEE, format_amount(value))
}

/// Whole-number percentage, `34.6` → `"35%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.0}%", value)
}

/// Growth badge text: `15` → `"+15%"`, `-20` → `"-20%"`, `0` → `"0%"`.
pub fn format_signed_percent(value: i32) -> String {
    if value > 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}

/// Replace `{name}` placeholders in a label.
pub fn fill(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}
