//! Label and tick text.

/// Renders a number the way a JS engine prints it for the common cases:
/// integral values without a fraction, everything else in shortest form.
pub fn js_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// `"<label>: <value to one decimal>%"`, or just the value when the label is empty.
pub fn label_percent(label: &str, value: f64) -> String {
    let mut out = String::new();
    if !label.is_empty() {
        out.push_str(label);
        out.push_str(": ");
    }
    out.push_str(&format!("{value:.1}%"));
    out
}

/// `" <value>%"` using the raw data value.
pub fn raw_percent(value: f64) -> String {
    format!(" {}%", js_number(value))
}

pub fn percent_tick(value: f64) -> String {
    format!("{}%", js_number(value))
}
