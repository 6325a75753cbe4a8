//! Formatting utilities used for CLI and export outputs.

/// 45 → "45m", 75 → "1h 15m"
pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

pub fn format_distance(km: Option<f64>) -> String {
    match km {
        Some(v) => format!("{:.1} km", v),
        None => "--".to_string(),
    }
}

/// Trim trailing zeros from goal amounts: 5.0 → "5", 12.5 → "12.5".
pub fn format_amount(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Horizontal bar proportional to `value / max`.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

/// "[#####-----]" for a 0..=100 percentage.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
