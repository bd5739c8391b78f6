//! Shared formatting helpers for table cells and detail views.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.

/// Format a price with two decimals and a currency sign.
///
/// `"$120.00"`, `"$3.50"`, `"-"` for non-finite values.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    format!("${:.2}", price)
}

/// Format a stock level for table columns.
///
/// `"out"` when nothing is left, otherwise the count.
pub fn format_stock(stock: i64) -> String {
    if stock <= 0 {
        "out".to_string()
    } else {
        stock.to_string()
    }
}

/// Truncate to at most `max` characters, ending with `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price() {
        assert_eq!(format_price(120.0), "$120.00");
        assert_eq!(format_price(3.5), "$3.50");
        assert_eq!(format_price(f64::NAN), "-");
    }

    #[test]
    fn stock() {
        assert_eq!(format_stock(0), "out");
        assert_eq!(format_stock(12), "12");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Lamp", 4), "Lamp");
        assert_eq!(truncate("Pendant Light", 8), "Pendant…");
        assert_eq!(truncate("Größe", 3), "Gr…");
        assert_eq!(truncate("abc", 0), "");
    }
}
