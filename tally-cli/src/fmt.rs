/// Format an amount with thousands separators: $1,234.56
pub fn money(val: f64, symbol: &str) -> String {
    let negative = val < 0.0 && format!("{:.2}", val.abs()) != "0.00";
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{symbol}{with_commas}.{dec_part}")
    } else {
        format!("{symbol}{with_commas}.{dec_part}")
    }
}

/// Horizontal bar scaled so that `max` fills `width` cells
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "$"), "$1,234.56");
        assert_eq!(money(-500.00, "$"), "-$500.00");
        assert_eq!(money(0.0, "$"), "$0.00");
        assert_eq!(money(-0.001, "$"), "$0.00");
        assert_eq!(money(1000000.99, "€"), "€1,000,000.99");
        assert_eq!(money(42.10, ""), "42.10");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(50.0, 100.0, 10), "█████");
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(0.01, 100.0, 10), "█");
        assert_eq!(bar(0.0, 100.0, 10), "");
        assert_eq!(bar(5.0, 0.0, 10), "");
    }
}
