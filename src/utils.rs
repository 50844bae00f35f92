// Utility functions: rounding and the display formats shared by every renderer

/// Rounds to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `$123.45`. Every display format goes through [`round2`] so ties round up.
pub fn format_money(value: f64) -> String {
    format!("${:.2}", round2(value))
}

/// `+1.23%` / `-1.23%`; zero is always rendered with a plus sign.
pub fn format_signed_percent(value: f64) -> String {
    let text = format!("{:+.2}%", round2(value));
    if text == "-0.00%" {
        "+0.00%".to_string()
    } else {
        text
    }
}

/// Volume in millions: `5.23M`.
pub fn format_volume_millions(volume: f64) -> String {
    format!("{:.2}M", round2(volume / 1_000_000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_has_two_decimals() {
        assert_eq!(format_money(12.0), "$12.00");
        assert_eq!(format_money(1234.567), "$1234.57");
    }

    #[test]
    fn test_percent_carries_explicit_sign() {
        assert_eq!(format_signed_percent(3.456), "+3.46%");
        assert_eq!(format_signed_percent(-0.5), "-0.50%");
        assert_eq!(format_signed_percent(0.0), "+0.00%");
        assert_eq!(format_signed_percent(-0.0), "+0.00%");
        assert_eq!(format_signed_percent(-0.001), "+0.00%");
    }

    #[test]
    fn test_volume_in_millions() {
        assert_eq!(format_volume_millions(5_234_000.0), "5.23M");
        assert_eq!(format_volume_millions(1_000_000.0), "1.00M");
    }

    #[test]
    fn test_ties_round_half_up() {
        assert_eq!(format_money(10.125), "$10.13");
        assert_eq!(format_volume_millions(5_125_000.0), "5.13M");
        assert_eq!(format_signed_percent(0.625), "+0.63%");
        assert_eq!(format_signed_percent(-0.625), "-0.63%");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.126), 10.13);
        assert_eq!(round2(-2.344), -2.34);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }
}
