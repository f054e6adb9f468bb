/// Formats an amount in Indonesian Rupiah style: `120000 -> "Rp 120.000,00"`.
///
/// Period separates thousands, comma separates the two decimals.
pub fn format_rupiah(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    // -0.001 formats as 0,00 and should not carry a sign
    let sign = if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    format!("Rp {}{},{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(120000.0), "Rp 120.000,00");
        assert_eq!(format_rupiah(0.0), "Rp 0,00");
        assert_eq!(format_rupiah(1234567.5), "Rp 1.234.567,50");
        assert_eq!(format_rupiah(999.999), "Rp 1.000,00");
        assert_eq!(format_rupiah(100.0), "Rp 100,00");
        assert_eq!(format_rupiah(1000.0), "Rp 1.000,00");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-1234.5), "Rp -1.234,50");
        assert_eq!(format_rupiah(-0.001), "Rp 0,00");
    }
}
