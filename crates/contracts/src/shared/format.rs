/// Number, distance and money formatting
///
/// Output follows the dashboard's display conventions: dot-grouped
/// thousands, comma decimals, unit suffixes.

/// Format an integer with thousands separators (dots)
///
/// Example: 1234567 -> "1.234.567"
pub fn format_number_grouped(n: i64) -> String {
    let negative = n < 0;
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    let grouped: String = result.chars().rev().collect();
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a distance in km, rounded to whole kilometers
///
/// Example: 1234.4 -> "1.234 km"
pub fn format_distance(km: f64) -> String {
    format!("{} km", format_number_grouped(km.round() as i64))
}

/// Format a money amount with two decimals and a currency symbol
///
/// Example: (1234.5, "EUR") -> "1.234,50 €"
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = format_number_grouped(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02} {}", sign, whole, cents % 100, currency_symbol(currency))
}

/// Symbol for a currency code, falling back to the code itself
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "CHF" => "CHF",
        other => other,
    }
}

/// Format a fuel consumption value in liters per 100 km
///
/// Example: Some(5.25) -> "5.3 L/100km"
pub fn format_fuel_efficiency(liters_per_100km: Option<f64>) -> String {
    match liters_per_100km {
        Some(value) => format!("{:.1} L/100km", value),
        None => "N/A".to_string(),
    }
}

/// Convert km per liter to liters per 100 km (and back, the formula is its
/// own inverse)
pub fn convert_fuel_efficiency(value: f64) -> Option<f64> {
    if value > 0.0 {
        Some(100.0 / value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouped() {
        assert_eq!(format_number_grouped(0), "0");
        assert_eq!(format_number_grouped(42), "42");
        assert_eq!(format_number_grouped(999), "999");
        assert_eq!(format_number_grouped(1000), "1.000");
        assert_eq!(format_number_grouped(1234567), "1.234.567");
        assert_eq!(format_number_grouped(-1234), "-1.234");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0 km");
        assert_eq!(format_distance(500.0), "500 km");
        assert_eq!(format_distance(1234.4), "1.234 km");
        assert_eq!(format_distance(29500.6), "29.501 km");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "EUR"), "0,00 €");
        assert_eq!(format_currency(1234.5, "EUR"), "1.234,50 €");
        assert_eq!(format_currency(83.499, "USD"), "83,50 $");
        assert_eq!(format_currency(-12.0, "EUR"), "-12,00 €");
        assert_eq!(format_currency(5.0, "SEK"), "5,00 SEK");
    }

    #[test]
    fn test_fuel_efficiency() {
        assert_eq!(format_fuel_efficiency(Some(5.25)), "5.3 L/100km");
        assert_eq!(format_fuel_efficiency(None), "N/A");
        assert_eq!(convert_fuel_efficiency(20.0), Some(5.0));
        assert_eq!(convert_fuel_efficiency(0.0), None);
    }
}
