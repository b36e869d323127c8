use super::constants::DIGIT_GROUP_SEPARATOR;
use super::constants::EXACT_FRACTION_DIGITS;
use super::constants::LIGHT_YEAR_METERS;
use super::constants::STANDARD_DECIMAL_PLACES;
use super::constants::TINY_EXTRA_DECIMAL_PLACES;
use super::constants::TINY_MAGNITUDE;
use super::unit_table::LIGHT_YEAR_UNITS;
use super::unit_table::METRIC_UNITS;
use super::unit_table::UnitTable;

/// Formats a physical size as `"<number> <unit>"`, e.g. `"1.9 centimeters"`.
///
/// Sizes at or below `light_year_threshold` (meters) use the metric table, anything larger is
/// converted to light years first.
pub fn format_distance(size_meters: f64, light_year_threshold: f64) -> String {
    if size_meters <= light_year_threshold {
        format_in_table(&METRIC_UNITS, size_meters)
    } else {
        format_in_table(&LIGHT_YEAR_UNITS, size_meters / LIGHT_YEAR_METERS)
    }
}

fn format_in_table(table: &UnitTable, value: f64) -> String {
    let unit = table.select(value);
    let magnitude = round_magnitude(value / unit.threshold);
    format!("{} {}", format_magnitude(magnitude), unit.name_for(magnitude))
}

/// Rounds to two places, or for tiny magnitudes keeps enough places that the significant digits
/// survive instead of collapsing to zero.
fn round_magnitude(magnitude: f64) -> f64 {
    if magnitude.abs() >= TINY_MAGNITUDE {
        round_to_places(magnitude, STANDARD_DECIMAL_PLACES)
    } else {
        round_to_places(
            magnitude,
            significant_decimal_places(magnitude) + TINY_EXTRA_DECIMAL_PLACES,
        )
    }
}

/// Decimal places needed to reach the last digit of the shortest scientific rendering,
/// `max(0, -exponent + mantissa_fraction_digits)`.
fn significant_decimal_places(value: f64) -> usize {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let fraction_digits = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());

    i64::try_from(fraction_digits)
        .ok()
        .and_then(|digits| usize::try_from(digits - exponent).ok())
        .unwrap_or(0)
}

/// Rounds to `places` decimals against the exact binary value, with ties going away from zero, then
/// re-reads it as a plain number (trailing zeros drop out).
fn round_to_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // wide enough to print any f64 without rounding
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept = fraction.get(..places).unwrap_or(fraction);
    let round_up = fraction
        .as_bytes()
        .get(places)
        .is_some_and(|digit| *digit >= b'5');

    let mut digits: Vec<u8> = integer.bytes().chain(kept.bytes()).collect();
    if round_up {
        increment_decimal(&mut digits);
    }
    let (whole, part) = digits.split_at(digits.len() - kept.len());
    let whole = String::from_utf8_lossy(whole);
    let text = if part.is_empty() {
        whole.into_owned()
    } else {
        format!("{whole}.{}", String::from_utf8_lossy(part))
    };

    let magnitude: f64 = text.parse().unwrap_or_else(|_| value.abs());
    if value.is_sign_negative() { -magnitude } else { magnitude }
}

/// Adds one in the last place of a string of ASCII digits, carrying leftward.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Plain (never exponential) rendering with the integer part grouped in threes.
pub fn format_magnitude(value: f64) -> String {
    // -0 renders as 0
    let value = if value == 0.0 { 0.0 } else { value };
    let plain = value.to_string();

    let (sign, unsigned) = plain
        .strip_prefix('-')
        .map_or(("", plain.as_str()), |rest| ("-", rest));
    let (integer, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(integer, fraction)| {
            (integer, Some(fraction))
        });

    let digit_count = integer.chars().count();
    let mut grouped = String::with_capacity(plain.len() + digit_count / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (digit_count - index) % 3 == 0 {
            grouped.push(DIGIT_GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::LIGHT_YEAR_THRESHOLD_METERS;

    fn format(size_meters: f64) -> String {
        format_distance(size_meters, LIGHT_YEAR_THRESHOLD_METERS)
    }

    #[test]
    fn test_metric_unit_selection() {
        assert_eq!(format(1.9e-2), "1.9 centimeters");
        assert_eq!(format(2e-9), "2 nanometers");
        assert_eq!(format(8e-6), "8 micrometers");
        assert_eq!(format(3e-4), "300 micrometers");
        assert_eq!(format(2.4e-1), "24 centimeters");
        assert_eq!(format(8.8e3), "8.8 kilometers");
        assert_eq!(format(1.39e9), "1.39 million kilometers");
        assert_eq!(format(390e12), "390 billion kilometers");
    }

    #[test]
    fn test_singular_only_on_exact_one() {
        assert_eq!(format(1.0), "1 meter");
        assert_eq!(format(1.5), "1.5 meters");
        assert_eq!(format(2.0), "2 meters");
        assert_eq!(format(1e-3), "1 millimeter");
        // rounds to exactly one
        assert_eq!(format(1.001), "1 meter");
        assert_eq!(format(-1.0), "-1 meter");
    }

    #[test]
    fn test_multiword_units_share_singular_and_plural() {
        assert_eq!(format(1e12), "1 billion kilometers");
        assert_eq!(format(1e9), "1 million kilometers");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format(1.125), "1.13 meters");
        assert_eq!(format(1.625), "1.63 meters");
        assert_eq!(format(-1.125), "-1.13 meters");
        // 1.005 is stored just below the tie, so it rounds down
        assert_eq!(format(1.005), "1 meter");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert!((round_to_places(9.996, 2) - 10.0).abs() < f64::EPSILON);
        assert!((round_to_places(999.5, 0) - 1000.0).abs() < f64::EPSILON);
        assert!((round_to_places(-0.004, 2)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_integer_part_is_grouped() {
        assert_eq!(format(1.27e7), "12,700 kilometers");
        assert_eq!(format(1e16), "10,000 billion kilometers");
        assert_eq!(format_magnitude(1_234_567.25), "1,234,567.25");
        assert_eq!(format_magnitude(-1_234.5), "-1,234.5");
        assert_eq!(format_magnitude(999.0), "999");
    }

    #[test]
    fn test_tiny_values_keep_significant_digits() {
        assert_eq!(format(1.2345e-16), "0.00012345 picometers");
        assert_eq!(format(3e-17), "0.00003 picometers");

        let label = format(4.2e-18);
        assert!(!label.starts_with("0 "), "collapsed to zero: {label}");
        assert!(label.ends_with("picometers"));
    }

    #[test]
    fn test_zero_uses_smallest_unit_and_plural() {
        assert_eq!(format(0.0), "0 picometers");
        assert_eq!(format(-0.0), "0 picometers");
    }

    #[test]
    fn test_light_year_crossover() {
        // at the threshold the metric table still applies
        assert_eq!(format(1e16), "10,000 billion kilometers");
        assert_eq!(format(1.892e16), "2 light years");
        assert_eq!(format(2.270_575e17), "24 light years");
        assert_eq!(format(9.460_73e20), "100 thousand light years");
        assert_eq!(format(1.419_11e23), "15 million light years");
        assert_eq!(format(8.798_48e26), "93 billion light years");
    }

    #[test]
    fn test_exactly_one_light_year_is_singular() {
        assert_eq!(format_distance(LIGHT_YEAR_METERS, 0.0), "1 light year");
    }

    #[test]
    fn test_significant_decimal_places() {
        assert_eq!(significant_decimal_places(1.2345e-5), 9);
        assert_eq!(significant_decimal_places(2e-4), 4);
        assert_eq!(significant_decimal_places(0.0), 0);
    }

    #[test]
    fn test_non_finite_input_does_not_panic() {
        assert!(format(f64::NAN).ends_with("light years"));
        assert!(format(f64::INFINITY).contains("trillion light years"));
        assert_eq!(format(f64::NEG_INFINITY), "-inf billion kilometers");
    }
}
