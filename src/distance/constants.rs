/// Meters in one light year (Julian year, IAU definition).
pub const LIGHT_YEAR_METERS: f64 = 9.460_730_472_580_8e15;

/// Sizes strictly above this are labelled in light years, everything else in metric units.
pub const LIGHT_YEAR_THRESHOLD_METERS: f64 = 1e16;

/// Magnitudes at or above this are rounded to a fixed two decimal places.
pub const TINY_MAGNITUDE: f64 = 1e-3;

pub const STANDARD_DECIMAL_PLACES: usize = 2;

/// Extra places kept past the first significant digits of a tiny magnitude.
pub const TINY_EXTRA_DECIMAL_PLACES: usize = 5;

/// Fraction digits needed to print any `f64` exactly (the smallest subnormal has 1074).
pub const EXACT_FRACTION_DIGITS: usize = 1100;

pub const DIGIT_GROUP_SEPARATOR: char = ',';
