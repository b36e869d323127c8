/// One row of a unit table: values at or above `threshold` (in the table's base unit) may be
/// expressed in this unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub threshold: f64,
    pub singular:  &'static str,
    pub plural:    &'static str,
}

impl UnitEntry {
    const fn new(threshold: f64, singular: &'static str, plural: &'static str) -> Self {
        Self {
            threshold,
            singular,
            plural,
        }
    }

    /// Singular name only when the rendered magnitude is exactly one (either sign).
    #[allow(clippy::float_cmp, reason = "exact match against the already-rounded magnitude")]
    pub fn name_for(&self, rounded_magnitude: f64) -> &'static str {
        if rounded_magnitude == 1.0 || rounded_magnitude == -1.0 {
            self.singular
        } else {
            self.plural
        }
    }
}

/// Ordered set of units, ascending by threshold.
///
/// The first entry doubles as the fallback: anything smaller than every threshold (including
/// zero and NaN) is expressed in the smallest unit rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTable {
    entries: &'static [UnitEntry],
}

impl UnitTable {
    pub const fn fallback(&self) -> &'static UnitEntry { &self.entries[0] }

    /// The entry with the largest threshold not exceeding `abs(value)`, or the fallback.
    pub fn select(&self, value: f64) -> &'static UnitEntry {
        let magnitude = value.abs();
        self.entries
            .iter()
            .rev()
            .find(|entry| magnitude >= entry.threshold)
            .unwrap_or_else(|| self.fallback())
    }
}

static METRIC_ENTRIES: [UnitEntry; 9] = [
    UnitEntry::new(1e-12, "picometer", "picometers"),
    UnitEntry::new(1e-9, "nanometer", "nanometers"),
    UnitEntry::new(1e-6, "micrometer", "micrometers"),
    UnitEntry::new(1e-3, "millimeter", "millimeters"),
    UnitEntry::new(1e-2, "centimeter", "centimeters"),
    UnitEntry::new(1.0, "meter", "meters"),
    UnitEntry::new(1e3, "kilometer", "kilometers"),
    UnitEntry::new(1e9, "million kilometers", "million kilometers"),
    UnitEntry::new(1e12, "billion kilometers", "billion kilometers"),
];

static LIGHT_YEAR_ENTRIES: [UnitEntry; 5] = [
    UnitEntry::new(1.0, "light year", "light years"),
    UnitEntry::new(1e3, "thousand light years", "thousand light years"),
    UnitEntry::new(1e6, "million light years", "million light years"),
    UnitEntry::new(1e9, "billion light years", "billion light years"),
    UnitEntry::new(1e12, "trillion light years", "trillion light years"),
];

/// Picometers through billions of kilometers, thresholds in meters.
pub static METRIC_UNITS: UnitTable = UnitTable {
    entries: &METRIC_ENTRIES,
};

/// Light years through trillions of light years, thresholds in light years.
pub static LIGHT_YEAR_UNITS: UnitTable = UnitTable {
    entries: &LIGHT_YEAR_ENTRIES,
};
