use bevy::prelude::*;

use super::constants::MIN_TEXT_SIZE;
use super::constants::SMALLEST_POSITIVE_SCALE;

/// A catalog entry ready for the scene: sorted, normalized and labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEntry {
    pub name:               String,
    pub actual_size_meters: f64,
    /// Size text geometry is laid out at, never below `MIN_TEXT_SIZE`.
    pub display_size:       f64,
    /// Multiplier taking `display_size` back to the physical size.
    pub display_scale:      f64,
    pub color:              Color,
    pub luminosity:         f32,
    pub distance_label:     String,
    pub texture:            Option<String>,
}

impl LabelEntry {
    /// `display_size * display_scale`, the physical size recovered from the display pair.
    pub fn display_extent(&self) -> f64 { self.display_size * self.display_scale }

    pub fn is_glowing(&self) -> bool { self.luminosity > 0.0 }
}

/// Splits a physical size into a layout size that's safe for text geometry and the scale that
/// restores it. Sizes below `MIN_TEXT_SIZE` are laid out at the minimum and scaled down.
#[allow(clippy::float_cmp, reason = "only an exact zero scale is degenerate")]
pub fn display_size_and_scale(actual_size_meters: f64) -> (f64, f64) {
    let (size, mut scale) = if actual_size_meters < MIN_TEXT_SIZE && actual_size_meters > 0.0 {
        (MIN_TEXT_SIZE, actual_size_meters / MIN_TEXT_SIZE)
    } else {
        (actual_size_meters, 1.0)
    };

    if scale == 0.0 && actual_size_meters > 0.0 {
        scale = SMALLEST_POSITIVE_SCALE;
    }

    (size, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!(
            ((a - b) / b).abs() < 1e-12,
            "{a} and {b} differ beyond tolerance"
        );
    }

    #[test]
    fn test_large_sizes_pass_through() {
        let (size, scale) = display_size_and_scale(1.7);
        assert_close(size, 1.7);
        assert_close(scale, 1.0);

        let (size, scale) = display_size_and_scale(8.798_48e26);
        assert_close(size, 8.798_48e26);
        assert_close(scale, 1.0);
    }

    #[test]
    fn test_minimum_size_is_not_rescaled() {
        let (size, scale) = display_size_and_scale(MIN_TEXT_SIZE);
        assert_close(size, MIN_TEXT_SIZE);
        assert_close(scale, 1.0);
    }

    #[test]
    fn test_small_sizes_clamp_to_minimum_and_scale_down() {
        let (size, scale) = display_size_and_scale(2e-9);
        assert_close(size, MIN_TEXT_SIZE);
        assert_close(scale, 2e-7);
        assert_close(size * scale, 2e-9);
    }

    #[test]
    fn test_scale_never_degenerates_to_zero() {
        let smallest = f64::from_bits(1);
        let (size, scale) = display_size_and_scale(smallest);
        assert_close(size, MIN_TEXT_SIZE);
        assert!(scale > 0.0);
    }
}
