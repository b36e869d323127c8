/// Smallest size text geometry is laid out at; anything smaller is drawn at this size and scaled
/// down.
pub const MIN_TEXT_SIZE: f64 = 0.01;

/// Floor for `display_scale` so tiny entries never end up with a degenerate zero scale.
pub const SMALLEST_POSITIVE_SCALE: f64 = f64::from_bits(1);

/// Saturation and lightness for entries that don't specify a color (hue is random).
pub const FALLBACK_COLOR_SATURATION: f32 = 0.6;
pub const FALLBACK_COLOR_LIGHTNESS: f32 = 0.6;
