/// Vertical field of view.
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Near plane has to sit below the smallest entry (DNA at 2e-9 m).
pub const CAMERA_NEAR: f32 = 1e-9;

/// Far plane past the widest zoom, which is the observable universe times the max zoom factor.
pub const CAMERA_FAR: f32 = 1e29;

pub const NAVIGATOR_INITIAL_LOG_POSITION: f64 = -100.0;
pub const NAVIGATOR_RESTING_VELOCITY_FLOOR: f64 = 0.015;
pub const NAVIGATOR_ACTIVE_VELOCITY_FLOOR: f64 = 0.001;
pub const NAVIGATOR_WHEEL_IMPULSE: f64 = 0.1;
pub const NAVIGATOR_CONTINUOUS_IMPULSE_SCALE: f64 = 0.001;
pub const NAVIGATOR_TRACKPAD_PINCH_SCALE: f64 = 250.0;
pub const NAVIGATOR_DAMPING: f64 = 0.95;
pub const NAVIGATOR_EDGE_DAMPING: f64 = 0.85;
pub const NAVIGATOR_MIN_ZOOM_FACTOR: f64 = 0.5;
pub const NAVIGATOR_MAX_ZOOM_FACTOR: f64 = 50.0;
