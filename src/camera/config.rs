use bevy::color::palettes::tailwind;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::CAMERA_FAR;
use super::constants::CAMERA_FOV_DEGREES;
use super::constants::CAMERA_NEAR;
use super::constants::NAVIGATOR_ACTIVE_VELOCITY_FLOOR;
use super::constants::NAVIGATOR_CONTINUOUS_IMPULSE_SCALE;
use super::constants::NAVIGATOR_DAMPING;
use super::constants::NAVIGATOR_EDGE_DAMPING;
use super::constants::NAVIGATOR_INITIAL_LOG_POSITION;
use super::constants::NAVIGATOR_MAX_ZOOM_FACTOR;
use super::constants::NAVIGATOR_MIN_ZOOM_FACTOR;
use super::constants::NAVIGATOR_RESTING_VELOCITY_FLOOR;
use super::constants::NAVIGATOR_TRACKPAD_PINCH_SCALE;
use super::constants::NAVIGATOR_WHEEL_IMPULSE;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<NavigatorConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F1)),
        )
        .init_resource::<NavigatorConfig>()
        .add_plugins(
            ResourceInspectorPlugin::<CameraConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F2)),
        )
        .init_resource::<CameraConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    pub clear_color:               Color,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub darkening_factor:          f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_intensity:           f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_low_frequency_boost: f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_high_pass_frequency: f32,
    /// Brightness above which bloom kicks in.
    #[inspector(min = 0.0, max = 2.0, display = NumberDisplay::Slider)]
    pub bloom_threshold:           f32,
    /// Multiplier on glowing materials' emissive so they cross the bloom threshold.
    #[inspector(min = 0.0, max = 20.0)]
    pub glow_emissive_strength:    f32,
    #[inspector(min = 10.0, max = 120.0)]
    pub fov_degrees:               f32,
    pub near:                      f32,
    pub far:                       f32,
    pub ambient_color:             Color,
    #[inspector(min = 0.0, max = 2000.0)]
    pub ambient_brightness:        f32,
    #[inspector(min = 0.0, max = 100_000.0)]
    pub directional_illuminance:   f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            clear_color:               Color::from(tailwind::SLATE_900),
            darkening_factor:          0.15,
            bloom_intensity:           0.5,
            bloom_low_frequency_boost: 0.5,
            bloom_high_pass_frequency: 0.5,
            bloom_threshold:           0.4,
            glow_emissive_strength:    4.0,
            fov_degrees:               CAMERA_FOV_DEGREES,
            near:                      CAMERA_NEAR,
            far:                       CAMERA_FAR,
            ambient_color:             Color::srgb_u8(0x44, 0x44, 0x44),
            ambient_brightness:        400.0,
            directional_illuminance:   10_000.0,
        }
    }
}

/// Tuning for the zoom integrator. Velocities are in natural-log units per frame.
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct NavigatorConfig {
    /// Starting `ln(zoom)`; far below any catalog entry so the first tick clamps to the minimum.
    pub initial_log_position:     f64,
    /// Velocity floor before any input, also the initial velocity.
    #[inspector(min = 0.0, max = 0.1)]
    pub resting_velocity_floor:   f64,
    /// Velocity floor once the user has zoomed.
    #[inspector(min = 0.0, max = 0.1)]
    pub active_velocity_floor:    f64,
    #[inspector(min = 0.0, max = 1.0)]
    pub wheel_impulse:            f64,
    /// Velocity per pixel of pinch distance change.
    #[inspector(min = 0.0, max = 0.01)]
    pub continuous_impulse_scale: f64,
    /// Pixels of pinch distance equivalent to one unit of trackpad magnification.
    #[inspector(min = 0.0, max = 1000.0)]
    pub trackpad_pinch_scale:     f64,
    #[inspector(min = 0.5, max = 1.0, display = NumberDisplay::Slider)]
    pub damping:                  f64,
    /// Damping while pushing past either end of the range.
    #[inspector(min = 0.5, max = 1.0, display = NumberDisplay::Slider)]
    pub edge_damping:             f64,
    /// Closest zoom as a fraction of the smallest entry's size.
    #[inspector(min = 0.01, max = 1.0)]
    pub min_zoom_factor:          f64,
    /// Farthest zoom as a multiple of the largest entry's size.
    #[inspector(min = 1.0, max = 1000.0)]
    pub max_zoom_factor:          f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            initial_log_position:     NAVIGATOR_INITIAL_LOG_POSITION,
            resting_velocity_floor:   NAVIGATOR_RESTING_VELOCITY_FLOOR,
            active_velocity_floor:    NAVIGATOR_ACTIVE_VELOCITY_FLOOR,
            wheel_impulse:            NAVIGATOR_WHEEL_IMPULSE,
            continuous_impulse_scale: NAVIGATOR_CONTINUOUS_IMPULSE_SCALE,
            trackpad_pinch_scale:     NAVIGATOR_TRACKPAD_PINCH_SCALE,
            damping:                  NAVIGATOR_DAMPING,
            edge_damping:             NAVIGATOR_EDGE_DAMPING,
            min_zoom_factor:          NAVIGATOR_MIN_ZOOM_FACTOR,
            max_zoom_factor:          NAVIGATOR_MAX_ZOOM_FACTOR,
        }
    }
}
