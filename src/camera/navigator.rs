use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;

use super::config::NavigatorConfig;
use crate::catalog::ScaleCatalog;
use crate::schedule::FrameSet;

pub struct NavigatorPlugin;

impl Plugin for NavigatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavigatorState>()
            .init_resource::<ZoomDistance>()
            .add_systems(
                Update,
                reset_navigator
                    .run_if(input_just_pressed(KeyCode::Home))
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, advance_navigator.in_set(FrameSet::Navigation));
    }
}

/// Allowed zoom distances for the current catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    /// Half the smallest entry up to fifty times the largest (with default factors).
    pub fn from_catalog(catalog: &ScaleCatalog, config: &NavigatorConfig) -> Self {
        Self {
            min: catalog.first().actual_size_meters * config.min_zoom_factor,
            max: catalog.last().actual_size_meters * config.max_zoom_factor,
        }
    }

    pub const fn clamp(&self, zoom: f64) -> f64 { zoom.clamp(self.min, self.max) }
}

/// The camera's distance from the origin this frame, in meters.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct ZoomDistance(pub f64);

impl Default for ZoomDistance {
    fn default() -> Self { Self(1.0) }
}

/// Zoom integrator state. `log_position` is `ln(zoom)` and is left unbounded between frames;
/// every tick projects it back onto the allowed range before advancing.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct NavigatorState {
    pub log_position:       f64,
    pub velocity:           f64,
    pub min_velocity_floor: f64,
}

impl FromWorld for NavigatorState {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<NavigatorConfig>()
            .copied()
            .unwrap_or_default();
        Self::new(&config)
    }
}

impl NavigatorState {
    pub const fn new(config: &NavigatorConfig) -> Self {
        Self {
            log_position:       config.initial_log_position,
            velocity:           config.resting_velocity_floor,
            min_velocity_floor: config.resting_velocity_floor,
        }
    }

    /// Discrete wheel tick: only the sign of `direction` matters. Zero is ignored.
    #[allow(clippy::float_cmp, reason = "an exactly zero delta carries no direction")]
    pub fn apply_wheel(&mut self, direction: f64, config: &NavigatorConfig) {
        if direction == 0.0 || direction.is_nan() {
            return;
        }
        self.velocity = direction.signum() * config.wheel_impulse;
        self.min_velocity_floor = config.active_velocity_floor;
    }

    /// Continuous delta (pinch distance change in pixels), scaled into a velocity.
    pub fn apply_continuous(&mut self, delta: f64, config: &NavigatorConfig) {
        self.velocity = delta * config.continuous_impulse_scale;
        self.min_velocity_floor = config.active_velocity_floor;
    }

    /// Advances one frame and returns the zoom distance, always within `bounds`.
    pub fn tick(&mut self, bounds: ZoomBounds, config: &NavigatorConfig) -> f64 {
        let mut damping = if self.velocity.abs() > self.min_velocity_floor {
            config.damping
        } else {
            1.0
        };

        let zoom = bounds.clamp(self.log_position.exp());
        self.log_position = zoom.ln();

        let pushing_below = zoom <= bounds.min && self.velocity < 0.0;
        let pushing_above = zoom >= bounds.max && self.velocity > 0.0;
        if pushing_below || pushing_above {
            damping = config.edge_damping;
        }

        self.log_position += self.velocity;
        self.velocity *= damping;

        self.zoom(bounds)
    }

    pub fn zoom(&self, bounds: ZoomBounds) -> f64 { bounds.clamp(self.log_position.exp()) }

    pub fn reset(&mut self, config: &NavigatorConfig) { *self = Self::new(config); }
}

fn advance_navigator(
    catalog: Res<ScaleCatalog>,
    config: Res<NavigatorConfig>,
    mut navigator: ResMut<NavigatorState>,
    mut zoom: ResMut<ZoomDistance>,
) {
    let bounds = ZoomBounds::from_catalog(&catalog, &config);
    zoom.0 = navigator.tick(bounds, &config);
}

fn reset_navigator(config: Res<NavigatorConfig>, mut navigator: ResMut<NavigatorState>) {
    debug!("resetting navigator to ln(zoom) = {}", config.initial_log_position);
    navigator.reset(&config);
}
