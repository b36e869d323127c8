mod pinch;

use bevy::input::gestures::PinchGesture;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_inspector_egui::bevy_egui::EguiContexts;

use crate::camera::NavigatorConfig;
use crate::camera::NavigatorState;
use crate::schedule::FrameSet;
pub use pinch::PinchTracker;

pub struct ScaleInputPlugin;

impl Plugin for ScaleInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<PinchTracker>()
            .add_systems(
                Update,
                (track_pointer, wheel_zoom, trackpad_pinch_zoom, touch_pinch_zoom)
                    .in_set(FrameSet::Input),
            );
    }
}

/// Cursor position normalized to the window, `(0, 0)` top left.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self { Self { x: 0.5, y: 0.5 } }
}

impl PointerState {
    /// `None` for a zero-area window.
    pub fn from_cursor(cursor: Vec2, window_size: Vec2) -> Option<Self> {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return None;
        }
        let normalized = (cursor / window_size).clamp(Vec2::ZERO, Vec2::ONE);
        Some(Self {
            x: normalized.x,
            y: normalized.y,
        })
    }
}

fn track_pointer(window: Single<&Window, With<PrimaryWindow>>, mut pointer: ResMut<PointerState>) {
    // outside the window the camera holds its last angle
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if let Some(next) = PointerState::from_cursor(cursor, window.size()) {
        pointer.set_if_neq(next);
    }
}

// inspector sliders and scroll areas own the wheel while the pointer is over them
fn pointer_over_egui(egui: &mut EguiContexts) -> bool {
    egui.ctx_mut().is_ok_and(|ctx| ctx.wants_pointer_input())
}

fn wheel_zoom(
    mut wheel: MessageReader<MouseWheel>,
    mut egui: EguiContexts,
    config: Res<NavigatorConfig>,
    mut navigator: ResMut<NavigatorState>,
) {
    if pointer_over_egui(&mut egui) {
        wheel.clear();
        return;
    }
    for event in wheel.read() {
        // bevy's y is positive scrolling away from the user, which should zoom in
        navigator.apply_wheel(-f64::from(event.y), &config);
    }
}

fn trackpad_pinch_zoom(
    mut pinch: MessageReader<PinchGesture>,
    mut egui: EguiContexts,
    config: Res<NavigatorConfig>,
    mut navigator: ResMut<NavigatorState>,
) {
    if pointer_over_egui(&mut egui) {
        pinch.clear();
        return;
    }
    for PinchGesture(magnification) in pinch.read() {
        if *magnification != 0.0 {
            navigator.apply_continuous(
                -f64::from(*magnification) * config.trackpad_pinch_scale,
                &config,
            );
        }
    }
}

fn touch_pinch_zoom(
    touches: Res<Touches>,
    config: Res<NavigatorConfig>,
    mut tracker: ResMut<PinchTracker>,
    mut navigator: ResMut<NavigatorState>,
) {
    let contacts: Vec<Vec2> = touches.iter().map(bevy::input::touch::Touch::position).collect();
    if let Some(delta) = tracker.update(&contacts) {
        navigator.apply_continuous(f64::from(delta), &config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_normalizes_to_window() {
        let pointer = PointerState::from_cursor(Vec2::new(400.0, 150.0), Vec2::new(800.0, 600.0));
        assert_eq!(pointer, Some(PointerState { x: 0.5, y: 0.25 }));
    }

    #[test]
    fn test_pointer_clamps_to_unit_square() {
        let pointer = PointerState::from_cursor(Vec2::new(-10.0, 900.0), Vec2::new(800.0, 600.0));
        assert_eq!(pointer, Some(PointerState { x: 0.0, y: 1.0 }));
    }

    #[test]
    fn test_zero_area_window_is_ignored() {
        assert_eq!(PointerState::from_cursor(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn test_pointer_starts_centered() {
        let pointer = PointerState::default();
        assert!((pointer.x - 0.5).abs() < f32::EPSILON);
        assert!((pointer.y - 0.5).abs() < f32::EPSILON);
    }
}
