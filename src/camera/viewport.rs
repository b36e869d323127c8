use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::cameras::ScaleCamera;
use super::navigator::ZoomDistance;
use crate::scale_input::PointerState;
use crate::schedule::FrameSet;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportState>().add_systems(
                Update,
                (sync_camera_pose, sync_viewport).in_set(FrameSet::Viewport),
            );
    }
}

/// Camera position in world space; it always looks at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CameraPose {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "camera distances stay well inside f32 range"
    )]
    pub const fn to_vec3(self) -> Vec3 { Vec3::new(self.x as f32, self.y as f32, self.z as f32) }
}

/// Swings the camera around the origin at distance `zoom`. The pointer's horizontal offset sweeps a
/// quarter turn either way; vertical sweeps half as far.
pub fn project(zoom: f64, pointer_x: f32, pointer_y: f32) -> CameraPose {
    let yaw = FRAC_PI_2 * (f64::from(pointer_x) - 0.5);
    let pitch = FRAC_PI_4 * (f64::from(pointer_y) - 0.5);
    CameraPose {
        x: yaw.sin() * zoom,
        y: pitch.sin() * zoom,
        z: yaw.cos() * zoom,
    }
}

/// Size last pushed to the camera projection.
#[derive(Resource, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct ViewportState {
    pub applied: Option<UVec2>,
}

impl ViewportState {
    /// Returns `desired` if it differs from what was last applied, recording it as applied.
    pub fn reconcile(&mut self, desired: UVec2) -> Option<UVec2> {
        if desired.x == 0 || desired.y == 0 || self.applied == Some(desired) {
            return None;
        }
        self.applied = Some(desired);
        Some(desired)
    }
}

fn sync_camera_pose(
    zoom: Res<ZoomDistance>,
    pointer: Res<PointerState>,
    mut camera: Single<&mut Transform, With<ScaleCamera>>,
) {
    let pose = project(zoom.0, pointer.x, pointer.y);
    **camera = Transform::from_translation(pose.to_vec3()).looking_at(Vec3::ZERO, Vec3::Y);
}

#[allow(
    clippy::cast_precision_loss,
    reason = "window dimensions are far below f32's exact integer range"
)]
fn sync_viewport(
    window: Single<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportState>,
    mut camera: Single<&mut Projection, With<ScaleCamera>>,
) {
    let Some(size) = viewport.reconcile(window.physical_size()) else {
        return;
    };

    if let Projection::Perspective(perspective) = &mut **camera {
        perspective.aspect_ratio = size.x as f32 / size.y as f32;
    }

    info!("viewport resized to {}x{}", size.x, size.y);
}
