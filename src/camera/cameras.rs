use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::AmbientLight;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;

use super::config::CameraConfig;

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scale_camera).add_systems(
            Update,
            (update_bloom_settings, update_clear_color, update_projection),
        );
    }
}

/// The single camera travelling along the zoom axis.
#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct ScaleCamera;

fn spawn_scale_camera(mut commands: Commands, camera_config: Res<CameraConfig>) {
    commands
        .spawn(Camera3d::default())
        .insert(Transform::from_xyz(0.0, 0.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y))
        .insert(Projection::from(perspective_projection(&camera_config)))
        .insert(Tonemapping::TonyMcMapface)
        .insert(bloom_settings(&camera_config))
        // ambient on the camera rather than as a global resource so the inspector drives it
        .insert(ambient_light(&camera_config))
        .insert(ScaleCamera);

    debug!(
        "spawned scale camera: fov {} near {} far {}",
        camera_config.fov_degrees, camera_config.near, camera_config.far
    );
}

fn perspective_projection(camera_config: &CameraConfig) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: camera_config.fov_degrees.to_radians(),
        near: camera_config.near,
        far: camera_config.far,
        ..default()
    }
}

fn ambient_light(camera_config: &CameraConfig) -> AmbientLight {
    AmbientLight {
        color: camera_config.ambient_color,
        brightness: camera_config.ambient_brightness,
        ..default()
    }
}

fn bloom_settings(camera_config: &CameraConfig) -> Bloom {
    let mut bloom = Bloom::NATURAL;

    bloom.intensity = camera_config.bloom_intensity;
    bloom.low_frequency_boost = camera_config.bloom_low_frequency_boost;
    bloom.high_pass_frequency = camera_config.bloom_high_pass_frequency;
    bloom.prefilter.threshold = camera_config.bloom_threshold;
    bloom
}

// propagate inspector edits back to the camera
fn update_bloom_settings(
    camera_config: Res<CameraConfig>,
    camera: Single<(&mut Bloom, &mut AmbientLight), With<ScaleCamera>>,
) {
    if !camera_config.is_changed() {
        return;
    }
    let (mut bloom, mut ambient) = camera.into_inner();
    *bloom = bloom_settings(&camera_config);
    *ambient = ambient_light(&camera_config);
}

// aspect ratio belongs to the viewport sync, so only the lens fields are touched here
fn update_projection(
    camera_config: Res<CameraConfig>,
    mut camera: Single<&mut Projection, With<ScaleCamera>>,
) {
    if !camera_config.is_changed() {
        return;
    }
    if let Projection::Perspective(perspective) = &mut **camera {
        perspective.fov = camera_config.fov_degrees.to_radians();
        perspective.near = camera_config.near;
        perspective.far = camera_config.far;
    }
}

// this allows us to use Inspector reflection to manually update ClearColor to
// different values while running from the ui_for_resources provided by bevy_inspector_egui
fn update_clear_color(camera_config: Res<CameraConfig>, mut clear_color: ResMut<ClearColor>) {
    if camera_config.is_changed() {
        clear_color.0 = camera_config
            .clear_color
            .darker(camera_config.darkening_factor);
    }
}
