mod labels;

use bevy::prelude::*;

use crate::asset_loader::AssetsState;
use crate::asset_loader::CatalogTextures;
use crate::camera::CameraConfig;
use crate::catalog::LabelEntry;
use crate::catalog::ScaleCatalog;
use labels::LabelConfig;
use labels::LabelsPlugin;
use labels::spawn_label;

/// Unit sphere diameter, scaled per entry to its physical size.
const SPHERE_RADIUS: f32 = 0.5;
const SPHERE_SECTORS: u32 = 24;
const SPHERE_STACKS: u32 = 12;
/// Spheres sit a quarter of their size below the axis, leaving room for the label above.
const SPHERE_DROP: f32 = 0.25;
const KEY_LIGHT_POSITION: Vec3 = Vec3::splat(100.0);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LabelsPlugin)
            .add_systems(Startup, spawn_key_light)
            .add_systems(
                OnEnter(AssetsState::Loaded),
                spawn_scale_objects.run_if(resource_exists::<ScaleCatalog>),
            )
            .add_systems(Update, update_key_light);
    }
}

#[derive(Component, Reflect)]
#[reflect(Component)]
struct KeyLight;

/// One per catalog entry, positioned at `z = -size`.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ScaleObject;

fn spawn_key_light(mut commands: Commands, camera_config: Res<CameraConfig>) {
    commands.spawn((
        Name::new("Key Light"),
        DirectionalLight {
            illuminance: camera_config.directional_illuminance,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
    ));
}

fn update_key_light(
    camera_config: Res<CameraConfig>,
    mut light: Single<&mut DirectionalLight, With<KeyLight>>,
) {
    if camera_config.is_changed() {
        light.illuminance = camera_config.directional_illuminance;
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "world positions are placed in f32 space"
)]
fn spawn_scale_objects(
    mut commands: Commands,
    catalog: Res<ScaleCatalog>,
    textures: Res<CatalogTextures>,
    camera_config: Res<CameraConfig>,
    label_config: Res<LabelConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sphere = meshes.add(
        Sphere::new(SPHERE_RADIUS)
            .mesh()
            .uv(SPHERE_SECTORS, SPHERE_STACKS),
    );

    for (index, entry) in catalog.entries().iter().enumerate() {
        let actual = entry.actual_size_meters as f32;
        let texture = entry
            .texture
            .as_deref()
            .and_then(|texture| textures.get(texture))
            .cloned();
        let material = materials.add(scale_material(entry, texture, &camera_config));

        commands
            .spawn((
                Name::new(entry.name.clone()),
                ScaleObject,
                Transform::from_xyz(0.0, 0.0, -actual),
                Visibility::default(),
            ))
            .with_child((
                Mesh3d(sphere.clone()),
                MeshMaterial3d(material),
                Transform::from_xyz(0.0, -actual * SPHERE_DROP, 0.0).with_scale(Vec3::splat(actual)),
            ));

        spawn_label(&mut commands, index, entry, &label_config);
    }

    info!("spawned {} scale objects", catalog.len());
}

fn scale_material(
    entry: &LabelEntry,
    texture: Option<Handle<Image>>,
    camera_config: &CameraConfig,
) -> StandardMaterial {
    if !entry.is_glowing() {
        return StandardMaterial {
            base_color: entry.color,
            base_color_texture: texture,
            perceptual_roughness: 0.6,
            reflectance: 0.1,
            ..default()
        };
    }

    let glow = glow_color(entry.color, entry.luminosity);
    let strength = camera_config.glow_emissive_strength;
    StandardMaterial {
        base_color: Color::from(glow),
        base_color_texture: texture.clone(),
        emissive: LinearRgba::rgb(glow.red * strength, glow.green * strength, glow.blue * strength),
        emissive_texture: texture,
        ..default()
    }
}

/// Catalog color dimmed by luminosity, in linear space.
fn glow_color(color: Color, luminosity: f32) -> LinearRgba {
    let linear = color.to_linear();
    LinearRgba::rgb(
        linear.red * luminosity,
        linear.green * luminosity,
        linear.blue * luminosity,
    )
}
