use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::camera::ScaleCamera;
use crate::catalog::LabelEntry;
use crate::schedule::FrameSet;

/// Labels alternate above and below their object so neighbours don't stack.
const ABOVE_OBJECT: f32 = 0.15;
const BELOW_OBJECT: f32 = -2.0;

pub struct LabelsPlugin;

impl Plugin for LabelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<LabelConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F3)),
        )
        .init_resource::<LabelConfig>()
        .add_systems(Update, project_labels.in_set(FrameSet::Labels));
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct LabelConfig {
    /// Labels projecting smaller than this are hidden.
    #[inspector(min = 0.0, max = 32.0)]
    pub min_font_px:    f32,
    /// Labels projecting larger than this are hidden.
    #[inspector(min = 32.0, max = 2000.0)]
    pub max_font_px:    f32,
    /// Distance span size relative to the name.
    #[inspector(min = 0.1, max = 1.0, display = NumberDisplay::Slider)]
    pub distance_scale: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            min_font_px:    4.0,
            max_font_px:    300.0,
            distance_scale: 0.7,
        }
    }
}

/// World-space placement of a screen-space label.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct ScaleLabel {
    pub anchor: Vec3,
    /// Height of the text in world units.
    pub extent: f32,
}

#[derive(Component)]
struct DistanceSpan;

pub const fn label_offset_factor(index: usize) -> f32 {
    if index % 2 == 0 { ABOVE_OBJECT } else { BELOW_OBJECT }
}

/// Font size in pixels for a label whose baseline and top project to `base` and `top`, or `None`
/// when it would be unreadably small or fill the screen.
pub fn label_font_size(base: Vec2, top: Vec2, config: &LabelConfig) -> Option<f32> {
    let size = base.distance(top);
    (config.min_font_px..=config.max_font_px)
        .contains(&size)
        .then_some(size)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "world positions are placed in f32 space"
)]
pub fn spawn_label(commands: &mut Commands, index: usize, entry: &LabelEntry, config: &LabelConfig) {
    let actual = entry.actual_size_meters as f32;
    let label = ScaleLabel {
        anchor: Vec3::new(0.0, actual * label_offset_factor(index), -actual),
        extent: entry.display_extent() as f32,
    };

    commands
        .spawn((
            Name::new(format!("{} label", entry.name)),
            Text::new(entry.name.clone()),
            TextFont {
                font_size: config.min_font_px,
                ..default()
            },
            TextColor(entry.color),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            label,
        ))
        .with_child((
            TextSpan::new(format!(" ({})", entry.distance_label)),
            TextFont {
                font_size: config.min_font_px * config.distance_scale,
                ..default()
            },
            TextColor(entry.color),
            DistanceSpan,
        ));
}

fn project_labels(
    camera: Single<(&Camera, &Transform), With<ScaleCamera>>,
    config: Res<LabelConfig>,
    mut labels: Query<(&ScaleLabel, &Children, &mut Node, &mut TextFont, &mut Visibility)>,
    mut spans: Query<&mut TextFont, (With<DistanceSpan>, Without<ScaleLabel>)>,
) {
    let (camera, transform) = *camera;
    // the camera has no parent, so its local transform is already global and one frame fresher
    // than `GlobalTransform` at this point in `Update`
    let camera_transform = GlobalTransform::from(*transform);

    for (label, children, mut node, mut font, mut visibility) in &mut labels {
        let top_anchor = label.anchor + Vec3::Y * label.extent;
        let (Ok(base), Ok(top)) = (
            camera.world_to_viewport(&camera_transform, label.anchor),
            camera.world_to_viewport(&camera_transform, top_anchor),
        ) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };
        let Some(size) = label_font_size(base, top, &config) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        node.left = Val::Px(base.x);
        node.top = Val::Px(base.y - size);
        font.font_size = size;
        for child in children {
            if let Ok(mut span_font) = spans.get_mut(*child) {
                span_font.font_size = size * config.distance_scale;
            }
        }
        visibility.set_if_neq(Visibility::Inherited);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_alternate_by_index() {
        assert!((label_offset_factor(0) - 0.15).abs() < f32::EPSILON);
        assert!((label_offset_factor(1) + 2.0).abs() < f32::EPSILON);
        assert!((label_offset_factor(2) - 0.15).abs() < f32::EPSILON);
        assert!((label_offset_factor(27) + 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_font_size_is_projected_height() {
        let config = LabelConfig::default();
        let size = label_font_size(Vec2::new(100.0, 200.0), Vec2::new(100.0, 176.0), &config);
        assert_eq!(size, Some(24.0));
    }

    #[test]
    fn test_unreadable_labels_are_hidden() {
        let config = LabelConfig::default();
        let base = Vec2::new(10.0, 10.0);
        assert_eq!(label_font_size(base, base + Vec2::Y, &config), None);
        assert_eq!(label_font_size(base, base + Vec2::Y * 5000.0, &config), None);
    }
}
