//! Powers of ten - a Bevy journey from DNA to the observable universe
//!
//! - A single camera travels a logarithmic zoom axis past 28 reference objects
//! - Each object is labelled with its size in metric units or light years
//! - Mouse wheel, trackpad pinch and two-finger touch drive a damped zoom integrator
//! - Bevy Remote Protocol (BRP) support for debugging

mod asset_loader;
mod camera;
mod catalog;
mod distance;
mod scale_input;
mod scene;
mod schedule;

use bevy::prelude::*;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::catalog::CatalogPlugin;
use crate::scale_input::ScaleInputPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "powers of ten".to_string()
    } else {
        format!("powers of ten - {effective_port}")
    };

    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            ..default()
        }),
        ..default()
    }));

    // the browser would otherwise scroll or zoom the page on wheel and pinch
    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true,
            ..default()
        }),
        ..default()
    }));

    // catalog before the plugins that read it during build or startup
    app.add_plugins((
        EguiPlugin::default(),
        brp_plugin,
        CatalogPlugin,
        AssetLoaderPlugin,
        CameraPlugin,
        ScaleInputPlugin,
        ScenePlugin,
        SchedulePlugin,
    ))
    .run();
}
