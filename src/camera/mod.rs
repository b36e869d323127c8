mod cameras;
mod config;
mod constants;
mod navigator;
mod viewport;

use bevy::prelude::*;

use cameras::CamerasPlugin;
use config::CameraConfigPlugin;
use navigator::NavigatorPlugin;
use viewport::ViewportPlugin;

pub use cameras::ScaleCamera;
pub use config::CameraConfig;
pub use config::NavigatorConfig;
pub use navigator::NavigatorState;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        // config first so the navigator's `FromWorld` sees it
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(CamerasPlugin)
            .add_plugins(NavigatorPlugin)
            .add_plugins(ViewportPlugin);
    }
}
