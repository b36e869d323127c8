use bevy::prelude::*;

use crate::catalog::ScaleCatalog;

/// Per-frame ordering: gather input, integrate the zoom, place the camera, then lay out labels.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FrameSet {
    Input,
    Navigation,
    Viewport,
    Labels,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Navigation,
                FrameSet::Viewport,
                FrameSet::Labels,
            )
                .chain(),
        )
        // without a catalog there is nothing to zoom between or label - the rest of the app
        // (window, inspector, remote) keeps running
        .configure_sets(
            Update,
            (FrameSet::Navigation, FrameSet::Labels).run_if(resource_exists::<ScaleCatalog>),
        );
    }
}
