use bevy::asset::LoadState;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::catalog::ScaleCatalog;

/// Loads every texture the catalog names once, and holds the scene back until each one has either
/// arrived or failed.
pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>() // the scene spawns on entering `Loaded`
            .init_resource::<CatalogTextures>()
            .add_systems(
                PreStartup,
                load_catalog_textures.run_if(resource_exists::<ScaleCatalog>),
            )
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AssetsState::Loading)),
            );
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
}

/// Texture handles keyed by the identifier the catalog entry carries.
#[derive(Resource, Clone, Debug, Default)]
pub struct CatalogTextures {
    handles: HashMap<String, Handle<Image>>,
}

impl CatalogTextures {
    pub fn get(&self, texture: &str) -> Option<&Handle<Image>> { self.handles.get(texture) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextureStatus {
    Pending,
    Ready,
    Failed,
}

impl From<Option<LoadState>> for TextureStatus {
    fn from(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Ready,
            // an untracked handle will never load
            Some(LoadState::Failed(_)) | None => Self::Failed,
            Some(LoadState::NotLoaded | LoadState::Loading) => Self::Pending,
        }
    }
}

fn load_catalog_textures(
    catalog: Res<ScaleCatalog>,
    asset_server: Res<AssetServer>,
    mut textures: ResMut<CatalogTextures>,
) {
    for texture in catalog.entries().iter().filter_map(|e| e.texture.as_deref()) {
        textures
            .handles
            .entry(texture.to_string())
            .or_insert_with(|| asset_server.load(texture.to_string()));
    }
    debug!("loading {} catalog textures", textures.handles.len());
}

fn check_asset_loading(
    mut next_state: ResMut<NextState<AssetsState>>,
    asset_server: Res<AssetServer>,
    mut textures: ResMut<CatalogTextures>,
) {
    let mut pending = false;
    textures.handles.retain(|texture, handle| {
        match TextureStatus::from(asset_server.get_load_state(handle.id())) {
            TextureStatus::Ready => true,
            TextureStatus::Pending => {
                pending = true;
                true
            },
            TextureStatus::Failed => {
                warn!("texture {texture} failed to load, falling back to plain color");
                false
            },
        }
    });

    if !pending {
        info!("catalog textures settled: {} loaded", textures.handles.len());
        next_state.set(AssetsState::Loaded);
    }
}
