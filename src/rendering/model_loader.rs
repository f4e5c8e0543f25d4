//! # Model Loader Module
//!
//! Loads the Carter GLB models asynchronously and registers each one as it
//! finishes:
//!
//! - A fixed manifest names every model, its asset path, and its initial
//!   visibility
//! - Loads are kicked off once at startup; completion order is unconstrained
//! - A watcher system spawns each model's scene entity the moment its asset
//!   (with dependencies) is ready and records it in the [`ModelRegistry`]
//! - A failed load is logged with its path and error, and its registry slot
//!   stays empty; everything downstream treats the absent model as a no-op

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::picking::BODY_PICK_RADIUS;
use crate::core::components::{ModelKind, Pickable, ProductModel};
use crate::core::resources::ModelRegistry;

/// Plugin that owns the model manifest, the in-flight loads, and the registry.
pub struct ModelLoaderPlugin;

impl Plugin for ModelLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelRegistry>()
            .init_resource::<PendingModels>()
            .add_systems(Startup, begin_model_loads)
            .add_systems(Update, watch_model_loads);
    }
}

/// One manifest row: which slot a file fills and how it first appears.
struct ModelManifestEntry {
    kind: ModelKind,
    path: &'static str,
    visible_on_load: bool,
}

impl ModelManifestEntry {
    const fn new(kind: ModelKind, path: &'static str, visible_on_load: bool) -> Self {
        Self {
            kind,
            path,
            visible_on_load,
        }
    }
}

/// Every model the viewer ships. GLB paths carry the `#Scene0` label so Bevy
/// loads the root scene of each file.
const MODEL_MANIFEST: &[ModelManifestEntry] = &[
    ModelManifestEntry::new(ModelKind::Body, "meshes/Carter01.glb#Scene0", true),
    ModelManifestEntry::new(ModelKind::Companion, "meshes/Carter02.glb#Scene0", true),
    ModelManifestEntry::new(ModelKind::System0, "meshes/0.glb#Scene0", false),
    ModelManifestEntry::new(ModelKind::System1, "meshes/1.glb#Scene0", false),
    ModelManifestEntry::new(ModelKind::System2, "meshes/2.glb#Scene0", false),
    ModelManifestEntry::new(ModelKind::System3, "meshes/3.glb#Scene0", false),
    ModelManifestEntry::new(ModelKind::System4, "meshes/4.glb#Scene0", true),
];

/// Loads that have been requested but not yet resolved either way.
#[derive(Resource, Default)]
pub struct PendingModels {
    loads: Vec<PendingModel>,
}

struct PendingModel {
    kind: ModelKind,
    path: &'static str,
    visible_on_load: bool,
    scene: Handle<Scene>,
}

/// Kick off every manifest load. Fire-and-forget; the watcher system picks
/// up each outcome.
fn begin_model_loads(mut pending: ResMut<PendingModels>, asset_server: Res<AssetServer>) {
    info!("Loading {} Carter models", MODEL_MANIFEST.len());

    for entry in MODEL_MANIFEST {
        let scene = asset_server.load(entry.path);
        pending.loads.push(PendingModel {
            kind: entry.kind,
            path: entry.path,
            visible_on_load: entry.visible_on_load,
            scene,
        });
    }
}

/// Resolve in-flight loads: spawn and register models whose scene (including
/// dependencies) is ready, drop and log the ones that failed.
fn watch_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingModels>,
    mut registry: ResMut<ModelRegistry>,
) {
    if pending.loads.is_empty() {
        return;
    }

    pending.loads.retain(|load| {
        match asset_server.get_load_state(load.scene.id()) {
            Some(LoadState::Failed(error)) => {
                error!("Error loading {}: {}", load.path, error);
                false
            }
            _ if asset_server.is_loaded_with_dependencies(load.scene.id()) => {
                // Visibility is settled here so the model never flashes in a
                // half-loaded state.
                let visibility = if load.visible_on_load {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };

                let mut entity = commands.spawn((
                    SceneRoot(load.scene.clone()),
                    Transform::default(),
                    visibility,
                    ProductModel { kind: load.kind },
                ));
                if load.kind == ModelKind::Body {
                    entity.insert(Pickable {
                        radius: BODY_PICK_RADIUS,
                    });
                }

                registry.insert(load.kind, entity.id());
                info!("Model {:?} ready ({})", load.kind, load.path);
                false
            }
            _ => true,
        }
    });
}
