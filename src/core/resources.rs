use bevy::prelude::*;

use crate::core::components::ModelKind;

/// Registry of loaded model scene entities, indexed by [`ModelKind`].
///
/// Each slot is written exactly once, when the corresponding GLB finishes
/// loading; loads may complete in any order. A slot that is still `None`
/// means the model is pending or its load failed, and every consumer treats
/// that as a no-op.
#[derive(Resource, Debug, Default)]
pub struct ModelRegistry {
    entries: [Option<Entity>; ModelKind::COUNT],
}

impl ModelRegistry {
    pub fn insert(&mut self, kind: ModelKind, entity: Entity) {
        let slot = &mut self.entries[kind.index()];
        if slot.is_some() {
            warn!("model {:?} registered twice, keeping the first entity", kind);
            return;
        }
        *slot = Some(entity);
    }

    pub fn entity(&self, kind: ModelKind) -> Option<Entity> {
        self.entries[kind.index()]
    }

    pub fn is_loaded(&self, kind: ModelKind) -> bool {
        self.entries[kind.index()].is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.entries.iter().filter(|slot| slot.is_some()).count()
    }
}
