// Tests for trim application against a real ECS world: table conformance,
// idempotence, and the skip-unloaded-layer policy.

use bevy::ecs::system::SystemState;
use bevy::prelude::*;

use carter_viewer::core::components::{ModelKind, ProductModel};
use carter_viewer::core::resources::ModelRegistry;
use carter_viewer::core::trim::TrimLevel;
use carter_viewer::ui::trim_panel::apply_trim;

/// Build a world holding the system layers named by `loaded`, each spawned
/// hidden, the way the loader spawns them.
fn world_with_layers(loaded: [bool; 4]) -> World {
    let mut world = World::new();
    let mut registry = ModelRegistry::default();

    for (kind, present) in ModelKind::TRIM_LAYERS.into_iter().zip(loaded) {
        if present {
            let entity = world.spawn((Visibility::Hidden, ProductModel { kind })).id();
            registry.insert(kind, entity);
        }
    }

    world.insert_resource(registry);
    world
}

fn run_apply(world: &mut World, level: TrimLevel) {
    let mut state: SystemState<(
        Res<ModelRegistry>,
        Query<&mut Visibility, With<ProductModel>>,
    )> = SystemState::new(world);
    let (registry, mut visibilities) = state.get_mut(world);
    apply_trim(level, &registry, &mut visibilities);
}

/// Visibility of each trim layer, `None` where the layer never loaded.
fn layer_visibility(world: &World) -> [Option<Visibility>; 4] {
    let registry = world.resource::<ModelRegistry>();
    let mut out = [None; 4];
    for (slot, kind) in out.iter_mut().zip(ModelKind::TRIM_LAYERS) {
        if let Some(entity) = registry.entity(kind) {
            *slot = world.get::<Visibility>(entity).copied();
        }
    }
    out
}

fn as_bools(state: [Option<Visibility>; 4]) -> [bool; 4] {
    state.map(|visibility| matches!(visibility, Some(Visibility::Visible)))
}

#[test]
fn every_trim_level_matches_its_table_row() {
    for level in TrimLevel::ALL {
        let mut world = world_with_layers([true; 4]);
        run_apply(&mut world, level);
        assert_eq!(
            as_bools(layer_visibility(&world)),
            level.layer_visibility(),
            "level {}",
            level.label()
        );
    }
}

#[test]
fn reapplying_a_trim_level_is_idempotent() {
    let mut world = world_with_layers([true; 4]);

    run_apply(&mut world, TrimLevel::ThreeK);
    let first = layer_visibility(&world);

    run_apply(&mut world, TrimLevel::ThreeK);
    assert_eq!(layer_visibility(&world), first);
}

#[test]
fn switching_levels_leaves_exactly_the_new_vector_in_force() {
    let mut world = world_with_layers([true; 4]);

    run_apply(&mut world, TrimLevel::ThreeK);
    run_apply(&mut world, TrimLevel::OneKPlus);

    assert_eq!(
        as_bools(layer_visibility(&world)),
        TrimLevel::OneKPlus.layer_visibility()
    );
}

#[test]
fn unloaded_layers_are_skipped_without_disturbing_the_rest() {
    // Layers 0 and 2 never finished loading.
    let mut world = world_with_layers([false, true, false, true]);

    run_apply(&mut world, TrimLevel::ThreeK);

    let state = layer_visibility(&world);
    assert_eq!(state[0], None);
    assert_eq!(state[1], Some(Visibility::Visible));
    assert_eq!(state[2], None);
    assert_eq!(state[3], Some(Visibility::Hidden));
}

#[test]
fn trim_never_touches_models_outside_the_layer_set() {
    let mut world = world_with_layers([true; 4]);

    // The always-on accessory is registered too, spawned visible.
    let extra = world
        .spawn((Visibility::Visible, ProductModel { kind: ModelKind::System4 }))
        .id();
    world
        .resource_mut::<ModelRegistry>()
        .insert(ModelKind::System4, extra);

    run_apply(&mut world, TrimLevel::OneK);

    assert_eq!(world.get::<Visibility>(extra), Some(&Visibility::Visible));
}
