use bevy::prelude::*;

/// Closed set of models the viewer works with.
///
/// Every model the loader fetches, the animator rotates, or the trim selector
/// toggles is named here, so a typo'd identifier cannot silently address
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Primary interactive model; clicking it toggles the swing animation
    Body,
    /// Static companion piece displayed next to the body, never animated
    Companion,
    /// Accessory layers toggled by the trim selector
    System0,
    System1,
    System2,
    System3,
    /// Extra accessory shown from load onward; no trim level touches it
    System4,
}

impl ModelKind {
    pub const COUNT: usize = 7;

    pub const ALL: [ModelKind; Self::COUNT] = [
        ModelKind::Body,
        ModelKind::Companion,
        ModelKind::System0,
        ModelKind::System1,
        ModelKind::System2,
        ModelKind::System3,
        ModelKind::System4,
    ];

    /// The four layers the trim selector drives, in vector order.
    pub const TRIM_LAYERS: [ModelKind; 4] = [
        ModelKind::System0,
        ModelKind::System1,
        ModelKind::System2,
        ModelKind::System3,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Marker for the viewer's single 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Attached to every spawned model scene root, recording which slot of the
/// registry it fills
#[derive(Component, Debug, Clone, Copy)]
pub struct ProductModel {
    pub kind: ModelKind,
}

/// Click target: a bounding sphere centered on the entity's translation
#[derive(Component, Debug, Clone, Copy)]
pub struct Pickable {
    pub radius: f32,
}
