//! Trim configuration panel: a row of five hover targets along the bottom of
//! the window. Hovering one applies its visibility vector to the system
//! layers immediately; there is no confirmation step and no transition.

use bevy::prelude::*;

use crate::core::components::{ModelKind, ProductModel};
use crate::core::resources::ModelRegistry;
use crate::core::trim::TrimLevel;

const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.3);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.25, 0.25, 0.4);

pub struct TrimPanelPlugin;

impl Plugin for TrimPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_trim_panel)
            .add_systems(Update, handle_trim_hover);
    }
}

/// Marker tying a panel button to the trim level it selects
#[derive(Component, Debug, Clone, Copy)]
pub struct TrimButton {
    pub level: TrimLevel,
}

fn setup_trim_panel(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|parent| {
            for level in TrimLevel::ALL {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(72.0),
                            height: Val::Px(44.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(BUTTON_COLOR),
                        TrimButton { level },
                    ))
                    .with_children(|parent| {
                        parent.spawn((
                            Text::new(level.label()),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
        });

    info!("Trim panel ready with {} levels", TrimLevel::ALL.len());
}

/// Entering a button applies its trim; the selector has no memory, so
/// re-entering the same button just reapplies the same vector.
pub fn handle_trim_hover(
    mut interactions: Query<
        (&Interaction, &TrimButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    registry: Res<ModelRegistry>,
    mut visibilities: Query<&mut Visibility, With<ProductModel>>,
) {
    for (interaction, button, mut color) in interactions.iter_mut() {
        match *interaction {
            Interaction::Hovered | Interaction::Pressed => {
                *color = BackgroundColor(BUTTON_HOVER_COLOR);
                apply_trim(button.level, &registry, &mut visibilities);
            }
            Interaction::None => {
                *color = BackgroundColor(BUTTON_COLOR);
            }
        }
    }
}

/// Set each system layer's visibility to the level's vector. A layer whose
/// model has not loaded yet is skipped; the rest of the vector still applies.
pub fn apply_trim(
    level: TrimLevel,
    registry: &ModelRegistry,
    visibilities: &mut Query<&mut Visibility, With<ProductModel>>,
) {
    let wanted = level.layer_visibility();

    for (kind, on) in ModelKind::TRIM_LAYERS.into_iter().zip(wanted) {
        let Some(entity) = registry.entity(kind) else {
            debug!("trim {}: {:?} not loaded yet, skipping layer", level.label(), kind);
            continue;
        };
        let Ok(mut visibility) = visibilities.get_mut(entity) else {
            continue;
        };
        *visibility = if on {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    debug!("applied trim {}", level.label());
}
