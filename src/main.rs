use bevy::prelude::*;

use carter_viewer::camera::OrbitCameraPlugin;
use carter_viewer::constants;
use carter_viewer::interaction::picking::PickingPlugin;
use carter_viewer::rendering::animation_systems::SwingAnimationPlugin;
use carter_viewer::rendering::model_loader::ModelLoaderPlugin;
use carter_viewer::scene::ScenePlugin;
use carter_viewer::ui::trim_panel::TrimPanelPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: constants::WINDOW_TITLE.into(),
                    resolution: (constants::WINDOW_WIDTH, constants::WINDOW_HEIGHT).into(),
                    ..default()
                }),
                ..default()
            }),
            ScenePlugin,
            OrbitCameraPlugin,
            ModelLoaderPlugin,
            SwingAnimationPlugin,
            PickingPlugin,
            TrimPanelPlugin,
        ))
        .run();
}
