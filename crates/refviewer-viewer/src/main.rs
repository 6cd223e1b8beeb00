mod app;
mod shell;
mod ui;
mod util;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

fn main() {
    let cfg = util::config::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Home Page".into(),
                resolution: (cfg.window_width, cfg.window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(app::RefViewerPlugin::new(cfg))
        .run();
}
