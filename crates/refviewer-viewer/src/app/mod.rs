use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiSettings};

use crate::app::resources::ViewerSettings;
use crate::shell::Shell;
use crate::ui::UiState;
use crate::util::config::{ViewerConfig, ViewerTheme};

pub mod resources;

pub struct RefViewerPlugin {
    config: ViewerConfig,
}

impl RefViewerPlugin {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for RefViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(clear_color(self.config.theme)))
            .insert_resource(ViewerSettings::new(self.config.clone()))
            .init_resource::<Shell>()
            .init_resource::<UiState>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    apply_settings,
                    crate::ui::handle_shortcuts,
                    crate::ui::home_screen,
                    crate::ui::panel_windows,
                    crate::ui::help_overlay,
                )
                    .chain(),
            );
    }
}

fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn clear_color(theme: ViewerTheme) -> Color {
    let [r, g, b] = theme.background();
    Color::srgb_u8(r, g, b)
}

// Pushes theme and scale into egui whenever the settings resource changes.
fn apply_settings(
    mut contexts: EguiContexts,
    settings: Res<ViewerSettings>,
    mut egui_settings: ResMut<EguiSettings>,
    mut clear: ResMut<ClearColor>,
) {
    if !settings.is_changed() {
        return;
    }
    let cfg = &settings.config;
    let visuals = match cfg.theme {
        ViewerTheme::Light => egui::Visuals::light(),
        ViewerTheme::Dark => egui::Visuals::dark(),
    };
    contexts.ctx_mut().set_visuals(visuals);
    egui_settings.scale_factor = cfg.ui_scale;
    clear.0 = clear_color(cfg.theme);
}
