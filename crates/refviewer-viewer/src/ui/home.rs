use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::app::resources::ViewerSettings;
use crate::shell::{PanelKind, Shell};
use crate::ui::layout::{HOME_TOP_PADDING, NAV_BUTTON_GAP, NAV_BUTTON_SIZE};
use crate::ui::UiState;
use crate::util::config::ViewerTheme;

pub fn home_screen(
    mut contexts: EguiContexts,
    mut shell: ResMut<Shell>,
    mut settings: ResMut<ViewerSettings>,
    mut ui_state: ResMut<UiState>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(HOME_TOP_PADDING);
            ui.heading("Reference Viewer");
            ui.add_space(NAV_BUTTON_GAP * 2.0);

            if ui
                .add_sized(NAV_BUTTON_SIZE, egui::Button::new("Keywords"))
                .clicked()
            {
                shell.open(PanelKind::Keywords);
            }
            ui.add_space(NAV_BUTTON_GAP);
            if ui
                .add_sized(NAV_BUTTON_SIZE, egui::Button::new("Methods"))
                .clicked()
            {
                shell.open(PanelKind::Methods);
            }

            ui.add_space(NAV_BUTTON_GAP * 3.0);
            let mut dark = settings.config.theme == ViewerTheme::Dark;
            if ui.checkbox(&mut dark, "Dark mode").changed() {
                let theme = if dark {
                    ViewerTheme::Dark
                } else {
                    ViewerTheme::Light
                };
                if let Err(err) = settings.set_theme(theme) {
                    tracing::warn!(error = %format!("{err:#}"), "failed to save settings");
                }
            }
            if ui.small_button("Help (F1)").clicked() {
                ui_state.help_open = !ui_state.help_open;
            }

            if !shell.is_empty() {
                ui.add_space(NAV_BUTTON_GAP);
                ui.label(egui::RichText::new(format!("open windows: {}", shell.len())).weak());
            }
        });
    });
}
