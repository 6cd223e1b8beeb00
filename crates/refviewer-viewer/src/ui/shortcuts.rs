use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::shell::{PanelKind, Shell};
use crate::ui::UiState;

pub fn handle_shortcuts(
    mut contexts: EguiContexts,
    mut shell: ResMut<Shell>,
    mut ui_state: ResMut<UiState>,
) {
    let ctx = contexts.ctx_mut();

    if ctx.input(|i| i.key_pressed(egui::Key::Escape))
        && shell.dismiss_latest_dialog().is_none()
        && ui_state.help_open
    {
        ui_state.help_open = false;
    }

    if ctx.wants_keyboard_input() {
        return;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::F1) || i.key_pressed(egui::Key::Questionmark)) {
        ui_state.help_open = !ui_state.help_open;
    }
    if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::K)) {
        shell.open(PanelKind::Keywords);
    }
    if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::M)) {
        shell.open(PanelKind::Methods);
    }
}
