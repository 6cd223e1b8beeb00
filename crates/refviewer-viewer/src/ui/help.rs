use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::ui::UiState;

pub fn help_overlay(mut contexts: EguiContexts, mut ui_state: ResMut<UiState>) {
    if !ui_state.help_open {
        return;
    }

    let mut open = true;
    egui::Window::new("Help / Shortcuts")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Ctrl+K — Open Keywords");
            ui.label("Ctrl+M — Open Methods");
            ui.label("Esc — Dismiss the latest dialog, close help");
            ui.label("F1 / ? — Toggle help");
        });
    if !open {
        ui_state.help_open = false;
    }
}
