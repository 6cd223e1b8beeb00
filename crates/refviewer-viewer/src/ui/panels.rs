use bevy::prelude::{Res, ResMut};
use bevy_egui::{egui, EguiContexts};
use refviewer_core::{GRID_COLUMNS, GRID_ROWS};

use crate::app::resources::ViewerSettings;
use crate::shell::{Dialog, KeywordPanel, MethodsPanel, Panel, PanelAction, PanelId, Shell};
use crate::ui::layout::{
    DIALOG_BODY_MAX_HEIGHT, ELEMENT_CELL, ELEMENT_CELL_GAP, ENTRY_BUTTON_SIZE,
    ENTRY_LIST_MAX_HEIGHT, PANEL_CASCADE_STEP, PANEL_CASCADE_WRAP, PANEL_ORIGIN,
};

/// Draws every open panel window and its dialog, then applies the clicks.
pub fn panel_windows(
    mut contexts: EguiContexts,
    mut shell: ResMut<Shell>,
    settings: Res<ViewerSettings>,
) {
    let ctx = contexts.ctx_mut();
    let mut actions: Vec<(PanelId, PanelAction)> = Vec::new();
    let mut closed: Vec<PanelId> = Vec::new();

    for window in shell.windows() {
        let id = window.id;
        let modal = window.panel.dialog().is_some();
        let offset = PANEL_CASCADE_STEP * ((id.get() as usize) % PANEL_CASCADE_WRAP) as f32;

        let mut open = true;
        egui::Window::new(window.panel.title())
            .id(egui::Id::new(("panel", id.get())))
            .default_pos(egui::pos2(PANEL_ORIGIN[0] + offset, PANEL_ORIGIN[1] + offset))
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(window.panel.header());
                });
                ui.add_space(8.0);
                let clicked = ui
                    .add_enabled_ui(!modal, |ui| match &window.panel {
                        Panel::Keywords(p) => keyword_buttons(ui, p),
                        Panel::Methods(p) => element_grid(ui, id, p),
                    })
                    .inner;
                if let Some(action) = clicked {
                    actions.push((id, action));
                }
            });

        if !open {
            closed.push(id);
            continue;
        }
        if let Some(dialog) = window.panel.dialog() {
            if dialog_window(ctx, id, dialog, settings.config.dialog_width) {
                actions.push((id, PanelAction::Dismiss));
            }
        }
    }

    for (id, action) in actions {
        shell.apply(id, action);
    }
    for id in closed {
        shell.close(id);
    }
}

fn keyword_buttons(ui: &mut egui::Ui, panel: &KeywordPanel) -> Option<PanelAction> {
    let mut clicked = None;
    egui::ScrollArea::vertical()
        .max_height(ENTRY_LIST_MAX_HEIGHT)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                for button in panel.buttons() {
                    if ui
                        .add_sized(ENTRY_BUTTON_SIZE, egui::Button::new(button.label))
                        .clicked()
                    {
                        clicked = Some(button.action);
                    }
                }
            });
        });
    clicked
}

fn element_grid(ui: &mut egui::Ui, id: PanelId, panel: &MethodsPanel) -> Option<PanelAction> {
    let mut clicked = None;
    let cell = egui::vec2(ELEMENT_CELL, ELEMENT_CELL);
    egui::Grid::new(("element_grid", id.get()))
        .spacing([ELEMENT_CELL_GAP, ELEMENT_CELL_GAP])
        .show(ui, |ui| {
            for row in 0..GRID_ROWS {
                for col in 0..GRID_COLUMNS {
                    match panel.button_at(row, col) {
                        Some(b) => {
                            let resp = ui
                                .add_sized(cell, egui::Button::new(b.button.label))
                                .on_hover_text(b.element.name);
                            if resp.clicked() {
                                clicked = Some(b.button.action);
                            }
                        }
                        None => {
                            ui.allocate_space(cell);
                        }
                    }
                }
                ui.end_row();
            }
        });
    clicked
}

fn dialog_window(ctx: &egui::Context, id: PanelId, dialog: &Dialog, width: f32) -> bool {
    let mut open = true;
    let mut ok = false;
    egui::Window::new(dialog.title.as_str())
        .id(egui::Id::new(("dialog", id.get())))
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::CENTER_CENTER)
        .default_pos(ctx.screen_rect().center())
        .max_width(width)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(DIALOG_BODY_MAX_HEIGHT)
                .show(ui, |ui| {
                    ui.label(dialog.body.as_str());
                });
            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    ok = true;
                }
            });
        });
    !open || ok
}
