//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Kontrollpunkte: {}",
                state.construction.polygon().len()
            ));
            ui.separator();

            let drag = match state.construction.drag() {
                DragState::Idle => "–".to_owned(),
                DragState::DraggingControlPoint(i) => format!("P{}", i),
                DragState::DraggingInterpolationPoint(i) => format!("I{}", i),
            };
            ui.label(format!("Drag: {}", drag));
            ui.separator();

            ui.label(format!(
                "Canvas: {:.0} × {:.0}",
                state.view.canvas_size[0], state.view.canvas_size[1]
            ));
            ui.separator();

            ui.label(format!("Commands: {}", state.command_log.len()));
        });
    });
}
