//! Bedienpanel: Kontrollpunkt-Anzahl, Overlay-Schalter, `t`-Anzeige.

use crate::app::{AppIntent, AppState};
use crate::shared::options::CONTROL_POINT_COUNT_UI_MAX;

/// Rendert das Bedienpanel und gibt die ausgelösten Intents zurück.
///
/// Das Anzahl-Feld erlaubt 1; der Controller lehnt den Wert ab und die
/// Meldung erscheint im Panel.
pub fn render_controls_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("De Casteljau");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Kontrollpunkte:");
                ui.add(
                    egui::DragValue::new(&mut state.ui.requested_point_count)
                        .range(1..=CONTROL_POINT_COUNT_UI_MAX),
                );
            });
            if ui.button("Aktualisieren").clicked() {
                events.push(AppIntent::ControlPointCountRequested {
                    count: state.ui.requested_point_count,
                });
            }

            ui.separator();

            let mut show_interpolation = state.view.show_interpolation;
            if ui
                .checkbox(&mut show_interpolation, "Interpolation anzeigen")
                .changed()
            {
                events.push(AppIntent::InterpolationOverlayToggled {
                    visible: show_interpolation,
                });
            }

            let mut show_convex_hull = state.view.show_convex_hull;
            if ui
                .checkbox(&mut show_convex_hull, "Konvexe Hülle")
                .changed()
            {
                events.push(AppIntent::ConvexHullToggled {
                    visible: show_convex_hull,
                });
            }

            ui.separator();
            ui.monospace(state.construction.ratio().to_string());

            ui.separator();
            if ui
                .button("Optionen speichern")
                .on_hover_text("Punktanzahl, t und Overlays als Startwerte speichern")
                .clicked()
            {
                events.push(AppIntent::SaveOptionsRequested);
            }

            if let Some(error) = &state.ui.last_error {
                ui.separator();
                ui.colored_label(egui::Color32::RED, error);
            }
        });

    events
}
