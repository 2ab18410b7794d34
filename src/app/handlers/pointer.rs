//! Handler für Zeiger-Events: Drag starten, fortsetzen, beenden.

use crate::app::interaction;
use crate::app::AppState;
use crate::core::Point;

/// Startet einen Drag, falls unter `pos` ein greifbarer Punkt liegt.
pub fn begin_drag(state: &mut AppState, pos: Point, pick_radius: f64) {
    let visible = state.view.show_interpolation;
    if interaction::on_pointer_down(&mut state.construction, pos, pick_radius, visible) {
        // Vom Benutzer bewegte Punkte werden nicht mehr automatisch zentriert
        state.view.pending_initial_layout = false;
    }
}

/// Setzt den laufenden Drag fort.
pub fn update_drag(state: &mut AppState, pos: Point) {
    interaction::on_pointer_move(&mut state.construction, pos);
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    interaction::on_pointer_up(&mut state.construction);
}
