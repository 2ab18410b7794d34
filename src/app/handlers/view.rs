//! Handler für Canvas-Größe und Overlay-Schalter.

use crate::app::AppState;
use crate::core::ControlPolygon;

/// Blendet das Interpolations-Overlay ein oder aus.
pub fn set_interpolation_visible(state: &mut AppState, visible: bool) {
    state.view.show_interpolation = visible;
}

/// Blendet die konvexe Hülle ein oder aus.
pub fn set_convex_hull_visible(state: &mut AppState, visible: bool) {
    state.view.show_convex_hull = visible;
}

/// Aktualisiert die Canvas-Größe im State.
///
/// Die erste gültige Größe zentriert das unberührte Startpolygon im Canvas.
/// Danach wirkt die Größe erst bei der nächsten Neuerzeugung; bestehende
/// Punkte bleiben an ihrer Position.
pub fn set_canvas_size(state: &mut AppState, size: [f64; 2]) {
    if !(size[0].is_finite() && size[1].is_finite() && size[0] > 0.0 && size[1] > 0.0) {
        log::debug!("Canvas-Größe {:?} ignoriert", size);
        return;
    }
    state.view.canvas_size = size;

    if state.view.pending_initial_layout {
        state.view.pending_initial_layout = false;
        let count = state.construction.polygon().len();
        match ControlPolygon::regular(count, state.view.canvas_vec()) {
            Ok(polygon) => {
                state.construction.replace_polygon(polygon);
                log::info!(
                    "Startpolygon an Canvas {:.0} × {:.0} angepasst",
                    size[0],
                    size[1]
                );
            }
            Err(e) => log::warn!("Startpolygon nicht angepasst: {}", e),
        }
    }
}
