//! Handler für die Neuerzeugung des Kontrollpolygons.

use crate::app::AppState;
use crate::core::ControlPolygon;

/// Ersetzt das Polygon durch ein regelmäßiges Polygon mit `count` Punkten.
///
/// Bei ungültiger Anzahl bleibt der bisherige Zustand vollständig erhalten.
/// Das gemeinsame `t` überlebt die Neuerzeugung.
pub fn regenerate(state: &mut AppState, count: usize) -> anyhow::Result<()> {
    let polygon = match ControlPolygon::regular(count, state.view.canvas_vec()) {
        Ok(polygon) => polygon,
        Err(e) => {
            log::warn!("Kontrollpunkt-Anzahl {} abgelehnt: {}", count, e);
            return Err(e.into());
        }
    };
    state.construction.replace_polygon(polygon);
    state.ui.requested_point_count = count;
    state.ui.last_error = None;
    log::info!(
        "Kontrollpolygon neu erzeugt: {} Punkte, {}",
        count,
        state.construction.ratio()
    );
    Ok(())
}
