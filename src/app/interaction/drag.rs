//! Drag-Logik: Hit-Test, Zeiger-Zustandsautomat und Rückprojektion von `t`.

use super::state::{ConstructionState, DragState};
use crate::core::{distance, project_ratio, GeometryError, Point};

/// Ermittelt den Punkt unter `pos`.
///
/// Kontrollpunkte haben Vorrang vor Interpolationspunkten; innerhalb einer
/// Gruppe gewinnt der niedrigste Index. Interpolationspunkte sind nur
/// greifbar, wenn ihr Overlay sichtbar ist.
pub fn hit_test(
    state: &ConstructionState,
    pos: Point,
    pick_radius: f64,
    interpolation_visible: bool,
) -> DragState {
    let hits = |p: &Point| distance(*p, pos) < pick_radius;

    if let Some(index) = state.polygon.points().iter().position(hits) {
        return DragState::DraggingControlPoint(index);
    }
    if interpolation_visible {
        if let Some(index) = state.interpolation_points().iter().position(hits) {
            return DragState::DraggingInterpolationPoint(index);
        }
    }
    DragState::Idle
}

/// Startet einen Drag auf einem Punkt nahe `pos`. Gibt `true` zurück wenn
/// ein Punkt gegriffen wurde.
pub fn on_pointer_down(
    state: &mut ConstructionState,
    pos: Point,
    pick_radius: f64,
    interpolation_visible: bool,
) -> bool {
    if !state.drag.is_idle() {
        log::debug!("Pointer-Down ignoriert, Drag läuft bereits: {:?}", state.drag);
        return false;
    }
    state.drag = hit_test(state, pos, pick_radius, interpolation_visible);
    if !state.drag.is_idle() {
        log::debug!("Drag gestartet: {:?}", state.drag);
    }
    !state.drag.is_idle()
}

/// Aktualisiert den Zustand während eines Drags. Gibt `true` zurück wenn
/// sich Polygon oder `t` geändert haben.
pub fn on_pointer_move(state: &mut ConstructionState, pos: Point) -> bool {
    match state.drag {
        DragState::Idle => false,
        DragState::DraggingControlPoint(index) => match state.polygon.move_point(index, pos) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Kontrollpunkt-Drag verworfen: {}", e);
                state.drag = DragState::Idle;
                false
            }
        },
        DragState::DraggingInterpolationPoint(index) => {
            let Some((start, end)) = state.polygon.segment(index) else {
                log::warn!("Interpolationspunkt {} ohne Kante, Drag beendet", index);
                state.drag = DragState::Idle;
                return false;
            };
            match project_ratio(pos, start, end) {
                Ok(ratio) => {
                    state.ratio = ratio;
                    true
                }
                Err(GeometryError::DegenerateSegment) => {
                    log::debug!("Kante {} hat Länge 0, t bleibt {}", index, state.ratio.get());
                    false
                }
                Err(e) => {
                    log::warn!("Projektion fehlgeschlagen: {}", e);
                    false
                }
            }
        }
    }
}

/// Beendet den Drag; Polygon und `t` bleiben erhalten.
pub fn on_pointer_up(state: &mut ConstructionState) {
    if !state.drag.is_idle() {
        log::debug!("Drag beendet: {:?}, {}", state.drag, state.ratio);
    }
    state.drag = DragState::Idle;
}
