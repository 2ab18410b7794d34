//! Zustand der Konstruktion: Kontrollpolygon, gemeinsames `t`, Drag-Zustand.

use crate::core::{
    build_chain, build_pyramid, ControlPolygon, InterpolationPyramid, Point, SharedRatio,
};

/// Welcher Punkt wird gerade per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Kontrollpunkt mit Index wird verschoben
    DraggingControlPoint(usize),
    /// Interpolationspunkt der Ebene 0 mit Index wird verschoben
    DraggingInterpolationPoint(usize),
}

impl DragState {
    pub fn is_idle(self) -> bool {
        self == DragState::Idle
    }
}

/// Sitzungszustand der Konstruktion.
///
/// Jede Sitzung besitzt ihre eigene Instanz; es gibt keinen globalen Zustand.
/// Interpolationspunkte werden nie gespeichert, sondern bei Bedarf aus
/// Polygon und `t` abgeleitet.
#[derive(Debug, Clone)]
pub struct ConstructionState {
    pub(crate) polygon: ControlPolygon,
    pub(crate) ratio: SharedRatio,
    pub(crate) drag: DragState,
}

impl ConstructionState {
    /// Erstellt einen Zustand ohne aktiven Drag.
    pub fn new(polygon: ControlPolygon, ratio: SharedRatio) -> Self {
        Self {
            polygon,
            ratio,
            drag: DragState::Idle,
        }
    }

    pub fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    pub fn ratio(&self) -> SharedRatio {
        self.ratio
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Interpolationspunkte der Ebene 0 beim aktuellen `t`.
    pub fn interpolation_points(&self) -> Vec<Point> {
        build_chain(self.polygon.points(), self.ratio.get())
    }

    /// Vollständige Pyramide beim aktuellen `t`.
    pub fn pyramid(&self) -> InterpolationPyramid {
        build_pyramid(self.polygon.points(), self.ratio.get())
    }

    /// Ersetzt das Polygon komplett und verwirft einen laufenden Drag.
    /// Das gemeinsame `t` bleibt erhalten.
    pub fn replace_polygon(&mut self, polygon: ControlPolygon) {
        self.polygon = polygon;
        self.drag = DragState::Idle;
    }
}
