//! Interaktions-Engine: Drag-Zustandsautomat über Kontroll- und Interpolationspunkte.
//!
//! **Kontrollpunkt-Drag:** Punkt folgt dem Zeiger, alle Ebenen werden mit dem
//! aktuellen `t` neu abgeleitet (kein Zurücksetzen auf 0.5).
//!
//! **Interpolationspunkt-Drag:** Der Zeiger wird auf die zugehörige Polygonkante
//! projiziert; das begrenzte Verhältnis wird zum neuen gemeinsamen `t` für
//! alle Interpolationspunkte und alle tieferen Ebenen.
//!
//! Aufgeteilt in:
//! - `state` — DragState, ConstructionState
//! - `drag`  — Hit-Test und on_pointer_down/move/up

pub mod drag;
mod state;

pub use drag::{hit_test, on_pointer_down, on_pointer_move, on_pointer_up};
pub use state::{ConstructionState, DragState};
