//! Fehlerarten der Geometrie-Engine.

use thiserror::Error;

/// Fehler, die an den Grenzen mutierender Geometrie-Operationen erkannt werden.
///
/// Alle Operationen prüfen vor dem Schreiben; ein Fehler lässt den
/// bisherigen gültigen Zustand unverändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Neues Kontrollpolygon mit zu wenigen Punkten angefordert
    #[error("ungültige Kontrollpunkt-Anzahl {requested} (Minimum: {minimum})")]
    InvalidPointCount { requested: usize, minimum: usize },
    /// Kurvenauswertung mit weniger als zwei Punkten
    #[error("Kurvenauswertung benötigt mindestens 2 Punkte, erhalten: {count}")]
    InsufficientPoints { count: usize },
    /// Projektion auf eine Strecke der Länge 0
    #[error("Projektion auf degenerierte Strecke (Länge 0)")]
    DegenerateSegment,
    /// Kontrollpunkt-Index außerhalb des Polygons
    #[error("Kontrollpunkt-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    PointIndexOutOfRange { index: usize, len: usize },
    /// Abtastung mit 0 Schritten angefordert
    #[error("Anzahl der Abtastschritte muss größer als 0 sein")]
    InvalidSampleStepCount,
}
