//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::Point;
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Zeigertaste gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: Point },
    /// Zeiger bewegt, während die Taste gedrückt ist
    PointerMoved { pos: Point },
    /// Primäre Zeigertaste losgelassen
    PointerReleased,
    /// "Aktualisieren"-Button mit gewünschter Kontrollpunkt-Anzahl
    ControlPointCountRequested { count: usize },
    /// Checkbox "Interpolation anzeigen" geändert
    InterpolationOverlayToggled { visible: bool },
    /// Checkbox "Konvexe Hülle" geändert
    ConvexHullToggled { visible: bool },
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: [f64; 2] },
    /// "Optionen speichern"-Button
    SaveOptionsRequested,
}

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag auf dem Punkt unter `pos` starten (Hit-Test)
    BeginDrag { pos: Point, pick_radius: f64 },
    /// Laufenden Drag zur Position `pos` fortsetzen
    UpdateDrag { pos: Point },
    /// Laufenden Drag beenden
    EndDrag,
    /// Kontrollpolygon mit `count` Punkten neu erzeugen
    RegeneratePolygon { count: usize },
    /// Interpolations-Overlay ein-/ausblenden
    SetInterpolationVisible { visible: bool },
    /// Hüllen-Overlay ein-/ausblenden
    SetConvexHullVisible { visible: bool },
    /// Canvas-Größe übernehmen
    SetCanvasSize { size: [f64; 2] },
    /// Aktuelle Sitzungswerte als Optionen nach `path` schreiben
    SaveOptions { path: PathBuf },
}
