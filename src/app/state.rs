//! Application State — zentrale Datenhaltung einer Sitzung.

use super::interaction::ConstructionState;
use super::CommandLog;
use crate::core::{ControlPolygon, SharedRatio};
use crate::shared::ViewerOptions;
use glam::DVec2;

/// Darstellungsbezogener Zustand (Canvas, Overlays)
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Canvas-Größe in Einheiten der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f64; 2],
    /// Interpolationspyramide anzeigen (und greifbar machen)
    pub show_interpolation: bool,
    /// Konvexe Hülle der Kontrollpunkte füllen
    pub show_convex_hull: bool,
    /// Startpolygon wurde noch nicht an die echte Canvas-Größe angepasst
    pub pending_initial_layout: bool,
}

impl ViewState {
    /// Übernimmt Canvas-Größe und Overlay-Startwerte aus den Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            canvas_size: options.canvas_size,
            show_interpolation: options.show_interpolation,
            show_convex_hull: options.show_convex_hull,
            pending_initial_layout: true,
        }
    }

    pub fn canvas_vec(&self) -> DVec2 {
        DVec2::from_array(self.canvas_size)
    }
}

/// UI-bezogener Zustand (Eingabefelder, Meldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Wert im Anzahl-Eingabefeld (wird erst per Button übernommen)
    pub requested_point_count: usize,
    /// Letzte Fehlermeldung für die Statuszeile
    pub last_error: Option<String>,
}

/// Zentraler Sitzungszustand.
///
/// Wird vom Controller per Referenz an Handler und Render-Builder gereicht.
pub struct AppState {
    /// Kontrollpolygon, gemeinsames `t`, Drag-Zustand
    pub construction: ConstructionState,
    /// Canvas und Overlays
    pub view: ViewState,
    /// Eingabefelder und Meldungen
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Startzustand: regelmäßiges Polygon mit der konfigurierten
    /// Punktanzahl, `t` = `initial_ratio`.
    pub fn new(options: ViewerOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let view = ViewState::from_options(&options);
        let polygon = ControlPolygon::regular(options.control_point_count, view.canvas_vec())?;
        let construction = ConstructionState::new(polygon, SharedRatio::new(options.initial_ratio));

        Ok(Self {
            construction,
            view,
            ui: UiState {
                requested_point_count: options.control_point_count,
                last_error: None,
            },
            options,
            command_log: CommandLog::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::interaction::DragState;

    #[test]
    fn test_new_state_uses_options() {
        let options = ViewerOptions {
            control_point_count: 4,
            initial_ratio: 0.2,
            ..ViewerOptions::default()
        };
        let state = AppState::new(options).expect("gültige Optionen");
        assert_eq!(state.construction.polygon().len(), 4);
        assert_eq!(state.construction.ratio().get(), 0.2);
        assert_eq!(state.construction.drag(), DragState::Idle);
        assert_eq!(state.ui.requested_point_count, 4);
        assert!(state.view.show_interpolation);
        assert!(!state.view.show_convex_hull);
    }

    #[test]
    fn test_new_state_rejects_invalid_options() {
        let options = ViewerOptions {
            control_point_count: 1,
            ..ViewerOptions::default()
        };
        assert!(AppState::new(options).is_err());
    }
}
