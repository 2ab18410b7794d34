//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::ViewerOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginDrag {
            pos,
            pick_radius: state.options.pick_radius,
        }],
        AppIntent::PointerMoved { pos } => {
            // Ohne aktiven Drag gibt es nichts zu mutieren
            if state.construction.drag().is_idle() {
                Vec::new()
            } else {
                vec![AppCommand::UpdateDrag { pos }]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::ControlPointCountRequested { count } => {
            vec![AppCommand::RegeneratePolygon { count }]
        }
        AppIntent::InterpolationOverlayToggled { visible } => {
            vec![AppCommand::SetInterpolationVisible { visible }]
        }
        AppIntent::ConvexHullToggled { visible } => {
            vec![AppCommand::SetConvexHullVisible { visible }]
        }
        AppIntent::CanvasResized { size } => {
            // Die UI meldet die Größe jeden Frame; unveränderte Größen erzeugen keinen Command
            if size == state.view.canvas_size && !state.view.pending_initial_layout {
                Vec::new()
            } else {
                vec![AppCommand::SetCanvasSize { size }]
            }
        }
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions {
            path: ViewerOptions::config_path(),
        }],
    }
}
