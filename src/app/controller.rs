//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Fehler werden zusätzlich in `state.ui.last_error` abgelegt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            if let Err(e) = self.handle_command(state, command) {
                state.ui.last_error = Some(format!("{:#}", e));
                return Err(e);
            }
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            AppCommand::BeginDrag { pos, pick_radius } => {
                handlers::pointer::begin_drag(state, pos, pick_radius)
            }
            AppCommand::UpdateDrag { pos } => handlers::pointer::update_drag(state, pos),
            AppCommand::EndDrag => handlers::pointer::end_drag(state),

            // === Polygon ===
            AppCommand::RegeneratePolygon { count } => {
                handlers::polygon::regenerate(state, count)?
            }

            // === Ansicht ===
            AppCommand::SetInterpolationVisible { visible } => {
                handlers::view::set_interpolation_visible(state, visible)
            }
            AppCommand::SetConvexHullVisible { visible } => {
                handlers::view::set_convex_hull_visible(state, visible)
            }
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),

            // === Optionen ===
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
