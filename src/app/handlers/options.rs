//! Handler für das Speichern der Optionen.

use crate::app::AppState;
use std::path::Path;

/// Übernimmt Punktanzahl, aktuelles `t` und Overlay-Schalter der Sitzung in
/// die Optionen und schreibt sie als TOML nach `path`.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let options = &mut state.options;
    options.control_point_count = state.construction.polygon().len();
    options.initial_ratio = state.construction.ratio().get();
    options.show_interpolation = state.view.show_interpolation;
    options.show_convex_hull = state.view.show_convex_hull;
    options.save_to_file(path)
}
