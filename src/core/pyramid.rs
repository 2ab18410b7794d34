//! Interpolationsketten und -pyramide (de Casteljau mit gemeinsamem `t`).
//!
//! Ebene 0 ist die Kette über den Kontrollpunkten, jede weitere Ebene die
//! Kette über der vorherigen. Die letzte Ebene enthält genau einen Punkt:
//! den Kurvenpunkt B(t).

use super::geometry::{lerp, Point};

/// Eine Reduktionsstufe: `n` Punkte → `n − 1` interpolierte Punkte.
pub fn build_chain(points: &[Point], t: f64) -> Vec<Point> {
    points.windows(2).map(|w| lerp(w[0], w[1], t)).collect()
}

/// Alle Ebenen der Konstruktion für ein festes `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationPyramid {
    ratio: f64,
    levels: Vec<Vec<Point>>,
}

/// Baut die Pyramide als explizite Schleife über die Ebenen.
///
/// Tiefe = `points.len() − 1`; bei weniger als zwei Punkten ist sie leer.
pub fn build_pyramid(points: &[Point], t: f64) -> InterpolationPyramid {
    let mut levels: Vec<Vec<Point>> = Vec::with_capacity(points.len().saturating_sub(1));
    let mut current = build_chain(points, t);
    while !current.is_empty() {
        let next = build_chain(&current, t);
        levels.push(current);
        current = next;
    }
    InterpolationPyramid { ratio: t, levels }
}

impl InterpolationPyramid {
    /// Verhältnis `t`, mit dem alle Ebenen gebaut wurden.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Anzahl der Ebenen.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[Vec<Point>] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&[Point]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    /// Interpolationspunkte der Ebene 0 (auf den Kanten des Kontrollpolygons).
    pub fn interpolation_points(&self) -> &[Point] {
        self.level(0).unwrap_or(&[])
    }

    /// Einzelpunkt der letzten Ebene, also B(t).
    pub fn apex(&self) -> Option<Point> {
        self.levels
            .last()
            .filter(|level| level.len() == 1)
            .map(|level| level[0])
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
