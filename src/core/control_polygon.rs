//! Kontrollpolygon: geordnete Kontrollpunkte der Bézier-Kurve.

use super::bezier::MIN_CURVE_POINTS;
use super::error::GeometryError;
use super::geometry::Point;
use glam::DVec2;
use std::f64::consts::TAU;

/// Geordnete Kontrollpunkte, immer mindestens zwei.
///
/// Die Reihenfolge bestimmt Parametrisierung und Polygonkanten.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Point>,
}

impl ControlPolygon {
    /// Übernimmt vorhandene Punkte (z.B. aus Tests oder einer Host-Anwendung).
    pub fn from_points(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < MIN_CURVE_POINTS {
            return Err(GeometryError::InvalidPointCount {
                requested: points.len(),
                minimum: MIN_CURVE_POINTS,
            });
        }
        Ok(Self { points })
    }

    /// Verteilt `count` Punkte gleichmäßig auf einem Kreis.
    ///
    /// Radius = kleinere Canvas-Kante / 3, Mittelpunkt = Canvas-Mitte,
    /// Punkt `i` liegt bei Winkel `2π·i/count`.
    pub fn regular(count: usize, canvas_size: DVec2) -> Result<Self, GeometryError> {
        if count < MIN_CURVE_POINTS {
            return Err(GeometryError::InvalidPointCount {
                requested: count,
                minimum: MIN_CURVE_POINTS,
            });
        }
        let radius = canvas_size.x.min(canvas_size.y) / 3.0;
        let center = canvas_size * 0.5;
        let points = (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                center + DVec2::from_angle(angle) * radius
            })
            .collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`; vorhanden für die übliche `len`/`is_empty`-Paarung.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Kante `[P_index, P_index+1]`.
    pub fn segment(&self, index: usize) -> Option<(Point, Point)> {
        Some((self.get(index)?, self.get(index + 1)?))
    }

    /// Ersetzt den Punkt an `index`. Keine weitere Validierung.
    pub fn move_point(&mut self, index: usize, position: Point) -> Result<(), GeometryError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(GeometryError::PointIndexOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }
}
