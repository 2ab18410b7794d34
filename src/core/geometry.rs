//! Geometrie-Grundfunktionen: Abstand, Mittelpunkt, lineare Interpolation.

use glam::DVec2;

/// 2D-Punkt in Canvas-Koordinaten (f64 für stabile Kurvenauswertung).
pub type Point = DVec2;

/// Euklidischer Abstand zwischen `a` und `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Mittelpunkt der Strecke `[a, b]` (entspricht `lerp(a, b, 0.5)`).
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    lerp(a, b, 0.5)
}

/// Lineare Interpolation `a + t·(b − a)`.
///
/// `t` wird nicht begrenzt; Werte außerhalb von [0, 1] extrapolieren.
/// Das Clamping ist Sache des Aufrufers.
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}
