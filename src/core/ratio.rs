//! Gemeinsames Interpolationsverhältnis `t` und Rückprojektion eines
//! freien Zeigers auf eine Strecke.

use super::error::GeometryError;
use super::geometry::Point;

/// Quadrierte Streckenlänge, unter der eine Strecke als degeneriert gilt.
const DEGENERATE_LENGTH_SQ: f64 = f64::EPSILON;

/// Interpolationsparameter `t ∈ [0, 1]`, gemeinsam für alle Pyramiden-Ebenen.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SharedRatio(f64);

impl SharedRatio {
    /// Erstellt ein Verhältnis; Werte außerhalb von [0, 1] werden begrenzt,
    /// NaN wird zu 0.
    pub fn new(t: f64) -> Self {
        if t.is_nan() {
            return Self(0.0);
        }
        Self(t.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SharedRatio {
    fn default() -> Self {
        Self(0.5)
    }
}

impl std::fmt::Display for SharedRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t: {:.2}", self.0)
    }
}

/// Projiziert `pointer` auf die Strecke `[start, end]` und liefert das
/// begrenzte Verhältnis.
///
/// `t = clamp(dot(pointer − start, end − start) / |end − start|², 0, 1)`
///
/// Bei einer Strecke der Länge 0 wird `DegenerateSegment` geliefert statt NaN.
pub fn project_ratio(
    pointer: Point,
    start: Point,
    end: Point,
) -> Result<SharedRatio, GeometryError> {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq < DEGENERATE_LENGTH_SQ {
        return Err(GeometryError::DegenerateSegment);
    }
    let t = (pointer - start).dot(segment) / length_sq;
    Ok(SharedRatio::new(t))
}
