/// Plot limits covering one or more spectrum rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Lowest start mass
    pub x_min: f64,
    /// Highest stop mass
    pub x_max: f64,
    /// Highest intensity
    pub y_max: f32,
    /// Lowest strictly positive intensity, for logarithmic axes
    pub y_min_positive: Option<f32>,
}

impl ViewBounds {
    /// Bounds of a single row plotted over `[x_min, x_max]`.
    ///
    /// Returns `None` for an empty row.
    pub fn from_row(x_min: f64, x_max: f64, row: &[f32]) -> Option<Self> {
        let y_max = row.iter().copied().reduce(f32::max)?;
        let y_min_positive = row.iter().copied().filter(|v| *v > 0.0).reduce(f32::min);
        Some(Self {
            x_min,
            x_max,
            y_max,
            y_min_positive,
        })
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        let y_min_positive = match (self.y_min_positive, other.y_min_positive) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
            y_min_positive,
        }
    }

    /// Widen the mass axis on both sides and the top of the intensity axis
    /// by `fraction` of their span.
    ///
    /// `y_min_positive` is left untouched; log axes are not padded.
    pub fn padded(self, fraction: f64) -> Self {
        let pad_x = (self.x_max - self.x_min) * fraction;
        let y_low = self.y_min_positive.unwrap_or(0.0);
        let pad_y = (self.y_max - y_low) * fraction as f32;
        Self {
            x_min: self.x_min - pad_x,
            x_max: self.x_max + pad_x,
            y_max: self.y_max + pad_y,
            y_min_positive: self.y_min_positive,
        }
    }
}
