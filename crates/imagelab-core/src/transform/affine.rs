//! 2x3 affine matrices for planar transforms.

/// Affine map `(x, y) -> (a*x + b*y + c, d*x + e*y + f)` stored row-major as
/// `[[a, b, c], [d, e, f]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub m: [[f64; 3]; 2],
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    /// Rotation by `angle_degrees` about `(cx, cy)` with uniform `scale`.
    ///
    /// Positive angles turn the picture counter-clockwise as displayed
    /// (y axis pointing down). With `alpha = scale*cos` and
    /// `beta = scale*sin` the matrix is:
    ///
    /// ```text
    /// [  alpha  beta  (1-alpha)*cx - beta*cy ]
    /// [ -beta   alpha  beta*cx + (1-alpha)*cy ]
    /// ```
    pub fn rotation(cx: f64, cy: f64, angle_degrees: f64, scale: f64) -> Self {
        let angle = angle_degrees.to_radians();
        let alpha = scale * angle.cos();
        let beta = scale * angle.sin();

        Self {
            m: [
                [alpha, beta, (1.0 - alpha) * cx - beta * cy],
                [-beta, alpha, beta * cx + (1.0 - alpha) * cy],
            ],
        }
    }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [[a, b, c], [d, e, f]] = self.m;
        (a * x + b * y + c, d * x + e * y + f)
    }

    /// The inverse map, or `None` when the linear part is singular.
    pub fn invert(&self) -> Option<Self> {
        let [[a, b, c], [d, e, f]] = self.m;
        let det = a * e - b * d;
        if det.abs() < f64::EPSILON || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;
        let ia = e * inv_det;
        let ib = -b * inv_det;
        let id = -d * inv_det;
        let ie = a * inv_det;

        Some(Self {
            m: [
                [ia, ib, -(ia * c + ib * f)],
                [id, ie, -(id * c + ie * f)],
            ],
        })
    }
}
