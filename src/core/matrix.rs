//! 4×5 affine color matrices.
//!
//! A [`ColorMatrix`] maps an RGBA color (plus a constant 1) to a new RGBA
//! color. Rows are output channels, columns are the input R, G, B, A and the
//! constant offset. Channel values and offsets live on the 0..=255 scale.

use serde::{Deserialize, Serialize};

/// Number of coefficients in a color matrix.
pub const COEFFICIENTS: usize = 20;

/// Luminance weights used for desaturation.
pub const LUMA_R: f32 = 0.213;
pub const LUMA_G: f32 = 0.715;
pub const LUMA_B: f32 = 0.072;

/// Upper bound of a color channel.
pub const CHANNEL_MAX: f32 = 255.0;

/// Row-major 4×5 affine color transform.
///
/// `out[row] = Σ in[col] * m[row * 5 + col] + m[row * 5 + 4]` for `col` in 0..4.
///
/// # Example
///
/// ```rust
/// use filterstate::core::ColorMatrix;
///
/// let bright = ColorMatrix::lighting(1.2, 10.0);
/// let out = bright.apply([200.0, 100.0, 50.0, 255.0]);
/// assert!((out[0] - 250.0).abs() < 1e-3);
/// assert!((out[1] - 130.0).abs() < 1e-3);
/// assert!((out[2] - 70.0).abs() < 1e-3);
/// assert_eq!(out[3], 255.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMatrix {
    m: [f32; COEFFICIENTS],
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorMatrix {
    /// The no-op transform.
    pub const fn identity() -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0, //
            ],
        }
    }

    /// Build a matrix from raw row-major coefficients.
    pub const fn from_array(m: [f32; COEFFICIENTS]) -> Self {
        Self { m }
    }

    /// Raw row-major coefficients, for renderers that build a native filter.
    pub const fn as_array(&self) -> &[f32; COEFFICIENTS] {
        &self.m
    }

    /// Saturation matrix.
    ///
    /// `0.0` fully desaturates using luminance weights, `1.0` is exactly the
    /// identity. Offsets are always zero.
    pub fn saturation(sat: f32) -> Self {
        let inv = 1.0 - sat;
        let r = LUMA_R * inv;
        let g = LUMA_G * inv;
        let b = LUMA_B * inv;

        Self {
            m: [
                r + sat, g, b, 0.0, 0.0, //
                r, g + sat, b, 0.0, 0.0, //
                r, g, b + sat, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0, //
            ],
        }
    }

    /// Scale and offset on R, G, B with alpha passthrough.
    pub fn lighting(scale: f32, offset: f32) -> Self {
        Self {
            m: [
                scale, 0.0, 0.0, 0.0, offset, //
                0.0, scale, 0.0, 0.0, offset, //
                0.0, 0.0, scale, 0.0, offset, //
                0.0, 0.0, 0.0, 1.0, 0.0, //
            ],
        }
    }

    /// Compose two transforms: the result applies `inner` first, then `outer`.
    ///
    /// For the 4×4 linear part `C = outer · inner`; for the offset column
    /// `c = outer · inner_offset + outer_offset`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filterstate::core::ColorMatrix;
    ///
    /// let gray = ColorMatrix::saturation(0.0);
    /// let bright = ColorMatrix::lighting(1.2, 10.0);
    /// let composed = ColorMatrix::compose(&gray, &bright);
    ///
    /// let color = [200.0, 100.0, 50.0, 255.0];
    /// let stepwise = gray.apply(bright.apply(color));
    /// let direct = composed.apply(color);
    /// for (a, b) in stepwise.iter().zip(direct.iter()) {
    ///     assert!((a - b).abs() < 1e-3);
    /// }
    /// ```
    pub fn compose(outer: &ColorMatrix, inner: &ColorMatrix) -> ColorMatrix {
        let a = &outer.m;
        let b = &inner.m;
        let mut c = [0.0f32; COEFFICIENTS];

        for row in 0..4 {
            let r = row * 5;
            for col in 0..4 {
                c[r + col] = a[r] * b[col]
                    + a[r + 1] * b[5 + col]
                    + a[r + 2] * b[10 + col]
                    + a[r + 3] * b[15 + col];
            }
            c[r + 4] =
                a[r] * b[4] + a[r + 1] * b[9] + a[r + 2] * b[14] + a[r + 3] * b[19] + a[r + 4];
        }

        ColorMatrix { m: c }
    }

    /// Apply `self` after `inner`. Shorthand for `compose(self, inner)`.
    pub fn after(&self, inner: &ColorMatrix) -> ColorMatrix {
        Self::compose(self, inner)
    }

    /// Transform an RGBA color without clamping.
    pub fn apply(&self, rgba: [f32; 4]) -> [f32; 4] {
        let m = &self.m;
        let [r, g, b, a] = rgba;
        let mut out = [0.0f32; 4];
        for (row, channel) in out.iter_mut().enumerate() {
            let i = row * 5;
            *channel = r * m[i] + g * m[i + 1] + b * m[i + 2] + a * m[i + 3] + m[i + 4];
        }
        out
    }

    /// Transform an RGBA color and clamp every channel to `0..=255`.
    pub fn apply_clamped(&self, rgba: [f32; 4]) -> [f32; 4] {
        self.apply(rgba).map(|c| c.clamp(0.0, CHANNEL_MAX))
    }

    /// True when every coefficient equals the identity's.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &ColorMatrix, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}
