//! Parameters for the shell's topographic contour shader and detail-view
//! spin.

/// Uniforms for iso-elevation contour banding.
///
/// The shell's fragment shader draws a transparent overlay of contour
/// lines from the per-vertex height attribute; these values feed its
/// uniforms directly. A fragment lies on a line when its position within
/// the band is within `line_width` of the band midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandingParams {
    /// Contour line color in linear RGB.
    pub line_color: [f32; 3],
    /// Number of iso-elevation bands across one unit of height.
    pub line_count: u32,
    /// Half-width of each line in band-fraction units.
    pub line_width: f32,
}

impl Default for BandingParams {
    fn default() -> Self {
        Self {
            line_color: [0.0, 1.0, 0.0],
            line_count: 20,
            line_width: 0.02,
        }
    }
}

impl BandingParams {
    /// Position of a height sample within its contour band, in `[0, 1)`.
    ///
    /// Matches the shader's `fract(height * line_count)`, including the
    /// wrap-to-positive behavior for heights below sea level.
    pub fn band_fraction(&self, height: f32) -> f32 {
        (height * self.line_count as f32).rem_euclid(1.0)
    }

    /// Whether a height sample falls on a contour line.
    pub fn on_line(&self, height: f32) -> bool {
        (self.band_fraction(height) - 0.5).abs() <= self.line_width
    }
}

/// Idle rotation applied to the detail-view body by the shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetailSpin {
    /// Rotation about the body's vertical axis, in radians per frame.
    pub rate: f32,
}

impl Default for DetailSpin {
    fn default() -> Self {
        Self { rate: 0.0009 }
    }
}

impl DetailSpin {
    /// Accumulated rotation after `frames` frames.
    pub fn angle_after(&self, frames: u32) -> f32 {
        self.rate * frames as f32
    }
}
