//! Org-card outline animation values.
//!
//! Each animation frame advances an angle by a fixed step; hue and glow follow
//! the sine of that angle. The loop never stops once started.

/// Degrees added per animation frame.
pub const BORDER_STEP: f64 = 2.0;

/// Values to apply to every card on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderFrame {
    /// Hue in degrees, oscillating around orange (30 ± 10)
    pub hue: f64,
    /// Outer glow blur radius in px (32..=48)
    pub glow_px: f64,
    /// Outer glow alpha (0.18..=0.32)
    pub glow_alpha: f64,
}

impl BorderFrame {
    pub fn at_angle(degrees: f64) -> Self {
        let wave = (degrees % 360.0).to_radians().sin();
        Self {
            hue: 30.0 + wave * 10.0,
            glow_px: 32.0 + 16.0 * wave.abs(),
            glow_alpha: 0.18 + 0.14 * wave.abs(),
        }
    }

    /// CSS `border-color` value.
    pub fn border_color(&self) -> String {
        format!("hsl({:.2}, 100%, 50%)", self.hue)
    }

    /// CSS `box-shadow` value.
    pub fn box_shadow(&self) -> String {
        format!(
            "0 0 {:.2}px 0 rgba(255,136,0,{:.3}), 0 0 48px 0 rgba(0,136,85,0.10)",
            self.glow_px, self.glow_alpha
        )
    }
}

/// Angle accumulator for the outline loop.
#[derive(Debug, Clone, Default)]
pub struct BorderCycle {
    angle: f64,
}

impl BorderCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame and return its values.
    pub fn next_frame(&mut self) -> BorderFrame {
        self.angle += BORDER_STEP;
        BorderFrame::at_angle(self.angle)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}
