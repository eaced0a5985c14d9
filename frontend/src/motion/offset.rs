//! Pointer-reactive offsets for decorative layers.
//!
//! Everything here is plain arithmetic over viewport-space coordinates so it
//! can be driven from a `mousemove` handler and tested without a browser.

/// Last pointer position, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportExtent {
    pub width: f64,
    pub height: f64,
}

impl ViewportExtent {
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// Bounding client rect of the element an effect is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementAnchor {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementAnchor {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetVector {
    pub x: f64,
    pub y: f64,
}

impl OffsetVector {
    pub const ZERO: OffsetVector = OffsetVector { x: 0.0, y: 0.0 };

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Tuning for [`compute_offset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetParams {
    /// Multiplier applied after viewport normalisation.
    pub influence: f64,
    /// Lowest intensity a far-away pointer can have.
    pub intensity_floor: f64,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            influence: 2.0,
            intensity_floor: 0.1,
        }
    }
}

/// Influence falloff: 1 at the anchor centre, shrinking linearly with
/// distance over one viewport diagonal, never below `floor`.
pub fn intensity(distance: f64, diagonal: f64, floor: f64) -> f64 {
    (1.0 - distance / diagonal).clamp(floor, 1.0)
}

/// Displacement of a layer anchored at `anchor` toward the pointer.
///
/// `viewport` must have positive width and height. The pointer may lie
/// anywhere, including off-screen.
pub fn compute_offset(
    pointer: PointerSample,
    viewport: ViewportExtent,
    anchor: ElementAnchor,
    params: OffsetParams,
) -> OffsetVector {
    let (cx, cy) = anchor.center();
    let dx = pointer.x - cx;
    let dy = pointer.y - cy;

    let i = intensity(dx.hypot(dy), viewport.diagonal(), params.intensity_floor);

    OffsetVector {
        x: dx / viewport.width * i * params.influence,
        y: dy / viewport.height * i * params.influence,
    }
}

/// Plain proportional follow used by the soft glow behind product heroes.
pub fn follow_glow(pointer: PointerSample, anchor: ElementAnchor, factor: f64) -> OffsetVector {
    let (cx, cy) = anchor.center();
    OffsetVector {
        x: (pointer.x - cx) * factor,
        y: (pointer.y - cy) * factor,
    }
}

/// How one decorative layer turns an offset into a CSS transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerResponse {
    pub shift_px: f64,
    pub rotate_deg: f64,
    pub scale_gain: f64,
    pub opacity_base: f64,
    pub opacity_gain: f64,
}

impl LayerResponse {
    pub const fn translate(shift_px: f64) -> Self {
        Self {
            shift_px,
            rotate_deg: 0.0,
            scale_gain: 0.0,
            opacity_base: 1.0,
            opacity_gain: 0.0,
        }
    }

    pub const fn with_rotation(mut self, rotate_deg: f64) -> Self {
        self.rotate_deg = rotate_deg;
        self
    }

    pub const fn with_scale(mut self, scale_gain: f64) -> Self {
        self.scale_gain = scale_gain;
        self
    }

    pub const fn with_opacity(mut self, base: f64, gain: f64) -> Self {
        self.opacity_base = base;
        self.opacity_gain = gain;
        self
    }

    pub fn opacity(&self, offset: OffsetVector) -> f64 {
        (self.opacity_base + offset.magnitude() * self.opacity_gain).clamp(0.0, 1.0)
    }

    /// Inline style for the layer, e.g.
    /// `transform: translate(3.00px, -1.50px) rotate(0.40deg) scale(1.020); opacity: 0.60;`
    pub fn style(&self, offset: OffsetVector) -> String {
        format!(
            "transform: translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3}); opacity: {:.2};",
            offset.x * self.shift_px,
            offset.y * self.shift_px,
            offset.x * self.rotate_deg,
            1.0 + offset.magnitude() * self.scale_gain,
            self.opacity(offset),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: ViewportExtent = ViewportExtent {
        width: 1000.0,
        height: 1000.0,
    };

    fn anchor() -> ElementAnchor {
        ElementAnchor {
            left: 400.0,
            top: 400.0,
            width: 200.0,
            height: 200.0,
        }
    }

    fn at(x: f64, y: f64) -> PointerSample {
        PointerSample { x, y }
    }

    #[test]
    fn pointer_at_center_gives_zero_offset() {
        let offset = compute_offset(at(500.0, 500.0), SQUARE, anchor(), OffsetParams::default());
        assert_eq!(offset, OffsetVector::ZERO);
    }

    #[test]
    fn equidistant_pointers_have_equal_magnitude() {
        let params = OffsetParams::default();
        let radius = 230.0;
        let reference = compute_offset(at(500.0 + radius, 500.0), SQUARE, anchor(), params).magnitude();

        for step in 0..16 {
            let angle = step as f64 * std::f64::consts::TAU / 16.0;
            let p = at(500.0 + radius * angle.cos(), 500.0 + radius * angle.sin());
            let m = compute_offset(p, SQUARE, anchor(), params).magnitude();
            assert!((m - reference).abs() < 1e-9, "angle {angle}: {m} vs {reference}");
        }
    }

    #[test]
    fn intensity_falls_off_to_floor() {
        let diag = SQUARE.diagonal();
        let mut previous = f64::INFINITY;
        for step in 0..200 {
            let value = intensity(step as f64 * 25.0, diag, 0.1);
            assert!(value <= previous);
            assert!((0.1..=1.0).contains(&value));
            previous = value;
        }
        assert_eq!(intensity(10.0 * diag, diag, 0.1), 0.1);
        assert_eq!(intensity(10.0 * diag, diag, 0.0), 0.0);
        assert_eq!(intensity(0.0, diag, 0.1), 1.0);
    }

    #[test]
    fn magnitude_peaks_at_half_diagonal_while_intensity_keeps_falling() {
        let params = OffsetParams::default();
        let diag = SQUARE.diagonal();
        let along = |d: f64| compute_offset(at(500.0 + d, 500.0), SQUARE, anchor(), params).magnitude();

        assert!(along(200.0) < along(diag / 2.0));
        assert!(along(diag / 2.0) > along(1200.0));
        assert!(intensity(200.0, diag, 0.1) > intensity(diag / 2.0, diag, 0.1));
        assert!(intensity(diag / 2.0, diag, 0.1) > intensity(1200.0, diag, 0.1));
    }

    #[test]
    fn offset_is_continuous_in_pointer_position() {
        let params = OffsetParams::default();
        let viewport = ViewportExtent {
            width: 1440.0,
            height: 900.0,
        };
        let eps = 1e-3;
        for &(x, y) in &[(0.0, 0.0), (500.0, 510.0), (1600.0, -200.0), (1200.0, 800.0)] {
            let a = compute_offset(at(x, y), viewport, anchor(), params);
            let b = compute_offset(at(x + eps, y - eps), viewport, anchor(), params);
            assert!((a.x - b.x).abs() < 1e-4);
            assert!((a.y - b.y).abs() < 1e-4);
        }
    }

    #[test]
    fn offset_points_toward_pointer_and_stays_bounded() {
        let params = OffsetParams::default();
        let right = compute_offset(at(900.0, 500.0), SQUARE, anchor(), params);
        assert!(right.x > 0.0);
        assert_eq!(right.y, 0.0);

        let up_left = compute_offset(at(0.0, 0.0), SQUARE, anchor(), params);
        assert!(up_left.x < 0.0 && up_left.y < 0.0);

        for &(x, y) in &[(0.0, 0.0), (1000.0, 1000.0), (0.0, 1000.0)] {
            let o = compute_offset(at(x, y), SQUARE, anchor(), params);
            assert!(o.x.abs() <= 2.0 && o.y.abs() <= 2.0);
        }
    }

    #[test]
    fn follow_glow_scales_delta() {
        let glow = follow_glow(at(600.0, 450.0), anchor(), 0.02);
        assert!((glow.x - 2.0).abs() < 1e-12);
        assert!((glow.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn layer_style_is_identity_at_rest() {
        let layer = LayerResponse::translate(12.0)
            .with_rotation(3.0)
            .with_scale(0.05)
            .with_opacity(0.6, 0.2);
        assert_eq!(
            layer.style(OffsetVector::ZERO),
            "transform: translate(0.00px, 0.00px) rotate(0.00deg) scale(1.000); opacity: 0.60;"
        );
        assert_eq!(layer.opacity(OffsetVector { x: 3.0, y: 4.0 }), 1.0);
    }
}
