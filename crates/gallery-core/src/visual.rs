use crate::color::srgb_hex;
use crate::constants::{
    BORDER_HOVER_HEX, BORDER_NEUTRAL_HEX, HOVER_SHRINK, IMAGE_SCALE, VISUAL_DAMP_TAU,
    ZOOM_AMPLITUDE, ZOOM_BASE, ZOOM_PHASE_SPREAD, ZOOM_TIME_DIVISOR,
};
use crate::damping::{damp_color, damp_vec3};
use glam::Vec3;
use rand::Rng;

/// Animated appearance of one frame: hover feedback, image zoom pulse and
/// label visibility.
#[derive(Clone, Debug)]
pub struct FrameVisual {
    identifier: String,
    phase: f32,
    hovered: bool,
    image_scale: Vec3,
    border_color: Vec3,
    zoom: f32,
}

impl FrameVisual {
    /// `phase` in `[0, 1)` offsets this frame's zoom pulse; it never changes afterwards.
    pub fn new(identifier: impl Into<String>, phase: f32) -> Self {
        let mut v = Self {
            identifier: identifier.into(),
            phase,
            hovered: false,
            image_scale: IMAGE_SCALE,
            border_color: srgb_hex(BORDER_NEUTRAL_HEX),
            zoom: 0.0,
        };
        v.zoom = v.zoom_at(0.0);
        v
    }

    pub fn with_random_phase(identifier: impl Into<String>, rng: &mut impl Rng) -> Self {
        Self::new(identifier, rng.gen::<f32>())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Report this frame to the focus state machine.
    pub fn click(&self) -> &str {
        &self.identifier
    }

    pub fn is_focused(&self, focused: Option<&str>) -> bool {
        focused == Some(self.identifier.as_str())
    }

    /// Labels hide exactly while their frame holds focus.
    pub fn label_visible(&self, focused: Option<&str>) -> bool {
        !self.is_focused(focused)
    }

    pub fn zoom_at(&self, elapsed: f32) -> f32 {
        ZOOM_BASE
            + (self.phase * ZOOM_PHASE_SPREAD + elapsed / ZOOM_TIME_DIVISOR).sin() * ZOOM_AMPLITUDE
    }

    /// Hover shrinks the image, except on the focused frame.
    pub fn target_image_scale(&self, focused: Option<&str>) -> Vec3 {
        if self.hovered && !self.is_focused(focused) {
            IMAGE_SCALE * HOVER_SHRINK
        } else {
            IMAGE_SCALE
        }
    }

    pub fn target_border_color(&self) -> Vec3 {
        if self.hovered {
            srgb_hex(BORDER_HOVER_HEX)
        } else {
            srgb_hex(BORDER_NEUTRAL_HEX)
        }
    }

    pub fn advance(&mut self, dt: f32, elapsed: f32, focused: Option<&str>) {
        self.zoom = self.zoom_at(elapsed);
        self.image_scale = damp_vec3(
            self.image_scale,
            self.target_image_scale(focused),
            VISUAL_DAMP_TAU,
            dt,
        );
        self.border_color = damp_color(
            self.border_color,
            self.target_border_color(),
            VISUAL_DAMP_TAU,
            dt,
        );
    }

    pub fn image_scale(&self) -> Vec3 {
        self.image_scale
    }

    pub fn border_color(&self) -> Vec3 {
        self.border_color
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_stays_within_pulse_bounds() {
        let v = FrameVisual::new("a", 0.37);
        for i in 0..500 {
            let z = v.zoom_at(i as f32 * 0.1);
            assert!((ZOOM_BASE - ZOOM_AMPLITUDE - 1e-4..=ZOOM_BASE + ZOOM_AMPLITUDE + 1e-4)
                .contains(&z));
        }
    }

    #[test]
    fn phase_offsets_the_pulse() {
        let a = FrameVisual::new("a", 0.1);
        let b = FrameVisual::new("b", 0.6);
        assert!((a.zoom_at(1.0) - b.zoom_at(1.0)).abs() > 1e-3);
    }

    #[test]
    fn hover_moves_border_toward_highlight() {
        let mut v = FrameVisual::new("a", 0.0);
        let start = v.border_color();
        v.pointer_enter();
        v.advance(0.05, 0.05, None);
        let hot = srgb_hex(BORDER_HOVER_HEX);
        assert!(v.border_color().distance(hot) < start.distance(hot));
        v.pointer_leave();
        for _ in 0..120 {
            v.advance(1.0 / 60.0, 0.0, None);
        }
        assert!(v.border_color().abs_diff_eq(Vec3::ONE, 1e-3));
    }
}
