//! Scroll-linked progress values and the keyframe helpers that consume them.

use std::rc::Rc;

use yew::Reducible;

/// Progress of a section through its reveal window: starts when its top
/// crosses 80% of the viewport height, completes when its bottom crosses 20%.
pub fn reveal_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let start = viewport_height * 0.8;
    let end = viewport_height * 0.2 - height;
    progress_between(top, start, end)
}

/// Progress of an element across the whole viewport: 0 while its top is at
/// the viewport bottom, 1 once its bottom has left through the top.
pub fn traverse_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    progress_between(top, viewport_height, -height)
}

fn progress_between(top: f64, start: f64, end: f64) -> f64 {
    if (start - end).abs() < f64::EPSILON {
        return if top <= end { 1.0 } else { 0.0 };
    }
    ((start - top) / (start - end)).clamp(0.0, 1.0)
}

pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Piecewise-linear keyframe lookup. `input` must be ascending and the same
/// length as `output`; values outside the input range hold the end frames.
pub fn interpolate(t: f64, input: &[f64], output: &[f64]) -> f64 {
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if t <= input[0] {
        return output[0];
    }
    for i in 1..len {
        if t <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= 0.0 {
                return output[i];
            }
            let local = (t - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * local;
        }
    }
    output[len - 1]
}

/// Inline style for a section sliding into place as it scrolls in.
pub fn reveal_style(progress: f64) -> String {
    let eased = ease_out_quad(progress);
    format!(
        "transform: translateY({:.1}px); opacity: {:.3};",
        50.0 * (1.0 - eased),
        0.8 + 0.2 * eased
    )
}

/// Inline style for the drifting carousel block.
pub fn parallax_style(progress: f64) -> String {
    let opacity = interpolate(progress, &[0.0, 0.3, 0.7, 1.0], &[0.3, 1.0, 1.0, 0.3]);
    format!(
        "transform: translateY({:.1}%); opacity: {:.3};",
        50.0 * progress,
        opacity
    )
}

/// Which slide a carousel shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn step(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::GoTo(i) if i < self.len => i,
            CarouselAction::GoTo(_) => self.index,
        };
        Self { index, ..self }
    }

    /// Horizontal position of slide `i` relative to the active one, in percent.
    pub fn slide_offset(&self, i: usize) -> f64 {
        (i as f64 - self.index as f64) * 100.0
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).step(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_window_runs_from_80_to_20_percent() {
        let vh = 1000.0;
        let h = 400.0;
        assert_eq!(reveal_progress(900.0, h, vh), 0.0);
        assert_eq!(reveal_progress(800.0, h, vh), 0.0);
        assert_eq!(reveal_progress(-200.0, h, vh), 1.0);
        assert!((reveal_progress(300.0, h, vh) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn traverse_covers_entry_to_exit() {
        let vh = 800.0;
        assert_eq!(traverse_progress(800.0, 400.0, vh), 0.0);
        assert_eq!(traverse_progress(-400.0, 400.0, vh), 1.0);
        assert!((traverse_progress(200.0, 400.0, vh) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn interpolate_holds_ends_and_blends_between() {
        let input = [0.0, 0.3, 0.7, 1.0];
        let output = [0.3, 1.0, 1.0, 0.3];
        assert_eq!(interpolate(-1.0, &input, &output), 0.3);
        assert_eq!(interpolate(2.0, &input, &output), 0.3);
        assert_eq!(interpolate(0.5, &input, &output), 1.0);
        assert!((interpolate(0.15, &input, &output) - 0.65).abs() < 1e-12);
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn ease_out_quad_is_clamped() {
        assert_eq!(ease_out_quad(-1.0), 0.0);
        assert_eq!(ease_out_quad(1.5), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn settled_section_has_no_offset() {
        assert_eq!(reveal_style(1.0), "transform: translateY(0.0px); opacity: 1.000;");
        assert_eq!(reveal_style(0.0), "transform: translateY(50.0px); opacity: 0.800;");
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let c = Carousel::new(3);
        assert_eq!(c.step(CarouselAction::Prev).index, 2);
        assert_eq!(c.step(CarouselAction::Next).step(CarouselAction::Next).step(CarouselAction::Next).index, 0);
        assert_eq!(c.step(CarouselAction::GoTo(1)).index, 1);
        assert_eq!(c.step(CarouselAction::GoTo(7)).index, 0);
        assert_eq!(c.step(CarouselAction::GoTo(2)).slide_offset(0), -200.0);
    }

    #[test]
    fn empty_carousel_ignores_actions() {
        let c = Carousel::new(0);
        assert_eq!(c.step(CarouselAction::Next), c);
        assert_eq!(c.step(CarouselAction::Prev), c);
    }
}
