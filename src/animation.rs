//! Animated property support
//!
//! Provides the `Interpolate` trait for values that can be animated and the
//! `ExpAnimation` exponential-decay animator used for the widget's title
//! color, indicator color, and indicator width properties.

use egui::Color32;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        // Channels are quantized u8, so a small step can round back to the
        // start value and stall; nudge at least one unit toward the target.
        let ch = |a: u8, b: u8| {
            if a == b {
                return a;
            }
            let stepped = (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            if stepped != a {
                stepped
            } else if b > a {
                a + 1
            } else {
                a - 1
            }
        };
        Color32::from_rgba_premultiplied(
            ch(self.r(), other.r()),
            ch(self.g(), other.g()),
            ch(self.b(), other.b()),
            ch(self.a(), other.a()),
        )
    }

    /// Epsilon is in the 0.0..=1.0 range and compared against channel
    /// distance scaled by 255, so the same tolerances work for colors
    /// and unit floats.
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        let ch = |a: u8, b: u8| (a as f32 - b as f32).abs() <= epsilon * 255.0;
        ch(self.r(), other.r())
            && ch(self.g(), other.g())
            && ch(self.b(), other.b())
            && ch(self.a(), other.a())
    }
}

/// An exponential-decay animator for a single property.
///
/// Each tick moves the current value a fixed fraction of the remaining
/// distance toward the target, producing the fast-start / slow-settle curve
/// typical of focus transitions. The fraction is specified per frame at a
/// 60 fps reference and rescaled by the actual frame dt, so the curve is
/// frame-rate independent.
///
/// Setting a new target mid-flight simply redirects the animation from the
/// current value; there is no separate cancellation path.
#[derive(Debug, Clone)]
pub struct ExpAnimation<T: Interpolate> {
    current: T,
    target: T,
    /// Fraction of the remaining distance covered per 60 fps frame (0..1)
    factor: f32,
    /// Settling tolerance; once within it the value snaps to the target
    epsilon: f32,
    running: bool,
}

impl<T: Interpolate> ExpAnimation<T> {
    /// Creates a settled animator holding `value`.
    ///
    /// # Arguments
    /// * `factor` - Per-frame decay fraction at a 60 fps reference (0..1)
    /// * `epsilon` - Settling tolerance passed to `Interpolate::approx_eq`
    /// * `value` - Initial current and target value
    pub fn new(factor: f32, epsilon: f32, value: T) -> Self {
        Self {
            current: value.clone(),
            target: value,
            factor,
            epsilon,
            running: false,
        }
    }

    /// Returns the current (possibly mid-animation) value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Returns the value the animator is heading toward.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether the animator still has ground to cover.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts (or redirects) the animation toward `target`.
    ///
    /// Re-setting the current target is a no-op for a settled animator, so
    /// repeated starts with the same value are idempotent.
    pub fn set_target(&mut self, target: T) {
        self.running = !self.current.approx_eq(&target, self.epsilon);
        if !self.running {
            self.current = target.clone();
        }
        self.target = target;
    }

    /// Snaps to `value` without animating.
    pub fn set_value(&mut self, value: T) {
        self.current = value.clone();
        self.target = value;
        self.running = false;
    }

    /// Advances the animation by `dt_secs` seconds.
    ///
    /// Returns true while the animator is still running after the step.
    pub fn tick(&mut self, dt_secs: f32) -> bool {
        if !self.running {
            return false;
        }

        let frames = (dt_secs * 60.0).max(0.0);
        let t = (1.0 - (1.0 - self.factor).powf(frames)).clamp(0.0, 1.0);
        self.current = self.current.lerp(&self.target, t);

        if self.current.approx_eq(&self.target, self.epsilon) {
            self.current = self.target.clone();
            self.running = false;
        }
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_converges_without_overshoot() {
        let mut ani = ExpAnimation::new(1.0 / 8.0, 0.01, 0.0f32);
        ani.set_target(104.0);

        let mut last = 0.0f32;
        for _ in 0..600 {
            ani.tick(FRAME);
            let v = *ani.current();
            assert!(v >= last, "value moved backward: {} -> {}", last, v);
            assert!(v <= 104.0 + 0.01, "overshot target: {}", v);
            last = v;
        }
        assert!(!ani.is_running());
        assert_eq!(*ani.current(), 104.0);
    }

    #[test]
    fn test_repeated_start_is_idempotent() {
        let mut ani = ExpAnimation::new(1.0 / 6.0, 0.01, 0.0f32);
        for _ in 0..5 {
            ani.set_target(40.0);
            ani.tick(FRAME);
        }
        while ani.tick(FRAME) {}
        assert_eq!(*ani.current(), 40.0);

        // Re-starting a settled animator does not wake it up
        ani.set_target(40.0);
        assert!(!ani.is_running());
    }

    #[test]
    fn test_retarget_mid_flight_redirects() {
        let mut ani = ExpAnimation::new(1.0 / 4.0, 0.01, 0.0f32);
        ani.set_target(100.0);
        for _ in 0..3 {
            ani.tick(FRAME);
        }
        let mid = *ani.current();
        assert!(mid > 0.0 && mid < 100.0);

        // Redirect back toward zero from wherever we are
        ani.set_target(0.0);
        ani.tick(FRAME);
        assert!(*ani.current() < mid);
        while ani.tick(FRAME) {}
        assert_eq!(*ani.current(), 0.0);
    }

    #[test]
    fn test_color_animation_settles() {
        let from = Color32::from_rgb(0x91, 0x84, 0x97);
        let to = Color32::from_rgb(0xD1, 0xCB, 0xD4);
        let mut ani = ExpAnimation::new(1.0 / 6.0, 0.01, from);
        ani.set_target(to);

        // Quantized u8 channels must not stall short of the target
        let mut ticks = 0;
        while ani.tick(FRAME) {
            ticks += 1;
            assert!(ticks < 1000, "color animation failed to settle");
        }
        assert_eq!(*ani.current(), to);
    }

    #[test]
    fn test_frame_rate_independence() {
        let mut fast = ExpAnimation::new(1.0 / 8.0, 0.0001, 0.0f32);
        let mut slow = ExpAnimation::new(1.0 / 8.0, 0.0001, 0.0f32);
        fast.set_target(100.0);
        slow.set_target(100.0);

        // Two 60 fps frames cover the same ground as one 30 fps frame
        fast.tick(FRAME);
        fast.tick(FRAME);
        slow.tick(2.0 * FRAME);
        assert!((fast.current() - slow.current()).abs() < 0.001);
    }
}
