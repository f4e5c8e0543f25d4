use bevy::prelude::*;

use crate::constants::swing::{BASE_SPEED, MAX_ANGLE};

/// Which way the next angle step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwingDirection {
    #[default]
    Forward,
    Back,
}

impl SwingDirection {
    pub fn sign(self) -> f32 {
        match self {
            SwingDirection::Forward => 1.0,
            SwingDirection::Back => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SwingDirection::Forward => SwingDirection::Back,
            SwingDirection::Back => SwingDirection::Forward,
        }
    }
}

/// State machine for the body swing animation.
///
/// The angle always stays in `[0, MAX_ANGLE]`. Hitting either bound clamps
/// the angle, deactivates the swing, and flips the direction, so each click
/// produces a single swing and the next click swings back the other way.
/// A click while a swing is in flight pauses it mid-arc; the following click
/// resumes in the same direction.
#[derive(Resource, Debug, Clone, Default)]
pub struct SwingState {
    pub active: bool,
    pub direction: SwingDirection,
    pub angle: f32,
}

/// Eased angular step for a swing at `progress` through its arc.
///
/// Slow near both endpoints, fastest mid-swing; `base_speed` sets the overall
/// scale and also pads the profile so the step never reaches zero.
pub fn eased_speed(progress: f32, base_speed: f32) -> f32 {
    let wave = ((std::f32::consts::PI * (progress * 2.0 - 0.5)).sin() + 1.0) / 2.0;
    base_speed * (wave + base_speed).sqrt()
}

impl SwingState {
    /// Click handler entry point: start, or pause a swing already in flight.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Advance one render tick. Returns `false` once a bound is reached and
    /// the swing has stopped.
    ///
    /// The step is per-tick rather than wall-clock scaled; the display
    /// refresh drives the pace, matching the tick contract of the viewer
    /// loop.
    pub fn advance(&mut self) -> bool {
        let progress = (self.angle / MAX_ANGLE).abs();
        let step = eased_speed(progress, BASE_SPEED);
        self.angle += step * self.direction.sign();

        if self.angle >= MAX_ANGLE {
            self.angle = MAX_ANGLE;
            self.active = false;
            self.direction = self.direction.flipped();
            return false;
        }
        if self.angle <= 0.0 {
            self.angle = 0.0;
            self.active = false;
            self.direction = self.direction.flipped();
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eased_speed_is_finite_and_positive_across_the_arc() {
        for i in 0..=1000 {
            let progress = i as f32 / 1000.0;
            let step = eased_speed(progress, BASE_SPEED);
            assert!(step.is_finite(), "progress {progress}");
            assert!(step > 0.0, "progress {progress}");
        }
    }

    #[test]
    fn forward_swing_stops_at_max_and_flips() {
        let mut state = SwingState {
            active: true,
            ..Default::default()
        };

        let mut previous = state.angle;
        let mut ticks = 0;
        while state.advance() {
            assert!(state.angle > previous);
            previous = state.angle;
            ticks += 1;
            assert!(ticks < 10_000, "swing never reached the bound");
        }

        assert_eq!(state.angle, MAX_ANGLE);
        assert!(!state.active);
        assert_eq!(state.direction, SwingDirection::Back);
    }

    #[test]
    fn return_swing_comes_back_to_zero() {
        let mut state = SwingState {
            active: true,
            direction: SwingDirection::Back,
            angle: MAX_ANGLE,
        };

        let mut ticks = 0;
        while state.advance() {
            ticks += 1;
            assert!(ticks < 10_000, "swing never reached the bound");
        }

        assert_eq!(state.angle, 0.0);
        assert!(!state.active);
        assert_eq!(state.direction, SwingDirection::Forward);
    }
}
