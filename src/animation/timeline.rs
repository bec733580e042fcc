// SPDX-License-Identifier: MPL-2.0
//! Frame-driven animator.
//!
//! Each axis carries its current value and at most one running animation.
//! An animation's clock starts at the first [`Animator::advance`] call after
//! it was requested, so a request made between frames never skips ahead.

use super::{Animator, Axis, Motion, Spring, Ticket};
use std::time::Instant;

#[derive(Debug, Clone)]
struct Running {
    ticket: Ticket,
    from: f32,
    target: f32,
    motion: Motion,
    started: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
struct Channel {
    value: f32,
    running: Option<Running>,
}

impl Channel {
    /// Steps the running animation; returns its ticket once finished.
    fn step(&mut self, now: Instant) -> Option<Ticket> {
        let running = self.running.as_mut()?;
        let started = *running.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);

        let finished = match running.motion {
            Motion::Timing(duration) => {
                if elapsed >= duration {
                    true
                } else {
                    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
                    self.value =
                        running.from + (running.target - running.from) * ease_in_out_quad(t);
                    false
                }
            }
            Motion::Spring(spring) => {
                let (x, v) = spring.sample(running.from - running.target, elapsed.as_secs_f32());
                if Spring::is_at_rest(x, v) {
                    true
                } else {
                    self.value = running.target + x;
                    false
                }
            }
        };

        if finished {
            self.value = running.target;
            self.running.take().map(|r| r.ticket)
        } else {
            None
        }
    }
}

/// Animator backed by wall-clock frames.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    x: Channel,
    y: Channel,
    next_ticket: u64,
}

impl Timeline {
    /// Creates a timeline with both axes at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn channel(&self, axis: Axis) -> &Channel {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn channel_mut(&mut self, axis: Axis) -> &mut Channel {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl Animator for Timeline {
    fn value(&self, axis: Axis) -> f32 {
        self.channel(axis).value
    }

    fn set(&mut self, axis: Axis, value: f32) {
        let channel = self.channel_mut(axis);
        channel.running = None;
        channel.value = value;
    }

    fn animate_to(&mut self, axis: Axis, target: f32, motion: Motion) -> Ticket {
        let ticket = Ticket::new(self.next_ticket);
        self.next_ticket += 1;

        let channel = self.channel_mut(axis);
        channel.running = Some(Running {
            ticket,
            from: channel.value,
            target,
            motion,
            started: None,
        });
        ticket
    }

    fn advance(&mut self, now: Instant) -> Vec<Ticket> {
        let mut finished: Vec<Ticket> = [self.x.step(now), self.y.step(now)]
            .into_iter()
            .flatten()
            .collect();
        finished.sort_by_key(|ticket| ticket.0);
        finished
    }

    fn is_running(&self) -> bool {
        self.x.running.is_some() || self.y.running.is_some()
    }
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timing_reaches_target_after_duration() {
        let mut timeline = Timeline::new();
        let ticket = timeline.animate_to(Axis::X, 200.0, Motion::Timing(Duration::from_millis(100)));
        let start = Instant::now();

        assert!(timeline.advance(start).is_empty());
        assert!(timeline.advance(start + Duration::from_millis(50)).is_empty());
        let midway = timeline.value(Axis::X);
        assert!(midway > 0.0 && midway < 200.0);

        assert_eq!(timeline.advance(start + Duration::from_millis(100)), vec![ticket]);
        assert_eq!(timeline.value(Axis::X), 200.0);
        assert!(!timeline.is_running());
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut timeline = Timeline::new();
        let ticket = timeline.animate_to(Axis::Y, -50.0, Motion::Timing(Duration::ZERO));
        assert_eq!(timeline.advance(Instant::now()), vec![ticket]);
        assert_eq!(timeline.value(Axis::Y), -50.0);
    }

    #[test]
    fn set_cancels_running_animation_without_reporting() {
        let mut timeline = Timeline::new();
        timeline.animate_to(Axis::X, 300.0, Motion::Timing(Duration::from_millis(10)));
        timeline.set(Axis::X, 12.0);

        let later = Instant::now() + Duration::from_secs(1);
        assert!(timeline.advance(later).is_empty());
        assert_eq!(timeline.value(Axis::X), 12.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut timeline = Timeline::new();
        timeline.set(Axis::Y, 600.0);
        let ticket = timeline.animate_to(Axis::Y, 0.0, Motion::Spring(Spring::new(15.0, 100.0)));
        let start = Instant::now();

        timeline.advance(start);
        assert!(timeline.is_running());
        assert_eq!(timeline.advance(start + Duration::from_secs(5)), vec![ticket]);
        assert_eq!(timeline.value(Axis::Y), 0.0);
    }

    #[test]
    fn spring_already_at_target_finishes_immediately() {
        let mut timeline = Timeline::new();
        let ticket = timeline.animate_to(Axis::X, 0.0, Motion::Spring(Spring::new(15.0, 100.0)));
        assert_eq!(timeline.advance(Instant::now()), vec![ticket]);
    }

    #[test]
    fn easing_is_symmetric_and_bounded() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quad(0.25) + ease_in_out_quad(0.75) - 1.0).abs() < 1e-6);
    }
}
