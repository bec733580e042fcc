// SPDX-License-Identifier: MPL-2.0
//! Animator that only moves when told to.
//!
//! Records every request so a test can inspect targets and motions, then
//! finish individual tickets explicitly. Finished tickets are reported on
//! the next [`Animator::advance`] call, which mirrors how completions reach
//! the update loop one frame later in a real application.

use super::{Animator, Axis, Motion, Ticket};
use std::time::Instant;

/// A recorded `animate_to` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub ticket: Ticket,
    pub axis: Axis,
    pub target: f32,
    pub motion: Motion,
}

#[derive(Debug, Clone, Default)]
pub struct ManualAnimator {
    x: f32,
    y: f32,
    requests: Vec<Request>,
    running: Vec<Request>,
    finished: Vec<Ticket>,
    next_ticket: u64,
}

impl ManualAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request made so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<&Request> {
        self.requests.last()
    }

    /// Requests that are neither finished nor cancelled.
    #[must_use]
    pub fn running(&self) -> &[Request] {
        &self.running
    }

    /// Finishes a running animation: its axis jumps to the target and the
    /// ticket is reported by the next `advance`. Returns `false` if the
    /// ticket was already finished or cancelled.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        let Some(pos) = self.running.iter().position(|r| r.ticket == ticket) else {
            return false;
        };
        let request = self.running.remove(pos);
        self.write(request.axis, request.target);
        self.finished.push(ticket);
        true
    }

    /// Finishes every running animation.
    pub fn finish_all(&mut self) {
        let tickets: Vec<Ticket> = self.running.iter().map(|r| r.ticket).collect();
        for ticket in tickets {
            self.finish(ticket);
        }
    }

    fn write(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    fn cancel(&mut self, axis: Axis) {
        self.running.retain(|r| r.axis != axis);
    }
}

impl Animator for ManualAnimator {
    fn value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn set(&mut self, axis: Axis, value: f32) {
        self.cancel(axis);
        self.write(axis, value);
    }

    fn animate_to(&mut self, axis: Axis, target: f32, motion: Motion) -> Ticket {
        self.cancel(axis);
        let ticket = Ticket::new(self.next_ticket);
        self.next_ticket += 1;
        let request = Request {
            ticket,
            axis,
            target,
            motion,
        };
        self.requests.push(request.clone());
        self.running.push(request);
        ticket
    }

    fn advance(&mut self, _now: Instant) -> Vec<Ticket> {
        std::mem::take(&mut self.finished)
    }

    fn is_running(&self) -> bool {
        !self.running.is_empty() || !self.finished.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn finish_moves_axis_and_reports_on_next_advance() {
        let mut animator = ManualAnimator::new();
        let ticket = animator.animate_to(Axis::X, 40.0, Motion::Timing(Duration::ZERO));

        assert!(animator.finish(ticket));
        assert_eq!(animator.value(Axis::X), 40.0);
        assert_eq!(animator.advance(Instant::now()), vec![ticket]);
        assert!(animator.advance(Instant::now()).is_empty());
    }

    #[test]
    fn new_request_cancels_previous_on_same_axis() {
        let mut animator = ManualAnimator::new();
        let first = animator.animate_to(Axis::Y, 10.0, Motion::Timing(Duration::ZERO));
        let _second = animator.animate_to(Axis::Y, 20.0, Motion::Timing(Duration::ZERO));

        assert!(!animator.finish(first));
        assert_eq!(animator.running().len(), 1);
        assert_eq!(animator.requests().len(), 2);
    }
}
