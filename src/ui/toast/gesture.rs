// SPDX-License-Identifier: MPL-2.0
//! Pan gesture recognition.
//!
//! A press only becomes a pan once the pointer has travelled a minimum
//! distance from where it went down. Shorter touches end without ever
//! producing a translation.

use iced::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    /// Pointer is down but has not travelled far enough yet.
    Pending { origin: Point },
    /// Recognized pan; `last` is the latest cumulative translation.
    Active { origin: Point, last: Vector },
}

/// Recognizes a single-pointer pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    min_distance: f32,
    state: State,
}

impl PanGesture {
    /// Creates a recognizer that activates after `min_distance` logical pixels.
    #[must_use]
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
            state: State::Idle,
        }
    }

    /// Returns whether a pointer is currently down on the toast.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Returns whether the press has been recognized as a pan.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Starts tracking a press. Ignored while another press is tracked.
    pub fn press(&mut self, position: Point) {
        if matches!(self.state, State::Idle) {
            self.state = State::Pending { origin: position };
        }
    }

    /// Feeds a pointer move. Returns the cumulative translation once the
    /// pan is recognized.
    pub fn moved(&mut self, position: Point) -> Option<Vector> {
        match self.state {
            State::Idle => None,
            State::Pending { origin } => {
                let translation = translation(origin, position);
                if length(translation) >= self.min_distance {
                    self.state = State::Active {
                        origin,
                        last: translation,
                    };
                    Some(translation)
                } else {
                    None
                }
            }
            State::Active { origin, .. } => {
                let translation = translation(origin, position);
                self.state = State::Active {
                    origin,
                    last: translation,
                };
                Some(translation)
            }
        }
    }

    /// Ends the press. Returns the final translation if it was a pan.
    pub fn release(&mut self, position: Point) -> Option<Vector> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        match state {
            State::Active { origin, .. } => Some(translation(origin, position)),
            State::Idle | State::Pending { .. } => None,
        }
    }

    /// Ends the press without a final position (pointer left the window,
    /// touch cancelled). Returns the last known translation if it was a pan.
    pub fn cancel(&mut self) -> Option<Vector> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        match state {
            State::Active { last, .. } => Some(last),
            State::Idle | State::Pending { .. } => None,
        }
    }
}

fn translation(origin: Point, position: Point) -> Vector {
    Vector::new(position.x - origin.x, position.y - origin.y)
}

fn length(vector: Vector) -> f32 {
    vector.x.hypot(vector.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_touch_is_never_recognized() {
        let mut gesture = PanGesture::new(50.0);
        gesture.press(Point::new(10.0, 10.0));

        assert_eq!(gesture.moved(Point::new(30.0, 10.0)), None);
        assert_eq!(gesture.release(Point::new(40.0, 10.0)), None);
        assert!(!gesture.is_pressed());
    }

    #[test]
    fn pan_activates_after_min_distance() {
        let mut gesture = PanGesture::new(50.0);
        gesture.press(Point::new(0.0, 0.0));

        assert_eq!(gesture.moved(Point::new(30.0, 40.0)), Some(Vector::new(30.0, 40.0)));
        assert!(gesture.is_active());
        assert_eq!(gesture.moved(Point::new(5.0, 5.0)), Some(Vector::new(5.0, 5.0)));
        assert_eq!(gesture.release(Point::new(-120.0, 0.0)), Some(Vector::new(-120.0, 0.0)));
        assert!(!gesture.is_pressed());
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut gesture = PanGesture::new(0.0);
        assert_eq!(gesture.moved(Point::new(100.0, 0.0)), None);
        assert_eq!(gesture.release(Point::new(100.0, 0.0)), None);
    }

    #[test]
    fn cancel_reports_last_translation() {
        let mut gesture = PanGesture::new(10.0);
        gesture.press(Point::ORIGIN);
        gesture.moved(Point::new(0.0, -80.0));

        assert_eq!(gesture.cancel(), Some(Vector::new(0.0, -80.0)));
        assert_eq!(gesture.cancel(), None);
    }

    #[test]
    fn second_press_does_not_reset_origin() {
        let mut gesture = PanGesture::new(0.0);
        gesture.press(Point::ORIGIN);
        gesture.press(Point::new(100.0, 100.0));

        assert_eq!(gesture.moved(Point::new(10.0, 0.0)), Some(Vector::new(10.0, 0.0)));
    }
}
