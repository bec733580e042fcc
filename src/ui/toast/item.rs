// SPDX-License-Identifier: MPL-2.0
//! Gesture and animation state machine for a single toast.
//!
//! ```text
//! Entering ──► Idle ◄──► Dragging ──► SettlingBack ──► Idle
//!                            │
//!                            └──► Exiting(d) ──► Dismissed(d)
//! ```
//!
//! The item owns its offset through an [`Animator`]. Pointer input goes
//! through a [`PanGesture`] first, so touches shorter than half the swipe
//! threshold never move the toast.

use super::gesture::PanGesture;
use crate::animation::{Animator, Axis, Motion, Spring, Ticket, Timeline, DEFAULT_TIMING};
use crate::domain::toast::{AnimateOutDuration, Direction, DirectionSet, SwipeThreshold};
use iced::{Point, Size, Vector};
use std::time::{Duration, Instant};

/// Fully resolved behavior of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Side of the screen the toast slides in from.
    pub initial_direction: Direction,
    pub swipe_threshold: SwipeThreshold,
    pub animate_out: AnimateOutDuration,
    /// Duration of the snap back after a release below the threshold.
    pub settle: Duration,
    /// Spring used for the entrance.
    pub spring: Spring,
    /// Directions the toast cannot be dragged or dismissed towards.
    pub disabled: DirectionSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_direction: Direction::default(),
            swipe_threshold: SwipeThreshold::default(),
            animate_out: AnimateOutDuration::default(),
            settle: DEFAULT_TIMING,
            spring: Spring::new(15.0, 100.0),
            disabled: DirectionSet::empty(),
        }
    }
}

/// Lifecycle phase of a toast item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Idle,
    Dragging,
    SettlingBack,
    /// Animating off-screen towards the direction.
    Exiting(Direction),
    /// Exit animation finished and has been reported.
    Dismissed(Direction),
}

impl Phase {
    fn accepts_drag(self) -> bool {
        !matches!(self, Phase::Exiting(_) | Phase::Dismissed(_))
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The toast is leaving the screen in this direction.
    Exit(Direction),
    /// No direction qualified; the toast is snapping back to the origin.
    Settle,
    /// The release did not end a drag.
    Ignored,
}

type ExitPredicate = fn(Vector, SwipeThreshold) -> bool;

fn past_left(t: Vector, threshold: SwipeThreshold) -> bool {
    threshold.is_exceeded_by(t.x, Direction::Left.sign())
}

fn past_right(t: Vector, threshold: SwipeThreshold) -> bool {
    threshold.is_exceeded_by(t.x, Direction::Right.sign())
}

fn past_up(t: Vector, threshold: SwipeThreshold) -> bool {
    threshold.is_exceeded_by(t.y, Direction::Up.sign())
}

fn past_down(t: Vector, threshold: SwipeThreshold) -> bool {
    threshold.is_exceeded_by(t.y, Direction::Down.sign())
}

/// Exit candidates, evaluated first-match in this order. Horizontal
/// directions always win over vertical ones.
const EXIT_RULES: [(Direction, ExitPredicate); 4] = [
    (Direction::Left, past_left),
    (Direction::Right, past_right),
    (Direction::Up, past_up),
    (Direction::Down, past_down),
];

/// Picks the exit direction for a release translation, if any.
#[must_use]
pub fn select_exit(
    translation: Vector,
    threshold: SwipeThreshold,
    disabled: DirectionSet,
) -> Option<Direction> {
    EXIT_RULES
        .iter()
        .find(|(direction, past)| !disabled.contains(*direction) && past(translation, threshold))
        .map(|(direction, _)| *direction)
}

/// Offset at which a toast is fully outside the viewport in `direction`.
#[must_use]
pub fn off_screen(direction: Direction, viewport: Size) -> f32 {
    let extent = match direction.axis() {
        Axis::X => viewport.width,
        Axis::Y => viewport.height,
    };
    direction.sign() * extent
}

/// A single swipeable toast.
#[derive(Debug)]
pub struct ToastItem<A = Timeline> {
    settings: Settings,
    viewport: Size,
    animator: A,
    gesture: PanGesture,
    phase: Phase,
    /// Entrance or settle tickets still expected.
    in_flight: Vec<Ticket>,
    exit: Option<(Ticket, Direction)>,
}

impl<A: Animator> ToastItem<A> {
    /// Creates the item and starts its entrance.
    pub fn mount(settings: Settings, viewport: Size, animator: A) -> Self {
        let mut item = Self {
            settings,
            viewport,
            animator,
            gesture: PanGesture::new(settings.swipe_threshold.min_drag_distance()),
            phase: Phase::Entering,
            in_flight: Vec::new(),
            exit: None,
        };
        item.enter();
        item
    }

    fn enter(&mut self) {
        let direction = self.settings.initial_direction;
        self.animator.set(Axis::X, 0.0);
        self.animator.set(Axis::Y, 0.0);
        self.animator
            .set(direction.axis(), off_screen(direction, self.viewport));

        let spring = Motion::Spring(self.settings.spring);
        self.in_flight = vec![
            self.animator.animate_to(Axis::X, 0.0, spring),
            self.animator.animate_to(Axis::Y, 0.0, spring),
        ];
        self.phase = Phase::Entering;
        tracing::trace!(%direction, "toast entering");
    }

    /// Changes the entrance side and replays the entrance if it differs.
    /// Has no effect once the toast is leaving.
    pub fn set_initial_direction(&mut self, direction: Direction) {
        if direction == self.settings.initial_direction || !self.phase.accepts_drag() {
            return;
        }
        self.settings.initial_direction = direction;
        self.gesture.cancel();
        self.enter();
    }

    /// Updates the viewport used for off-screen positions.
    ///
    /// A toast still entering restarts its entrance from the new edge so it
    /// never starts inside the visible area.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if self.phase == Phase::Entering && !self.gesture.is_pressed() {
            self.enter();
        }
    }

    /// Applies a cumulative drag translation.
    ///
    /// Each axis moves only towards directions that are not disabled, so a
    /// toast can follow the pointer horizontally and vertically at once.
    pub fn drag(&mut self, translation: Vector) {
        if !self.phase.accepts_drag() {
            return;
        }
        if self.phase != Phase::Dragging {
            self.in_flight.clear();
            self.phase = Phase::Dragging;
        }

        let disabled = self.settings.disabled;
        let permitted = |value: f32, negative: Direction, positive: Direction| {
            if value < 0.0 && !disabled.contains(negative) {
                Some(value)
            } else if value > 0.0 && !disabled.contains(positive) {
                Some(value)
            } else {
                None
            }
        };

        if let Some(x) = permitted(translation.x, Direction::Left, Direction::Right) {
            self.animator.set(Axis::X, x);
        }
        if let Some(y) = permitted(translation.y, Direction::Up, Direction::Down) {
            self.animator.set(Axis::Y, y);
        }
    }

    /// Ends a drag with its final cumulative translation.
    pub fn release(&mut self, translation: Vector) -> Release {
        if self.phase != Phase::Dragging {
            return Release::Ignored;
        }

        match select_exit(
            translation,
            self.settings.swipe_threshold,
            self.settings.disabled,
        ) {
            Some(direction) => {
                let target = off_screen(direction, self.viewport);
                let ticket = self.animator.animate_to(
                    direction.axis(),
                    target,
                    Motion::Timing(self.settings.animate_out.value()),
                );
                self.exit = Some((ticket, direction));
                self.phase = Phase::Exiting(direction);
                tracing::debug!(%direction, offset = target, "toast swiped out");
                Release::Exit(direction)
            }
            None => {
                let timing = Motion::Timing(self.settings.settle);
                self.in_flight = vec![
                    self.animator.animate_to(Axis::X, 0.0, timing),
                    self.animator.animate_to(Axis::Y, 0.0, timing),
                ];
                self.phase = Phase::SettlingBack;
                tracing::trace!(?translation, "toast settling back");
                Release::Settle
            }
        }
    }

    /// Handles a finished animation. Returns the exit direction exactly once,
    /// when the exit animation completes.
    pub fn complete(&mut self, ticket: Ticket) -> Option<Direction> {
        match self.phase {
            Phase::Exiting(direction) => match self.exit {
                Some((exit_ticket, _)) if exit_ticket == ticket => {
                    self.exit = None;
                    self.phase = Phase::Dismissed(direction);
                    Some(direction)
                }
                _ => None,
            },
            Phase::Entering | Phase::SettlingBack => {
                self.in_flight.retain(|t| *t != ticket);
                if self.in_flight.is_empty() {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Idle | Phase::Dragging | Phase::Dismissed(_) => None,
        }
    }

    /// Advances the animator to `now` and processes finished animations.
    pub fn tick(&mut self, now: Instant) -> Option<Direction> {
        let finished = self.animator.advance(now);
        finished
            .into_iter()
            .fold(None, |exit, ticket| self.complete(ticket).or(exit))
    }

    /// Pointer went down on the toast.
    pub fn press(&mut self, position: Point) {
        if self.phase.accepts_drag() {
            self.gesture.press(position);
        }
    }

    /// Pointer moved while pressed.
    pub fn pointer_moved(&mut self, position: Point) {
        if let Some(translation) = self.gesture.moved(position) {
            self.drag(translation);
        }
    }

    /// Pointer was released.
    pub fn pointer_released(&mut self, position: Point) -> Release {
        match self.gesture.release(position) {
            Some(translation) => self.release(translation),
            None => Release::Ignored,
        }
    }

    /// Pointer tracking was lost; treated as a release at the last position.
    pub fn pointer_lost(&mut self) -> Release {
        match self.gesture.cancel() {
            Some(translation) => self.release(translation),
            None => Release::Ignored,
        }
    }

    /// Current offset from the resting position.
    #[must_use]
    pub fn offset(&self) -> Vector {
        Vector::new(self.animator.value(Axis::X), self.animator.value(Axis::Y))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns whether a pointer is pressed on this toast.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_pressed()
    }

    /// Returns whether the item needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualAnimator;

    const VIEWPORT: Size = Size {
        width: 400.0,
        height: 800.0,
    };

    fn settle_entrance(item: &mut ToastItem<ManualAnimator>) {
        item.animator_mut().finish_all();
        item.tick(Instant::now());
    }

    fn mounted(settings: Settings) -> ToastItem<ManualAnimator> {
        let mut item = ToastItem::mount(settings, VIEWPORT, ManualAnimator::new());
        settle_entrance(&mut item);
        item
    }

    #[test]
    fn entrance_presets_offset_for_each_direction() {
        let cases = [
            (Direction::Up, Vector::new(0.0, -800.0)),
            (Direction::Down, Vector::new(0.0, 800.0)),
            (Direction::Left, Vector::new(-400.0, 0.0)),
            (Direction::Right, Vector::new(400.0, 0.0)),
        ];
        for (direction, expected) in cases {
            let settings = Settings {
                initial_direction: direction,
                ..Settings::default()
            };
            let item = ToastItem::mount(settings, VIEWPORT, ManualAnimator::new());
            assert_eq!(item.offset(), expected, "direction {direction}");
            assert_eq!(item.phase(), Phase::Entering);

            let requests = item.animator().requests();
            assert_eq!(requests.len(), 2);
            assert!(requests.iter().all(|r| r.target == 0.0
                && matches!(r.motion, Motion::Spring(s) if s == Spring::new(15.0, 100.0))));
        }
    }

    #[test]
    fn entrance_becomes_idle_at_origin() {
        let item = mounted(Settings::default());
        assert_eq!(item.phase(), Phase::Idle);
        assert_eq!(item.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn changing_initial_direction_replays_entrance() {
        let mut item = mounted(Settings::default());
        item.set_initial_direction(Direction::Left);

        assert_eq!(item.phase(), Phase::Entering);
        assert_eq!(item.offset(), Vector::new(-400.0, 0.0));

        let before = item.animator().requests().len();
        item.set_initial_direction(Direction::Left);
        assert_eq!(item.animator().requests().len(), before);
    }

    #[test]
    fn resize_while_entering_restarts_from_new_edge() {
        let settings = Settings {
            initial_direction: Direction::Right,
            ..Settings::default()
        };
        let mut item = ToastItem::mount(settings, VIEWPORT, ManualAnimator::new());
        item.set_viewport(Size::new(1920.0, 1080.0));

        assert_eq!(item.phase(), Phase::Entering);
        assert_eq!(item.offset(), Vector::new(1920.0, 0.0));
        assert_eq!(item.animator().running().len(), 2);

        settle_entrance(&mut item);
        assert_eq!(item.phase(), Phase::Idle);
    }

    #[test]
    fn resize_after_entrance_keeps_offset() {
        let mut item = mounted(Settings::default());
        item.set_viewport(Size::new(1920.0, 1080.0));

        assert_eq!(item.phase(), Phase::Idle);
        assert_eq!(item.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn drag_moves_both_axes() {
        let mut item = mounted(Settings::default());
        item.drag(Vector::new(-30.0, 45.0));

        assert_eq!(item.phase(), Phase::Dragging);
        assert_eq!(item.offset(), Vector::new(-30.0, 45.0));
    }

    #[test]
    fn drag_ignores_disabled_directions() {
        let settings = Settings {
            disabled: DirectionSet::from([Direction::Left, Direction::Down]),
            ..Settings::default()
        };
        let mut item = mounted(settings);

        item.drag(Vector::new(-300.0, 300.0));
        assert_eq!(item.offset(), Vector::new(0.0, 0.0));

        item.drag(Vector::new(20.0, -20.0));
        assert_eq!(item.offset(), Vector::new(20.0, -20.0));
    }

    #[test]
    fn release_past_threshold_exits_once() {
        for direction in Direction::ALL {
            let mut item = mounted(Settings::default());
            let translation = match direction {
                Direction::Left => Vector::new(-150.0, 0.0),
                Direction::Right => Vector::new(150.0, 0.0),
                Direction::Up => Vector::new(0.0, -150.0),
                Direction::Down => Vector::new(0.0, 150.0),
            };
            item.drag(translation);

            assert_eq!(item.release(translation), Release::Exit(direction));
            let exit = item.animator().last_request().cloned().expect("exit request");
            assert_eq!(exit.axis, direction.axis());
            assert_eq!(exit.target, off_screen(direction, VIEWPORT));
            assert_eq!(exit.motion, Motion::Timing(Duration::from_millis(500)));

            item.animator_mut().finish(exit.ticket);
            assert_eq!(item.tick(Instant::now()), Some(direction));
            assert_eq!(item.phase(), Phase::Dismissed(direction));
            assert_eq!(item.complete(exit.ticket), None);
        }
    }

    #[test]
    fn horizontal_exit_wins_over_vertical() {
        let mut item = mounted(Settings::default());
        let translation = Vector::new(120.0, -300.0);
        item.drag(translation);

        assert_eq!(item.release(translation), Release::Exit(Direction::Right));
    }

    #[test]
    fn release_below_threshold_settles_to_origin() {
        let mut item = mounted(Settings::default());
        let translation = Vector::new(-100.0, 60.0);
        item.drag(translation);

        assert_eq!(item.release(translation), Release::Settle);
        assert_eq!(item.phase(), Phase::SettlingBack);
        assert!(item
            .animator()
            .running()
            .iter()
            .all(|r| r.target == 0.0 && r.motion == Motion::Timing(DEFAULT_TIMING)));

        item.animator_mut().finish_all();
        assert_eq!(item.tick(Instant::now()), None);
        assert_eq!(item.phase(), Phase::Idle);
        assert_eq!(item.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn disabled_direction_never_exits() {
        let settings = Settings {
            disabled: DirectionSet::from([Direction::Left]),
            ..Settings::default()
        };
        let mut item = mounted(settings);
        let translation = Vector::new(-1_000.0, 0.0);
        item.drag(translation);

        assert_eq!(item.release(translation), Release::Settle);
    }

    #[test]
    fn disabled_horizontal_falls_through_to_vertical() {
        let settings = Settings {
            disabled: DirectionSet::from([Direction::Right]),
            ..Settings::default()
        };
        let mut item = mounted(settings);
        let translation = Vector::new(500.0, 200.0);
        item.drag(translation);

        assert_eq!(item.release(translation), Release::Exit(Direction::Down));
    }

    #[test]
    fn drag_is_ignored_while_exiting() {
        let mut item = mounted(Settings::default());
        item.drag(Vector::new(0.0, 200.0));
        item.release(Vector::new(0.0, 200.0));

        item.drag(Vector::new(-50.0, 0.0));
        assert_eq!(item.phase(), Phase::Exiting(Direction::Down));
        assert_eq!(item.offset().x, 0.0);
    }

    #[test]
    fn short_touch_does_not_move_toast() {
        let mut item = mounted(Settings::default());
        item.press(Point::new(100.0, 100.0));
        item.pointer_moved(Point::new(130.0, 100.0));

        assert_eq!(item.offset(), Vector::new(0.0, 0.0));
        assert_eq!(item.pointer_released(Point::new(140.0, 100.0)), Release::Ignored);
        assert_eq!(item.phase(), Phase::Idle);
    }

    #[test]
    fn pointer_swipe_exits() {
        let mut item = mounted(Settings::default());
        item.press(Point::new(200.0, 100.0));
        item.pointer_moved(Point::new(120.0, 100.0));
        assert_eq!(item.offset(), Vector::new(-80.0, 0.0));

        assert_eq!(
            item.pointer_released(Point::new(60.0, 100.0)),
            Release::Exit(Direction::Left)
        );
    }

    #[test]
    fn lost_pointer_releases_at_last_translation() {
        let mut item = mounted(Settings::default());
        item.press(Point::ORIGIN);
        item.pointer_moved(Point::new(0.0, -160.0));

        assert_eq!(item.pointer_lost(), Release::Exit(Direction::Up));
    }

    #[test]
    fn select_exit_follows_fixed_priority() {
        let threshold = SwipeThreshold::new(50.0);
        let none = DirectionSet::empty();
        assert_eq!(select_exit(Vector::new(-60.0, 60.0), threshold, none), Some(Direction::Left));
        assert_eq!(select_exit(Vector::new(0.0, -60.0), threshold, none), Some(Direction::Up));
        assert_eq!(select_exit(Vector::new(50.0, 50.0), threshold, none), None);
    }
}
