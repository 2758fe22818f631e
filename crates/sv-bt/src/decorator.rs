//! Decorator nodes — wrap a child and reshape its result.

use crate::{Behavior, BehaviorState, FrameTime};

// ── Not ───────────────────────────────────────────────────────────────────────

/// Inverts the wrapped node's `Success`/`Failure`; `Running` passes through
/// unchanged.
///
/// Intended for wrapping [`Conditional`][crate::Conditional]s, which never
/// return `Running`, so in practice the inversion is total.
pub struct Not<C> {
    inner: Box<dyn Behavior<C>>,
}

impl<C> Not<C> {
    pub fn new(inner: Box<dyn Behavior<C>>) -> Self {
        Self { inner }
    }
}

impl<C> Behavior<C> for Not<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        match self.inner.execute(ctx) {
            BehaviorState::Success => BehaviorState::Failure,
            BehaviorState::Failure => BehaviorState::Success,
            BehaviorState::Running => BehaviorState::Running,
        }
    }
}

// ── While ─────────────────────────────────────────────────────────────────────

/// Repeats an action for as long as a condition holds.
///
/// Each tick the condition is evaluated (its boolean sense flipped when
/// `invert` is set).  While it holds, the action executes once per tick: an
/// action `Failure` propagates as `Failure`, anything else reports `Running`.
/// The tick on which the condition stops holding reports `Success` without
/// executing the action.
pub struct While<C> {
    condition: Box<dyn Behavior<C>>,
    action: Box<dyn Behavior<C>>,
    invert: bool,
}

impl<C> While<C> {
    pub fn new(condition: Box<dyn Behavior<C>>, action: Box<dyn Behavior<C>>) -> Self {
        Self { condition, action, invert: false }
    }

    /// Run the action while the condition does *not* hold ("repeat until").
    pub fn inverted(condition: Box<dyn Behavior<C>>, action: Box<dyn Behavior<C>>) -> Self {
        Self { condition, action, invert: true }
    }
}

impl<C> Behavior<C> for While<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        let cond = self.condition.execute(ctx);
        let holds = match cond {
            BehaviorState::Success => !self.invert,
            BehaviorState::Failure => self.invert,
            // A Running condition is treated as not-yet-holding.
            BehaviorState::Running => false,
        };

        if !holds {
            return BehaviorState::Success;
        }
        if self.action.execute(ctx) == BehaviorState::Failure {
            return BehaviorState::Failure;
        }
        BehaviorState::Running
    }
}

// ── Wait ──────────────────────────────────────────────────────────────────────

/// Reports `Running` until `duration` seconds of frame time have
/// accumulated, then `Success` once and resets.
///
/// The accumulator is the node's only state; it survives across ticks and is
/// zeroed on completion so the node can be re-entered later.
pub struct Wait {
    duration: f32,
    elapsed: f32,
}

impl Wait {
    pub fn new(duration: f32) -> Self {
        Self { duration: duration.max(0.0), elapsed: 0.0 }
    }
}

impl<C: FrameTime> Behavior<C> for Wait {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        if self.elapsed < self.duration {
            self.elapsed += ctx.delta_time();
            return BehaviorState::Running;
        }
        self.elapsed = 0.0;
        BehaviorState::Success
    }
}
