//! The node contract and the two leaf node types.

use crate::BehaviorState;

/// One node in a behavior tree, polymorphic over the blackboard type `C`.
///
/// `execute` takes `&mut self` because two node types carry cross-tick
/// state (a resume index, an elapsed-time accumulator); everything else is
/// stateless between ticks.
pub trait Behavior<C> {
    /// Run this node for one tick against the shared context.
    fn execute(&mut self, ctx: &mut C) -> BehaviorState;
}

/// Implemented by contexts that expose the current frame's delta-time.
///
/// Required only by [`Wait`][crate::Wait]; every other node is agnostic to
/// how time is represented.
pub trait FrameTime {
    /// Seconds elapsed since the previous tick.
    fn delta_time(&self) -> f32;
}

// ── Action ────────────────────────────────────────────────────────────────────

/// Leaf node wrapping a side-effecting callback.
///
/// The callback's result is passed through unchanged.  Actions are the sole
/// place the tree mutates anything — set a movement target, use an inventory
/// item, update the focus target.
pub struct Action<C> {
    f: Box<dyn FnMut(&mut C) -> BehaviorState>,
}

impl<C> Action<C> {
    pub fn new(f: impl FnMut(&mut C) -> BehaviorState + 'static) -> Self {
        Self { f: Box::new(f) }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        (self.f)(ctx)
    }
}

// ── Conditional ───────────────────────────────────────────────────────────────

/// Leaf node wrapping a read-only predicate.
///
/// `true` maps to `Success` and `false` to `Failure` (swapped when `invert`
/// is set).  A conditional never returns `Running`.
pub struct Conditional<C> {
    predicate: Box<dyn Fn(&C) -> bool>,
    invert: bool,
}

impl<C> Conditional<C> {
    pub fn new(predicate: impl Fn(&C) -> bool + 'static) -> Self {
        Self { predicate: Box::new(predicate), invert: false }
    }

    /// A conditional whose boolean outcome is flipped before mapping to a
    /// behavior state.
    pub fn inverted(predicate: impl Fn(&C) -> bool + 'static) -> Self {
        Self { predicate: Box::new(predicate), invert: true }
    }
}

impl<C> Behavior<C> for Conditional<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        let mut holds = (self.predicate)(ctx);
        if self.invert {
            holds = !holds;
        }
        if holds {
            BehaviorState::Success
        } else {
            BehaviorState::Failure
        }
    }
}
