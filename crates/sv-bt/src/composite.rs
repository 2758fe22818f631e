//! Composite nodes — combine child results via sequence/selector/parallel
//! policies.
//!
//! Child order is significant everywhere in this module: a [`Selector`]'s
//! order encodes priority, a [`Sequence`]'s order encodes the required step
//! order, and tests assert both.

use crate::{Behavior, BehaviorState};

/// Boxed child list shared by all composites.
pub type Children<C> = Vec<Box<dyn Behavior<C>>>;

// ── Sequence ──────────────────────────────────────────────────────────────────

/// Executes children in order; stops at the first `Failure` or `Running` and
/// returns it.  `Success` only if every child succeeds within the same tick.
///
/// Holds no cross-tick memory — a `Running` child means the whole sequence
/// re-runs from its first child next tick.  Use [`PartialSequence`] when the
/// earlier steps have side effects that must not repeat.
pub struct Sequence<C> {
    children: Children<C>,
}

impl<C> Sequence<C> {
    pub fn new(children: Children<C>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        for child in &mut self.children {
            match child.execute(ctx) {
                BehaviorState::Success => continue,
                other => return other,
            }
        }
        BehaviorState::Success
    }
}

// ── PartialSequence ───────────────────────────────────────────────────────────

/// A sequence that remembers the index of the last-succeeded child across
/// ticks.
///
/// On a child `Success` the index advances and the node reports `Running`;
/// the next tick resumes at the new index instead of restarting — earlier,
/// non-idempotent steps (grab, equip, consume) are not re-executed.  A child
/// `Failure` resets the index to 0 and propagates the failure.  Once the
/// index has walked past the final child the node resets and reports
/// `Success`.
pub struct PartialSequence<C> {
    children: Children<C>,
    current: usize,
}

impl<C> PartialSequence<C> {
    pub fn new(children: Children<C>) -> Self {
        Self { children, current: 0 }
    }

    /// Index of the child the next tick will execute (test hook).
    pub fn resume_index(&self) -> usize {
        self.current
    }
}

impl<C> Behavior<C> for PartialSequence<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        while self.current < self.children.len() {
            match self.children[self.current].execute(ctx) {
                BehaviorState::Failure => {
                    self.current = 0;
                    return BehaviorState::Failure;
                }
                BehaviorState::Success => {
                    self.current += 1;
                    return BehaviorState::Running;
                }
                BehaviorState::Running => return BehaviorState::Running,
            }
        }
        self.current = 0;
        BehaviorState::Success
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

/// Executes children in order and returns the first non-`Failure` result;
/// `Failure` only if every child fails.
///
/// Children before the winner are always attempted first — the child list is
/// a priority order and must be composed as such.
pub struct Selector<C> {
    children: Children<C>,
}

impl<C> Selector<C> {
    pub fn new(children: Children<C>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        for child in &mut self.children {
            match child.execute(ctx) {
                BehaviorState::Failure => continue,
                other => return other,
            }
        }
        BehaviorState::Failure
    }
}

// ── Parallel ──────────────────────────────────────────────────────────────────

/// Executes children in order every tick, accumulating successes.
///
/// Any single child `Failure` fails the whole node immediately.  Once
/// accumulated successes reach `min_success` the node succeeds; otherwise it
/// reports `Running`.  `min_failure` is accepted for symmetry but is not
/// load-bearing — failure is always fail-fast.
pub struct Parallel<C> {
    children: Children<C>,
    min_success: usize,
    min_failure: usize,
}

impl<C> Parallel<C> {
    pub fn new(children: Children<C>, min_success: usize, min_failure: usize) -> Self {
        Self { children, min_success, min_failure }
    }

    pub fn min_success(&self) -> usize {
        self.min_success
    }

    /// Stored but inert: any single failure short-circuits regardless.
    pub fn min_failure(&self) -> usize {
        self.min_failure
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn execute(&mut self, ctx: &mut C) -> BehaviorState {
        let mut successes = 0;
        for child in &mut self.children {
            match child.execute(ctx) {
                BehaviorState::Failure => return BehaviorState::Failure,
                BehaviorState::Success => {
                    successes += 1;
                    if successes >= self.min_success {
                        return BehaviorState::Success;
                    }
                }
                BehaviorState::Running => {}
            }
        }
        BehaviorState::Running
    }
}
