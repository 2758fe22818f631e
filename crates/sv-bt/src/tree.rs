//! The per-frame tree driver.

use crate::{Behavior, BehaviorState};

/// Owns a root node and drives it once per simulation frame.
///
/// The context (blackboard) is owned by the caller and passed in mutably on
/// every tick — the tree holds decision structure, the context holds state.
/// Both are created once per agent and dropped together.
pub struct BehaviorTree<C> {
    root: Box<dyn Behavior<C>>,
    state: BehaviorState,
}

impl<C> BehaviorTree<C> {
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self { root, state: BehaviorState::Failure }
    }

    /// Execute the whole tree from the root, top to bottom, to completion.
    ///
    /// There is no suspension: a `Running` result means some leaf reported
    /// in-progress work and the next tick will re-traverse from the root.
    pub fn tick(&mut self, ctx: &mut C) -> BehaviorState {
        self.state = self.root.execute(ctx);
        self.state
    }

    /// The root's result from the most recent [`tick`](Self::tick)
    /// (`Failure` before the first one).
    pub fn state(&self) -> BehaviorState {
        self.state
    }
}
