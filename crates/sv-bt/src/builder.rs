//! Free helpers so tree composition reads declaratively.
//!
//! Each helper boxes one node, letting a whole decision tree be written as a
//! nested literal:
//!
//! ```
//! use sv_bt::{builder::*, BehaviorState, BehaviorTree};
//!
//! struct Ctx { armed: bool }
//!
//! let tree: BehaviorTree<Ctx> = BehaviorTree::new(selector(vec![
//!     sequence(vec![
//!         condition(|c: &Ctx| c.armed),
//!         action(|_: &mut Ctx| BehaviorState::Success),
//!     ]),
//!     action(|_: &mut Ctx| BehaviorState::Running),
//! ]));
//! ```

use crate::composite::Children;
use crate::{
    Action, Behavior, BehaviorState, Conditional, FrameTime, Not, Parallel, PartialSequence,
    Selector, Sequence, Wait, While,
};

/// A boxed [`Action`] leaf.
pub fn action<C: 'static>(
    f: impl FnMut(&mut C) -> BehaviorState + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(f))
}

/// A boxed [`Conditional`] leaf.
pub fn condition<C: 'static>(predicate: impl Fn(&C) -> bool + 'static) -> Box<dyn Behavior<C>> {
    Box::new(Conditional::new(predicate))
}

/// A boxed [`Conditional`] leaf with its boolean sense flipped.
pub fn condition_inverted<C: 'static>(
    predicate: impl Fn(&C) -> bool + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Conditional::inverted(predicate))
}

/// A boxed [`Sequence`] composite.
pub fn sequence<C: 'static>(children: Children<C>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// A boxed [`PartialSequence`] composite.
pub fn partial_sequence<C: 'static>(children: Children<C>) -> Box<dyn Behavior<C>> {
    Box::new(PartialSequence::new(children))
}

/// A boxed [`Selector`] composite.
pub fn selector<C: 'static>(children: Children<C>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// A boxed [`Parallel`] composite.
pub fn parallel<C: 'static>(
    children: Children<C>,
    min_success: usize,
    min_failure: usize,
) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::new(children, min_success, min_failure))
}

/// A boxed [`Not`] decorator.
pub fn invert<C: 'static>(inner: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Not::new(inner))
}

/// A boxed [`While`] decorator: repeat `act` while `cond` holds.
pub fn repeat_while<C: 'static>(
    cond: Box<dyn Behavior<C>>,
    act: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(While::new(cond, act))
}

/// A boxed [`While`] decorator with inverted condition: repeat `act` until
/// `cond` holds.
pub fn repeat_until<C: 'static>(
    cond: Box<dyn Behavior<C>>,
    act: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(While::inverted(cond, act))
}

/// A boxed [`Wait`] node.
pub fn wait<C: FrameTime + 'static>(duration: f32) -> Box<dyn Behavior<C>> {
    Box::new(Wait::new(duration))
}
