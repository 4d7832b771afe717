//! Change notification for presentation layers.
//!
//! Every effective mutation of a [`GameState`](super::GameState) bumps a
//! version counter and is delivered to subscribed listeners. Adapters
//! either poll [`GameState::version`](super::GameState::version) or
//! subscribe a callback.

use super::action::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What changed in a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChange {
    /// A move was appended at `step` (the new active step).
    MovePlaced {
        /// History index of the new entry.
        step: usize,
        /// The move that produced it.
        mov: Move,
    },
    /// The active step moved without touching history.
    Jumped {
        /// Active step before the jump.
        from: usize,
        /// Active step after the jump.
        to: usize,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StateChange)>;

/// Version counter plus listener registry.
#[derive(Default)]
pub(crate) struct Notifier {
    version: u64,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Notifier {
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!(%id, listeners = self.listeners.len(), "Listener subscribed");
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        debug!(%id, removed, "Listener unsubscribed");
        removed
    }

    /// Bumps the version and delivers `change` to every listener in
    /// subscription order.
    #[instrument(skip(self), fields(version = self.version + 1))]
    pub(crate) fn publish(&mut self, change: StateChange) {
        self.version += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_bumps_version_and_delivers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut notifier = Notifier::default();
        notifier.subscribe(Box::new(move |change| sink.borrow_mut().push(*change)));

        let change = StateChange::MovePlaced {
            step: 1,
            mov: Move::new(Player::X, Position::Center),
        };
        notifier.publish(change);

        assert_eq!(notifier.version(), 1);
        assert_eq!(seen.borrow().as_slice(), &[change]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut notifier = Notifier::default();
        let id = notifier.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        notifier.publish(StateChange::Jumped { from: 0, to: 0 });
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.publish(StateChange::Jumped { from: 0, to: 0 });

        assert_eq!(*count.borrow(), 1);
        assert_eq!(notifier.version(), 2);
    }
}
