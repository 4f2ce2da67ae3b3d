//! Notifications fired by the controller after each successful command.
//!
//! A collaborator (typically a UI) subscribes a listener once and
//! re-renders when told something changed. Events are fired only after
//! the command has fully applied, so a listener may read the controller
//! state it was given and see the post-command view.
//!
//! A winning placement fires `StonePlaced` then `GameWon`; a drawing one
//! fires `StonePlaced` then `GameDrawn`. Rejected commands fire nothing.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Stone};
use crate::rules::Victory;

/// Something that changed in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board replaced the old one before the game started.
    BoardResized {
        /// The new board size.
        size: u16,
    },

    /// The game moved to in progress.
    GameStarted {
        /// Board size the game is played on.
        size: u16,
        /// The player to move first.
        first_player: Player,
    },

    /// A stone was placed.
    StonePlaced {
        /// The new stone.
        stone: Stone,
        /// Size of the group the stone now belongs to.
        group_size: usize,
        /// Player to move next.
        next_player: Player,
    },

    /// The last placement formed a winning group.
    GameWon(Victory),

    /// The last placement filled the board with no winning group.
    GameDrawn {
        /// Number of stones on the full board.
        stones: usize,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// A subscribed callback.
pub type Listener = Box<dyn FnMut(&GameEvent)>;

/// Listener registry. Listeners are called in subscription order.
#[derive(Default)]
pub(crate) struct EventBus {
    next_id: u32,
    listeners: Vec<(ListenerId, Listener)>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: &GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_emit_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::default();

        let first = Rc::clone(&log);
        bus.subscribe(Box::new(move |_| first.borrow_mut().push("first")));
        let second = Rc::clone(&log);
        bus.subscribe(Box::new(move |_| second.borrow_mut().push("second")));

        bus.emit(&GameEvent::BoardResized { size: 4 });
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::default();

        let seen = Rc::clone(&count);
        let id = bus.subscribe(Box::new(move |_| *seen.borrow_mut() += 1));
        bus.emit(&GameEvent::BoardResized { size: 4 });

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.len(), 0);

        bus.emit(&GameEvent::BoardResized { size: 5 });
        assert_eq!(*count.borrow(), 1);
    }
}
