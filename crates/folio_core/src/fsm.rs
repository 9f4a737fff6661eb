//! Finite state machines
//!
//! Flat transition tables for widget interaction states. States and events
//! are plain integers so widgets can declare them as `const`s next to the
//! code that sends them.
//!
//! ```rust
//! use folio_core::StateMachine;
//!
//! const IDLE: u32 = 0;
//! const BUSY: u32 = 1;
//! const START: u32 = 1;
//! const DONE: u32 = 2;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, START, BUSY)
//!     .on(BUSY, DONE, IDLE)
//!     .build();
//!
//! assert_eq!(fsm.send(START), Some(BUSY));
//! assert_eq!(fsm.send(START), None); // no BUSY + START transition
//! assert_eq!(fsm.send(DONE), Some(IDLE));
//! ```

use rustc_hash::FxHashMap;

/// Identifier of a state
pub type StateId = u32;

/// Identifier of an event that drives transitions
pub type EventId = u32;

/// A state machine with a fixed transition table
#[derive(Clone, Debug)]
pub struct StateMachine {
    current: StateId,
    transitions: FxHashMap<(StateId, EventId), StateId>,
}

impl StateMachine {
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder {
            initial,
            transitions: FxHashMap::default(),
        }
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    pub fn is(&self, state: StateId) -> bool {
        self.current == state
    }

    /// Deliver an event, returning the new state if a transition fired
    pub fn send(&mut self, event: EventId) -> Option<StateId> {
        let next = *self.transitions.get(&(self.current, event))?;
        tracing::trace!(from = self.current, to = next, event, "fsm transition");
        self.current = next;
        Some(next)
    }
}

/// Builder for [`StateMachine`]
#[derive(Clone, Debug)]
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: FxHashMap<(StateId, EventId), StateId>,
}

impl StateMachineBuilder {
    /// Add a transition `from --event--> to`
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.insert((from, event), to);
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current: self.initial,
            transitions: self.transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: StateId = 0;
    const ACTIVE: StateId = 1;
    const CLICK: EventId = 1;
    const RELEASE: EventId = 2;

    fn toggle() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, CLICK, ACTIVE)
            .on(ACTIVE, RELEASE, IDLE)
            .build()
    }

    #[test]
    fn test_transitions() {
        let mut fsm = toggle();
        assert!(fsm.is(IDLE));
        assert_eq!(fsm.send(RELEASE), None);
        assert!(fsm.is(IDLE));

        assert_eq!(fsm.send(CLICK), Some(ACTIVE));
        assert_eq!(fsm.current(), ACTIVE);
        assert_eq!(fsm.send(CLICK), None);
        assert_eq!(fsm.current(), ACTIVE);
    }

    #[test]
    fn test_round_trip() {
        let mut fsm = toggle();
        fsm.send(CLICK);
        assert_eq!(fsm.send(RELEASE), Some(IDLE));
        assert!(fsm.is(IDLE));
    }
}
