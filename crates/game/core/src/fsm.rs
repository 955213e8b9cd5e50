//! Bookkeeping shared by the enemy and hero state machines.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// One side of a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle<T> {
    Exit(T),
    Enter(T),
}

/// Ring of the most recent transition events for one actor.
#[derive(Clone, Debug)]
pub struct LifecycleLog<T> {
    events: ArrayVec<Lifecycle<T>, { GameConfig::LIFECYCLE_LOG_LEN }>,
}

impl<T: Copy> LifecycleLog<T> {
    pub fn new() -> Self {
        Self {
            events: ArrayVec::new(),
        }
    }

    pub fn record(&mut self, event: Lifecycle<T>) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Records the exit of `from` strictly before the entry of `to`.
    pub fn transition(&mut self, from: T, to: T) {
        self.record(Lifecycle::Exit(from));
        self.record(Lifecycle::Enter(to));
    }

    pub fn events(&self) -> &[Lifecycle<T>] {
        &self.events
    }

    pub fn last(&self) -> Option<&Lifecycle<T>> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T: Copy> Default for LifecycleLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_recent_events() {
        let mut log = LifecycleLog::new();
        for step in 0..GameConfig::LIFECYCLE_LOG_LEN as u32 {
            log.transition(step, step + 1);
        }
        assert_eq!(log.events().len(), GameConfig::LIFECYCLE_LOG_LEN);
        assert_eq!(log.last(), Some(&Lifecycle::Enter(GameConfig::LIFECYCLE_LOG_LEN as u32)));
        assert_eq!(log.events()[0], Lifecycle::Exit(GameConfig::LIFECYCLE_LOG_LEN as u32 / 2));
    }
}
