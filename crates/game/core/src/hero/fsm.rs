use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::fsm::LifecycleLog;
use crate::math::Vec2;

/// Active hero state with the timers it owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeroState {
    Idle,
    Run,
    Attack,
    Shoot,
    Hurt {
        elapsed: f32,
    },
    Death,
    Dash {
        remaining: f32,
        direction: Vec2,
    },
}

/// Data-free name of a [`HeroState`], parseable from its snake_case name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HeroStateKind {
    Idle,
    Run,
    Attack,
    Shoot,
    Hurt,
    Death,
    Dash,
}

impl HeroState {
    pub fn kind(&self) -> HeroStateKind {
        match self {
            Self::Idle => HeroStateKind::Idle,
            Self::Run => HeroStateKind::Run,
            Self::Attack => HeroStateKind::Attack,
            Self::Shoot => HeroStateKind::Shoot,
            Self::Hurt { .. } => HeroStateKind::Hurt,
            Self::Death => HeroStateKind::Death,
            Self::Dash { .. } => HeroStateKind::Dash,
        }
    }
}

impl HeroStateKind {
    /// Clip base name for this state.
    pub fn clip(self) -> &'static str {
        self.into()
    }

    /// Committed states ignore movement input until their clip ends.
    pub fn is_committed(self) -> bool {
        matches!(self, Self::Attack | Self::Shoot)
    }
}

/// Hero state machine: one active state plus a suspend/resume stack.
///
/// Death is terminal. Hurt and Death drop anything suspended, since nothing
/// should resume over them.
#[derive(Clone, Debug)]
pub struct HeroFsm {
    current: HeroState,
    stack: ArrayVec<HeroState, { GameConfig::MAX_STATE_STACK }>,
    log: LifecycleLog<HeroStateKind>,
    entered: bool,
}

impl HeroFsm {
    pub fn new() -> Self {
        Self {
            current: HeroState::Idle,
            stack: ArrayVec::new(),
            log: LifecycleLog::new(),
            entered: true,
        }
    }

    pub fn current(&self) -> &HeroState {
        &self.current
    }

    pub(super) fn current_mut(&mut self) -> &mut HeroState {
        &mut self.current
    }

    pub fn kind(&self) -> HeroStateKind {
        self.current.kind()
    }

    pub fn is_dead(&self) -> bool {
        self.current == HeroState::Death
    }

    /// Suspended states, innermost last.
    pub fn suspended(&self) -> &[HeroState] {
        &self.stack
    }

    pub fn lifecycle(&self) -> &LifecycleLog<HeroStateKind> {
        &self.log
    }

    /// True once after every state entry, for entry-side effects.
    pub fn take_entered(&mut self) -> bool {
        std::mem::take(&mut self.entered)
    }

    fn enter(&mut self, next: HeroState) {
        let from = self.current.kind();
        self.log.transition(from, next.kind());
        debug!(%from, to = %next.kind(), depth = self.stack.len(), "hero state change");
        self.current = next;
        self.entered = true;
    }

    /// Replaces the active state. Ignored once dead.
    pub fn change(&mut self, next: HeroState) -> bool {
        if self.is_dead() {
            return false;
        }
        if matches!(next, HeroState::Hurt { .. } | HeroState::Death) {
            self.stack.clear();
        }
        self.enter(next);
        true
    }

    /// Suspends the active state under `next`.
    pub fn push(&mut self, next: HeroState) -> bool {
        if self.is_dead() {
            return false;
        }
        if self.stack.is_full() {
            warn!(state = %next.kind(), "hero state stack full, push ignored");
            return false;
        }
        self.stack.push(self.current);
        self.enter(next);
        true
    }

    /// Resumes the most recently suspended state.
    pub fn pop(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        let Some(resumed) = self.stack.pop() else {
            return false;
        };
        self.enter(resumed);
        true
    }
}

impl Default for HeroFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::Lifecycle;

    #[test]
    fn exit_is_logged_before_enter() {
        let mut fsm = HeroFsm::new();
        fsm.change(HeroState::Run);
        assert_eq!(
            fsm.lifecycle().events(),
            [
                Lifecycle::Exit(HeroStateKind::Idle),
                Lifecycle::Enter(HeroStateKind::Run)
            ]
        );
    }

    #[test]
    fn death_is_terminal() {
        let mut fsm = HeroFsm::new();
        assert!(fsm.change(HeroState::Death));
        assert!(!fsm.change(HeroState::Idle));
        assert!(!fsm.push(HeroState::Run));
        assert_eq!(fsm.kind(), HeroStateKind::Death);
    }

    #[test]
    fn push_and_pop_restore() {
        let mut fsm = HeroFsm::new();
        fsm.change(HeroState::Run);
        fsm.push(HeroState::Dash {
            remaining: 0.1,
            direction: Vec2::RIGHT,
        });
        assert_eq!(fsm.suspended(), [HeroState::Run]);
        assert!(fsm.pop());
        assert_eq!(fsm.kind(), HeroStateKind::Run);
        assert!(!fsm.pop());
    }

    #[test]
    fn hurt_clears_the_stack() {
        let mut fsm = HeroFsm::new();
        fsm.push(HeroState::Run);
        fsm.change(HeroState::Hurt { elapsed: 0.0 });
        assert!(fsm.suspended().is_empty());
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Shoot".parse::<HeroStateKind>(), Ok(HeroStateKind::Shoot));
        assert!("fly".parse::<HeroStateKind>().is_err());
    }
}
