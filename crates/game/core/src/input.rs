//! Player input, sampled once per simulation step.
//!
//! Edge detection lives in [`InputState`], owned by the actor that reads it,
//! rather than in process-wide "was pressed last frame" flags.

use bitflags::bitflags;

use crate::math::Vec2;

bitflags! {
    /// Buttons held during one step.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Buttons: u8 {
        const UP     = 1 << 0;
        const DOWN   = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
        const ATTACK = 1 << 4;
        const SHOOT  = 1 << 5;
        const DASH   = 1 << 6;

        const DIRECTIONS = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// Current and previous button samples for one actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    held: Buttons,
    previous: Buttons,
}

impl InputState {
    /// Shifts the current sample into history and records `buttons`.
    pub fn advance(&mut self, buttons: Buttons) {
        self.previous = self.held;
        self.held = buttons;
    }

    pub fn held(&self, button: Buttons) -> bool {
        self.held.contains(button)
    }

    /// True only on the step the button went down.
    pub fn pressed(&self, button: Buttons) -> bool {
        self.held.contains(button) && !self.previous.contains(button)
    }

    /// Left+right or up+down held together.
    pub fn has_conflict(&self) -> bool {
        self.held.contains(Buttons::LEFT | Buttons::RIGHT)
            || self.held.contains(Buttons::UP | Buttons::DOWN)
    }

    /// Some direction is held and no opposing pair cancels it.
    pub fn wants_to_move(&self) -> bool {
        self.held.intersects(Buttons::DIRECTIONS) && !self.has_conflict()
    }

    /// Unit movement direction, zero when idle or cancelled.
    pub fn direction(&self) -> Vec2 {
        if !self.wants_to_move() {
            return Vec2::ZERO;
        }
        let axis = |negative: Buttons, positive: Buttons| {
            self.held.contains(positive) as i8 as f32 - self.held.contains(negative) as i8 as f32
        };
        Vec2::new(
            axis(Buttons::LEFT, Buttons::RIGHT),
            axis(Buttons::UP, Buttons::DOWN),
        )
        .normalize_or_zero()
    }
}
