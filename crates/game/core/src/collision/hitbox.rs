use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{CollisionContext, ReactionError};
use crate::entity::{Component, ComponentKind, ComponentType, Entity, EntityId, component_boilerplate};
use crate::env::{AssetOracle, RenderSurface};
use crate::math::{Aabb, Vec2};

/// The two sides of an edge-triggered contact, from the reacting hitbox's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    /// Owner of the hitbox whose reaction runs.
    pub this: EntityId,
    pub other: EntityId,
}

/// Callback run on a contact edge. An `Err` disables the slot for good.
pub type Reaction = Box<dyn FnMut(&mut CollisionContext<'_>, Contact) -> Result<(), ReactionError>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ReactionSlot {
    Enter,
    Exit,
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Axis-aligned overlap box attached to an entity.
pub struct Hitbox {
    pub size: Vec2,
    /// Offset of the box center from the entity position.
    pub offset: Vec2,
    pub debug_draw: bool,
    /// Distinguishes this hitbox from any that later takes its slot.
    serial: u64,
    pub(super) contacts: BTreeSet<EntityId>,
    on_enter: Option<Reaction>,
    on_exit: Option<Reaction>,
}

impl Hitbox {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            offset: Vec2::ZERO,
            debug_draw: false,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
            contacts: BTreeSet::new(),
            on_enter: None,
            on_exit: None,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_on_enter(
        mut self,
        reaction: impl FnMut(&mut CollisionContext<'_>, Contact) -> Result<(), ReactionError> + 'static,
    ) -> Self {
        self.on_enter = Some(Box::new(reaction));
        self
    }

    pub fn with_on_exit(
        mut self,
        reaction: impl FnMut(&mut CollisionContext<'_>, Contact) -> Result<(), ReactionError> + 'static,
    ) -> Self {
        self.on_exit = Some(Box::new(reaction));
        self
    }

    pub fn set_reaction(&mut self, slot: ReactionSlot, reaction: Option<Reaction>) {
        *self.slot_mut(slot) = reaction;
    }

    /// False once the slot was never filled or its reaction failed.
    pub fn has_reaction(&self, slot: ReactionSlot) -> bool {
        match slot {
            ReactionSlot::Enter => self.on_enter.is_some(),
            ReactionSlot::Exit => self.on_exit.is_some(),
        }
    }

    pub(super) fn serial(&self) -> u64 {
        self.serial
    }

    pub(super) fn slot_mut(&mut self, slot: ReactionSlot) -> &mut Option<Reaction> {
        match slot {
            ReactionSlot::Enter => &mut self.on_enter,
            ReactionSlot::Exit => &mut self.on_exit,
        }
    }

    /// World-space box for an owner at `position`.
    pub fn bounds(&self, position: Vec2) -> Aabb {
        Aabb::from_center(position + self.offset, self.size)
    }

    /// Entities this hitbox overlapped at the end of the last resolution pass.
    pub fn contacts(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.contacts.iter().copied()
    }

    pub fn is_touching(&self, other: EntityId) -> bool {
        self.contacts.contains(&other)
    }
}

impl fmt::Debug for Hitbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hitbox")
            .field("size", &self.size)
            .field("offset", &self.offset)
            .field("contacts", &self.contacts)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

impl Component for Hitbox {
    component_boilerplate!();

    fn render(&self, owner: &Entity, surface: &mut dyn RenderSurface, _assets: &dyn AssetOracle) {
        if self.debug_draw {
            surface.draw_outline(self.bounds(owner.position));
        }
    }

    fn release(&mut self, _owner: &mut Entity) {
        self.contacts.clear();
    }
}

impl ComponentType for Hitbox {
    const KIND: ComponentKind = ComponentKind::Hitbox;
}
