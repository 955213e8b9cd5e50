use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::{Contact, Hitbox, ReactionSlot};
use crate::animation::ClipLibrary;
use crate::entity::{EntityId, EntityStore};
use crate::env::{AssetOracle, AudioSink, SpawnSink};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::math::Aabb;

/// Everything a reaction may touch while it runs.
pub struct CollisionContext<'a> {
    pub entities: &'a mut EntityStore,
    pub spawns: &'a mut dyn SpawnSink,
    pub events: &'a mut Vec<GameEvent>,
    pub clips: &'a ClipLibrary,
    pub assets: &'a dyn AssetOracle,
    pub audio: &'a mut dyn AudioSink,
}

impl CollisionContext<'_> {
    pub fn play_sound(&mut self, name: &str, volume: f32) {
        if let Some(sound) = self.assets.sound(name) {
            self.audio.play(sound, volume);
        }
    }
}

/// Counts from one resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub participants: usize,
    /// Enter edges detected, one per side.
    pub enters: usize,
    /// Exit edges detected, one per side.
    pub exits: usize,
    /// Reactions that failed and were disabled during this pass.
    pub disabled: usize,
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    slot: ReactionSlot,
    contact: Contact,
}

/// Turns hitbox overlaps into enter and exit reactions.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    passes: u64,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Runs one pass over every hitbox in scene order.
    ///
    /// Edges are detected against the overlap sets remembered from the last
    /// pass, the sets are committed, and only then are reactions dispatched:
    /// all enters in pair order followed by all exits. A reaction that
    /// returns `Err` loses its slot; the rest of the pass is unaffected.
    pub fn resolve(&mut self, ctx: &mut CollisionContext<'_>) -> ResolutionReport {
        self.passes += 1;

        let participants: Vec<(EntityId, Aabb)> = ctx
            .entities
            .iter()
            .filter_map(|entity| {
                let hitbox = entity.get::<Hitbox>()?;
                Some((entity.id(), hitbox.bounds(entity.position)))
            })
            .collect();

        let previous: Vec<BTreeSet<EntityId>> = participants
            .iter()
            .map(|(id, _)| {
                let mut remembered = ctx
                    .entities
                    .get_mut(*id)
                    .and_then(|entity| entity.get_mut::<Hitbox>())
                    .map(|hitbox| std::mem::take(&mut hitbox.contacts))
                    .unwrap_or_default();
                remembered.retain(|other| ctx.entities.contains(*other));
                remembered
            })
            .collect();

        let mut current = vec![BTreeSet::new(); participants.len()];
        let mut enters = Vec::new();
        for i in 0..participants.len() {
            let (a, a_box) = participants[i];
            for j in (i + 1)..participants.len() {
                let (b, b_box) = participants[j];
                if !a_box.overlaps(&b_box) {
                    continue;
                }
                current[i].insert(b);
                current[j].insert(a);
                if !previous[i].contains(&b) && !previous[j].contains(&a) {
                    enters.push(Edge {
                        slot: ReactionSlot::Enter,
                        contact: Contact { this: a, other: b },
                    });
                    enters.push(Edge {
                        slot: ReactionSlot::Enter,
                        contact: Contact { this: b, other: a },
                    });
                }
            }
        }

        let mut exits = Vec::new();
        for (index, (id, _)) in participants.iter().enumerate() {
            for other in previous[index].difference(&current[index]) {
                exits.push(Edge {
                    slot: ReactionSlot::Exit,
                    contact: Contact {
                        this: *id,
                        other: *other,
                    },
                });
            }
        }

        for ((id, _), contacts) in participants.iter().zip(current) {
            if let Some(hitbox) = ctx.entities.get_mut(*id).and_then(|e| e.get_mut::<Hitbox>()) {
                hitbox.contacts = contacts;
            }
        }

        let mut report = ResolutionReport {
            participants: participants.len(),
            enters: enters.len(),
            exits: exits.len(),
            disabled: 0,
        };
        for edge in enters.into_iter().chain(exits) {
            if !dispatch(ctx, edge) {
                report.disabled += 1;
            }
        }
        report
    }
}

/// Runs one reaction with its slot taken out. Returns false if it failed.
fn dispatch(ctx: &mut CollisionContext<'_>, edge: Edge) -> bool {
    let Edge { slot, contact } = edge;
    debug!(this = %contact.this, other = %contact.other, %slot, "contact edge");

    let Some((serial, mut reaction)) = ctx
        .entities
        .get_mut(contact.this)
        .and_then(|entity| entity.get_mut::<Hitbox>())
        .and_then(|hitbox| Some((hitbox.serial(), hitbox.slot_mut(slot).take()?)))
    else {
        return true;
    };

    match reaction(ctx, contact) {
        Ok(()) => {
            let hitbox = ctx
                .entities
                .get_mut(contact.this)
                .and_then(|entity| entity.get_mut::<Hitbox>())
                .filter(|hitbox| hitbox.serial() == serial);
            if let Some(hitbox) = hitbox {
                let restored = hitbox.slot_mut(slot);
                if restored.is_none() {
                    *restored = Some(reaction);
                }
            }
            true
        }
        Err(err) => {
            warn!(
                entity = %contact.this,
                other = %contact.other,
                %slot,
                code = err.error_code(),
                severity = err.severity().as_str(),
                error = %err,
                "collision reaction failed, slot disabled"
            );
            false
        }
    }
}
