//! Archers: hold a stand-off distance and shoot from it.

use super::{Assessment, BehaviorTag};

/// Returns the state to switch to, or `None` to stay.
///
/// The attack gate is the stand-off band, not the attack radius. There is
/// no switch cooldown at the band edge, so an archer hovering on it may
/// alternate between Positioning and Attack on consecutive steps.
pub fn next_state(current: BehaviorTag, a: &Assessment) -> Option<BehaviorTag> {
    use BehaviorTag::*;

    let next = match current {
        Patrol if a.detected => Positioning,
        Patrol => return None,
        _ if !a.detected => Patrol,
        Retreat if !a.should_retreat => Positioning,
        Retreat => return None,
        _ if a.should_retreat => Retreat,
        Positioning if a.at_optimal_distance => Attack,
        Attack if !a.at_optimal_distance => Positioning,
        Chase => Positioning,
        Positioning | Attack => return None,
    };
    Some(next)
}
