//! Close-combat enemies: patrol, chase, strike, retreat.

use super::{Assessment, BehaviorTag};

/// Returns the state to switch to, or `None` to stay.
///
/// Losing the player wins over everything, then the retreat rule, then
/// range. Retreat only ever hands back to Chase, so a healed enemy has to
/// close in again before it can strike.
pub fn next_state(current: BehaviorTag, a: &Assessment) -> Option<BehaviorTag> {
    use BehaviorTag::*;

    let next = match current {
        Patrol if a.detected => Chase,
        Patrol => return None,
        _ if !a.detected => Patrol,
        Retreat if !a.should_retreat => Chase,
        Retreat => return None,
        _ if a.should_retreat => Retreat,
        Chase if a.in_attack_range => Attack,
        Attack if !a.in_attack_range => Chase,
        Positioning => Chase,
        Chase | Attack => return None,
    };
    Some(next)
}
