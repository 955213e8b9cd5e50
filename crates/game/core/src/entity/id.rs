use std::fmt;

/// Handle to an entity in the scene list.
///
/// Handles are allocated monotonically and never reused, so a handle to a
/// removed entity resolves to `None` instead of aliasing a newcomer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Placeholder carried by entities that have not joined a store yet.
    pub const PENDING: Self = Self(u32::MAX);

    #[inline]
    pub const fn is_pending(self) -> bool {
        self.0 == Self::PENDING.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PENDING
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pending() {
            f.write_str("#pending")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Well-known entity categories used by scene passes to filter.
pub mod category {
    pub const PLAYER: &str = "Player";
    pub const ENEMY: &str = "Enemy";
    pub const PROJECTILE: &str = "Projectile";
    pub const EFFECT: &str = "Effect";
}

/// Well-known tags for type-agnostic identification.
pub mod tags {
    pub const HERO: &str = "Hero";
    pub const ENEMY: &str = "Enemy";
    pub const MELEE_ENEMY: &str = "MeleeEnemy";
    pub const RANGED_ENEMY: &str = "RangedEnemy";
    pub const ARROW: &str = "Arrow";
    pub const BOLT: &str = "Bolt";
    pub const SLASH: &str = "Slash";
    pub const BLOOD: &str = "Blood";
}
