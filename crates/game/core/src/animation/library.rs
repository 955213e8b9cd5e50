use std::collections::BTreeMap;

use tracing::debug;

use super::{Animator, ClipSpec};

/// Named clip sets, one per kind of sprite.
pub type ClipSet = BTreeMap<String, ClipSpec>;

/// Well-known clip set names.
pub mod sets {
    pub const HERO: &str = "hero";
    pub const MELEE_ENEMY: &str = "melee_enemy";
    pub const RANGED_ENEMY: &str = "ranged_enemy";
    pub const ARROW: &str = "arrow";
    pub const BOLT: &str = "bolt";
    pub const SLASH: &str = "slash";
    pub const BLOOD: &str = "blood";
}

/// Registry of clip sets used to build [`Animator`]s for prefabs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClipLibrary {
    sets: BTreeMap<String, ClipSet>,
}

impl ClipLibrary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets for every built-in sprite, matching the default sheet layout.
    pub fn builtin() -> Self {
        let mut library = Self::empty();

        let mut hero = ClipSet::new();
        let hero_rows: [(&str, u32, f32, bool); 6] = [
            ("idle", 4, 0.15, true),
            ("run", 6, 0.08, true),
            ("attack", 6, 0.06, false),
            ("shoot", 4, 0.08, false),
            ("hurt", 3, 0.1, false),
            ("dash", 2, 0.05, true),
        ];
        directional_rows(&mut hero, "hero", 64, &hero_rows);
        hero.insert(
            "death".into(),
            ClipSpec::new("hero", 6, 0.1, false)
                .frame_size(64, 64)
                .row(64 * hero_rows.len() as u32 * 3),
        );
        library.insert_set(sets::HERO, hero);

        let enemy_rows: [(&str, u32, f32, bool); 4] = [
            ("idle", 4, 0.15, true),
            ("run", 6, 0.1, true),
            ("attack", 5, 0.08, false),
            ("hurt", 3, 0.1, false),
        ];
        for (set, texture) in [(sets::MELEE_ENEMY, "orc"), (sets::RANGED_ENEMY, "skeleton")] {
            let mut enemy = ClipSet::new();
            directional_rows(&mut enemy, texture, 64, &enemy_rows);
            enemy.insert(
                "death".into(),
                ClipSpec::new(texture, 6, 0.1, false)
                    .frame_size(64, 64)
                    .row(64 * enemy_rows.len() as u32 * 3),
            );
            library.insert_set(set, enemy);
        }

        library.insert_clip(sets::ARROW, "fly", ClipSpec::new("arrow", 1, 0.1, true).frame_size(32, 8));
        library.insert_clip(sets::BOLT, "fly", ClipSpec::new("bolt", 4, 0.05, true).frame_size(16, 16));
        library.insert_clip(sets::SLASH, "swing", ClipSpec::new("slash", 3, 0.05, false).frame_size(48, 48));
        library.insert_clip(sets::BLOOD, "splash", ClipSpec::new("blood", 5, 0.08, false).frame_size(64, 64));
        library
    }

    pub fn insert_set(&mut self, name: impl Into<String>, set: ClipSet) {
        self.sets.insert(name.into(), set);
    }

    pub fn insert_clip(&mut self, set: &str, clip: impl Into<String>, spec: ClipSpec) {
        self.sets
            .entry(set.to_owned())
            .or_default()
            .insert(clip.into(), spec);
    }

    /// Overlays `other` on top of this library, clip by clip.
    pub fn merge(&mut self, other: ClipLibrary) {
        for (name, set) in other.sets {
            self.sets.entry(name).or_default().extend(set);
        }
    }

    pub fn set(&self, name: &str) -> Option<&ClipSet> {
        self.sets.get(name)
    }

    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Builds an animator holding every clip of `set`; empty if unknown.
    pub fn animator(&self, set: &str) -> Animator {
        let mut animator = Animator::new();
        match self.sets.get(set) {
            Some(clips) => {
                for (name, spec) in clips {
                    animator.add_clip(name.clone(), spec.clone());
                }
            }
            None => debug!(set, "unknown clip set, animator left empty"),
        }
        animator
    }
}

/// Lays out `_up`, `_down` and `_right` rows for each base clip.
fn directional_rows(set: &mut ClipSet, texture: &str, frame: u32, rows: &[(&str, u32, f32, bool)]) {
    let mut row = 0;
    for (base, frames, frame_time, looping) in rows {
        for suffix in ["_up", "_down", "_right"] {
            set.insert(
                format!("{base}{suffix}"),
                ClipSpec::new(texture, *frames, *frame_time, *looping)
                    .frame_size(frame, frame)
                    .row(row * frame),
            );
            row += 1;
        }
    }
}
