use std::collections::BTreeMap;

use super::{Clip, ClipSpec, Facing};
use crate::entity::{Component, ComponentKind, ComponentType, Entity, FrameContext, component_boilerplate};
use crate::env::{AssetOracle, FrameRect, RenderSurface, SpriteDraw};

/// Plays named sprite-sheet clips for its entity.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    clips: BTreeMap<String, Clip>,
    current: Option<String>,
    playing: bool,
    pub scale: f32,
    pub flip_x: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }

    pub fn with_clip(mut self, name: impl Into<String>, spec: ClipSpec) -> Self {
        self.add_clip(name, spec);
        self
    }

    pub fn add_clip(&mut self, name: impl Into<String>, spec: ClipSpec) {
        self.clips.insert(name.into(), Clip::new(spec));
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Starts `name` from its first frame.
    ///
    /// Unknown names are ignored and the clip already playing is not
    /// restarted. Returns whether playback changed.
    pub fn play(&mut self, name: &str) -> bool {
        if self.playing && self.current.as_deref() == Some(name) {
            return false;
        }
        self.restart(name)
    }

    /// Like [`Animator::play`] but rewinds the clip even if it is current.
    pub fn restart(&mut self, name: &str) -> bool {
        let Some(clip) = self.clips.get_mut(name) else {
            return false;
        };
        clip.reset();
        self.current = Some(name.to_owned());
        self.playing = true;
        true
    }

    /// Plays the directional variant of `base` for `facing`, falling back
    /// to the plain `base` clip.
    pub fn play_facing(&mut self, base: &str, facing: Facing, rewind: bool) -> bool {
        let (suffix, flip) = facing.suffix();
        let directional = format!("{base}{suffix}");
        let name = if self.has_clip(&directional) {
            directional.as_str()
        } else {
            base
        };
        self.flip_x = flip;
        if rewind { self.restart(name) } else { self.play(name) }
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn current_clip(&self) -> Option<&Clip> {
        self.clips.get(self.current.as_deref()?)
    }

    /// True when no clip has been played or the current one-shot has ended.
    pub fn is_finished(&self) -> bool {
        self.current_clip().is_none_or(Clip::is_finished)
    }

    pub fn frame_rect(&self) -> Option<FrameRect> {
        self.current_clip().map(Clip::frame_rect)
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(name) = self.current.as_deref() else {
            return;
        };
        if let Some(clip) = self.clips.get_mut(name) {
            clip.advance(dt);
        }
    }
}

impl Component for Animator {
    component_boilerplate!();

    fn update(&mut self, _owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        self.advance(ctx.dt);
    }

    fn render(&self, owner: &Entity, surface: &mut dyn RenderSurface, assets: &dyn AssetOracle) {
        if !self.playing {
            return;
        }
        let Some(clip) = self.current_clip() else {
            return;
        };
        let Some(texture) = assets.texture(&clip.spec().texture) else {
            return;
        };
        surface.draw_sprite(&SpriteDraw {
            texture,
            frame: clip.frame_rect(),
            position: owner.position,
            scale: self.scale,
            flip_x: self.flip_x,
        });
    }
}

impl ComponentType for Animator {
    const KIND: ComponentKind = ComponentKind::Animator;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AssetTable, DrawList};

    fn animator() -> Animator {
        Animator::new()
            .with_clip("run_down", ClipSpec::new("hero", 4, 0.1, true))
            .with_clip("run_right", ClipSpec::new("hero", 4, 0.1, true))
            .with_clip("attack", ClipSpec::new("hero", 3, 0.1, false))
    }

    #[test]
    fn no_clip_counts_as_finished() {
        assert!(Animator::new().is_finished());
    }

    #[test]
    fn unknown_clip_is_ignored() {
        let mut anim = animator();
        assert!(anim.play("run_down"));
        assert!(!anim.play("fly"));
        assert_eq!(anim.current(), Some("run_down"));
    }

    #[test]
    fn play_does_not_restart_current() {
        let mut anim = animator();
        anim.play("attack");
        anim.advance(0.15);
        assert!(!anim.play("attack"));
        assert_eq!(anim.frame_rect().map(|r| r.x), Some(32));

        assert!(anim.restart("attack"));
        assert_eq!(anim.frame_rect().map(|r| r.x), Some(0));
    }

    #[test]
    fn one_shot_finishes() {
        let mut anim = animator();
        anim.play("attack");
        anim.advance(0.35);
        assert!(anim.is_finished());
    }

    #[test]
    fn facing_left_mirrors() {
        let mut anim = animator();
        anim.play_facing("run", Facing::Left, false);
        assert_eq!(anim.current(), Some("run_right"));
        assert!(anim.flip_x);

        anim.play_facing("attack", Facing::Up, false);
        assert_eq!(anim.current(), Some("attack"));
    }

    #[test]
    fn renders_only_with_texture() {
        let mut anim = animator();
        anim.play("run_down");
        let owner = Entity::new("hero", "Player");

        let mut surface = DrawList::default();
        Component::render(&anim, &owner, &mut surface, &crate::env::NoAssets);
        assert!(surface.sprites.is_empty());

        let mut assets = AssetTable::new();
        assets.register_texture("hero");
        Component::render(&anim, &owner, &mut surface, &assets);
        assert_eq!(surface.sprites.len(), 1);
    }
}
