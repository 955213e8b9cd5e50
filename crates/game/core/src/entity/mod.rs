//! Entities and their component registry.
//!
//! An [`Entity`] owns at most one component per [`ComponentKind`] and
//! forwards lifecycle hooks to each of them. Entities live in a flat
//! [`EntityStore`] and are referred to elsewhere by [`EntityId`] handles.
mod component;
mod id;
mod store;

use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;
use strum::EnumCount;
use tracing::{debug, warn};

use crate::env::{AssetOracle, RenderSurface};
use crate::input::Buttons;
use crate::math::Vec2;

pub(crate) use component::component_boilerplate;
pub use component::{Component, ComponentKind, ComponentType, FrameContext};
pub use id::{EntityId, category, tags};
pub use store::EntityStore;

type KindList = ArrayVec<ComponentKind, { ComponentKind::COUNT }>;

/// Composite game object.
pub struct Entity {
    id: EntityId,
    name: String,
    category: String,
    tags: BTreeSet<String>,
    /// World-space center of the entity.
    pub position: Vec2,
    components: BTreeMap<ComponentKind, Box<dyn Component>>,
}

impl Entity {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: EntityId::PENDING,
            name: name.into(),
            category: category.into(),
            tags: BTreeSet::new(),
            position: Vec2::ZERO,
            components: BTreeMap::new(),
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Builder form of [`Entity::attach`].
    pub fn with<C: Component>(mut self, component: C) -> Self {
        self.attach(component);
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Attaches `component`, initializing it first.
    ///
    /// An occupied slot is replaced: the old component is released before the
    /// new one initializes, and it is returned to the caller. Replacing through
    /// `attach` is logged as a warning; use [`Entity::replace`] when a swap is
    /// intended.
    pub fn attach<C: Component>(&mut self, component: C) -> Option<Box<dyn Component>> {
        let kind = component.kind();
        let previous = self.swap_in(Box::new(component));
        if previous.is_some() {
            warn!(entity = %self.id, name = %self.name, %kind, "attach replaced an existing component");
        }
        previous
    }

    /// Swaps the component in its slot on purpose.
    pub fn replace<C: Component>(&mut self, component: C) -> Option<Box<dyn Component>> {
        let kind = component.kind();
        let previous = self.swap_in(Box::new(component));
        debug!(entity = %self.id, name = %self.name, %kind, replaced = previous.is_some(), "component replaced");
        previous
    }

    fn swap_in(&mut self, mut component: Box<dyn Component>) -> Option<Box<dyn Component>> {
        let kind = component.kind();
        let mut previous = self.components.remove(&kind);
        if let Some(old) = previous.as_mut() {
            old.release(self);
        }
        component.initialize(self);
        self.components.insert(kind, component);
        previous
    }

    /// Removes and releases the component in `kind`'s slot.
    pub fn detach(&mut self, kind: ComponentKind) -> Option<Box<dyn Component>> {
        let mut component = self.components.remove(&kind)?;
        component.release(self);
        Some(component)
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Typed lookup; `None` when the slot is empty.
    pub fn get<C: ComponentType>(&self) -> Option<&C> {
        self.components.get(&C::KIND)?.as_any().downcast_ref::<C>()
    }

    pub fn get_mut<C: ComponentType>(&mut self) -> Option<&mut C> {
        self.components
            .get_mut(&C::KIND)?
            .as_any_mut()
            .downcast_mut::<C>()
    }

    pub fn component_kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    pub fn process_input(&mut self, buttons: Buttons) {
        self.each_detached(|component, owner| component.process_input(owner, buttons));
    }

    pub fn update(&mut self, ctx: &mut FrameContext<'_>) {
        self.each_detached(|component, owner| component.update(owner, ctx));
    }

    pub fn render(&self, surface: &mut dyn RenderSurface, assets: &dyn AssetOracle) {
        for component in self.components.values() {
            component.render(self, surface, assets);
        }
    }

    /// Releases every component, in slot order.
    pub(crate) fn release_all(&mut self) {
        let kinds: KindList = self.components.keys().copied().collect();
        for kind in kinds {
            self.detach(kind);
        }
    }

    /// Runs `hook` on each component while it is out of its slot.
    ///
    /// A component that filled its own slot during the hook loses the slot
    /// to the newcomer and is released.
    fn each_detached(&mut self, mut hook: impl FnMut(&mut dyn Component, &mut Entity)) {
        let kinds: KindList = self.components.keys().copied().collect();
        for kind in kinds {
            let Some(mut component) = self.components.remove(&kind) else {
                continue;
            };
            hook(component.as_mut(), self);
            if self.components.contains_key(&kind) {
                component.release(self);
            } else {
                self.components.insert(kind, component);
            }
        }
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .field("position", &self.position)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}
