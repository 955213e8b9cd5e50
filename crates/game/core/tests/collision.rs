use std::cell::RefCell;
use std::rc::Rc;

use skirmish_core::collision::{CollisionContext, CollisionResolver, Hitbox, ReactionError, ReactionSlot, ResolutionReport};
use skirmish_core::env::{NoAssets, SilentAudio, SpawnQueue};
use skirmish_core::{ClipLibrary, Entity, EntityId, EntityStore, Vec2};

type Journal = Rc<RefCell<Vec<(ReactionSlot, EntityId, EntityId)>>>;

fn box50() -> Vec2 {
    Vec2::new(50.0, 50.0)
}

fn recording(journal: &Journal) -> Hitbox {
    let enter = journal.clone();
    let exit = journal.clone();
    Hitbox::new(box50())
        .with_on_enter(move |_, c| {
            enter.borrow_mut().push((ReactionSlot::Enter, c.this, c.other));
            Ok(())
        })
        .with_on_exit(move |_, c| {
            exit.borrow_mut().push((ReactionSlot::Exit, c.this, c.other));
            Ok(())
        })
}

fn pass(resolver: &mut CollisionResolver, store: &mut EntityStore) -> ResolutionReport {
    let mut spawns = SpawnQueue::new();
    let mut events = Vec::new();
    let clips = ClipLibrary::empty();
    let mut audio = SilentAudio;
    let mut ctx = CollisionContext {
        entities: store,
        spawns: &mut spawns,
        events: &mut events,
        clips: &clips,
        assets: &NoAssets,
        audio: &mut audio,
    };
    resolver.resolve(&mut ctx)
}

fn move_to(store: &mut EntityStore, id: EntityId, position: Vec2) {
    if let Some(entity) = store.get_mut(id) {
        entity.position = position;
    }
}

fn contacts(store: &EntityStore, id: EntityId) -> Vec<EntityId> {
    store
        .get(id)
        .and_then(|e| e.get::<Hitbox>())
        .map(|h| h.contacts().collect())
        .unwrap_or_default()
}

#[test]
fn overlapping_boxes_enter_once_and_exit_once() {
    let journal = Journal::default();
    let mut store = EntityStore::new();
    let a = store.insert(Entity::new("a", "Test").at(Vec2::ZERO).with(recording(&journal)));
    let b = store.insert(Entity::new("b", "Test").at(Vec2::new(40.0, 0.0)).with(recording(&journal)));
    let mut resolver = CollisionResolver::new();

    let first = pass(&mut resolver, &mut store);
    assert_eq!(first.enters, 2);
    assert_eq!(
        *journal.borrow(),
        vec![(ReactionSlot::Enter, a, b), (ReactionSlot::Enter, b, a)]
    );

    // Staying in contact is not an edge.
    for _ in 0..3 {
        let report = pass(&mut resolver, &mut store);
        assert_eq!(report.enters + report.exits, 0);
    }
    assert_eq!(journal.borrow().len(), 2);

    move_to(&mut store, b, Vec2::new(60.0, 0.0));
    let report = pass(&mut resolver, &mut store);
    assert_eq!(report.exits, 2);
    assert_eq!(
        journal.borrow()[2..],
        [(ReactionSlot::Exit, a, b), (ReactionSlot::Exit, b, a)]
    );

    pass(&mut resolver, &mut store);
    assert_eq!(journal.borrow().len(), 4);
}

#[test]
fn touching_edges_count_as_contact() {
    let journal = Journal::default();
    let mut store = EntityStore::new();
    store.insert(Entity::new("a", "Test").at(Vec2::ZERO).with(recording(&journal)));
    store.insert(Entity::new("b", "Test").at(Vec2::new(50.0, 0.0)).with(recording(&journal)));

    let report = pass(&mut CollisionResolver::new(), &mut store);
    assert_eq!(report.enters, 2);
}

#[test]
fn contact_sets_stay_symmetric() {
    let journal = Journal::default();
    let mut store = EntityStore::new();
    let ids: Vec<EntityId> = [0.0, 30.0, 60.0, 200.0]
        .into_iter()
        .map(|x| store.insert(Entity::new("box", "Test").at(Vec2::new(x, 0.0)).with(recording(&journal))))
        .collect();
    let mut resolver = CollisionResolver::new();

    for shift in [0.0, 20.0, 45.0, 90.0] {
        move_to(&mut store, ids[1], Vec2::new(30.0 + shift, 0.0));
        pass(&mut resolver, &mut store);
        for &x in &ids {
            for y in contacts(&store, x) {
                assert!(contacts(&store, y).contains(&x), "{x} touches {y} but not the reverse");
            }
        }
    }
}

#[test]
fn failing_reaction_is_disabled_without_disturbing_others() {
    let journal = Journal::default();
    let failures = Rc::new(RefCell::new(0));
    let mut store = EntityStore::new();

    let counter = failures.clone();
    let faulty = store.insert(Entity::new("faulty", "Test").at(Vec2::ZERO).with(Hitbox::new(box50()).with_on_enter(
        move |_, contact| {
            *counter.borrow_mut() += 1;
            Err(ReactionError::Rejected {
                entity: contact.this,
                reason: "always fails",
            })
        },
    )));
    let partner = store.insert(Entity::new("partner", "Test").at(Vec2::new(10.0, 0.0)).with(recording(&journal)));
    let c = store.insert(Entity::new("c", "Test").at(Vec2::new(1000.0, 0.0)).with(recording(&journal)));
    let d = store.insert(Entity::new("d", "Test").at(Vec2::new(1010.0, 0.0)).with(recording(&journal)));
    let mut resolver = CollisionResolver::new();

    let report = pass(&mut resolver, &mut store);
    assert_eq!(report.disabled, 1);
    assert_eq!(*failures.borrow(), 1);
    let entered: Vec<_> = journal.borrow().iter().map(|(_, this, other)| (*this, *other)).collect();
    assert_eq!(entered, vec![(partner, faulty), (c, d), (d, c)]);

    let hitbox = store.get(faulty).and_then(|e| e.get::<Hitbox>());
    assert_eq!(hitbox.map(|h| h.has_reaction(ReactionSlot::Enter)), Some(false));

    // Separate and meet again: the disabled slot stays silent.
    move_to(&mut store, partner, Vec2::new(500.0, 0.0));
    pass(&mut resolver, &mut store);
    move_to(&mut store, partner, Vec2::new(10.0, 0.0));
    let report = pass(&mut resolver, &mut store);
    assert_eq!(report.disabled, 0);
    assert_eq!(*failures.borrow(), 1);
    assert_eq!(journal.borrow().last(), Some(&(ReactionSlot::Enter, partner, faulty)));
}

#[test]
fn failing_exit_reaction_still_lets_the_partner_exit() {
    let journal = Journal::default();
    let failures = Rc::new(RefCell::new(0));
    let mut store = EntityStore::new();

    let counter = failures.clone();
    let faulty = store.insert(
        Entity::new("faulty", "Test").at(Vec2::ZERO).with(
            Hitbox::new(box50())
                .with_on_enter(|_, _| Ok(()))
                .with_on_exit(move |_, contact| {
                    *counter.borrow_mut() += 1;
                    Err(ReactionError::Rejected {
                        entity: contact.this,
                        reason: "always fails",
                    })
                }),
        ),
    );
    let partner = store.insert(Entity::new("partner", "Test").at(Vec2::new(10.0, 0.0)).with(recording(&journal)));
    let mut resolver = CollisionResolver::new();
    pass(&mut resolver, &mut store);

    move_to(&mut store, partner, Vec2::new(500.0, 0.0));
    let report = pass(&mut resolver, &mut store);
    assert_eq!(report.exits, 2);
    assert_eq!(report.disabled, 1);
    assert_eq!(*failures.borrow(), 1);
    assert_eq!(journal.borrow().last(), Some(&(ReactionSlot::Exit, partner, faulty)));

    let exit_slot = |store: &EntityStore| {
        store
            .get(faulty)
            .and_then(|e| e.get::<Hitbox>())
            .map(|h| h.has_reaction(ReactionSlot::Exit))
    };
    assert_eq!(exit_slot(&store), Some(false));

    // Meet and separate again: only the partner reacts.
    move_to(&mut store, partner, Vec2::new(10.0, 0.0));
    pass(&mut resolver, &mut store);
    move_to(&mut store, partner, Vec2::new(500.0, 0.0));
    let report = pass(&mut resolver, &mut store);
    assert_eq!(report.disabled, 0);
    assert_eq!(*failures.borrow(), 1);
    assert_eq!(journal.borrow().last(), Some(&(ReactionSlot::Exit, partner, faulty)));
    assert_eq!(exit_slot(&store), Some(false));
    let exits = journal
        .borrow()
        .iter()
        .filter(|(slot, _, _)| *slot == ReactionSlot::Exit)
        .count();
    assert_eq!(exits, 2);
}

#[test]
fn entities_without_hitbox_are_ignored() {
    let journal = Journal::default();
    let mut store = EntityStore::new();
    store.insert(Entity::new("ghost", "Test").at(Vec2::ZERO));
    store.insert(Entity::new("a", "Test").at(Vec2::new(5.0, 0.0)).with(recording(&journal)));

    let report = pass(&mut CollisionResolver::new(), &mut store);
    assert_eq!(report.participants, 1);
    assert!(journal.borrow().is_empty());
}
