mod common;

use common::Harness;
use skirmish_core::entity::tags;
use skirmish_core::fsm::Lifecycle;
use skirmish_core::{Buttons, DamageOutcome, Entity, HeroConfig, HeroController, HeroState, HeroStateKind, Hit, Vec2, prefab};

fn hero(harness: &Harness) -> Entity {
    prefab::hero(&HeroConfig::default(), &harness.clips)
}

fn step(harness: &mut Harness, hero: &mut Entity, buttons: Buttons) {
    hero.process_input(buttons);
    harness.update(hero);
}

fn controller(hero: &Entity) -> &HeroController {
    hero.get::<HeroController>().expect("hero prefab carries a controller")
}

fn hit(amount: u32, source: Vec2) -> Hit {
    Hit {
        amount,
        source,
        force: 500.0,
    }
}

#[test]
fn attack_spawns_a_slash_and_settles_back_to_idle() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);

    step(&mut harness, &mut hero, Buttons::ATTACK);
    assert_eq!(controller(&hero).state(), HeroStateKind::Attack);
    let spawned = harness.spawned();
    assert_eq!(spawned.len(), 1);
    assert!(spawned[0].has_tag(tags::SLASH));
    assert!(spawned[0].position.y > hero.position.y);
    assert_eq!(harness.audio.played.len(), 1);

    // Holding the button does not retrigger the swing.
    for _ in 0..60 {
        step(&mut harness, &mut hero, Buttons::ATTACK);
    }
    assert_eq!(controller(&hero).state(), HeroStateKind::Idle);
    assert!(harness.spawned().is_empty());
}

#[test]
fn held_direction_runs_and_release_idles() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);
    let start = hero.position;

    for _ in 0..30 {
        step(&mut harness, &mut hero, Buttons::LEFT);
    }
    assert_eq!(controller(&hero).state(), HeroStateKind::Run);
    assert!(hero.position.x < start.x);

    step(&mut harness, &mut hero, Buttons::LEFT | Buttons::RIGHT);
    assert_eq!(controller(&hero).state(), HeroStateKind::Idle);
}

#[test]
fn dash_is_pushed_over_run_and_popped_back() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);
    let start = hero.position;

    step(&mut harness, &mut hero, Buttons::RIGHT);
    step(&mut harness, &mut hero, Buttons::RIGHT | Buttons::DASH);
    assert_eq!(controller(&hero).state(), HeroStateKind::Dash);
    assert_eq!(controller(&hero).fsm().suspended(), &[HeroState::Run]);

    for _ in 0..15 {
        step(&mut harness, &mut hero, Buttons::RIGHT);
    }
    assert_eq!(controller(&hero).state(), HeroStateKind::Run);
    assert!(controller(&hero).fsm().suspended().is_empty());
    assert!(hero.position.x - start.x > 135.0);
}

#[test]
fn hurt_interrupts_and_clears_the_stack() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);

    step(&mut harness, &mut hero, Buttons::RIGHT);
    step(&mut harness, &mut hero, Buttons::RIGHT | Buttons::DASH);
    let position = hero.position;
    let outcome = hero
        .get_mut::<HeroController>()
        .map(|c| c.take_damage(hit(10, position + Vec2::new(20.0, 0.0)), position));
    assert_eq!(outcome, Some(DamageOutcome::Wounded { remaining: 90 }));
    assert_eq!(controller(&hero).state(), HeroStateKind::Hurt);
    assert!(controller(&hero).fsm().suspended().is_empty());

    for _ in 0..40 {
        step(&mut harness, &mut hero, Buttons::empty());
    }
    assert_eq!(controller(&hero).state(), HeroStateKind::Idle);
}

#[test]
fn hit_pushes_hero_away_from_the_source() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);
    let position = hero.position;

    if let Some(controller) = hero.get_mut::<HeroController>() {
        controller.take_damage(hit(10, position + Vec2::new(20.0, 0.0)), position);
    }
    step(&mut harness, &mut hero, Buttons::empty());

    assert!(hero.position.x < position.x);
    assert_eq!(hero.position.y, position.y);
    assert!(controller(&hero).knockback_velocity().x < 0.0);
}

#[test]
fn death_is_terminal() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);
    let position = hero.position;

    let controller_mut = hero.get_mut::<HeroController>().expect("controller");
    assert_eq!(controller_mut.take_damage(hit(150, position), position), DamageOutcome::Killed);
    assert!(!controller_mut.request("idle"));
    assert!(!controller_mut.request("dash"));
    assert_eq!(controller_mut.take_damage(hit(1, position), position), DamageOutcome::Ignored);
    assert_eq!(controller_mut.heal(50), 0);

    for _ in 0..10 {
        step(&mut harness, &mut hero, Buttons::ATTACK | Buttons::RIGHT);
    }
    assert_eq!(controller(&hero).state(), HeroStateKind::Death);
    assert!(harness.spawned().is_empty());
}

#[test]
fn transitions_log_exit_before_entry() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);

    step(&mut harness, &mut hero, Buttons::UP);
    step(&mut harness, &mut hero, Buttons::empty());

    assert_eq!(
        controller(&hero).fsm().lifecycle().events(),
        [
            Lifecycle::Exit(HeroStateKind::Idle),
            Lifecycle::Enter(HeroStateKind::Run),
            Lifecycle::Exit(HeroStateKind::Run),
            Lifecycle::Enter(HeroStateKind::Idle),
        ]
    );
}

#[test]
fn named_requests_switch_state() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);
    let controller_mut = hero.get_mut::<HeroController>().expect("controller");

    assert!(!controller_mut.request("cartwheel"));
    assert!(controller_mut.request("RUN"));
    assert_eq!(controller_mut.state(), HeroStateKind::Run);
    assert!(controller_mut.request("dash"));
    assert_eq!(controller_mut.fsm().suspended(), &[HeroState::Run]);

    step(&mut harness, &mut hero, Buttons::empty());
    assert_eq!(controller(&hero).state(), HeroStateKind::Dash);
}

#[test]
fn hero_stays_inside_the_world() {
    let mut harness = Harness::new();
    let mut hero = hero(&harness);
    hero.position = Vec2::new(30.0, 30.0);

    for _ in 0..60 {
        step(&mut harness, &mut hero, Buttons::LEFT | Buttons::UP);
    }
    let radius = HeroConfig::default().body_radius;
    assert!(hero.position.x >= radius - 1e-3);
    assert!(hero.position.y >= radius - 1e-3);
}
