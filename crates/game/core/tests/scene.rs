use skirmish_core::ai::BehaviorTag;
use skirmish_core::env::{AssetTable, DrawList};
use skirmish_core::{
    Archetype, Buttons, ClipLibrary, ConfigError, EnemyBrain, GameConfig, GameEvent, Hit, Scene, Vec2,
};

const DT: f32 = 1.0 / 60.0;

/// A scene with no automatic spawning, so tests place every enemy.
fn quiet_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.waves.initial = 0;
    config.waves.interval = 1000.0;
    config
}

fn quiet_scene() -> Scene {
    Scene::new(quiet_config(), ClipLibrary::builtin()).expect("default config is valid")
}

fn brain(scene: &Scene, id: skirmish_core::EntityId) -> Option<&EnemyBrain> {
    scene.entity(id)?.get::<EnemyBrain>()
}

#[test]
fn new_scene_places_hero_and_opening_wave() {
    let scene = Scene::new(GameConfig::new(), ClipLibrary::builtin()).expect("valid");

    assert!(scene.hero().is_some());
    assert_eq!(scene.enemy_count(), 20);
    assert_eq!(scene.waves(), 1);
    assert!(!scene.is_over());
    for entity in scene.entities().iter() {
        assert!(scene.bounds().is_in_limits(entity.position));
    }
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = GameConfig::new();
    config.melee.detection_radius = -5.0;

    let result = Scene::new(config, ClipLibrary::builtin());
    assert!(matches!(
        result.err(),
        Some(ConfigError::NonPositive {
            field: "melee.detection_radius",
            ..
        })
    ));
}

#[test]
fn hero_swing_kills_enemy_and_scores() {
    let mut scene = quiet_scene();
    let hero = scene.hero_position().expect("hero");
    let orc = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(0.0, 60.0));

    let first = scene.step(DT, Buttons::ATTACK);
    assert_eq!(first.spawned, 1, "slash joins the scene at the end of the step");

    let second = scene.step(DT, Buttons::ATTACK);
    assert!(second.events.iter().any(|event| matches!(
        event,
        GameEvent::EnemyKilled { enemy, archetype: Archetype::Melee, reward: 100 } if *enemy == orc
    )));
    assert_eq!(scene.score(), 100);
    assert_eq!(scene.kills(), 1);
    assert_eq!(scene.enemy_count(), 0);
    assert!(brain(&scene, orc).is_some_and(EnemyBrain::is_dead));
}

#[test]
fn one_swing_lands_once_on_an_enemy_that_walks_in() {
    let mut config = quiet_config();
    config.melee.max_health = 1000;
    let mut scene = Scene::new(config, ClipLibrary::builtin()).expect("valid");
    let hero = scene.hero_position().expect("hero");
    let orc = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(0.0, 600.0));

    scene.step(DT, Buttons::ATTACK);
    let reach = scene.config().hero.strike_reach;
    if let Some(entity) = scene.entity_mut(orc) {
        entity.position = hero + Vec2::new(0.0, reach * 0.5);
    }
    scene.step(DT, Buttons::empty());
    scene.step(DT, Buttons::empty());

    assert!(scene.hero_controller().is_some_and(|c| c.is_attacking()));
    let strike = scene.config().hero.strike_damage;
    assert_eq!(brain(&scene, orc).map(EnemyBrain::health), Some(1000 - strike));
    assert_eq!(scene.hero_controller().map(|c| c.health()), Some(100));
}

#[test]
fn corpses_and_effects_are_cleaned_up() {
    let mut scene = quiet_scene();
    let hero = scene.hero_position().expect("hero");
    let orc = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(0.0, 60.0));
    scene.step(DT, Buttons::ATTACK);
    scene.step(DT, Buttons::ATTACK);
    assert!(scene.entities().len() > 2);

    let mut removed = 0;
    for _ in 0..400 {
        removed += scene.step(DT, Buttons::empty()).removed;
    }

    assert!(scene.entity(orc).is_none());
    assert_eq!(scene.entities().len(), 1);
    assert_eq!(removed, 3, "slash, blood and corpse");
    assert!(scene.hero().is_some());
}

#[test]
fn engaged_enemy_contact_kills_a_fragile_hero() {
    let mut config = quiet_config();
    config.hero.max_health = 10;
    config.hero.contact_damage = 10;
    let mut scene = Scene::new(config, ClipLibrary::builtin()).expect("valid");
    let hero = scene.hero_position().expect("hero");
    let orc = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(30.0, 0.0));

    let report = scene.step(DT, Buttons::empty());
    assert_eq!(
        report.events,
        vec![
            GameEvent::HeroDamaged {
                amount: 10,
                remaining: 0
            },
            GameEvent::HeroKilled
        ]
    );
    assert!(scene.is_over());
    assert!(brain(&scene, orc).is_some_and(|b| !b.senses().detected));

    scene.step(DT, Buttons::empty());
    assert_eq!(brain(&scene, orc).map(EnemyBrain::tag), Some(BehaviorTag::Patrol));
}

#[test]
fn retreating_enemy_contact_is_harmless() {
    let mut scene = quiet_scene();
    let hero = scene.hero_position().expect("hero");
    let orc = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(200.0, 0.0));
    if let Some(brain) = scene.entity_mut(orc).and_then(|e| e.get_mut::<EnemyBrain>()) {
        brain.take_damage(
            Hit {
                amount: 80,
                source: hero,
                force: 0.0,
            },
            hero + Vec2::new(200.0, 0.0),
        );
    }
    // The hit's knockback holds the brain for a moment before it reacts.
    for _ in 0..30 {
        scene.step(DT, Buttons::empty());
    }
    assert_eq!(brain(&scene, orc).map(EnemyBrain::tag), Some(BehaviorTag::Retreat));

    if let Some(entity) = scene.entity_mut(orc) {
        entity.position = hero + Vec2::new(30.0, 0.0);
    }
    let report = scene.step(DT, Buttons::empty());
    assert!(report.events.is_empty());
    assert_eq!(scene.hero_controller().map(|c| c.health()), Some(100));
}

#[test]
fn waves_respect_the_alive_cap() {
    let mut config = GameConfig::new();
    config.waves.initial = 2;
    config.waves.interval = 0.5;
    config.waves.per_wave = 3;
    config.waves.max_alive = 4;
    let mut scene = Scene::new(config, ClipLibrary::builtin()).expect("valid");
    assert_eq!(scene.enemy_count(), 2);

    for _ in 0..40 {
        scene.step(DT, Buttons::empty());
    }
    assert_eq!(scene.enemy_count(), 4);
    assert_eq!(scene.waves(), 2);

    for _ in 0..60 {
        scene.step(DT, Buttons::empty());
    }
    assert_eq!(scene.enemy_count(), 4);
    assert_eq!(scene.waves(), 2);
}

#[test]
fn frame_caps_catch_up_steps() {
    let mut scene = quiet_scene();

    let report = scene.frame(0.5, Buttons::empty());
    assert_eq!(report.steps, 5);
    assert_eq!(scene.steps(), 5);

    assert_eq!(scene.frame(0.0, Buttons::empty()).steps, 0);
}

#[test]
fn camera_follows_hero_velocity() {
    let mut scene = quiet_scene();
    for _ in 0..10 {
        scene.step(DT, Buttons::RIGHT);
    }

    let focus = scene.camera_focus().expect("hero present");
    assert_eq!(Some(focus.position), scene.hero_position());
    assert!(focus.velocity.x > 0.0);
    assert_eq!(focus.velocity.y, 0.0);
}

#[test]
fn render_draws_corpses_first_then_by_depth() {
    let mut assets = AssetTable::new();
    for texture in ["hero", "orc", "skeleton"] {
        assets.register_texture(texture);
    }
    let mut scene = quiet_scene().with_assets(assets);
    let hero = scene.hero_position().expect("hero");
    let below = scene.spawn_enemy(Archetype::Ranged, hero + Vec2::new(0.0, 900.0));
    let above = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(0.0, -900.0));
    let corpse = scene.spawn_enemy(Archetype::Melee, hero + Vec2::new(900.0, 1200.0));
    if let Some(brain) = scene.entity_mut(corpse).and_then(|e| e.get_mut::<EnemyBrain>()) {
        brain.take_damage(
            Hit {
                amount: 1000,
                source: Vec2::ZERO,
                force: 0.0,
            },
            Vec2::ZERO,
        );
    }

    let mut surface = DrawList::default();
    scene.render(&mut surface);

    let order: Vec<Vec2> = surface.sprites.iter().map(|sprite| sprite.position).collect();
    let expected: Vec<Vec2> = [corpse, above, scene.hero_id(), below]
        .into_iter()
        .filter_map(|id| scene.entity(id).map(|e| e.position))
        .collect();
    assert_eq!(order, expected);
}
