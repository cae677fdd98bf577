//! Whole-game scenarios driven through `Game::tick`.

use glam::Vec2;

use shapestorm_core::commands::{InputEvent, Key, MouseButton};
use shapestorm_core::components::{Collision, LifeSpan, Score, Shape, Transform};
use shapestorm_core::config::GameConfig;
use shapestorm_core::enums::{GamePhase, Tag};
use shapestorm_core::types::Rgba;

use crate::ability::AbilityState;
use crate::engine::Game;
use crate::entity::{Entity, EntityId};
use crate::systems;

const SHIPPED_CONFIG: &str = include_str!("../../../config/game.toml");

fn config() -> GameConfig {
    GameConfig::from_toml_str(SHIPPED_CONFIG).unwrap()
}

/// Shipped config with enemy spawning pushed out of reach.
fn quiet_config() -> GameConfig {
    let mut c = config();
    c.enemy.spawn_rate = 1_000_000;
    c
}

fn player(game: &Game) -> &Entity {
    systems::player(game.entities())
}

fn player_pos(game: &Game) -> Vec2 {
    player(game).require::<Transform>().pos
}

fn press(key: Key) -> InputEvent {
    InputEvent::KeyDown { key }
}

fn click(button: MouseButton) -> InputEvent {
    InputEvent::MouseDown { button }
}

fn release(button: MouseButton) -> InputEvent {
    InputEvent::MouseUp { button }
}

/// Stage a stationary enemy; it becomes live on the next tick.
fn place_enemy(game: &mut Game, pos: Vec2, sides: u32) -> EntityId {
    let enemy = game.entities_mut().add_entity(Tag::Enemy);
    enemy.add(Shape::new(32.0, sides, Rgba::opaque(10, 200, 30)));
    enemy.add(Collision::new(32.0));
    enemy.add(Transform::new(pos, Vec2::ZERO, 1.5));
    enemy.add(Score::new(100 * sides));
    enemy.id()
}

/// Stage a stationary bullet; it becomes live on the next tick.
fn place_bullet(game: &mut Game, pos: Vec2) -> EntityId {
    let bullet = game.entities_mut().add_entity(Tag::Bullet);
    bullet.add(Shape::new(10.0, 8, Rgba::WHITE));
    bullet.add(Collision::new(10.0));
    bullet.add(Transform::new(pos, Vec2::ZERO, 0.0));
    bullet.add(LifeSpan::new(90));
    bullet.id()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut a = Game::new(config(), 12345);
    let mut b = Game::new(config(), 12345);

    for frame in 0..600u32 {
        if frame % 50 == 0 {
            let events = [
                press(Key::Right),
                InputEvent::PointerMoved {
                    position: Vec2::new(frame as f32, -100.0),
                },
                click(MouseButton::Left),
            ];
            a.queue_events(events);
            b.queue_events(events);
        }
        let json_a = serde_json::to_string(&a.tick()).unwrap();
        let json_b = serde_json::to_string(&b.tick()).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at frame {frame}");
    }
}

#[test]
fn test_different_seeds_place_enemies_differently() {
    let mut a = Game::new(config(), 1);
    let mut b = Game::new(config(), 2);
    for _ in 0..69 {
        a.tick();
        b.tick();
    }
    let (snap_a, snap_b) = (a.tick(), b.tick());
    assert_eq!(snap_a.shapes.len(), 2);
    assert_ne!(snap_a.shapes, snap_b.shapes);
}

// ---- Startup and snapshot ----

#[test]
fn test_new_game_has_one_player_at_origin() {
    let game = Game::new(config(), 0);
    assert_eq!(game.entities().count(Tag::Player), 1);
    assert_eq!(player_pos(&game), Vec2::ZERO);
    assert!(game.is_running());

    let snap = game.snapshot();
    assert_eq!(snap.frame, 0);
    assert_eq!(snap.background, Rgba::new(10, 10, 20, 255));
    assert_eq!(snap.shapes.len(), 1);
    assert_eq!(snap.shapes[0].tag, Tag::Player);
    assert_eq!(snap.shapes[0].sides, 8);
    assert_eq!(snap.hud.score_text, "Score: 0\nHighscore: 0");
    assert_eq!(snap.hud.ability_text, "Ability\nOK");
    assert!(!snap.hud.paused);
}

// ---- Movement ----

#[test]
fn test_right_for_one_frame_moves_exactly_speed() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_event(press(Key::Right));
    game.tick();

    assert_eq!(player_pos(&game), Vec2::new(5.0, 0.0));
    assert_eq!(player(&game).require::<Transform>().velocity, Vec2::ZERO);
}

#[test]
fn test_diagonal_speed_is_configured_speed() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_events([press(Key::Down), press(Key::Right)]);
    for _ in 0..10 {
        game.tick();
    }
    let p = player_pos(&game);
    assert!((p.length() - 50.0).abs() < 1e-3, "got {p}");
    assert!((p.x - p.y).abs() < 1e-4);
}

#[test]
fn test_player_stops_at_the_wall() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_event(press(Key::Left));
    for _ in 0..200 {
        game.tick();
    }
    let xmin = game.bounds().min.x;
    assert_eq!(player_pos(&game).x, xmin + 32.0);

    game.queue_event(InputEvent::KeyUp { key: Key::Left });
    game.tick();
    assert_eq!(player_pos(&game).x, xmin + 32.0);
}

// ---- Spawning ----

#[test]
fn test_enemy_spawns_every_spawn_rate_frames() {
    let mut game = Game::new(config(), 9);
    for _ in 0..59 {
        game.tick();
    }
    assert_eq!(game.entities().pending_len(), 0);

    game.tick();
    assert_eq!(game.entities().pending_len(), 1);
    game.tick();
    assert_eq!(game.entities().count(Tag::Enemy), 1);

    let enemy = game.entities().entities_with_tag(Tag::Enemy).next().unwrap();
    // Spawned clear of the player, then moved one frame at unit speed.
    let pos = enemy.require::<Transform>().pos;
    assert!(pos.length() > 12.0f32.sqrt() * 32.0 - 1.001);
}

// ---- Shooting and scoring ----

#[test]
fn test_bullet_destroys_enemy_and_scores() {
    let mut game = Game::new(quiet_config(), 0);
    let enemy = place_enemy(&mut game, Vec2::new(200.0, 0.0), 3);
    game.queue_events([
        InputEvent::PointerMoved {
            position: Vec2::new(200.0, 0.0),
        },
        click(MouseButton::Left),
    ]);

    let mut frames = 0;
    while game.score().score == 0 {
        game.tick();
        frames += 1;
        assert!(frames < 30, "bullet never reached the enemy");
    }
    assert_eq!(game.score().score, 300);
    assert_eq!(game.score().highscore, 300);
    assert!(!game.entities().get(enemy).unwrap().is_alive());

    game.tick();
    assert!(game.entities().get(enemy).is_none());
    assert_eq!(game.entities().count(Tag::Bullet), 0);
    let fragments: Vec<&Entity> = game.entities().entities_with_tag(Tag::Enemy).collect();
    assert_eq!(fragments.len(), 3);
    assert!(fragments.iter().all(|f| f.has::<LifeSpan>()));
    assert_eq!(
        game.snapshot().hud.score_text,
        "Score: 300\nHighscore: 300"
    );
}

#[test]
fn test_single_click_fires_one_bullet() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_event(click(MouseButton::Left));
    for _ in 0..5 {
        game.tick();
    }
    assert_eq!(game.entities().count(Tag::Bullet), 1);
}

#[test]
fn test_bullet_fades_and_expires() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_event(click(MouseButton::Left));
    game.tick();
    let snap = game.tick();
    let bullet = snap.shapes.iter().find(|s| s.tag == Tag::Bullet).unwrap();
    // One frame of 90 gone.
    assert_eq!(bullet.color.a, (255.0 * 89.0 / 90.0) as u8);

    for _ in 0..89 {
        game.tick();
    }
    let bullet = game.entities().entities_with_tag(Tag::Bullet).next().unwrap();
    assert!(!bullet.is_alive(), "dies on the frame it reaches zero");
    game.tick();
    assert_eq!(game.entities().count(Tag::Bullet), 0);
}

// ---- Player death ----

#[test]
fn test_player_death_respawns_and_resets() {
    let mut game = Game::new(quiet_config(), 0);
    let first = player(&game).id();

    game.queue_event(click(MouseButton::Right));
    game.tick();
    assert!(game.ability().is_active());

    place_enemy(&mut game, Vec2::new(10.0, 0.0), 4);
    game.tick();
    assert!(!game.entities().get(first).unwrap().is_alive());
    assert_eq!(game.ability(), AbilityState::Idle);
    assert_eq!(game.score().score, 0);

    game.tick();
    let second = player(&game).id();
    assert_ne!(first, second);
    assert_eq!(player_pos(&game), Vec2::ZERO);
    assert_eq!(game.entities().count(Tag::Player), 1);
    assert_eq!(game.entities().count(Tag::Enemy), 0);
    assert_eq!(game.ability(), AbilityState::Idle, "held trigger does not carry over");
}

#[test]
fn test_player_dies_on_enemy_shot_in_the_same_frame() {
    let mut game = Game::new(quiet_config(), 0);
    let first = player(&game).id();
    let enemy = place_enemy(&mut game, Vec2::new(40.0, 0.0), 3);
    let bullet = place_bullet(&mut game, Vec2::new(60.0, 0.0));

    game.tick();
    assert!(!game.entities().get(bullet).unwrap().is_alive());
    assert!(!game.entities().get(enemy).unwrap().is_alive());
    assert!(!game.entities().get(first).unwrap().is_alive());
    assert_eq!(game.score().highscore, 300);
    assert_eq!(game.score().score, 0);

    game.tick();
    assert_ne!(player(&game).id(), first);
}

#[test]
fn test_trigger_on_the_death_frame_is_ignored() {
    let mut game = Game::new(quiet_config(), 0);
    let first = player(&game).id();
    place_enemy(&mut game, Vec2::new(10.0, 0.0), 4);
    game.queue_event(click(MouseButton::Right));

    game.tick();
    assert!(!game.entities().get(first).unwrap().is_alive());
    assert_eq!(game.ability(), AbilityState::Idle);

    game.tick();
    assert_eq!(game.ability(), AbilityState::Idle);
    assert_eq!(game.snapshot().hud.ability_text, "Ability\nOK");
}

// ---- Ability ----

#[test]
fn test_ability_cycle() {
    let mut c = quiet_config();
    c.ability.duration = 3;
    c.ability.cooldown = 4;
    let mut game = Game::new(c, 0);

    game.queue_events([click(MouseButton::Right), release(MouseButton::Right)]);
    game.tick();
    // Released in the same frame: the flag was already cleared.
    assert_eq!(game.ability(), AbilityState::Idle);

    game.queue_event(click(MouseButton::Right));
    game.tick();
    assert_eq!(game.ability(), AbilityState::Active { remaining: 2 });
    assert_eq!(game.snapshot().hud.ability_text, "Ability\nIn Use");
    assert_ne!(game.snapshot().shapes[0].color, game.config().player.color);

    game.queue_event(release(MouseButton::Right));
    game.tick();
    game.tick();
    assert_eq!(game.ability(), AbilityState::Cooldown { remaining: 4 });
    assert_eq!(game.snapshot().hud.ability_text, "Ability\nIn 0.1s");
    assert_eq!(game.snapshot().shapes[0].color, game.config().player.color);

    for _ in 0..3 {
        game.tick();
    }
    assert!(matches!(game.ability(), AbilityState::Cooldown { .. }));
    game.tick();
    assert_eq!(game.ability(), AbilityState::Idle);
    assert_eq!(game.snapshot().hud.ability_text, "Ability\nOK");
}

#[test]
fn test_ability_enables_continuous_fire() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_event(click(MouseButton::Right));
    game.tick();
    assert!(game.ability().is_active());

    game.queue_event(click(MouseButton::Left));
    for _ in 0..4 {
        game.tick();
    }
    // One shot per frame; the latest is still staged.
    game.tick();
    assert_eq!(game.entities().count(Tag::Bullet), 4);
    assert_eq!(game.entities().pending_len(), 1);
}

// ---- Pause and quit ----

#[test]
fn test_pause_freezes_simulation() {
    let mut game = Game::new(quiet_config(), 0);
    game.queue_event(press(Key::Right));
    game.tick();
    assert_eq!(game.frame(), 1);
    let rotation = player(&game).require::<Shape>().rotation;

    game.queue_event(press(Key::Pause));
    for _ in 0..10 {
        let snap = game.tick();
        assert!(snap.hud.paused);
        assert_eq!(snap.phase, GamePhase::Paused);
    }
    assert_eq!(game.frame(), 1);
    assert_eq!(player_pos(&game), Vec2::new(5.0, 0.0));
    assert_eq!(player(&game).require::<Shape>().rotation, rotation);

    // Releases while paused still reach the player.
    game.queue_events([InputEvent::KeyUp { key: Key::Right }, press(Key::Pause)]);
    game.tick();
    assert_eq!(game.phase(), GamePhase::Active);
    assert_eq!(game.frame(), 2);
    assert_eq!(player_pos(&game), Vec2::new(5.0, 0.0));
}

#[test]
fn test_quit_and_escape_stop_the_game() {
    let mut game = Game::new(config(), 0);
    game.queue_event(InputEvent::Quit);
    game.tick();
    assert!(!game.is_running());
    assert_eq!(game.frame(), 0);

    let mut game = Game::new(config(), 0);
    game.queue_event(press(Key::Escape));
    let snap = game.tick();
    assert_eq!(snap.phase, GamePhase::Stopped);
    assert!(!game.is_running());
}
