//! Tests for the simulation engine, ball control, collision handling, and win evaluation.

use glam::Vec3;

use rollball_core::commands::PlayerCommand;
use rollball_core::components::{Pin, RigidBody, Transform};
use rollball_core::constants::*;
use rollball_core::enums::*;
use rollball_core::events::GameEvent;
use rollball_core::input::drag_to_direction;

use crate::assets::AssetCatalog;
use crate::engine::{SimConfig, SimulationEngine};
use crate::error::SetupError;
use crate::session::GameSession;
use crate::systems::{ball_physics, collision, pin_animation, win_check};

fn external_engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        physics: PhysicsBackend::External,
        ..Default::default()
    })
    .unwrap()
}

fn ball_torque(engine: &SimulationEngine) -> Vec3 {
    let ball = engine.ball_entity().unwrap();
    engine.world().get::<&RigidBody>(ball).unwrap().torque
}

fn count_game_over(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count()
}

// ---- Setup ----

#[test]
fn test_setup_spawns_ball_and_default_pins() {
    let engine = SimulationEngine::new(SimConfig::default()).unwrap();

    assert!(engine.ball_entity().is_some());
    let pins = engine.pin_entities();
    assert_eq!(pins.len(), 4);

    for (i, pin) in pins.iter().enumerate() {
        let state = engine.session().pin(*pin).unwrap();
        assert_eq!(state.index, i as u32);
        assert!(!state.rotated, "pins start standing");

        let transform = engine.world().get::<&Transform>(*pin).unwrap();
        assert_eq!(transform.translation, DEFAULT_PIN_LAYOUT[i]);
    }

    let pin_markers = engine.world().query::<&Pin>().iter().count();
    assert_eq!(pin_markers, 4);
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.session().ball_state().unwrap().commanded_direction, None);
}

#[test]
fn test_setup_custom_pin_count() {
    let config = SimConfig {
        pin_layout: vec![Vec3::new(0.5, 0.0, 0.0), Vec3::new(-0.5, 0.0, 0.0)],
        ..Default::default()
    };
    let engine = SimulationEngine::new(config).unwrap();
    assert_eq!(engine.pin_entities().len(), 2);
    assert_eq!(engine.session().pin_count(), 2);
}

#[test]
fn test_setup_rejects_empty_pin_layout() {
    let config = SimConfig {
        pin_layout: Vec::new(),
        ..Default::default()
    };
    let err = SimulationEngine::new(config).err().unwrap();
    assert_eq!(err, SetupError::EmptyPinLayout);
}

#[test]
fn test_setup_rejects_missing_asset() {
    let config = SimConfig {
        pin_asset: "Missing_Pin.usdz".to_string(),
        ..Default::default()
    };
    let err = SimulationEngine::new(config).err().unwrap();
    assert_eq!(err, SetupError::MissingAsset("Missing_Pin.usdz".to_string()));
    assert!(err.to_string().contains("Missing_Pin.usdz"));

    let err = SimulationEngine::with_catalog(SimConfig::default(), AssetCatalog::empty())
        .err()
        .unwrap();
    assert_eq!(err, SetupError::MissingAsset(BALL_ASSET.to_string()));
}

#[test]
fn test_sim_config_json_defaults() {
    let config: SimConfig = serde_json::from_str(r#"{"torque_strength": 0.05}"#).unwrap();
    assert_eq!(config.torque_strength, 0.05);
    assert_eq!(config.pin_layout.len(), 4);
    assert_eq!(config.physics, PhysicsBackend::Headless);

    let json = serde_json::to_string(&SimConfig::default()).unwrap();
    let back: SimConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SimConfig::default());
}

// ---- Ball control and torque ----

#[test]
fn test_rolling_torque_per_direction() {
    let k = 0.04;
    assert_eq!(
        ball_physics::rolling_torque(Direction::Right, k),
        Vec3::new(0.0, 0.0, -1.0) * k
    );
    assert_eq!(
        ball_physics::rolling_torque(Direction::Left, k),
        Vec3::new(0.0, 0.0, 1.0) * k
    );
    assert_eq!(
        ball_physics::rolling_torque(Direction::Up, k),
        Vec3::new(-1.0, 0.0, 0.0) * k
    );
    assert_eq!(
        ball_physics::rolling_torque(Direction::Down, k),
        Vec3::new(1.0, 0.0, 0.0) * k
    );
}

#[test]
fn test_start_right_reapplies_torque_every_tick() {
    let mut engine = external_engine();
    engine.start_applying_force(Direction::Right);
    let expected = Vec3::new(0.0, 0.0, -1.0) * TORQUE_STRENGTH;

    for _ in 0..5 {
        let snap = engine.tick();
        let ball = snap.ball.unwrap();
        assert_eq!(ball.applied_torque, expected);
        assert_eq!(ball.commanded_direction, Some(Direction::Right));
        // Re-applied, not accumulated across ticks.
        assert_eq!(ball_torque(&engine), expected);
    }
}

#[test]
fn test_stop_applies_zero_torque() {
    let mut engine = external_engine();
    engine.start_applying_force(Direction::Down);
    engine.tick();
    assert_ne!(ball_torque(&engine), Vec3::ZERO);

    engine.stop_applying_force();
    for _ in 0..10 {
        let snap = engine.tick();
        assert_eq!(snap.ball.unwrap().applied_torque, Vec3::ZERO);
        assert_eq!(ball_torque(&engine), Vec3::ZERO);
    }
}

#[test]
fn test_direction_switch_is_immediate() {
    let mut engine = external_engine();
    engine.start_applying_force(Direction::Up);
    engine.start_applying_force(Direction::Up);
    let snap = engine.tick();
    assert_eq!(
        snap.ball.unwrap().applied_torque,
        ball_physics::rolling_torque(Direction::Up, TORQUE_STRENGTH)
    );

    engine.start_applying_force(Direction::Left);
    let snap = engine.tick();
    assert_eq!(
        snap.ball.unwrap().applied_torque,
        ball_physics::rolling_torque(Direction::Left, TORQUE_STRENGTH)
    );
}

#[test]
fn test_queued_commands_apply_at_tick_boundary() {
    let mut engine = external_engine();
    engine.queue_command(PlayerCommand::StartApplyingForce {
        direction: Direction::Right,
    });
    assert_eq!(engine.session().ball_state().unwrap().commanded_direction, None);

    let snap = engine.tick();
    assert_eq!(
        snap.ball.unwrap().commanded_direction,
        Some(Direction::Right)
    );

    engine.queue_commands([
        PlayerCommand::StartApplyingForce {
            direction: Direction::Up,
        },
        PlayerCommand::StopApplyingForce,
    ]);
    let snap = engine.tick();
    let ball = snap.ball.unwrap();
    assert_eq!(ball.commanded_direction, None);
    assert_eq!(ball.applied_torque, Vec3::ZERO);
}

#[test]
fn test_missing_ball_body_is_noop() {
    let mut engine = external_engine();
    engine.start_applying_force(Direction::Right);
    let ball = engine.ball_entity().unwrap();
    engine.world_mut().despawn(ball).unwrap();

    let snap = engine.tick();
    assert!(snap.ball.is_none());
    assert_eq!(engine.time().tick, 1);

    let mut session = GameSession::new();
    let mut world = hecs::World::new();
    assert_eq!(ball_physics::run(&mut world, &session, 1.0), Vec3::ZERO);
    assert!(!crate::controller::start_applying_force(
        &mut session,
        Direction::Up
    ));
    assert!(!crate::controller::stop_applying_force(&mut session));
}

// ---- Collision handling ----

#[test]
fn test_rotation_sign_branches() {
    assert_eq!(collision::rotation_sign(Direction::Down.vector()), 1.0);
    assert_eq!(collision::rotation_sign(Direction::Up.vector()), -1.0);
    assert_eq!(collision::rotation_sign(Direction::Right.vector()), -1.0);
    assert_eq!(collision::rotation_sign(Direction::Left.vector()), 1.0);
}

#[test]
fn test_collision_knocks_pin_once() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    let pin2 = engine.pin_entities()[2];

    engine.start_applying_force(Direction::Left);
    assert!(engine.on_collision(ball, pin2));
    assert!(engine.session().pin(pin2).unwrap().rotated);

    let snap = engine.tick();
    assert_eq!(snap.pins_knocked, 1);
    assert_eq!(
        snap.events,
        vec![GameEvent::PinKnocked {
            pin_index: 2,
            rotation_sign: 1.0,
            tick: 0,
        }]
    );

    // Duplicate contacts change nothing.
    engine.start_applying_force(Direction::Right);
    assert!(!engine.on_collision(ball, pin2));
    assert!(!engine.on_collision(pin2, ball));
    let snap = engine.tick();
    assert!(snap.events.is_empty());
    assert!(engine.session().pin(pin2).unwrap().rotated);
    assert_eq!(snap.pins_knocked, 1);
}

#[test]
fn test_collision_without_direction_assumes_right() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    let pin = engine.pin_entities()[0];

    assert!(engine.on_collision(pin, ball));
    let snap = engine.tick();
    assert!(matches!(
        snap.events[0],
        GameEvent::PinKnocked {
            pin_index: 0,
            rotation_sign,
            ..
        } if rotation_sign == -1.0
    ));
}

#[test]
fn test_collision_ignores_untracked_pairs() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    let pins = engine.pin_entities();
    let stranger = engine
        .world_mut()
        .spawn((Transform::default(), RigidBody::new(BodyMode::Static, 1.0, 0.1)));

    assert!(!engine.on_collision(pins[0], pins[1]));
    assert!(!engine.on_collision(ball, ball));
    assert!(!engine.on_collision(ball, stranger));
    assert!(!engine.on_collision(stranger, pins[3]));

    // A pin body that is no longer in the active set.
    engine.session_mut().pins.remove(&pins[0]);
    assert!(!engine.on_collision(ball, pins[0]));

    let snap = engine.tick();
    assert!(snap.events.is_empty());
    assert_eq!(snap.pins_knocked, 0);
    assert_eq!(snap.pins_total, 3);
}

#[test]
fn test_pin_rotation_is_animated_and_non_blocking() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    let pin = engine.pin_entities()[1];

    engine.start_applying_force(Direction::Down);
    engine.on_collision(ball, pin);

    // Rotated immediately, animation still running.
    let snap = engine.tick();
    let view = &snap.pins[1];
    assert!(view.rotated);
    assert!(view.animating);
    assert!(view.yaw > 0.0 && view.yaw < PIN_ROTATION_ANGLE);

    for _ in 0..40 {
        engine.tick();
    }
    let snap = engine.tick();
    let view = &snap.pins[1];
    assert!(!view.animating);
    assert!((view.yaw - PIN_ROTATION_ANGLE).abs() < 1e-4);
}

#[test]
fn test_pin_rotation_negative_sign_turns_clockwise() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    let pin = engine.pin_entities()[3];

    engine.start_applying_force(Direction::Up);
    engine.on_collision(ball, pin);
    for _ in 0..60 {
        engine.tick();
    }
    let snap = engine.tick();
    assert!((snap.pins[3].yaw + PIN_ROTATION_ANGLE).abs() < 1e-4);
}

#[test]
fn test_ease_in_out_bounds() {
    assert_eq!(pin_animation::ease_in_out(0.0), 0.0);
    assert_eq!(pin_animation::ease_in_out(1.0), 1.0);
    assert!((pin_animation::ease_in_out(0.5) - 0.5).abs() < 1e-6);
    assert!(pin_animation::ease_in_out(0.1) < 0.1);
    assert!(pin_animation::ease_in_out(0.9) > 0.9);
    assert_eq!(pin_animation::ease_in_out(2.0), 1.0);
}

// ---- Win evaluation ----

#[test]
fn test_win_evaluator_four_pin_scenario() {
    let mut world = hecs::World::new();
    let mut session = GameSession::new();
    let pins: Vec<_> = (0..4)
        .map(|i| {
            let entity = world.spawn((Pin,));
            session.insert_pin(entity, i);
            entity
        })
        .collect();

    for pin in &pins[..3] {
        session.pins.get_mut(pin).unwrap().rotated = true;
        assert!(!win_check::run(&mut session, 1));
        assert!(!session.is_game_over());
    }

    session.pins.get_mut(&pins[3]).unwrap().rotated = true;
    assert!(win_check::run(&mut session, 2));
    assert!(session.is_game_over());

    assert!(!win_check::run(&mut session, 3));
    let events = session.drain_events();
    assert_eq!(
        events,
        vec![GameEvent::GameOver {
            pins_knocked: 4,
            tick: 2,
        }]
    );
}

#[test]
fn test_empty_pin_set_never_wins() {
    let mut session = GameSession::new();
    for tick in 0..10 {
        assert!(!win_check::run(&mut session, tick));
    }
    assert!(!session.is_game_over());
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_game_over_event_fires_once() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    let pins = engine.pin_entities();

    let mut events = Vec::new();
    for pin in &pins[..3] {
        engine.on_collision(ball, *pin);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Playing);
        events.extend(snap.events);
    }

    engine.on_collision(pins[3], ball);
    let snap = engine.tick();
    assert!(snap.is_game_over());
    assert_eq!(snap.pins_knocked, 4);
    events.extend(snap.events);

    for _ in 0..30 {
        let snap = engine.tick();
        assert!(snap.is_game_over());
        events.extend(snap.events);
    }
    assert_eq!(count_game_over(&events), 1);
}

// ---- Headless physics ----

#[test]
fn test_headless_ball_rolls_right_and_knocks_pin() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let right_pin = engine.pin_entities()[2];
    engine.start_applying_force(Direction::Right);

    let mut last_x = 0.0;
    let mut knocked_at = None;
    for tick in 0..300 {
        let snap = engine.tick();
        let ball = snap.ball.unwrap();
        assert!(ball.position.x >= last_x, "ball should keep rolling right");
        assert!(ball.position.z.abs() < 1e-5);
        last_x = ball.position.x;

        if engine.session().pin(right_pin).unwrap().rotated {
            knocked_at = Some(tick);
            break;
        }
    }

    assert!(knocked_at.is_some(), "ball never reached the right pin");
    assert_eq!(engine.session().pins_knocked(), 1);
}

#[test]
fn test_headless_idle_ball_stays_put() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    for _ in 0..120 {
        let snap = engine.tick();
        assert_eq!(snap.ball.unwrap().position, Vec3::ZERO);
        assert!(snap.events.is_empty());
    }
}

#[test]
fn test_headless_full_game_by_steering() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let mut snap = engine.tick();
    let mut events = Vec::new();

    for _ in 0..3600 {
        if snap.is_game_over() {
            break;
        }
        let ball = snap.ball.as_ref().unwrap().position;
        let target = snap
            .pins
            .iter()
            .filter(|p| !p.rotated)
            .min_by(|a, b| {
                a.position
                    .distance_squared(ball)
                    .total_cmp(&b.position.distance_squared(ball))
            })
            .map(|p| p.position)
            .unwrap();
        let offset = target - ball;
        engine.start_applying_force(drag_to_direction(offset.x, offset.z));

        snap = engine.tick();
        events.extend(snap.events.clone());
    }

    assert!(snap.is_game_over(), "steering should knock every pin");
    assert_eq!(snap.pins_knocked, 4);
    assert_eq!(count_game_over(&events), 1);
    let knocked = events
        .iter()
        .filter(|e| matches!(e, GameEvent::PinKnocked { .. }))
        .count();
    assert_eq!(knocked, 4);
}

// ---- Session lifecycle ----

#[test]
fn test_retry_resets_session() {
    let mut engine = external_engine();
    let ball = engine.ball_entity().unwrap();
    for pin in engine.pin_entities() {
        engine.on_collision(ball, pin);
    }
    engine.start_applying_force(Direction::Left);
    assert!(engine.tick().is_game_over());

    engine.queue_command(PlayerCommand::Retry);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.pins_knocked, 0);
    assert_eq!(snap.pins_total, 4);
    assert!(snap.pins.iter().all(|p| !p.rotated && p.yaw.abs() < 1e-6));
    assert_eq!(snap.ball.unwrap().commanded_direction, None);
    assert_eq!(snap.time.tick, 1);
    assert!(snap.events.is_empty());
}

#[test]
fn test_snapshot_pins_sorted_by_index() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let snap = engine.tick();
    let indices: Vec<u32> = snap.pins.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(snap.pins_total, 4);
}

#[test]
fn test_determinism_same_inputs() {
    let mut engine_a = SimulationEngine::new(SimConfig::default()).unwrap();
    let mut engine_b = SimulationEngine::new(SimConfig::default()).unwrap();

    let script = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
    for i in 0..400 {
        let direction = script[(i / 50) % script.len()];
        engine_a.queue_command(PlayerCommand::StartApplyingForce { direction });
        engine_b.queue_command(PlayerCommand::StartApplyingForce { direction });

        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same inputs");
    }
}
