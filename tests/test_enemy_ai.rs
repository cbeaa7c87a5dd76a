mod common;

use common::{approx, ScriptedRng};
use space_pyew::ai::{AiAction, Enemy};
use space_pyew::entities::Body;
use space_pyew::Tuning;

/// Enemy on row 2 heading down, with a long countdown so no AI fires unless a
/// test shortens it.
fn make_enemy() -> Enemy {
    Enemy::new(&Tuning::default(), &mut ScriptedRng::new(&[2, 6000]))
}

fn hidden(x: f32, y: f32) -> Body {
    let mut b = Body::at(x, y);
    b.is_visible = false;
    b
}

fn no_threats() -> (Body, Body) {
    (hidden(0.0, 0.0), hidden(0.0, 0.0))
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn spawns_on_right_edge_with_random_row() {
    let mut rng = ScriptedRng::new(&[3, 7500]);
    let e = Enemy::new(&Tuning::default(), &mut rng);
    assert_eq!((e.body.pos_x, e.body.pos_y), (4.0, 3.0));
    assert!(e.body.is_visible);
    assert_eq!(e.evade_countdown_ms, 7500.0);
    assert_eq!(rng.requests, vec![(0, 4), (5000, 10000)]);
    assert!(e.body.speed_y > 0.0);
}

#[test]
fn die_roll_mapping() {
    let actions: Vec<_> = (1..=6).map(AiAction::from_roll).collect();
    assert_eq!(
        actions,
        vec![
            AiAction::EvadeThreat,
            AiAction::EvadeThreat,
            AiAction::EvadeThreat,
            AiAction::EvasiveJump,
            AiAction::EvasiveJump,
            AiAction::Reverse,
        ]
    );
}

// ── Speed & countdown ─────────────────────────────────────────────────────────

#[test]
fn speed_scales_with_difficulty_and_keeps_direction() {
    let mut e = make_enemy();
    e.body.speed_y = -0.001;
    let (p, s) = no_threats();
    let mut rng = ScriptedRng::default();
    e.update(10.0, 5, &p, &s, &mut rng);
    assert!(approx(e.speed_px_per_s, 1.5));
    assert!(approx(e.body.speed_y, -0.0015));
    assert!(approx(e.body.pos_y, 2.0 - 0.015));
}

#[test]
fn running_countdown_draws_nothing() {
    let mut e = make_enemy();
    let (p, s) = no_threats();
    let mut rng = ScriptedRng::default();
    e.update(100.0, 0, &p, &s, &mut rng);
    assert!(rng.requests.is_empty());
    assert_eq!(e.evade_countdown_ms, 5900.0);
    assert_eq!(e.last_action, None);
}

#[test]
fn expired_countdown_rerolls_reaction() {
    let mut e = make_enemy();
    e.evade_countdown_ms = 5.0;
    let (p, s) = no_threats();
    let mut rng = ScriptedRng::new(&[1, 6]);
    e.update(10.0, 0, &p, &s, &mut rng);
    // shortest interval: 1 * 20 + 50
    assert_eq!(e.evade_countdown_ms, 70.0);
    assert_eq!(rng.requests, vec![(1, 50), (1, 6)]);
    assert_eq!(e.last_action, Some(AiAction::Reverse));
    assert!(e.body.speed_y < 0.0);
}

#[test]
fn countdown_at_exactly_zero_does_not_fire() {
    let mut e = make_enemy();
    e.evade_countdown_ms = 10.0;
    let (p, s) = no_threats();
    let mut rng = ScriptedRng::default();
    e.update(10.0, 0, &p, &s, &mut rng);
    assert_eq!(e.evade_countdown_ms, 0.0);
    assert!(rng.requests.is_empty());
}

#[test]
fn reaction_window_narrows_with_difficulty() {
    for (difficulty, upper) in [(0, 50), (30, 20), (48, 2), (49, 2), (200, 2)] {
        let mut e = make_enemy();
        e.evade_countdown_ms = 0.0;
        let (p, s) = no_threats();
        let mut rng = ScriptedRng::new(&[2, 6]);
        e.update(1.0, difficulty, &p, &s, &mut rng);
        assert_eq!(rng.requests[0], (1, upper), "difficulty {}", difficulty);
        assert_eq!(e.evade_countdown_ms, 90.0);
    }
}

// ── Evade ─────────────────────────────────────────────────────────────────────

fn expire(e: &mut Enemy) {
    e.evade_countdown_ms = 0.0;
}

#[test]
fn evades_approaching_projectile() {
    let mut e = make_enemy();
    expire(&mut e);
    let projectile = Body::at(2.0, 3.0);
    let ship = Body::at(0.0, 2.0);
    let mut rng = ScriptedRng::new(&[10, 1]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert_eq!(e.last_action, Some(AiAction::EvadeThreat));
    assert!(e.body.speed_y < 0.0);
}

#[test]
fn ignores_projectile_out_of_range() {
    let mut e = make_enemy();
    expire(&mut e);
    let projectile = Body::at(2.0, 4.5);
    let ship = Body::at(0.0, 2.0);
    let mut rng = ScriptedRng::new(&[10, 2]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert!(e.body.speed_y > 0.0);
}

#[test]
fn ignores_threat_it_is_moving_away_from() {
    let mut e = make_enemy();
    expire(&mut e);
    let projectile = Body::at(2.0, 1.0);
    let ship = Body::at(0.0, 2.0);
    let mut rng = ScriptedRng::new(&[10, 3]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert!(e.body.speed_y > 0.0);
}

#[test]
fn evades_ship_when_nothing_in_flight() {
    let mut e = make_enemy();
    expire(&mut e);
    e.body.speed_y = -0.001;
    let projectile = hidden(2.0, 3.0);
    let ship = Body::at(0.0, 1.0);
    let mut rng = ScriptedRng::new(&[10, 1]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert!(e.body.speed_y > 0.0);
}

// ── Evasive jump ─────────────────────────────────────────────────────────────

#[test]
fn jump_moves_one_row() {
    let mut e = make_enemy();
    expire(&mut e);
    let projectile = hidden(0.0, 0.0);
    let (_, ship) = no_threats();
    let mut rng = ScriptedRng::new(&[10, 4, 1]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert_eq!(e.last_action, Some(AiAction::EvasiveJump));
    assert_eq!(rng.requests[2], (0, 1));
    assert!(approx(e.body.pos_y, 3.01));
}

#[test]
fn jump_down_on_zero() {
    let mut e = make_enemy();
    expire(&mut e);
    let projectile = hidden(0.0, 4.0);
    let (_, ship) = no_threats();
    let mut rng = ScriptedRng::new(&[10, 5, 0]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert!(approx(e.body.pos_y, 1.01));
}

#[test]
fn jump_into_projectile_row_is_rejected() {
    let mut e = make_enemy();
    expire(&mut e);
    let projectile = Body::at(1.0, 3.2);
    let (_, ship) = no_threats();
    let mut rng = ScriptedRng::new(&[10, 4, 1]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert!(approx(e.body.pos_y, 2.01));
}

#[test]
fn jump_past_the_edge_is_clipped_then_bounces() {
    let mut e = make_enemy();
    expire(&mut e);
    e.body.pos_y = 3.9;
    e.body.speed_y = -0.001;
    let projectile = hidden(0.0, 0.0);
    let (_, ship) = no_threats();
    let mut rng = ScriptedRng::new(&[10, 4, 1]);
    e.update(10.0, 0, &projectile, &ship, &mut rng);
    assert_eq!(e.body.pos_y, 4.0);
    assert!(e.body.speed_y > 0.0);
}

// ── Bounce ────────────────────────────────────────────────────────────────────

#[test]
fn bounces_off_bottom() {
    let mut e = make_enemy();
    e.body.pos_y = 3.995;
    let (p, s) = no_threats();
    e.update(10.0, 0, &p, &s, &mut ScriptedRng::default());
    assert_eq!(e.body.pos_y, 4.0);
    assert!(e.body.speed_y < 0.0);
}

#[test]
fn bounces_off_top() {
    let mut e = make_enemy();
    e.body.pos_y = 0.005;
    e.body.speed_y = -0.001;
    let (p, s) = no_threats();
    e.update(10.0, 0, &p, &s, &mut ScriptedRng::default());
    assert_eq!(e.body.pos_y, 0.0);
    assert!(e.body.speed_y > 0.0);
}

#[test]
fn ai_reversal_and_bounce_in_one_tick_cancel() {
    let mut e = make_enemy();
    expire(&mut e);
    e.body.pos_y = 3.995;
    e.body.speed_y = -0.001;
    let (p, s) = no_threats();
    let mut rng = ScriptedRng::new(&[10, 6]);
    e.update(10.0, 0, &p, &s, &mut rng);
    // reversed by the AI, driven into the floor, reversed by the bounce
    assert_eq!(e.body.pos_y, 4.0);
    assert!(e.body.speed_y < 0.0);
}

#[test]
fn single_bounce_per_tick_on_bound() {
    let mut e = make_enemy();
    e.body.pos_y = 4.0;
    e.body.speed_y = 0.001;
    let (p, s) = no_threats();
    e.update(10.0, 0, &p, &s, &mut ScriptedRng::default());
    assert!(e.body.speed_y < 0.0);
    e.update(10.0, 0, &p, &s, &mut ScriptedRng::default());
    assert!(e.body.speed_y < 0.0);
    assert!(e.body.pos_y < 4.0);
}

// ── Respawn ───────────────────────────────────────────────────────────────────

#[test]
fn respawn_returns_to_right_edge() {
    let mut e = make_enemy();
    e.body.is_visible = false;
    e.body.move_to(1.0, 1.0);
    let mut rng = ScriptedRng::new(&[0]);
    e.respawn(&mut rng);
    assert_eq!((e.body.pos_x, e.body.pos_y), (4.0, 0.0));
    assert!(e.body.is_visible);
    assert_eq!(rng.requests, vec![(0, 4)]);
}
