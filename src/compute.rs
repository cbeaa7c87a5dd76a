//! Game rules and the per-tick sequence.
//!
//! `tick` is the only entry point the runner needs: it measures elapsed time,
//! applies the latched input, steps every entity, resolves hits and misses,
//! and pushes the resulting frame through the differential renderer. All
//! randomness and I/O go through the injected `Peripherals`.

use log::debug;

use crate::ai::Enemy;
use crate::boom::{BoomAnimation, BoomDone};
use crate::config::Tuning;
use crate::coords::{self, to_x, to_y};
use crate::entities::{Entity, MissAction, Projectile, Ship};
use crate::framebuffer::FrameBuffer;
use crate::ports::{GameEvent, Peripherals, UniformSource};

/// Input for one tick. Buttons are "pressed since last poll".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Centred joystick deflection; positive pushes the ship up.
    pub joystick_delta: f32,
    pub down: bool,
    pub up: bool,
    pub fire: bool,
    pub difficulty_up: bool,
}

/// Elapsed-time bookkeeping for the loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameTimer {
    start_ms: Option<f64>,
}

impl FrameTimer {
    /// Milliseconds since the previous lap; zero on the first call.
    pub fn lap(&mut self, now_ms: f64) -> f32 {
        let dt = match self.start_ms {
            Some(start) => (now_ms - start).max(0.0),
            None => 0.0,
        };
        self.start_ms = Some(now_ms);
        dt as f32
    }
}

// ── Game state ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    pub enemy: Enemy,
    pub projectile: Projectile,
    pub boom: BoomAnimation,
    pub difficulty: u32,
    pub display: FrameBuffer,
    pub timer: FrameTimer,
    pub tuning: Tuning,
    /// Elapsed time used for the most recent tick.
    pub delta_t_ms: f32,
}

impl GameState {
    pub fn new(tuning: Tuning, rng: &mut dyn UniformSource) -> Self {
        Self {
            ship: Ship::new(tuning.ship_gravity),
            enemy: Enemy::new(&tuning, rng),
            projectile: Projectile::new(),
            boom: BoomAnimation::new(tuning.boom_duration_ms),
            difficulty: 0,
            display: FrameBuffer::new(),
            timer: FrameTimer::default(),
            tuning,
            delta_t_ms: 0.0,
        }
    }

    /// Back-to-front: later entries overwrite earlier ones.
    pub fn draw_order(&self) -> [Entity<'_>; 4] {
        [
            Entity::Projectile(&self.projectile),
            Entity::Boom(&self.boom),
            Entity::Enemy(&self.enemy),
            Entity::Ship(&self.ship),
        ]
    }
}

// ── One tick ─────────────────────────────────────────────────────────────────

pub fn tick(state: &mut GameState, input: &TickInput, hw: &mut Peripherals<'_>) {
    state.delta_t_ms = state.timer.lap(hw.clock.now_ms());
    process_input(state, input, hw);
    update_game_state(state, hw);
    draw(state, hw);
}

pub fn process_input(state: &mut GameState, input: &TickInput, hw: &mut Peripherals<'_>) {
    let t = &state.tuning;
    if input.joystick_delta.abs() > t.joystick_deadzone {
        state.ship.body.speed_y = -coords::to_speed(input.joystick_delta / t.joystick_scale);
    }

    let press_speed = coords::to_speed(t.button_press_speed);
    if input.down {
        state.ship.body.pos_y += 1.0;
        state.ship.body.speed_y = press_speed;
    }
    if input.up {
        state.ship.body.pos_y -= 1.0;
        state.ship.body.speed_y = -press_speed;
    }

    if input.fire {
        ship_fires(state, hw);
    }
    if input.difficulty_up {
        increase_difficulty(state, hw);
    }
}

pub fn update_game_state(state: &mut GameState, hw: &mut Peripherals<'_>) {
    let dt = state.delta_t_ms;

    state.ship.update(dt);

    if let Some(action) = state.projectile.update(dt) {
        run_miss_action(action, hw);
    }

    state.enemy.update(
        dt,
        state.difficulty,
        &state.projectile.body,
        &state.ship.body,
        hw.rng,
    );

    check_projectile_hits_enemy(state, hw);

    if let Some(done) = state.boom.update(dt) {
        run_boom_done(state, done, hw);
    }
}

pub fn draw(state: &mut GameState, hw: &mut Peripherals<'_>) {
    let mut fb = std::mem::take(&mut state.display);
    fb.clear();
    for entity in state.draw_order() {
        entity.draw(&mut fb);
    }
    fb.commit(hw.display);
    state.display = fb;
}

// ── Events ───────────────────────────────────────────────────────────────────

/// Fire if nothing is in flight and there is something to shoot at.
pub fn ship_fires(state: &mut GameState, hw: &mut Peripherals<'_>) -> bool {
    if state.projectile.body.is_visible || !state.enemy.body.is_visible {
        return false;
    }
    hw.events.notify(GameEvent::Fired);
    let speed = coords::to_speed(state.tuning.projectile_speed);
    state
        .projectile
        .fire(&state.ship.body, speed, MissAction::NotifyMissed);
    debug!("fired from row {}", to_y(state.ship.body.pos_y));
    true
}

/// Projectile column at or past the enemy's, same row.
///
/// One-sided on purpose: a fast shot can skip the enemy's column entirely
/// within a single tick.
pub fn projectile_hits_enemy(state: &GameState) -> bool {
    let (p, e) = (&state.projectile.body, &state.enemy.body);
    p.is_visible && e.is_visible && to_x(p.pos_x) >= to_x(e.pos_x) && to_y(p.pos_y) == to_y(e.pos_y)
}

pub fn check_projectile_hits_enemy(state: &mut GameState, hw: &mut Peripherals<'_>) -> bool {
    if !projectile_hits_enemy(state) {
        return false;
    }
    on_hit_enemy(state, hw);
    true
}

fn on_hit_enemy(state: &mut GameState, hw: &mut Peripherals<'_>) {
    debug!(
        "hit enemy at ({}, {}) on difficulty {}",
        to_x(state.enemy.body.pos_x),
        to_y(state.enemy.body.pos_y),
        state.difficulty
    );
    state.enemy.body.is_visible = false;
    state.projectile.absorb();
    hw.events.notify(GameEvent::Hit);
    state.boom.body.move_to_body(&state.enemy.body);
    state.boom.start(Some(BoomDone::AdvanceDifficulty));
}

fn run_miss_action(action: MissAction, hw: &mut Peripherals<'_>) {
    match action {
        MissAction::NotifyMissed => {
            debug!("shot missed");
            hw.events.notify(GameEvent::Missed);
        }
    }
}

fn run_boom_done(state: &mut GameState, done: BoomDone, hw: &mut Peripherals<'_>) {
    match done {
        BoomDone::AdvanceDifficulty => {
            increase_difficulty(state, hw);
            respawn_enemy(state, hw);
        }
    }
}

/// Bump difficulty and show it. The overlay blocks, so the frame timer is
/// restarted afterwards to keep its duration out of the physics.
pub fn increase_difficulty(state: &mut GameState, hw: &mut Peripherals<'_>) {
    state.difficulty += 1;
    debug!("difficulty now {}", state.difficulty);
    hw.display.show_text(&state.difficulty.to_string());
    state.display.reset(hw.display);
    state.delta_t_ms = state.timer.lap(hw.clock.now_ms());
}

pub fn respawn_enemy(state: &mut GameState, hw: &mut Peripherals<'_>) {
    state.enemy.respawn(hw.rng);
    debug!("enemy respawned on row {}", to_y(state.enemy.body.pos_y));
}
