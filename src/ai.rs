//! The enemy and its evasive behaviour.
//!
//! The enemy patrols the right-hand column, bouncing between the top and
//! bottom rows. Every so often (sooner at higher difficulty) it picks one of
//! three reactions: dodge the nearest threat, jump a row, or turn around.

use log::trace;

use crate::config::Tuning;
use crate::coords::{self, to_y, MAX_X, MAX_Y, MIN_Y};
use crate::entities::Body;
use crate::framebuffer::FrameBuffer;
use crate::ports::UniformSource;

/// Reaction picked when the evasion countdown runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiAction {
    /// Turn away from the projectile (or the ship if nothing is in flight).
    EvadeThreat,
    /// Hop one row up or down unless that lines up with the projectile.
    EvasiveJump,
    Reverse,
}

impl AiAction {
    /// Map a die roll in `1..=6`: half evade, a third jump, a sixth reverse.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            1..=3 => AiAction::EvadeThreat,
            4 | 5 => AiAction::EvasiveJump,
            _ => AiAction::Reverse,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub base_speed_px_per_s: f32,
    /// Current magnitude after difficulty scaling.
    pub speed_px_per_s: f32,
    pub evade_countdown_ms: f32,
    pub last_action: Option<AiAction>,
    evade_distance: f32,
    max_difficulty: i32,
    reaction_step_ms: f32,
    reaction_base_ms: f32,
}

impl Enemy {
    /// Right edge, random row, heading down.
    pub fn new(tuning: &Tuning, rng: &mut dyn UniformSource) -> Self {
        let row = rng.uniform(MIN_Y as i32, MAX_Y as i32);
        let (lo, hi) = tuning.enemy_first_evade_ms;
        let countdown = rng.uniform(lo, hi);
        let mut body = Body::at(MAX_X, row as f32);
        body.speed_y = coords::to_speed(tuning.enemy_base_speed);
        Self {
            body,
            base_speed_px_per_s: tuning.enemy_base_speed,
            speed_px_per_s: tuning.enemy_base_speed,
            evade_countdown_ms: countdown as f32,
            last_action: None,
            evade_distance: tuning.enemy_evade_distance,
            max_difficulty: tuning.max_difficulty,
            reaction_step_ms: tuning.reaction_step_ms,
            reaction_base_ms: tuning.reaction_base_ms,
        }
    }

    pub fn update(
        &mut self,
        dt_ms: f32,
        difficulty: u32,
        projectile: &Body,
        ship: &Body,
        rng: &mut dyn UniformSource,
    ) {
        self.difficulty_updates(dt_ms, difficulty, projectile, ship, rng);

        self.body.advance(dt_ms, true);

        // Hard bounce wins over whatever the AI chose this tick.
        if self.body.pos_y >= MAX_Y || self.body.pos_y <= MIN_Y {
            self.reflect_speed_y();
        }
    }

    fn difficulty_updates(
        &mut self,
        dt_ms: f32,
        difficulty: u32,
        projectile: &Body,
        ship: &Body,
        rng: &mut dyn UniformSource,
    ) {
        self.speed_px_per_s = self.base_speed_px_per_s * (1.0 + difficulty as f32 / 10.0);
        self.body.speed_y = coords::to_speed(self.speed_px_per_s).copysign(self.body.speed_y);

        self.evade_countdown_ms -= dt_ms;
        if self.evade_countdown_ms >= 0.0 {
            return;
        }

        self.evade_countdown_ms = self.next_reaction_ms(difficulty, rng);

        let action = AiAction::from_roll(rng.uniform(1, 6));
        trace!("enemy picks {:?}, next reaction in {} ms", action, self.evade_countdown_ms);
        self.last_action = Some(action);
        match action {
            AiAction::EvadeThreat => {
                let threat = if projectile.is_visible { projectile } else { ship };
                self.evade_y(threat);
            }
            AiAction::EvasiveJump => self.evasive_jump(projectile, rng),
            AiAction::Reverse => self.reflect_speed_y(),
        }
    }

    /// Never shorter than one step plus the base (70 ms by default).
    fn next_reaction_ms(&self, difficulty: u32, rng: &mut dyn UniformSource) -> f32 {
        let max = self.max_difficulty;
        let upper = (max - difficulty.min(i32::MAX as u32) as i32).max(2);
        let draw = rng.uniform(1, upper).clamp(1, max);
        draw as f32 * self.reaction_step_ms + self.reaction_base_ms
    }

    fn reflect_speed_y(&mut self) {
        self.body.speed_y = -self.body.speed_y;
    }

    /// Turn around if heading toward a visible `threat` within evade range.
    fn evade_y(&mut self, threat: &Body) {
        if !threat.is_visible || (self.body.pos_y - threat.pos_y).abs() > self.evade_distance {
            return;
        }
        let closing = (self.body.pos_y < threat.pos_y && self.body.speed_y > 0.0)
            || (self.body.pos_y > threat.pos_y && self.body.speed_y < 0.0);
        if closing {
            self.reflect_speed_y();
        }
    }

    /// Rejected only when the new row matches the projectile's row; the
    /// clipped advance that follows keeps the enemy on the grid.
    fn evasive_jump(&mut self, projectile: &Body, rng: &mut dyn UniformSource) {
        let step = if rng.uniform(0, 1) == 1 { 1.0 } else { -1.0 };
        let new_pos_y = self.body.pos_y + step;
        if to_y(new_pos_y) != to_y(projectile.pos_y) {
            self.body.pos_y = new_pos_y;
        }
    }

    /// Back to the right edge on a fresh row, visible again.
    pub fn respawn(&mut self, rng: &mut dyn UniformSource) {
        let row = rng.uniform(MIN_Y as i32, MAX_Y as i32);
        self.body.move_to(MAX_X, row as f32);
        self.body.is_visible = true;
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        self.body.draw(fb);
    }
}
