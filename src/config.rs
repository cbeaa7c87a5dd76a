//! Gameplay tuning.
//!
//! Speeds are stored in pixels per second as authored; the simulation
//! converts them with `coords::to_speed` where it needs pixels per ms.

/// Default tuning values.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Enemy
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_EVADE_DISTANCE: f32 = 2.0;
    pub const ENEMY_FIRST_EVADE_MS: (i32, i32) = (5000, 10000);
    /// Difficulty at which the enemy's reaction interval stops shrinking.
    pub const MAX_DIFFICULTY: i32 = 50;
    pub const REACTION_STEP_MS: f32 = 20.0;
    pub const REACTION_BASE_MS: f32 = 50.0;

    // Ship
    pub const SHIP_GRAVITY: f32 = 0.02;
    pub const BUTTON_PRESS_SPEED: f32 = 2.0;
    pub const JOYSTICK_DEADZONE: f32 = 3.0;
    pub const JOYSTICK_SCALE: f32 = 32.0;

    // Projectile
    pub const PROJECTILE_SPEED: f32 = 6.0;

    // Explosion
    pub const BOOM_DURATION_MS: f32 = 1000.0;
}

/// Runtime tuning, one value per game.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub enemy_base_speed: f32,
    pub enemy_evade_distance: f32,
    pub enemy_first_evade_ms: (i32, i32),
    pub max_difficulty: i32,
    pub reaction_step_ms: f32,
    pub reaction_base_ms: f32,
    /// Pixels per second gained per millisecond of fall.
    pub ship_gravity: f32,
    pub button_press_speed: f32,
    pub joystick_deadzone: f32,
    pub joystick_scale: f32,
    pub projectile_speed: f32,
    pub boom_duration_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_base_speed: Params::ENEMY_BASE_SPEED,
            enemy_evade_distance: Params::ENEMY_EVADE_DISTANCE,
            enemy_first_evade_ms: Params::ENEMY_FIRST_EVADE_MS,
            max_difficulty: Params::MAX_DIFFICULTY,
            reaction_step_ms: Params::REACTION_STEP_MS,
            reaction_base_ms: Params::REACTION_BASE_MS,
            ship_gravity: Params::SHIP_GRAVITY,
            button_press_speed: Params::BUTTON_PRESS_SPEED,
            joystick_deadzone: Params::JOYSTICK_DEADZONE,
            joystick_scale: Params::JOYSTICK_SCALE,
            projectile_speed: Params::PROJECTILE_SPEED,
            boom_duration_ms: Params::BOOM_DURATION_MS,
        }
    }
}
