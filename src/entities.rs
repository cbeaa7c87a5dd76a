//! Game entities.
//!
//! Every entity wraps a `Body` (position, velocity, visibility). The set of
//! entity kinds is closed; `Entity` borrows one of them for drawing.

use crate::ai::Enemy;
use crate::boom::BoomAnimation;
use crate::coords::{self, clip_x, clip_y, CENTER_Y, MAX_X, MAX_Y, MIN_X, MIN_Y};
use crate::framebuffer::FrameBuffer;

/// Brightness for plain single-pixel sprites.
pub const SPRITE_BRIGHTNESS: u8 = 5;

// ── Shared body ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub pos_x: f32,
    pub pos_y: f32,
    /// Grid units per ms.
    pub speed_x: f32,
    pub speed_y: f32,
    pub is_visible: bool,
}

impl Body {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos_x: x,
            pos_y: y,
            is_visible: true,
            ..Self::default()
        }
    }

    /// Integrate velocity over `dt_ms`, optionally clamping onto the grid.
    pub fn advance(&mut self, dt_ms: f32, clip: bool) {
        self.pos_x += self.speed_x * dt_ms;
        self.pos_y += self.speed_y * dt_ms;
        if clip {
            self.pos_x = clip_x(self.pos_x);
            self.pos_y = clip_y(self.pos_y);
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos_x = x;
        self.pos_y = y;
    }

    pub fn move_to_body(&mut self, other: &Body) {
        self.move_to(other.pos_x, other.pos_y);
    }

    pub fn pixel(&self) -> (i32, i32) {
        (coords::to_x(self.pos_x), coords::to_y(self.pos_y))
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        if self.is_visible {
            fb.set_pixel(self.pos_x, self.pos_y, SPRITE_BRIGHTNESS);
        }
    }
}

// ── Ship ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub body: Body,
    /// Units per ms gained per ms.
    pub gravity_acc: f32,
}

impl Ship {
    /// Left edge, vertical centre.
    pub fn new(gravity_px_per_s: f32) -> Self {
        Self {
            body: Body::at(MIN_X, CENTER_Y),
            gravity_acc: coords::to_speed(gravity_px_per_s),
        }
    }

    pub fn update(&mut self, dt_ms: f32) {
        self.body.speed_y += dt_ms * self.gravity_acc;
        self.body.advance(dt_ms, true);
        // Resting on the floor must not bank speed.
        if self.body.pos_y >= MAX_Y {
            self.body.speed_y = 0.0;
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        self.body.draw(fb);
    }
}

// ── Projectile ───────────────────────────────────────────────────────────────

/// Deferred work for when a shot leaves the grid without hitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissAction {
    NotifyMissed,
}

pub const PROJECTILE_BRIGHTNESS: u8 = 9;
pub const TRAIL_BRIGHTNESS: u8 = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    pub body: Body,
    on_miss: Option<MissAction>,
}

impl Projectile {
    /// Invisible until fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch from `origin`. Callers must not fire while a shot is in flight.
    pub fn fire(&mut self, origin: &Body, speed_x: f32, on_miss: MissAction) {
        debug_assert!(!self.body.is_visible, "projectile already in flight");
        self.body.move_to_body(origin);
        self.body.is_visible = true;
        self.body.speed_x = speed_x;
        self.on_miss = Some(on_miss);
    }

    /// Returns the miss action on the tick the shot leaves the extended grid.
    pub fn update(&mut self, dt_ms: f32) -> Option<MissAction> {
        if !self.body.is_visible {
            return None;
        }
        self.body.advance(dt_ms, false);
        let b = &self.body;
        if b.pos_x > MAX_X + 1.0
            || b.pos_x < MIN_X - 1.0
            || b.pos_y < MIN_Y - 1.0
            || b.pos_y > MAX_Y + 1.0
        {
            return self.on_miss();
        }
        None
    }

    fn on_miss(&mut self) -> Option<MissAction> {
        self.body.is_visible = false;
        self.on_miss.take()
    }

    /// Hide without reporting a miss.
    pub fn absorb(&mut self) {
        self.body.is_visible = false;
        self.on_miss = None;
    }

    pub fn has_pending_miss(&self) -> bool {
        self.on_miss.is_some()
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        if self.body.is_visible {
            fb.set_pixel(self.body.pos_x, self.body.pos_y, PROJECTILE_BRIGHTNESS);
            fb.set_pixel(self.body.pos_x - 1.0, self.body.pos_y, TRAIL_BRIGHTNESS);
        }
    }
}

// ── Closed variant set ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub enum Entity<'a> {
    Projectile(&'a Projectile),
    Boom(&'a BoomAnimation),
    Enemy(&'a Enemy),
    Ship(&'a Ship),
}

impl Entity<'_> {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Projectile(p) => &p.body,
            Entity::Boom(b) => &b.body,
            Entity::Enemy(e) => &e.body,
            Entity::Ship(s) => &s.body,
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        match self {
            Entity::Projectile(p) => p.draw(fb),
            Entity::Boom(b) => b.draw(fb),
            Entity::Enemy(e) => e.draw(fb),
            Entity::Ship(s) => s.draw(fb),
        }
    }
}
