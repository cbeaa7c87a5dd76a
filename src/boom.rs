//! Explosion animation.
//!
//! A dot, then a plus, then a plus fading under an X, then a fading X. One
//! second in total, after which the pending completion action is handed back
//! exactly once.

use crate::entities::Body;
use crate::framebuffer::FrameBuffer;

const PLUS: [(f32, f32); 4] = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)];
const CROSS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoomDone {
    /// Bump the difficulty and bring the enemy back.
    AdvanceDifficulty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoomPhase {
    Flash,
    Plus,
    PlusAndCross,
    FadingCross,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoomAnimation {
    pub body: Body,
    pub animation_time_ms: f32,
    pub duration_ms: f32,
    on_done: Option<BoomDone>,
}

impl BoomAnimation {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            body: Body::default(),
            animation_time_ms: 0.0,
            duration_ms,
            on_done: None,
        }
    }

    /// Restart at the current position.
    pub fn start(&mut self, on_done: Option<BoomDone>) {
        self.body.is_visible = true;
        self.animation_time_ms = 0.0;
        self.on_done = on_done;
    }

    pub fn update(&mut self, dt_ms: f32) -> Option<BoomDone> {
        if !self.body.is_visible {
            return None;
        }
        self.animation_time_ms += dt_ms;
        if self.animation_time_ms >= self.duration_ms {
            self.body.is_visible = false;
            return self.on_done.take();
        }
        None
    }

    /// Phase boundaries sit at 10%, 40% and 70% of the duration.
    pub fn phase(&self) -> Option<BoomPhase> {
        if !self.body.is_visible {
            return None;
        }
        let t = self.animation_time_ms / self.duration_ms;
        Some(if t <= 0.1 {
            BoomPhase::Flash
        } else if t <= 0.4 {
            BoomPhase::Plus
        } else if t <= 0.7 {
            BoomPhase::PlusAndCross
        } else {
            BoomPhase::FadingCross
        })
    }

    fn draw_shape(&self, fb: &mut FrameBuffer, shape: &[(f32, f32)], brightness: u8) {
        for (dx, dy) in shape {
            fb.set_pixel(self.body.pos_x + dx, self.body.pos_y + dy, brightness);
        }
    }

    pub fn draw(&self, fb: &mut FrameBuffer) {
        match self.phase() {
            None => {}
            Some(BoomPhase::Flash) => fb.set_pixel(self.body.pos_x, self.body.pos_y, 9),
            Some(BoomPhase::Plus) => self.draw_shape(fb, &PLUS, 9),
            Some(BoomPhase::PlusAndCross) => {
                self.draw_shape(fb, &PLUS, 5);
                self.draw_shape(fb, &CROSS, 9);
            }
            Some(BoomPhase::FadingCross) => self.draw_shape(fb, &CROSS, 4),
        }
    }
}
