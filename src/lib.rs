//! Space Pyew — a one-ship, one-enemy arcade game for a 5×5 pixel display.
//!
//! Core modules:
//! - `coords`: grid bounds, rounding, clamping and unit conversion
//! - `entities`: the shared `Body` record and the Ship / Projectile variants
//! - `ai`: the enemy's evasive state machine
//! - `boom`: the explosion animation
//! - `framebuffer`: double-buffered differential renderer
//! - `compute`: collision, game events and the per-tick sequence
//! - `ports`: traits for the display, event sink, clock and random source
//! - `config`: gameplay tuning constants

pub mod ai;
pub mod boom;
pub mod compute;
pub mod config;
pub mod coords;
pub mod entities;
pub mod framebuffer;
pub mod ports;

pub use compute::{GameState, TickInput};
pub use config::Tuning;
pub use framebuffer::FrameBuffer;
pub use ports::{Clock, DisplaySink, EventSink, GameEvent, Peripherals, RandSource, UniformSource};
