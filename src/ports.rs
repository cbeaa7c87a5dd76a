//! Seams between the simulation and the outside world.
//!
//! The core never touches hardware. Everything it reads (time, randomness)
//! or writes (pixels, sound cues) goes through one of these traits, and the
//! runner hands them to `compute::tick` bundled as `Peripherals`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cues for the audio / haptic collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Fired,
    Hit,
    Missed,
}

pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// The physical 5×5 matrix.
pub trait DisplaySink {
    /// `x`, `y` in `0..=4`, `brightness` in `0..=9`.
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8);

    /// End of frame.
    fn present(&mut self);

    /// Show a short text overlay. Blocks until the overlay is gone; the
    /// matrix contents afterwards are undefined.
    fn show_text(&mut self, text: &str);
}

/// Monotonic milliseconds.
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Uniform integer draws, both ends inclusive.
pub trait UniformSource {
    fn uniform(&mut self, low: i32, high: i32) -> i32;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl RandSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandSource(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RandSource(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource for RandSource<R> {
    fn uniform(&mut self, low: i32, high: i32) -> i32 {
        self.0.gen_range(low..=high)
    }
}

/// Wall clock backed by `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Collaborator handles for one tick.
pub struct Peripherals<'a> {
    pub display: &'a mut dyn DisplaySink,
    pub events: &'a mut dyn EventSink,
    pub clock: &'a mut dyn Clock,
    pub rng: &'a mut dyn UniformSource,
}
