#![allow(dead_code)]

use std::collections::VecDeque;

use space_pyew::ports::{Clock, DisplaySink, EventSink, GameEvent, Peripherals, UniformSource};

/// Hands out a fixed sequence of draws and records every range asked for.
/// Panics when a draw is out of range or the script runs dry, so tests also
/// prove how many draws a step makes.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    draws: VecDeque<i32>,
    pub requests: Vec<(i32, i32)>,
}

impl ScriptedRng {
    pub fn new(draws: &[i32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            requests: Vec::new(),
        }
    }

    pub fn push(&mut self, draws: &[i32]) {
        self.draws.extend(draws.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl UniformSource for ScriptedRng {
    fn uniform(&mut self, low: i32, high: i32) -> i32 {
        self.requests.push((low, high));
        let v = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted draw in {}..={}", low, high));
        assert!((low..=high).contains(&v), "scripted {} outside {}..={}", v, low, high);
        v
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub writes: Vec<(u8, u8, u8)>,
    pub presents: usize,
    pub texts: Vec<String>,
}

impl DisplaySink for RecordingDisplay {
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        self.writes.push((x, y, brightness));
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn show_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingEvents {
    pub events: Vec<GameEvent>,
}

impl EventSink for RecordingEvents {
    fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    pub now: f64,
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now
    }
}

/// All four collaborators in one place.
#[derive(Debug, Default)]
pub struct Rig {
    pub display: RecordingDisplay,
    pub events: RecordingEvents,
    pub clock: ManualClock,
    pub rng: ScriptedRng,
}

impl Rig {
    pub fn with_draws(draws: &[i32]) -> Self {
        Self {
            rng: ScriptedRng::new(draws),
            ..Self::default()
        }
    }

    pub fn hw(&mut self) -> Peripherals<'_> {
        Peripherals {
            display: &mut self.display,
            events: &mut self.events,
            clock: &mut self.clock,
            rng: &mut self.rng,
        }
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
