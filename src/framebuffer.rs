//! Double-buffered differential renderer.
//!
//! Entities draw into the front grid; `commit` pushes only the cells that
//! differ from the last presented frame, then swaps the grids.

use std::mem;

use crate::coords::{in_grid, to_x, to_y, GRID};
use crate::ports::DisplaySink;

pub const MAX_BRIGHTNESS: u8 = 9;

pub type Grid = [[u8; GRID]; GRID];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameBuffer {
    /// Frame being drawn, indexed `[y][x]`.
    front: Grid,
    /// Frame currently on the display.
    back: Grid,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write at the rounded position. Cells off the grid are dropped.
    pub fn set_pixel(&mut self, x: f32, y: f32, brightness: u8) {
        let (px, py) = (to_x(x), to_y(y));
        if in_grid(px, py) {
            self.front[py as usize][px as usize] = brightness.min(MAX_BRIGHTNESS);
        }
    }

    pub fn clear(&mut self) {
        self.front = Grid::default();
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.front[y][x]
    }

    pub fn front(&self) -> &Grid {
        &self.front
    }

    /// The last presented frame.
    pub fn presented(&self) -> &Grid {
        &self.back
    }

    /// Send changed cells, present, swap. Returns the number of pixel writes.
    pub fn commit(&mut self, sink: &mut dyn DisplaySink) -> usize {
        let mut writes = 0;
        for y in 0..GRID {
            for x in 0..GRID {
                let new_px = self.front[y][x];
                if self.back[y][x] != new_px {
                    sink.set_pixel(x as u8, y as u8, new_px);
                    writes += 1;
                }
            }
        }
        sink.present();
        mem::swap(&mut self.front, &mut self.back);
        writes
    }

    /// Darken the display and both grids.
    ///
    /// The first commit writes zero over every lit cell; the second leaves
    /// the swapped-in grid zeroed as well.
    pub fn blank(&mut self, sink: &mut dyn DisplaySink) {
        self.clear();
        self.commit(sink);
        self.clear();
        self.commit(sink);
    }

    /// Forget what the display shows and darken it.
    ///
    /// Used after an overlay, when the hardware state is unknown: every cell
    /// gets an explicit zero write.
    pub fn reset(&mut self, sink: &mut dyn DisplaySink) {
        self.back = [[MAX_BRIGHTNESS + 1; GRID]; GRID];
        self.blank(sink);
    }
}
