//! Grid geometry for the 5×5 display.
//!
//! Positions are continuous `f32` grid units; pixels are the rounded integer
//! cells `0..=4` on each axis.

pub const MIN_X: f32 = 0.0;
pub const MIN_Y: f32 = 0.0;
pub const MAX_X: f32 = 4.0;
pub const MAX_Y: f32 = 4.0;
pub const CENTER_X: f32 = 2.0;
pub const CENTER_Y: f32 = 2.0;

/// Number of cells along each axis.
pub const GRID: usize = 5;

/// Nearest pixel column. Ties round to even, so 2.5 lands on column 2.
#[inline]
pub fn to_x(x: f32) -> i32 {
    x.round_ties_even() as i32
}

/// Nearest pixel row.
#[inline]
pub fn to_y(y: f32) -> i32 {
    y.round_ties_even() as i32
}

#[inline]
pub fn clip_x(x: f32) -> f32 {
    x.clamp(MIN_X, MAX_X)
}

#[inline]
pub fn clip_y(y: f32) -> f32 {
    y.clamp(MIN_Y, MAX_Y)
}

/// Clamp a single coordinate into `[0, 4]`. Both axes share the same bounds.
#[inline]
pub fn clamp_to_grid(v: f32) -> f32 {
    clip_x(v)
}

/// Units per second → units per millisecond.
#[inline]
pub fn to_speed(units_per_s: f32) -> f32 {
    units_per_s / 1000.0
}

/// True if the rounded cell lies on the visible grid.
#[inline]
pub fn in_grid(px: i32, py: i32) -> bool {
    (0..GRID as i32).contains(&px) && (0..GRID as i32).contains(&py)
}
