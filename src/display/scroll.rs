/// Column strips for scrolling text across the 5×5 matrix.
///
/// Only digits have glyphs; anything else scrolls past as a short blank.

use space_pyew::coords::GRID;
use space_pyew::framebuffer::MAX_BRIGHTNESS;

pub type Column = [u8; GRID];

const DIGITS: [[&str; GRID]; 10] = [
    [" ## ", "#  #", "#  #", "#  #", " ## "],
    [" # ", "## ", " # ", " # ", "###"],
    ["### ", "   #", " ## ", "#   ", "####"],
    ["### ", "   #", " ## ", "   #", "### "],
    ["  # ", " ## ", "# # ", "####", "  # "],
    ["####", "#   ", "### ", "   #", "### "],
    [" ## ", "#   ", "### ", "#  #", " ## "],
    ["####", "   #", "  # ", " #  ", "#   "],
    [" ## ", "#  #", " ## ", "#  #", " ## "],
    [" ## ", "#  #", " ###", "   #", " ## "],
];

const BLANK_GLYPH_WIDTH: usize = 3;

fn glyph_columns(c: char) -> Vec<Column> {
    let Some(rows) = c.to_digit(10).map(|d| &DIGITS[d as usize]) else {
        return vec![[0; GRID]; BLANK_GLYPH_WIDTH];
    };
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    (0..width)
        .map(|x| {
            let mut col = [0; GRID];
            for (y, row) in rows.iter().enumerate() {
                if row.as_bytes().get(x) == Some(&b'#') {
                    col[y] = MAX_BRIGHTNESS;
                }
            }
            col
        })
        .collect()
}

/// The whole strip, framed by a screen's width of darkness on both sides so
/// the text slides fully in and fully out.
pub fn strip(text: &str) -> Vec<Column> {
    let mut cols = vec![[0; GRID]; GRID];
    for c in text.chars() {
        cols.extend(glyph_columns(c));
        cols.push([0; GRID]);
    }
    cols.extend(std::iter::repeat([0; GRID]).take(GRID));
    cols
}

/// Every 5-column window of the strip, left to right.
pub fn frames(text: &str) -> Vec<Vec<Column>> {
    strip(text).windows(GRID).map(|w| w.to_vec()).collect()
}
