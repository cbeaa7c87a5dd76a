/// Terminal stand-in for the LED matrix and the speaker — all terminal I/O
/// lives here.
///
/// The simulation only ever sees `DisplaySink` / `EventSink`; this module
/// translates those calls into crossterm commands.

mod scroll;

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_pyew::coords::GRID;
use space_pyew::{DisplaySink, EventSink, GameEvent};

// ── Layout & palette ──────────────────────────────────────────────────────────

/// Each LED is two terminal columns wide so the matrix looks square.
const CELL_WIDTH: u16 = 2;
const GRID_LEFT: u16 = 3;
const GRID_TOP: u16 = 3;
const STATUS_ROW: u16 = GRID_TOP + GRID as u16 + 2;
const HINT_ROW: u16 = STATUS_ROW + 2;

const C_TITLE: Color = Color::Cyan;
const C_FRAME: Color = Color::DarkBlue;
const C_OFF: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Red LED at `brightness` (1..=9).
fn led_color(brightness: u8) -> Color {
    let level = brightness.min(9) as u16;
    Color::Rgb {
        r: (60 + level * 21) as u8,
        g: (level * 4) as u8,
        b: (level * 4) as u8,
    }
}

// ── Matrix ────────────────────────────────────────────────────────────────────

pub struct TerminalDisplay<W: Write> {
    out: W,
    /// Delay per column while scrolling text.
    scroll_delay: Duration,
    /// First write failure, surfaced by `check`.
    error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, scroll_delay: Duration) -> Self {
        Self {
            out,
            scroll_delay,
            error: None,
        }
    }

    /// Title, frame and key hints. Drawn once; ticks only touch the LEDs.
    pub fn draw_chrome(&mut self, title: &str) -> io::Result<()> {
        let out = &mut self.out;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        out.queue(cursor::MoveTo(GRID_LEFT, 1))?;
        out.queue(style::SetForegroundColor(C_TITLE))?;
        out.queue(Print(title))?;

        let inner = GRID as u16 * CELL_WIDTH;
        out.queue(style::SetForegroundColor(C_FRAME))?;
        out.queue(cursor::MoveTo(GRID_LEFT - 1, GRID_TOP - 1))?;
        out.queue(Print(format!("┌{}┐", "─".repeat(inner as usize))))?;
        for row in 0..GRID as u16 {
            out.queue(cursor::MoveTo(GRID_LEFT - 1, GRID_TOP + row))?;
            out.queue(Print("│"))?;
            out.queue(cursor::MoveTo(GRID_LEFT + inner, GRID_TOP + row))?;
            out.queue(Print("│"))?;
        }
        out.queue(cursor::MoveTo(GRID_LEFT - 1, GRID_TOP + GRID as u16))?;
        out.queue(Print(format!("└{}┘", "─".repeat(inner as usize))))?;

        out.queue(cursor::MoveTo(0, HINT_ROW))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("↑/W/A : Up   ↓/S : Down   →/SPACE/B : Fire   ← : Level   Q : Quit"))?;

        out.queue(style::ResetColor)?;
        out.flush()?;

        for y in 0..GRID as u8 {
            for x in 0..GRID as u8 {
                self.queue_led(x, y, 0)?;
            }
        }
        self.out.flush()
    }

    fn queue_led(&mut self, x: u8, y: u8, brightness: u8) -> io::Result<()> {
        let col = GRID_LEFT + x as u16 * CELL_WIDTH;
        self.out.queue(cursor::MoveTo(col, GRID_TOP + y as u16))?;
        if brightness == 0 {
            self.out.queue(style::SetForegroundColor(C_OFF))?;
            self.out.queue(Print("··"))?;
        } else {
            self.out.queue(style::SetForegroundColor(led_color(brightness)))?;
            self.out.queue(Print("██"))?;
        }
        Ok(())
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }

    /// Returns the first I/O error any sink call ran into.
    pub fn check(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn scroll_text(&mut self, text: &str) -> io::Result<()> {
        for frame in scroll::frames(text) {
            for (x, column) in frame.iter().enumerate() {
                for (y, &v) in column.iter().enumerate() {
                    self.queue_led(x as u8, y as u8, v)?;
                }
            }
            self.out.queue(style::ResetColor)?;
            self.out.flush()?;
            thread::sleep(self.scroll_delay);
        }
        Ok(())
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        let result = self.queue_led(x, y, brightness);
        self.record(result);
    }

    fn present(&mut self) {
        let result = self
            .out
            .queue(style::ResetColor)
            .and_then(|out| out.flush());
        self.record(result);
    }

    fn show_text(&mut self, text: &str) {
        let result = self.scroll_text(text);
        self.record(result);
    }
}

// ── Sound cues ────────────────────────────────────────────────────────────────

/// Rings the terminal bell on a hit and names the last cue under the matrix.
pub struct TerminalSfx<W: Write> {
    out: W,
}

impl<W: Write> TerminalSfx<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn play(&mut self, event: GameEvent) -> io::Result<()> {
        let (word, color) = match event {
            GameEvent::Fired => ("pyew!", Color::Cyan),
            GameEvent::Hit => ("BOOM!", Color::Yellow),
            GameEvent::Missed => ("miss…", Color::DarkGrey),
        };
        self.out.queue(cursor::MoveTo(GRID_LEFT, STATUS_ROW))?;
        self.out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(word))?;
        if event == GameEvent::Hit {
            self.out.queue(Print('\x07'))?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> EventSink for TerminalSfx<W> {
    fn notify(&mut self, event: GameEvent) {
        log::info!("sound cue {:?}", event);
        if let Err(e) = self.play(event) {
            log::warn!("failed to play {:?}: {}", event, e);
        }
    }
}
