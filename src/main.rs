mod display;
mod keys;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::{cursor, event::{self, Event}, terminal, ExecutableCommand};
use log::info;

use space_pyew::compute::{tick, GameState};
use space_pyew::ports::{Peripherals, RandSource, SystemClock};
use space_pyew::Tuning;

use display::{TerminalDisplay, TerminalSfx};
use keys::ButtonLatch;

const TITLE: &str = "SpacePyew!";

/// Idle between ticks.
const IDLE: Duration = Duration::from_millis(10);

/// Per-column delay while the score scrolls past.
const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Set to an integer for a reproducible game.
const SEED_VAR: &str = "SPACE_PYEW_SEED";

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write, S: Write>(
    display: &mut TerminalDisplay<W>,
    sfx: &mut TerminalSfx<S>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = match std::env::var(SEED_VAR).ok().and_then(|s| s.trim().parse().ok()) {
        Some(seed) => {
            info!("seeding from {}={}", SEED_VAR, seed);
            RandSource::seeded(seed)
        }
        None => RandSource::from_entropy(),
    };
    let mut clock = SystemClock::new();
    let mut state = GameState::new(Tuning::default(), &mut rng);
    let mut latch = ButtonLatch::default();

    display.draw_chrome(TITLE)?;

    loop {
        latch.drain(rx);
        if latch.quit {
            info!("quit at difficulty {}", state.difficulty);
            return Ok(());
        }
        let input = latch.poll();

        let mut hw = Peripherals {
            display: &mut *display,
            events: &mut *sfx,
            clock: &mut clock,
            rng: &mut rng,
        };
        tick(&mut state, &input, &mut hw);
        display.check()?;

        thread::sleep(IDLE);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Logs go to stderr; redirect it when playing, e.g. `2>pyew.log`.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Blocking reads live on their own thread so a tick never waits on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    info!("{} starting", TITLE);
    let mut display = TerminalDisplay::new(out, SCROLL_DELAY);
    let mut sfx = TerminalSfx::new(BufWriter::new(stdout()));
    let result = game_loop(&mut display, &mut sfx, &rx);
    drop(display);
    drop(sfx);

    // Always restore the terminal
    let mut out = stdout();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
