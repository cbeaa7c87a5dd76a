/// Keyboard → logical buttons.
///
/// Terminals deliver discrete key presses, so each press simply latches the
/// matching button until the next poll — the "was pressed since last check"
/// contract the simulation expects.

use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use space_pyew::TickInput;

#[derive(Debug, Default)]
pub struct ButtonLatch {
    pending: TickInput,
    pub quit: bool,
}

impl ButtonLatch {
    /// Record one terminal event.
    pub fn feed(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        if *kind != KeyEventKind::Press {
            return;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('a') => self.pending.up = true,
            KeyCode::Down | KeyCode::Char('s') => self.pending.down = true,
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('b') | KeyCode::Char('d') => {
                self.pending.fire = true
            }
            KeyCode::Left | KeyCode::Char('+') => self.pending.difficulty_up = true,
            _ => {}
        }
    }

    /// Drain every queued event without blocking.
    pub fn drain(&mut self, rx: &mpsc::Receiver<Event>) {
        while let Ok(event) = rx.try_recv() {
            self.feed(&event);
        }
    }

    /// Hand out the latched presses and reset them. The keyboard has no
    /// analog axis, so the joystick always reads centred.
    pub fn poll(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_is_reported_once() {
        let mut latch = ButtonLatch::default();
        latch.feed(&press(KeyCode::Char(' ')));
        assert!(latch.poll().fire);
        assert!(!latch.poll().fire);
    }

    #[test]
    fn release_does_not_latch() {
        let mut latch = ButtonLatch::default();
        latch.feed(&Event::Key(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        assert_eq!(latch.poll(), TickInput::default());
    }

    #[test]
    fn buttons_latch_independently() {
        let mut latch = ButtonLatch::default();
        latch.feed(&press(KeyCode::Down));
        latch.feed(&press(KeyCode::Left));
        let input = latch.poll();
        assert!(input.down && input.difficulty_up);
        assert!(!input.up && !input.fire);
        assert_eq!(input.joystick_delta, 0.0);
    }

    #[test]
    fn escape_quits() {
        let mut latch = ButtonLatch::default();
        latch.feed(&press(KeyCode::Esc));
        assert!(latch.quit);
    }
}
