//! Terminal input.
//!
//! Maps crossterm key events into per-tick [`Controls`] snapshots. The driver
//! pumps events while waiting out the remainder of each tick, then takes one
//! snapshot before the sweep; tasks read the snapshot from the world and
//! never touch the terminal themselves.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Controls;

/// Fold one key event into the pending snapshot.
///
/// Directions overwrite rather than accumulate: several presses of the same
/// arrow within one tick are still a single step of intent, and opposite
/// arrows resolve to whichever came last.
pub fn apply_key_event(controls: &mut Controls, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => controls.row_delta = -1,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => controls.row_delta = 1,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => controls.col_delta = -1,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => controls.col_delta = 1,
        KeyCode::Char(' ') => controls.fire = true,
        _ => {}
    }
    if should_quit(key) {
        controls.quit = true;
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Collects terminal events between ticks into one [`Controls`] snapshot.
#[derive(Default)]
pub struct InputPump {
    pending: Controls,
}

impl InputPump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `timeout` for events, then fold in everything ready.
    ///
    /// This doubles as the tick sleep: the driver calls it with the time left
    /// until the deadline so input latency never exceeds one tick.
    pub fn pump(&mut self, timeout: Duration) -> Result<()> {
        if event::poll(timeout)? {
            loop {
                self.apply(event::read()?);
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, ev: Event) {
        match ev {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    apply_key_event(&mut self.pending, key);
                }
                KeyEventKind::Release => {}
            },
            Event::Resize(_, _) => self.pending.resized = true,
            _ => {}
        }
    }

    /// Take this tick's snapshot, resetting for the next.
    pub fn take(&mut self) -> Controls {
        std::mem::take(&mut self.pending)
    }
}
