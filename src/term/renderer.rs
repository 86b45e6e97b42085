//! TerminalRenderer: flushes the shared canvas to a real terminal.
//!
//! The canvas persists between ticks, so the renderer keeps a copy of the
//! last flushed state and only writes the cells that changed since then,
//! coalesced into horizontal runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::term::canvas::Canvas;
use crate::types::Weight;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Canvas>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush the canvas, emitting only changed cells after the first draw.
    ///
    /// A pending bell cue rides along with the same flush so the sound lands
    /// on the tick that produced it.
    pub fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        if canvas.take_bell() {
            self.stdout.queue(Print('\u{0007}'))?;
        }

        match self.last.take() {
            Some(mut prev)
                if prev.width() == canvas.width() && prev.height() == canvas.height() =>
            {
                self.diff_redraw(canvas, &prev)?;
                // Reuse the old snapshot's buffer for the new one.
                prev.clone_from(canvas);
                self.last = Some(prev);
            }
            _ => {
                self.full_redraw(canvas)?;
                self.last = Some(canvas.clone());
            }
        }
        Ok(())
    }

    fn full_redraw(&mut self, canvas: &Canvas) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current_weight: Option<Weight> = None;
        for row in 0..canvas.height() {
            self.stdout.queue(cursor::MoveTo(0, row))?;
            for col in 0..canvas.width() {
                let cell = canvas.get(row, col).unwrap_or_default();
                if current_weight != Some(cell.weight) {
                    self.apply_weight(cell.weight)?;
                    current_weight = Some(cell.weight);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &Canvas, prev: &Canvas) -> Result<()> {
        let mut current_weight: Option<Weight> = None;

        for_each_changed_run(prev, next, |row, col, len| {
            // Cursor move per run, then print cells in the run.
            self.stdout.queue(cursor::MoveTo(col, row))?;
            for dx in 0..len {
                let cell = next.get(row, col + dx).unwrap_or_default();
                if current_weight != Some(cell.weight) {
                    self.apply_weight(cell.weight)?;
                    current_weight = Some(cell.weight);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_weight(&mut self, weight: Weight) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        match weight {
            Weight::Dim => {
                self.stdout.queue(SetAttribute(Attribute::Dim))?;
            }
            Weight::Bold => {
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            Weight::Normal => {}
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn for_each_changed_run(
    prev: &Canvas,
    next: &Canvas,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for row in 0..next.height() {
            f(row, 0, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for row in 0..h {
        let mut col = 0;
        while col < w {
            let a = prev.get(row, col).unwrap_or_default();
            let b = next.get(row, col).unwrap_or_default();
            if a == b {
                col += 1;
                continue;
            }

            let start = col;
            col += 1;
            while col < w {
                let a2 = prev.get(row, col).unwrap_or_default();
                let b2 = next.get(row, col).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                col += 1;
            }
            f(row, start, col - start)?;
        }
    }

    Ok(())
}
