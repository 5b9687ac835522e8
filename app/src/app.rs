use std::{io::Write, thread, time::Duration};

use anyhow::Context;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use gol::Life;

use crate::render::{Frame, Glyphs};

#[derive(Clone, Debug)]
pub struct Settings {
    /// Pause after each frame.
    pub delay: Duration,
    /// Stop after this many frames. `None` runs until the process is killed.
    pub frames: Option<u64>,
    pub glyphs: Glyphs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(100),
            frames: None,
            glyphs: Glyphs::default(),
        }
    }
}

pub struct App<const W: usize, const H: usize> {
    life: Life<W, H>,
    settings: Settings,
}

impl<const W: usize, const H: usize> App<W, H> {
    pub fn new(life: Life<W, H>, settings: Settings) -> Self {
        Self { life, settings }
    }

    pub fn life(&self) -> &Life<W, H> {
        &self.life
    }

    pub fn run(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        log::info!(
            "running {}x{} board from generation {} with {} live cells, {:?} per frame",
            W,
            H,
            self.life.generation(),
            self.life.population(),
            self.settings.delay,
        );
        let mut shown = 0;
        while self.settings.frames.is_none_or(|frames| shown < frames) {
            self.update(out)?;
            shown += 1;
            thread::sleep(self.settings.delay);
        }
        log::info!("stopped after {shown} frames");
        Ok(())
    }

    /// Draws the current generation, then advances the board by one.
    pub fn update(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        // A terminal that can't be cleared just scrolls.
        if let Err(err) = execute!(out, Clear(ClearType::All), MoveTo(0, 0)) {
            log::warn!("failed to clear terminal: {err}");
        }
        write!(out, "{}", Frame::new(&self.life, &self.settings.glyphs))
            .context("failed to write frame")?;
        out.flush().context("failed to flush frame")?;
        self.life.next_generation();
        log::trace!(
            "generation {}, population {}",
            self.life.generation(),
            self.life.population()
        );
        Ok(())
    }
}
