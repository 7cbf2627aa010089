use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use crate::story::graph::StoryGraph;
use crate::story::scene::{Choice, SceneKind};

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Typewriter pacing for narrative output.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Delay inserted after each rendered character.
    pub char_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(50),
        }
    }
}

impl Pacing {
    /// No delay between characters. Tests use this to keep playthroughs
    /// instantaneous.
    pub fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Ending
// ---------------------------------------------------------------------------

/// The player's fate once a terminal scene is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Survived,
    Died,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Drives the player from the start scene through choices to one ending.
///
/// Input and output are injected so the binary can hand over locked
/// stdin/stdout while tests script a playthrough against captured output.
pub struct Engine<R, W> {
    input: R,
    output: W,
    pacing: Pacing,
}

impl<R: BufRead, W: Write> Engine<R, W> {
    pub fn new(input: R, output: W, pacing: Pacing) -> Self {
        Self {
            input,
            output,
            pacing,
        }
    }

    /// Play the story from the graph's start scene to an ending.
    ///
    /// The current scene id is the only mutable state: each turn looks the
    /// scene up, renders it, and replaces the id with the chosen target.
    pub fn run(&mut self, graph: &StoryGraph) -> Result<Ending> {
        self.show_title()?;

        let mut scene_id = graph.start_scene_id.clone();
        info!("story started at scene {scene_id}");

        loop {
            let scene = graph
                .get(&scene_id)
                .with_context(|| format!("unknown scene id: {scene_id}"))?;

            writeln!(self.output)?;
            for line in &scene.lines {
                self.render_slow(line)?;
            }

            match &scene.kind {
                SceneKind::Outcome { survived } => {
                    let ending = if *survived {
                        Ending::Survived
                    } else {
                        Ending::Died
                    };
                    info!("story ended at scene {} ({ending:?})", scene.id);
                    self.show_ending(ending)?;
                    return Ok(ending);
                }
                SceneKind::Passage { next } => {
                    info!("passage: {} -> {}", scene.id, next);
                    scene_id = next.clone();
                }
                SceneKind::Choice(choice) => {
                    let target = self.prompt(choice)?;
                    info!("transition: {} -> {}", scene.id, target);
                    scene_id = target;
                }
            }
        }
    }

    /// Write text one character at a time with the configured delay.
    fn render_slow(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            write!(self.output, "{ch}")?;
            self.output.flush()?;
            if !self.pacing.char_delay.is_zero() {
                thread::sleep(self.pacing.char_delay);
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Show the option menu and read tokens until one matches, then return
    /// the target scene id. Invalid tokens re-display the same menu; the
    /// retry is unbounded and never advances the story.
    fn prompt(&mut self, choice: &Choice) -> Result<String> {
        loop {
            writeln!(self.output)?;
            for opt in &choice.options {
                writeln!(self.output, "{}. {}", opt.token, opt.label)?;
            }
            let tokens = choice.tokens().collect::<Vec<_>>().join(" or ");
            write!(self.output, "Enter your choice ({tokens}): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            if read == 0 {
                bail!("input closed before the story ended");
            }
            let token = line.trim();
            debug!("player entered token {token:?}");

            match choice.target_for(token) {
                Some(target) => return Ok(target.to_string()),
                None => {
                    warn!("invalid choice token {token:?}");
                    self.render_slow("Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn show_title(&mut self) -> Result<()> {
        writeln!(self.output, "========================================")?;
        writeln!(self.output, "        DARKWOOD: SURVIVE THE NIGHT")?;
        writeln!(self.output, "========================================")?;
        writeln!(self.output, "Answer each prompt with the number of your choice.")?;
        Ok(())
    }

    fn show_ending(&mut self, ending: Ending) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "========================================")?;
        writeln!(self.output, "             THE NIGHT ENDS")?;
        writeln!(self.output, "========================================")?;
        match ending {
            Ending::Survived => writeln!(self.output, "  You made it through alive.")?,
            Ending::Died => writeln!(self.output, "  The forest claimed you.")?,
        }
        writeln!(self.output, "========================================")?;
        Ok(())
    }
}
