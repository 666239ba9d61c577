use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{SimConfig, Simulation};
use crate::input::{InputHandler, IntentSampler, KeyAction};
use crate::metrics::SessionMetrics;

/// Keyboard-driven frame driver.
///
/// Samples key presses once per frame and feeds them to the simulation with
/// the measured frame time. A collision ends the session until restart.
pub struct LiveMode {
    config: SimConfig,
    sim: Simulation,
    metrics: SessionMetrics,
    input_handler: InputHandler,
    sampler: IntentSampler,
    frame_interval: Duration,
    game_over: bool,
    should_quit: bool,
}

impl LiveMode {
    pub fn new(config: SimConfig, frame_interval: Duration) -> Result<Self> {
        let mut sim = Simulation::new(&config).context("Invalid simulation config")?;
        sim.grow(config.initial_length - 1);

        Ok(Self {
            config,
            sim,
            metrics: SessionMetrics::new(),
            input_handler: InputHandler::new(),
            sampler: IntentSampler::new(),
            frame_interval,
            game_over: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        log::info!("steer with arrows/WASD, r to restart, q to quit");
        let result = self.run_frame_loop().await;

        disable_raw_mode().context("Failed to disable raw mode")?;

        self.metrics.update();
        log::info!("{}", self.metrics.summary());

        result
    }

    async fn run_frame_loop(&mut self) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Frame update
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    let elapsed = now.duration_since(last_frame);
                    last_frame = now;
                    self.update_frame(elapsed);
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.sampler.press(direction),
                KeyAction::Restart => self.reset_session(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_frame(&mut self, elapsed: Duration) {
        let intents = self.sampler.sample();
        if self.game_over {
            return;
        }

        let outcome = self.sim.update(elapsed, intents);
        self.metrics.on_frame(&outcome, self.sim.len());

        if outcome.moves > 0 {
            let head = self.sim.head();
            log::debug!(
                "head at ({}, {}) heading {:?}, {} segments",
                head.at.x,
                head.at.y,
                head.direction,
                self.sim.len()
            );
        }

        if let Some(collision) = outcome.collision {
            log::info!(
                "collided with segment {} at ({}, {}) after {} moves; press r to restart",
                collision.segment_index,
                collision.cell.x,
                collision.cell.y,
                collision.tick
            );
            self.end_session();
        }
    }

    fn end_session(&mut self) {
        self.game_over = true;
        self.metrics.on_session_end();
    }

    fn reset_session(&mut self) {
        if !self.game_over {
            self.metrics.on_session_end();
        }

        self.sim.initialize(self.config.start(), self.config.stride);
        self.sim.grow(self.config.initial_length - 1);
        self.sampler.clear();
        self.metrics.on_session_start();
        self.game_over = false;
        log::info!("session restarted");
    }
}
