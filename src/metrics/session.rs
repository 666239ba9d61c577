use std::time::{Duration, Instant};

use crate::game::UpdateOutcome;

/// Counters a frame driver keeps across sessions
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub frames: u64,
    pub moves: u64,
    pub collisions: u32,
    pub sessions_played: u32,
    pub longest_chain: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            frames: 0,
            moves: 0,
            collisions: 0,
            sessions_played: 0,
            longest_chain: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Record one frame's update outcome
    pub fn on_frame(&mut self, outcome: &UpdateOutcome, chain_len: usize) {
        self.frames += 1;
        self.moves += u64::from(outcome.moves);
        if outcome.collision.is_some() {
            self.collisions += 1;
        }
        self.longest_chain = self.longest_chain.max(chain_len);
    }

    pub fn on_session_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_session_end(&mut self) {
        self.sessions_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    pub fn summary(&self) -> String {
        format!(
            "sessions: {}, frames: {}, moves: {}, collisions: {}, longest chain: {}, time: {}",
            self.sessions_played,
            self.frames,
            self.moves,
            self.collisions,
            self.longest_chain,
            self.format_time()
        )
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
