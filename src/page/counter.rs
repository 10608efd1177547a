// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters for the About section.
//!
//! Once the About section is at least half visible, every counter runs
//! from 0 to its target in steps of `target / 100`, one step per 30 ms
//! tick, rendered as `<value>+`. The trigger is one-shot: scrolling away
//! and back never restarts the animation.

use std::time::Duration;

/// Tick interval while counters are running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Visibility fraction of the About section that starts the animation.
pub const ACTIVATION_THRESHOLD: f32 = 0.5;

/// Number of steps a counter takes from zero to its target.
const STEPS: f32 = 100.0;

/// One animated statistic.
#[derive(Debug, Clone)]
pub struct Counter {
    pub label_key: &'static str,
    pub target: u32,
    current: f32,
    running: bool,
}

impl Counter {
    #[must_use]
    pub fn new(label_key: &'static str, target: u32) -> Self {
        Self {
            label_key,
            target,
            current: 0.0,
            running: false,
        }
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn step(&mut self) {
        if !self.running {
            return;
        }
        self.current += self.target as f32 / STEPS;
        if self.current >= self.target as f32 {
            self.current = self.target as f32;
            self.running = false;
        }
    }

    /// Rendered value, e.g. `"150+"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}+", self.current.floor() as u32)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// The set of counters plus the one-shot activation guard.
#[derive(Debug)]
pub struct Board {
    counters: Vec<Counter>,
    started: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The statistics shown on the page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: vec![
                Counter::new("stat-years", 12),
                Counter::new("stat-projects", 150),
                Counter::new("stat-clients", 300),
                Counter::new("stat-technicians", 25),
            ],
            started: false,
        }
    }

    /// Starts all counters the first time the About section is sufficiently
    /// visible. Later calls are ignored, mirroring the observer being
    /// disconnected after the first trigger.
    pub fn observe(&mut self, about_visibility: f32) {
        if self.started || about_visibility < ACTIVATION_THRESHOLD {
            return;
        }
        self.started = true;
        for counter in &mut self.counters {
            counter.start();
        }
    }

    /// Advances every running counter by one step.
    pub fn tick(&mut self) {
        for counter in &mut self.counters {
            counter.step();
        }
    }

    #[must_use]
    pub fn any_running(&self) -> bool {
        self.counters.iter().any(Counter::is_running)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Counter> {
        self.counters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_plus() {
        let board = Board::new();
        for counter in board.iter() {
            assert_eq!(counter.display(), "0+");
        }
        assert!(!board.any_running());
    }

    #[test]
    fn observe_below_threshold_does_not_start() {
        let mut board = Board::new();
        board.observe(0.4);
        assert!(!board.any_running());
    }

    #[test]
    fn counter_reaches_target_in_about_one_hundred_steps() {
        let mut counter = Counter::new("stat-projects", 150);
        counter.start();

        let mut steps = 0;
        while counter.is_running() {
            counter.step();
            steps += 1;
            assert!(steps <= 101, "counter never stopped");
        }

        assert_eq!(counter.display(), "150+");
        assert_eq!(steps, 100);
    }

    #[test]
    fn counter_stops_exactly_at_target() {
        let mut counter = Counter::new("stat-years", 12);
        counter.start();
        for _ in 0..500 {
            counter.step();
        }
        assert_eq!(counter.display(), "12+");
        assert!(!counter.is_running());
    }

    #[test]
    fn activation_is_one_shot() {
        let mut board = Board::new();
        board.observe(0.6);
        assert!(board.any_running());

        // Run everything to completion.
        for _ in 0..200 {
            board.tick();
        }
        assert!(!board.any_running());

        // A second visibility trigger must not restart the animation.
        board.observe(1.0);
        assert!(!board.any_running());
        let projects = board
            .iter()
            .find(|c| c.label_key == "stat-projects")
            .expect("projects counter");
        assert_eq!(projects.display(), "150+");
    }

    #[test]
    fn display_floors_intermediate_values() {
        let mut counter = Counter::new("stat-projects", 150);
        counter.start();
        counter.step();
        // 150 / 100 = 1.5 per step; the first step shows 1+.
        assert_eq!(counter.display(), "1+");
    }
}
