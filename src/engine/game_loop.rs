// Fixed-timestep loop timing
//
// Game logic advances in whole ticks of 1/60 s regardless of how fast frames
// are drawn. A slow frame is caught up with at most `MAX_CATCH_UP_TICKS`
// ticks; any backlog beyond that is dropped.

use std::time::{Duration, Instant};

/// Logic ticks per second
pub const TICKS_PER_SECOND: u32 = 60;

/// Length of one logic tick
pub const TICK_DURATION: Duration = Duration::from_micros(16_667);

/// Maximum ticks run for a single rendered frame
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Frames averaged for the FPS readout
const FPS_WINDOW_SIZE: usize = 60;

/// Loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Time not yet consumed by ticks
    accumulator: Duration,
    last_frame_time: Instant,
    frame_times: Vec<Duration>,
    frame_count: u64,
    tick_count: u64,
    current_fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall clock and return the ticks it is worth
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_CATCH_UP_TICKS {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Too far behind: forget the rest
        if ticks == MAX_CATCH_UP_TICKS && self.accumulator >= TICK_DURATION {
            log::debug!(
                "Dropping {:.1} ms of backlog",
                self.accumulator.as_secs_f32() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_loop() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
    }

    #[test]
    fn test_tick_rate() {
        assert_relative_eq!(
            TICK_DURATION.as_secs_f32(),
            1.0 / TICKS_PER_SECOND as f32,
            epsilon = 0.0001
        );
    }

    #[test]
    fn test_short_frame_runs_no_tick() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(5)), 0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_time_accumulates_across_frames() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 1);
        assert_eq!(game_loop.tick_count(), 1);
    }

    #[test]
    fn test_one_second_is_sixty_ticks() {
        let mut game_loop = GameLoop::new();
        let ticks: u32 = (0..60)
            .map(|_| game_loop.advance(TICK_DURATION))
            .sum();
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_catch_up_is_capped_and_backlog_dropped() {
        let mut game_loop = GameLoop::new();
        // 300 ms would be 18 ticks
        assert_eq!(
            game_loop.advance(Duration::from_millis(300)),
            MAX_CATCH_UP_TICKS
        );
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
        assert_eq!(game_loop.accumulator, Duration::ZERO);
    }

    #[test]
    fn test_partial_tick_carries_over() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(TICK_DURATION / 2), 0);
        assert_eq!(game_loop.advance(TICK_DURATION / 2), 1);
    }

    #[test]
    fn test_fps_readout() {
        let mut game_loop = GameLoop::new();
        for _ in 0..10 {
            game_loop.advance(Duration::from_millis(20));
        }
        assert_relative_eq!(game_loop.fps(), 50.0, epsilon = 0.01);
    }
}
