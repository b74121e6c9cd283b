//! Platform abstraction layer
//!
//! A platform supplies frame time, input and the close signal. [`run`] is
//! the outer game loop: it keeps stepping the simulation and presenting
//! frames until the platform asks to close. Game over is not an exit state.

pub mod headless;

use crate::renderer::{Renderer, build_frame};
use crate::sim::{GameState, TickInput, tick};

pub use headless::{HeadlessPlatform, autopilot};

/// Window/input/timer collaborator
pub trait Platform {
    /// True once the user (or driver) wants the loop to end
    fn should_close(&self) -> bool;
    /// Seconds elapsed since the previous frame
    fn frame_time(&mut self) -> f32;
    /// Input for the coming frame; `view` is the state as of the last frame
    fn poll_input(&mut self, view: &GameState) -> TickInput;
}

/// Totals gathered over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub deaths: u32,
    pub restarts: u32,
    pub obstacles_destroyed: u32,
    pub bonuses_collected: u32,
    pub best_score: u64,
}

/// Run the game loop until the platform signals close
pub fn run<P, R>(platform: &mut P, renderer: &mut R, state: &mut GameState) -> RunSummary
where
    P: Platform,
    R: Renderer,
{
    let mut summary = RunSummary::default();
    log::info!("Game loop starting (seed {})", state.seed);

    while !platform.should_close() {
        let dt = platform.frame_time();
        let input = platform.poll_input(state);
        let report = tick(state, &input, dt);

        summary.frames += 1;
        summary.deaths += u32::from(report.ship_died);
        summary.restarts += u32::from(report.restarted);
        summary.obstacles_destroyed += report.obstacles_destroyed.len() as u32;
        summary.bonuses_collected += report.bonuses_collected;
        summary.best_score = summary.best_score.max(state.score);

        renderer.present(&build_frame(state));
    }

    log::info!(
        "Game loop finished after {} frames, score {}",
        summary.frames,
        state.score
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::renderer::Frame;

    #[derive(Default)]
    struct CountingRenderer {
        frames: u32,
    }

    impl Renderer for CountingRenderer {
        fn present(&mut self, _frame: &Frame) {
            self.frames += 1;
        }
    }

    #[test]
    fn test_run_stops_on_close_signal() {
        let mut platform = HeadlessPlatform::new(1.0 / 60.0, 120);
        let mut renderer = CountingRenderer::default();
        let mut state = GameState::new(7, Tuning::default());

        let summary = run(&mut platform, &mut renderer, &mut state);
        assert_eq!(summary.frames, 120);
        assert_eq!(renderer.frames, 120);
        assert_eq!(state.frames, 120);
    }
}
