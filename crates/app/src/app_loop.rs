use std::mem;

use pursuit_core::{Direction, LogEvent, RunOutcome, Simulation, TickResult};

use crate::frame_input::FrameInput;

#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub enum AppMode {
    #[default]
    Running,
    Caught {
        bot: usize,
    },
    Quit,
}

/// An input that was fed to the simulation this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedInput {
    pub direction: Option<Direction>,
    pub elapsed_ms: u64,
}

pub struct AppState {
    pub mode: AppMode,
    /// Inputs accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to persist to the journal file.
    pub accepted_inputs: Vec<AcceptedInput>,
    /// Simulation events from the current frame's tick, drained from the
    /// simulation log so it does not grow for the length of the session.
    pub tick_events: Vec<LogEvent>,
    tick_interval_ms: u64,
    since_tick_ms: u64,
}

impl AppState {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self {
            mode: AppMode::Running,
            accepted_inputs: Vec::new(),
            tick_events: Vec::new(),
            tick_interval_ms: tick_interval_ms.max(1),
            since_tick_ms: 0,
        }
    }

    /// Process input and pacing for a single frame. The simulation advances at
    /// most once per frame, and only after a full tick interval has built up;
    /// the whole accumulated time is handed over as that tick's elapsed time.
    pub fn tick(
        &mut self,
        sim: &mut Simulation,
        input: &FrameInput,
        frame_ms: u64,
    ) -> Option<TickResult> {
        self.accepted_inputs.clear();
        self.tick_events.clear();

        if input.quit_requested {
            self.mode = AppMode::Quit;
            return None;
        }
        if self.mode != AppMode::Running {
            return None;
        }

        self.since_tick_ms = self.since_tick_ms.saturating_add(frame_ms);
        if self.since_tick_ms < self.tick_interval_ms {
            return None;
        }
        let elapsed_ms = mem::take(&mut self.since_tick_ms);

        let direction = input.direction();
        sim.submit_player_direction(direction);
        let result = sim.advance_tick(elapsed_ms);
        self.accepted_inputs.push(AcceptedInput { direction, elapsed_ms });
        self.tick_events = sim.take_log();

        if let Some(RunOutcome::Caught { bot }) = result.outcome {
            self.mode = AppMode::Caught { bot };
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppMode, AppState};
    use crate::frame_input::FrameInput;
    use macroquad::prelude::KeyCode;
    use pursuit_core::{Pos, SimConfig, Simulation};

    fn open_sim(player: Pos, bot: Pos) -> Simulation {
        Simulation::from_layout(&SimConfig::open(10, 10, 1), player, vec![bot])
            .expect("layout is valid")
    }

    #[test]
    fn waits_for_a_full_tick_interval() {
        let mut sim = open_sim(Pos { x: 5, y: 5 }, Pos { x: 0, y: 0 });
        let mut app = AppState::new(100);
        let input = FrameInput::default();

        assert!(app.tick(&mut sim, &input, 60).is_none());
        assert_eq!(sim.current_tick(), 0);
        let result = app.tick(&mut sim, &input, 60).expect("120 ms covers one tick");
        assert_eq!(result.tick, 1);
        assert_eq!(app.accepted_inputs[0].elapsed_ms, 120);
    }

    #[test]
    fn held_key_moves_the_player() {
        let mut sim = open_sim(Pos { x: 5, y: 5 }, Pos { x: 0, y: 0 });
        let mut app = AppState::new(100);
        let input = FrameInput { keys_down: vec![KeyCode::A], quit_requested: false };

        let result = app.tick(&mut sim, &input, 100).expect("tick fires");
        assert!(result.player_moved);
        assert_eq!(sim.state().player(), Pos { x: 4, y: 5 });
    }

    #[test]
    fn each_tick_drains_the_simulation_log() {
        let mut sim = open_sim(Pos { x: 5, y: 5 }, Pos { x: 0, y: 0 });
        let mut app = AppState::new(100);
        let input = FrameInput { keys_down: vec![KeyCode::W], quit_requested: false };

        let mut seen = 0;
        for _ in 0..20 {
            app.tick(&mut sim, &input, 100);
            assert!(sim.log().is_empty(), "log is handed to the app every tick");
            seen += app.tick_events.len();
        }
        assert!(seen > 0);

        app.tick(&mut sim, &input, 10);
        assert!(app.tick_events.is_empty(), "frames without a tick carry no events");
    }

    #[test]
    fn capture_maps_to_caught_mode() {
        let mut sim = open_sim(Pos { x: 5, y: 5 }, Pos { x: 5, y: 7 });
        let mut app = AppState::new(100);
        let input = FrameInput { keys_down: vec![KeyCode::S], quit_requested: false };

        app.tick(&mut sim, &input, 100);
        assert_eq!(app.mode, AppMode::Caught { bot: 0 });
        assert!(app.tick(&mut sim, &input, 100).is_none(), "no ticks after capture");
    }

    #[test]
    fn escape_quits_without_ticking() {
        let mut sim = open_sim(Pos { x: 5, y: 5 }, Pos { x: 0, y: 0 });
        let mut app = AppState::new(100);
        let input = FrameInput { keys_down: Vec::new(), quit_requested: true };

        assert!(app.tick(&mut sim, &input, 500).is_none());
        assert_eq!(app.mode, AppMode::Quit);
        assert_eq!(sim.current_tick(), 0);
    }
}
