//! Space Run entry point
//!
//! Native builds run a headless attract-mode session: the autopilot flies,
//! the run restarts after every crash and events are logged.
//!
//! Usage: `space-run [SETTINGS_JSON] [SECONDS]`

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use space_run::audio::{AudioDirector, CueCommand};
    use space_run::geometry::FrameGeometry;
    use space_run::sim::{GameEvent, GameState, Projector, TickInput, Viewport, tick};
    use space_run::{Settings, SettingsError, platform};

    const DEFAULT_SESSION_SECS: f32 = 30.0;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        frame: FrameGeometry,
        audio: AudioDirector,
        runs: u32,
        best_score: u64,
    }

    impl Game {
        fn new(seed: u64, settings: &Settings) -> Self {
            let projector = Projector::new(Viewport::default(), settings.projection);
            let state = GameState::with_config(seed, settings.tuning.clone(), projector);
            let frame = FrameGeometry::build(&state);
            let audio = AudioDirector::from_settings(settings);
            for cmd in audio.on_menu() {
                log_cue(&cmd);
            }
            Self {
                state,
                input: TickInput {
                    idle_mode: true,
                    ..Default::default()
                },
                frame,
                audio,
                runs: 0,
                best_score: 0,
            }
        }

        /// Run one simulation tick and rebuild the frame
        fn update(&mut self, dt: f32) {
            tick(&mut self.state, &self.input, dt);
            self.frame = FrameGeometry::build(&self.state);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::RunStarted { life } => {
                        self.runs += 1;
                        log::info!("Run {} started", life);
                    }
                    GameEvent::RowPassed { score } => log::trace!("Score {}", score),
                    GameEvent::GameOver { score } => {
                        self.best_score = self.best_score.max(score);
                        log::info!("Game over, score {}", score);
                    }
                    GameEvent::GameOverVoice => {}
                }
                for cmd in self.audio.on_event(&event) {
                    log_cue(&cmd);
                }
            }
        }
    }

    fn log_cue(cmd: &CueCommand) {
        match cmd {
            CueCommand::Play { cue, volume, .. } => {
                log::debug!("play {} at {:.2}", cue.file_name(), volume)
            }
            CueCommand::Stop(cue) => log::debug!("stop {}", cue.file_name()),
        }
    }

    pub fn run() -> Result<(), SettingsError> {
        platform::init_logging();
        log::info!("Space Run (headless) starting...");

        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load(),
        };
        let seconds = args
            .next()
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(DEFAULT_SESSION_SECS)
            .max(0.0);

        let seed: u64 = rand::random();
        log::info!("Game initialized with seed: {}", seed);

        let mut game = Game::new(seed, &settings);
        let dt = 1.0 / settings.tuning.target_fps;
        let frames = (seconds * settings.tuning.target_fps).round() as u64;
        for _ in 0..frames {
            game.update(dt);
        }

        log::info!(
            "Session over after {} frames: {} runs, best score {}, current score {}, {} tiles on screen",
            frames,
            game.runs,
            game.best_score.max(game.state.score()),
            game.state.score(),
            game.frame.tiles.len()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), space_run::SettingsError> {
    native_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web shell drives the library directly, this only sets up logging
    space_run::platform::init_logging();
}
