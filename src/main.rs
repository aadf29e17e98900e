//! Breakout - native entry point
//!
//! Runs a session driven by the autopilot with no window attached. Usage:
//!
//! ```text
//! breakout [--realtime] [config.json] [frames]
//! ```
//!
//! `--realtime` paces frames at roughly 60 Hz and steps the simulation by
//! measured wall-clock time instead of a fixed 1/60 s.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use breakout::platform::{Autopilot, FixedClock, FrameClock, TimeSource};
use breakout::renderer::HeadlessSurface;
use breakout::sim::GameState;
use breakout::{App, GameConfig};

/// Ten minutes at 60 fps
const DEFAULT_FRAMES: u64 = 36_000;
const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

fn main() {
    env_logger::init();

    let (flags, args): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));
    let realtime = flags.iter().any(|f| f == "--realtime");

    let mut args = args.into_iter();
    let config = match args.next() {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    log::info!(
        "{} starting ({}x{}, seed {seed}, {})",
        breakout::consts::WINDOW_TITLE,
        config.window_width,
        config.window_height,
        if realtime { "real time" } else { "fixed step" }
    );

    let state = GameState::new(config, seed);
    if realtime {
        run(state, FrameClock::new(), frames, Some(FRAME_BUDGET));
    } else {
        run(state, FixedClock::sixty_hz(), frames, None);
    }
}

fn run<T: TimeSource>(state: GameState, clock: T, frames: u64, pace: Option<Duration>) {
    let mut app = App::new(state, Autopilot::new(), HeadlessSurface::new(), clock);

    let ran = match pace {
        Some(budget) => {
            let mut ran = 0;
            while ran < frames && app.frame() {
                ran += 1;
                std::thread::sleep(budget);
            }
            ran
        }
        None => app.run_for(frames),
    };

    let state = app.state();
    log::info!(
        "Stopped after {ran} frames in {:?}: level {}, lives {}, score {}",
        state.phase(),
        state.level,
        state.lives,
        state.score
    );
    log::info!(
        "Submitted {} triangles ({} vertex bytes) over {} frames",
        app.surface().triangles(),
        app.surface().bytes(),
        app.surface().frames()
    );
}
