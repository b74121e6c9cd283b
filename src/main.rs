//! Poly Siege entry point
//!
//! Runs the simulation headlessly with the autopilot at the controls. The
//! frames are tessellated into vertex buffers but never shown; the HUD is
//! written to the log instead.
//!
//! Environment:
//! - `POLY_SIEGE_SEED`: RNG seed (default 0)
//! - `POLY_SIEGE_TUNING`: path to a tuning JSON file
//! - `POLY_SIEGE_FRAMES`: number of frames to run (default 3600)
//! - `RUST_LOG`: log filter

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::rc::Rc;

    use poly_siege::Tuning;
    use poly_siege::assets::{HeadlessTextures, SharedTextures};
    use poly_siege::consts::SHIP_SPRITE_PATH;
    use poly_siege::platform::{self, HeadlessPlatform};
    use poly_siege::renderer::shapes::tessellate_frame;
    use poly_siege::renderer::vertex::as_bytes;
    use poly_siege::renderer::{DrawCommand, Frame, Hud, Renderer};
    use poly_siege::sim::GameState;

    const FRAME_DT: f32 = 1.0 / 60.0;
    const DEFAULT_FRAMES: u64 = 3600;
    const HUD_LOG_INTERVAL: u64 = 300;
    /// Pixel size reported for the ship sprite
    const SPRITE_SIZE: u32 = 1000;

    /// Tessellates every frame and periodically logs what would be on screen
    #[derive(Default)]
    struct LogRenderer {
        frames: u64,
        bytes: usize,
    }

    impl Renderer for LogRenderer {
        fn present(&mut self, frame: &Frame) {
            let vertices = tessellate_frame(frame);
            self.bytes += as_bytes(&vertices).len();
            self.frames += 1;

            if self.frames % HUD_LOG_INTERVAL == 0 {
                let hud: Vec<&str> = frame
                    .commands
                    .iter()
                    .filter_map(|c| match c {
                        DrawCommand::Text { text, .. } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect();
                log::info!(
                    "frame {}: {} commands, {} vertices | {}",
                    self.frames,
                    frame.commands.len(),
                    vertices.len(),
                    hud.join(" | ")
                );
            }
        }
    }

    fn env_u64(name: &str, default: u64) -> u64 {
        match std::env::var(name) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring {}={:?}: {}", name, value, e);
                default
            }),
            Err(_) => default,
        }
    }

    fn load_tuning() -> Tuning {
        match std::env::var("POLY_SIEGE_TUNING") {
            Ok(path) => Tuning::load(&path).unwrap_or_else(|e| {
                log::warn!("Failed to load tuning from {}: {}, using defaults", path, e);
                Tuning::default()
            }),
            Err(_) => Tuning::default(),
        }
    }

    pub fn main() {
        env_logger::init();
        log::info!("Poly Siege (headless) starting...");

        let seed = env_u64("POLY_SIEGE_SEED", 0);
        let frames = env_u64("POLY_SIEGE_FRAMES", DEFAULT_FRAMES);
        let tuning = load_tuning();

        let textures: SharedTextures = Rc::new(RefCell::new(
            HeadlessTextures::new().with_texture(SHIP_SPRITE_PATH, SPRITE_SIZE, SPRITE_SIZE),
        ));
        let mut state = GameState::with_textures(seed, tuning, textures);
        let mut platform = HeadlessPlatform::new(FRAME_DT, frames).with_autopilot();
        let mut renderer = LogRenderer::default();

        let summary = platform::run(&mut platform, &mut renderer, &mut state);

        let hud = Hud::from_state(&state);
        log::info!("Final HUD: {}", hud.lines().join(" | "));
        log::info!(
            "{} frames, {} deaths, {} restarts, {} obstacles destroyed, {} bonuses, best score {}, {} KiB of vertices",
            summary.frames,
            summary.deaths,
            summary.restarts,
            summary.obstacles_destroyed,
            summary.bonuses_collected,
            summary.best_score,
            renderer.bytes / 1024
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end
}
