//! Terminal 3-D block stacking runner (default binary).
//!
//! Reads the session configuration from the environment, then runs the
//! input/tick/render loop on a single thread until Esc or Ctrl-C.
//!
//! Logging is off by default because the terminal is in raw mode. Set
//! `TETRIS3D_LOG_PATH` to log into a file (level from `RUST_LOG`, default
//! `debug`), or set only `RUST_LOG` to log to stderr.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use tetris3d::core::{GameConfig, GameSnapshot};
use tetris3d::engine::Engine;
use tetris3d::input::{map_key, should_quit};
use tetris3d::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris3d::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("debug");
    if let Ok(path) = std::env::var("TETRIS3D_LOG_PATH") {
        let file =
            File::create(&path).with_context(|| format!("failed to create log file {path}"))?;
        env_logger::Builder::from_env(env)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_env(env).init();
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    info!(
        "starting {}x{}x{} seed {}",
        config.dimensions.width(),
        config.dimensions.height(),
        config.dimensions.depth(),
        config.seed
    );

    let mut engine = Engine::with_config(config);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = map_key(key, engine.game().status()) {
                        engine.apply(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            engine.tick(ms);
        }
    }
}
