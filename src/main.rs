//! Terminal Tic Tac Toe runner (default binary).
//!
//! Two players share the terminal and click cells with the mouse (digits
//! 1-9 also work). `R` starts a new game; `Q`, `Esc` or Ctrl-C quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use tracing::{error, info};

use tui_tictactoe::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_tictactoe::types::TICK_MS;
use tui_tictactoe::{init_logging, App, AppConfig, Control};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("exiting"),
        Err(err) => error!(%err, "game loop failed"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);
    let mut throttle = RenderThrottle::new(config.refresh_ms);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match app.handle_event(event::read()?) {
                Control::Quit => return Ok(()),
                Control::Redraw => {
                    term.invalidate();
                    throttle.invalidate();
                }
                Control::Continue => {}
            }
        }

        // Update, then draw.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.update();

            let now_ms = started.elapsed().as_millis() as u64;
            if throttle.should_render(now_ms, app.snapshot().fingerprint()) {
                app.draw(&mut fb);
                term.draw(&fb)?;
            }
        }
    }
}
