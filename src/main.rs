//! Terminal typing game runner (default binary).
//!
//! Words fall from the top of a fixed grid; type one to clear it. Esc abandons
//! the current word, Ctrl-C or Ctrl-X quits.

use anyhow::Result;
use tracing::{error, info};

use typing_geek::engine::{Engine, EngineError, GameConfig};
use typing_geek::input::CrosstermEvents;
use typing_geek::logging;
use typing_geek::term::TerminalSurface;

fn main() -> Result<()> {
    logging::init_from_env()?;
    let config = GameConfig::from_env();

    let mut term = TerminalSurface::new(config.grid_width, config.grid_height);
    if let Err(err) = term.enter() {
        // Best effort: leave raw mode if we got that far.
        let _ = term.exit();
        return Err(EngineError::DrawSurfaceInit(err).into());
    }

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            error!(error = %err, "fatal");
            Err(err)
        }
    }
}

fn run(term: &mut TerminalSurface, config: GameConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let engine = Engine::new(config);
    let report = runtime.block_on(engine.run(term, CrosstermEvents::new()))?;
    info!(
        completed = report.stats.completed,
        expired = report.stats.expired,
        frames = report.frames,
        "game over"
    );
    Ok(())
}
