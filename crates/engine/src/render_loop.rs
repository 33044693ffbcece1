//! Render loop: redraws the registry at a fixed cadence.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::{self, MissedTickBehavior};
use tracing::error;

use typing_geek_core::{frame_interval, render_frame, DrawSurface, WordRegistry};

use crate::error::EngineError;
use crate::shutdown::Shutdown;

/// Draw frames until shutdown. Returns the number of frames flushed.
///
/// Never mutates the registry. A surface error triggers shutdown and is
/// returned as fatal.
pub async fn run_render_loop<S: DrawSurface + ?Sized>(
    registry: &WordRegistry,
    surface: &mut S,
    fps: u8,
    shutdown: &Shutdown,
    resized: &AtomicBool,
) -> Result<u64, EngineError> {
    let mut ticker = time::interval(frame_interval(fps));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frames = 0u64;

    loop {
        tokio::select! {
            _ = shutdown.wait() => return Ok(frames),
            _ = ticker.tick() => {}
        }

        if resized.swap(false, Ordering::AcqRel) {
            surface.invalidate();
        }
        if let Err(err) = render_frame(surface, registry) {
            error!(error = %err, "draw surface failed");
            shutdown.trigger();
            return Err(EngineError::DrawSurface(err));
        }
        frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use typing_geek_core::types::Word;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<(u16, u16, char)>>,
        current: Vec<(u16, u16, char)>,
        invalidations: usize,
        fail_after: Option<usize>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self) {
            self.current.clear();
        }

        fn set_cell(&mut self, x: u16, y: u16, ch: char) {
            self.current.push((x, y, ch));
        }

        fn flush(&mut self) -> anyhow::Result<()> {
            if self.fail_after == Some(self.frames.len()) {
                anyhow::bail!("surface lost");
            }
            self.frames.push(self.current.clone());
            Ok(())
        }

        fn invalidate(&mut self) {
            self.invalidations += 1;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn renders_at_fixed_cadence_until_shutdown() {
        let registry = WordRegistry::new();
        let _lease = registry.insert(Word::new("cat", 10, 1).unwrap()).unwrap();
        let shutdown = Shutdown::new();
        let resized = AtomicBool::new(true);
        let mut surface = Recorder::default();

        let stopper = {
            let shutdown = shutdown.clone();
            async move {
                // 25 fps: frames at 0, 40, ..., 200ms.
                time::sleep(Duration::from_millis(210)).await;
                shutdown.trigger();
            }
        };
        let (frames, ()) = tokio::join!(
            run_render_loop(&registry, &mut surface, 25, &shutdown, &resized),
            stopper
        );

        assert_eq!(frames.unwrap(), 6);
        assert_eq!(surface.frames.len(), 6);
        assert_eq!(surface.invalidations, 1);
        assert_eq!(
            surface.frames[0],
            vec![(10, 0, 'c'), (11, 0, 'a'), (12, 0, 't')]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn surface_failure_is_fatal() {
        let registry = WordRegistry::new();
        let shutdown = Shutdown::new();
        let resized = AtomicBool::new(false);
        let mut surface = Recorder {
            fail_after: Some(2),
            ..Recorder::default()
        };

        let result = run_render_loop(&registry, &mut surface, 60, &shutdown, &resized).await;
        assert!(matches!(result, Err(EngineError::DrawSurface(_))));
        assert!(shutdown.is_triggered());
        assert_eq!(surface.frames.len(), 2);
    }
}
