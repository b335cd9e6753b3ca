//! Feeding stroke scripts to a surface, instantly or paced by frame ticks.

use super::ScriptStep;
use crate::surface::DrawingSurface;
use crate::ticker::{FrameTicker, TickControl, TickerError};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;

/// Frame pacing for [`replay_paced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Frames per second
    pub fps: u32,
    /// Script steps applied on each frame (at least 1)
    pub steps_per_frame: usize,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            fps: 60,
            steps_per_frame: 1,
        }
    }
}

/// Applies every step immediately, in order.
pub fn replay_instant(surface: &mut DrawingSurface, steps: &[ScriptStep]) {
    for step in steps {
        step.apply(surface);
    }
}

/// Applies steps a few at a time on frame ticks until the script runs out.
///
/// Returns the number of frames used.
pub fn replay_paced(
    surface: &mut DrawingSurface,
    steps: Vec<ScriptStep>,
    pacing: Pacing,
) -> Result<u64, TickerError> {
    if steps.is_empty() {
        return Ok(0);
    }

    let per_frame = pacing.steps_per_frame.max(1);
    let frames = Rc::new(Cell::new(0u64));
    let frames_seen = Rc::clone(&frames);
    let mut pending = steps.into_iter();

    let mut ticker = FrameTicker::new(pacing.fps)?;
    ticker.register(move |frame, surface: &mut DrawingSurface| {
        for step in pending.by_ref().take(per_frame) {
            step.apply(surface);
        }
        frames_seen.set(frame + 1);

        if pending.len() == 0 {
            TickControl::Stop
        } else {
            TickControl::Continue
        }
    })?;
    ticker.run(surface)?;

    debug!("Replayed script over {} frames", frames.get());
    Ok(frames.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;
    use crate::surface::SurfaceOptions;
    use crate::ticker::MAX_FPS;

    fn circle_steps() -> Vec<ScriptStep> {
        vec![
            ScriptStep::Tool { tool: Tool::Circle },
            ScriptStep::Press { x: 40.0, y: 30.0 },
            ScriptStep::Move { x: 50.0, y: 30.0 },
            ScriptStep::Move { x: 60.0, y: 30.0 },
            ScriptStep::Release,
        ]
    }

    #[test]
    fn paced_replay_matches_instant_replay() {
        let mut instant = DrawingSurface::new(SurfaceOptions::with_size(80, 60)).unwrap();
        replay_instant(&mut instant, &circle_steps());

        let mut paced = DrawingSurface::new(SurfaceOptions::with_size(80, 60)).unwrap();
        let pacing = Pacing {
            fps: MAX_FPS,
            steps_per_frame: 2,
        };
        let frames = replay_paced(&mut paced, circle_steps(), pacing).unwrap();

        assert_eq!(frames, 3);
        assert_eq!(
            paced.export_image().unwrap(),
            instant.export_image().unwrap()
        );
    }

    #[test]
    fn empty_script_uses_no_frames() {
        let mut surface = DrawingSurface::new(SurfaceOptions::with_size(8, 8)).unwrap();
        assert_eq!(
            replay_paced(&mut surface, Vec::new(), Pacing::default()).unwrap(),
            0
        );
    }

    #[test]
    fn zero_steps_per_frame_still_progresses() {
        let mut surface = DrawingSurface::new(SurfaceOptions::with_size(80, 60)).unwrap();
        let pacing = Pacing {
            fps: MAX_FPS,
            steps_per_frame: 0,
        };
        let frames = replay_paced(&mut surface, circle_steps(), pacing).unwrap();
        assert_eq!(frames, 5);
        assert_eq!(surface.tool(), Tool::Circle);
    }
}
