//! Frame-tick scheduling on a calloop event loop.
//!
//! A [`FrameTicker`] owns its event loop and holds at most one tick
//! callback. The callback runs once per frame interval until it returns
//! [`TickControl::Stop`] or the ticker is cancelled or dropped.

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal, RegistrationToken};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 1000;

/// Returned by a tick callback to keep or end the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Errors reported by [`FrameTicker`].
#[derive(Debug, Error)]
pub enum TickerError {
    #[error("frame rate must be between 1 and {MAX_FPS}, got {0}")]
    InvalidRate(u32),

    #[error("a tick callback is already registered")]
    AlreadyRegistered,

    #[error("no tick callback registered")]
    NotRegistered,

    #[error("event loop error: {0}")]
    Loop(#[from] calloop::Error),
}

/// Fixed-rate frame scheduler.
///
/// `D` is the state passed mutably to the tick callback on every frame.
pub struct FrameTicker<D: 'static> {
    event_loop: EventLoop<'static, D>,
    interval: Duration,
    token: Option<RegistrationToken>,
    finished: Rc<Cell<bool>>,
}

impl<D: 'static> FrameTicker<D> {
    /// Creates a ticker firing `fps` times per second.
    pub fn new(fps: u32) -> Result<Self, TickerError> {
        if fps == 0 || fps > MAX_FPS {
            return Err(TickerError::InvalidRate(fps));
        }

        Ok(Self {
            event_loop: EventLoop::try_new()?,
            interval: Duration::from_secs_f64(1.0 / f64::from(fps)),
            token: None,
            finished: Rc::new(Cell::new(false)),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Registers the tick callback. Only one callback may be registered at
    /// a time.
    ///
    /// The callback receives the zero-based frame index.
    pub fn register<F>(&mut self, mut on_tick: F) -> Result<(), TickerError>
    where
        F: FnMut(u64, &mut D) -> TickControl + 'static,
    {
        if self.token.is_some() {
            return Err(TickerError::AlreadyRegistered);
        }

        let interval = self.interval;
        let signal: LoopSignal = self.event_loop.get_signal();
        let finished = Rc::clone(&self.finished);
        let mut frame = 0u64;

        let token = self
            .event_loop
            .handle()
            .insert_source(Timer::from_duration(interval), move |_, _, data| {
                let control = on_tick(frame, data);
                frame += 1;
                match control {
                    TickControl::Continue => TimeoutAction::ToDuration(interval),
                    TickControl::Stop => {
                        debug!("Frame ticker stopped after {frame} frames");
                        finished.set(true);
                        signal.stop();
                        TimeoutAction::Drop
                    }
                }
            })
            .map_err(|err| TickerError::Loop(err.error))?;

        self.finished.set(false);
        self.token = Some(token);
        Ok(())
    }

    /// Runs the event loop until the callback returns [`TickControl::Stop`].
    pub fn run(&mut self, data: &mut D) -> Result<(), TickerError> {
        if self.token.is_none() || self.finished.get() {
            return Err(TickerError::NotRegistered);
        }

        self.event_loop.run(None::<Duration>, data, |_| {})?;
        Ok(())
    }

    /// Dispatches pending events once, waiting at most `timeout`.
    ///
    /// Lets a host loop interleave frame ticks with its own work.
    pub fn dispatch(&mut self, timeout: Duration, data: &mut D) -> Result<(), TickerError> {
        self.event_loop.dispatch(Some(timeout), data)?;
        Ok(())
    }

    /// Whether a registered callback is still scheduled.
    pub fn is_active(&self) -> bool {
        self.token.is_some() && !self.finished.get()
    }

    /// Removes the tick callback. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            if !self.finished.get() {
                self.event_loop.handle().remove(token);
                debug!("Frame ticker cancelled");
            }
            self.finished.set(true);
        }
    }
}

impl<D: 'static> Drop for FrameTicker<D> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(matches!(
            FrameTicker::<()>::new(0),
            Err(TickerError::InvalidRate(0))
        ));
        assert!(matches!(
            FrameTicker::<()>::new(MAX_FPS + 1),
            Err(TickerError::InvalidRate(_))
        ));
    }

    #[test]
    fn runs_until_callback_stops() {
        let mut ticker = FrameTicker::<Vec<u64>>::new(MAX_FPS).unwrap();
        ticker
            .register(|frame, seen: &mut Vec<u64>| {
                seen.push(frame);
                if seen.len() == 5 {
                    TickControl::Stop
                } else {
                    TickControl::Continue
                }
            })
            .unwrap();

        let mut seen = Vec::new();
        ticker.run(&mut seen).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(!ticker.is_active());
    }

    #[test]
    fn only_one_callback_may_register() {
        let mut ticker = FrameTicker::<()>::new(60).unwrap();
        ticker.register(|_, _| TickControl::Continue).unwrap();
        assert!(matches!(
            ticker.register(|_, _| TickControl::Continue),
            Err(TickerError::AlreadyRegistered)
        ));
    }

    #[test]
    fn cancelled_ticker_does_not_fire() {
        let mut ticker = FrameTicker::<u32>::new(MAX_FPS).unwrap();
        ticker
            .register(|_, count: &mut u32| {
                *count += 1;
                TickControl::Continue
            })
            .unwrap();
        assert!(ticker.is_active());

        ticker.cancel();
        ticker.cancel();
        assert!(!ticker.is_active());

        let mut count = 0;
        ticker.dispatch(Duration::from_millis(20), &mut count).unwrap();
        assert_eq!(count, 0);
        assert!(matches!(
            ticker.run(&mut count),
            Err(TickerError::NotRegistered)
        ));
    }
}
