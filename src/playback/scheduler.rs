use crate::{
    config::model::{Direction, PlaybackMode},
    playback::host::{FrameHost, FrameRequest},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Playback state read at each tick.
pub struct PlaybackState {
    /// Normalized progress.
    pub progress: f64,
    /// Direction of travel.
    pub direction: Direction,
    /// Whether playback is running.
    pub is_playing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timing parameters of a playback run.
pub struct PlaybackTiming {
    /// Playback semantics.
    pub mode: PlaybackMode,
    /// Seconds for one pass over `[0, 1]`.
    pub speed_seconds: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of one scheduler step.
pub struct Tick {
    /// New progress, always within `[0, 1]`.
    pub progress: f64,
    /// New direction.
    pub direction: Direction,
    /// `false` once a `once` run reaches the end.
    pub should_continue: bool,
}

/// Advance `state` by `dt_ms` of wall-clock time.
///
/// Progress moves by `dt_ms / (speed_seconds * 1000) * direction`, then the mode's boundary
/// rule is applied. No overshoot is carried into the next tick.
pub fn advance(state: PlaybackState, timing: PlaybackTiming, dt_ms: f64) -> Tick {
    let duration_ms = timing.speed_seconds * 1000.0;
    let delta = (dt_ms / duration_ms) * state.direction.sign();
    let mut progress = state.progress + delta;
    let mut direction = state.direction;
    let mut should_continue = true;

    match timing.mode {
        PlaybackMode::Bounce => {
            if progress >= 1.0 {
                progress = 1.0;
                direction = Direction::Backward;
            } else if progress <= 0.0 {
                progress = 0.0;
                direction = Direction::Forward;
            }
        }
        PlaybackMode::Loop => {
            if progress >= 1.0 || progress < 0.0 {
                progress = 0.0;
            }
        }
        PlaybackMode::Once => {
            if progress >= 1.0 {
                progress = 1.0;
                should_continue = false;
            } else if progress < 0.0 {
                progress = 0.0;
            }
        }
    }

    if !progress.is_finite() {
        progress = 0.0;
    }

    Tick {
        progress,
        direction,
        should_continue,
    }
}

#[derive(Debug, Default)]
/// Frame-driven playback loop owned by one animation instance.
///
/// The scheduler never blocks: the host calls [`Scheduler::on_frame`] from its per-frame
/// callback and the scheduler re-arms the next callback only while playback continues.
pub struct Scheduler {
    last_tick_ms: Option<f64>,
    pending: Option<FrameRequest>,
}

impl Scheduler {
    /// A stopped scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame callback is armed.
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Start the loop at `now_ms`. Restarting cancels the previous request first.
    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H, now_ms: f64) {
        self.stop(host);
        self.last_tick_ms = Some(now_ms);
        self.pending = Some(host.request_frame());
        tracing::debug!(now_ms, "playback scheduler started");
    }

    /// Cancel any armed callback. Stopping a stopped scheduler is a no-op.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(req) = self.pending.take() {
            host.cancel_frame(req);
            tracing::debug!("playback scheduler stopped");
        }
        self.last_tick_ms = None;
    }

    /// Handle one fired frame callback.
    ///
    /// Returns `None` (and stays stopped) when `state` is no longer playing or the
    /// scheduler was not started. Otherwise computes the tick from the elapsed time since the
    /// previous tick, hands it to `on_tick`, and re-arms when the tick continues.
    pub fn on_frame<H, F>(
        &mut self,
        host: &mut H,
        now_ms: f64,
        state: PlaybackState,
        timing: PlaybackTiming,
        on_tick: F,
    ) -> Option<Tick>
    where
        H: FrameHost + ?Sized,
        F: FnOnce(Tick),
    {
        self.pending = None;
        let last = self.last_tick_ms?;
        if !state.is_playing {
            self.last_tick_ms = None;
            return None;
        }

        let dt_ms = (now_ms - last).max(0.0);
        self.last_tick_ms = Some(now_ms);

        let tick = advance(state, timing, dt_ms);
        on_tick(tick);

        if tick.should_continue {
            self.pending = Some(host.request_frame());
        } else {
            self.last_tick_ms = None;
            tracing::debug!(progress = tick.progress, "playback completed");
        }
        Some(tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
