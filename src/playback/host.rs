//! Host seams for the scheduler: a per-frame callback mechanism and a millisecond clock.

use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Handle of one armed frame callback.
pub struct FrameRequest(pub u64);

/// The host's per-display-refresh callback mechanism.
///
/// The scheduler arms at most one request at a time and cancels it when playback stops.
pub trait FrameHost {
    /// Arm a callback for the next display refresh.
    fn request_frame(&mut self) -> FrameRequest;
    /// Disarm a previously armed callback. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Monotonic wall-clock source in milliseconds.
pub trait Clock {
    /// Current time.
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Debug)]
/// Wall clock backed by [`Instant`], measured from construction.
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Debug, Default)]
/// Clock advanced explicitly by the caller. Used by offline drivers and tests.
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    /// Start at `now_ms`.
    pub fn at(now_ms: f64) -> Self {
        Self { now_ms }
    }

    /// Move time forward by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

#[derive(Clone, Debug, Default)]
/// Frame host that records armed requests; the driver fires them with
/// [`QueuedFrameHost::take_pending`].
pub struct QueuedFrameHost {
    next_id: u64,
    pending: Option<FrameRequest>,
    requested: u64,
    cancelled: u64,
}

impl QueuedFrameHost {
    /// Pop the armed request, if any.
    pub fn take_pending(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    /// Whether a request is armed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total requests armed so far.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total requests cancelled while still armed.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameHost for QueuedFrameHost {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        self.requested += 1;
        let req = FrameRequest(self.next_id);
        self.pending = Some(req);
        req
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
