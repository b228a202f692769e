//! Control-layer adapter: the single writer of configuration, targets and playback.
//!
//! A [`Session`] is what a UI binds to. Every mutation goes through `&mut self`, so a host
//! that needs shared access wraps the session in its own lock or actor. Target sets are
//! regenerated wholesale whenever a parameter they depend on changes, and playback is
//! driven entirely by the host's frame callbacks.

use crate::{
    animation::frame::{FrameState, evaluate_frame},
    animation::targets::{Target, TargetKey, generate_targets},
    capture::backend::{CaptureBackend, CapturedFrame},
    config::model::Config,
    export::css::export_html,
    foundation::core::Dims,
    foundation::error::PlaneshiftResult,
    playback::host::{Clock, FrameHost},
    playback::scheduler::{PlaybackState, PlaybackTiming, Scheduler, Tick},
    projection::{ProjectedScene, project_frame},
    transform::non_linear::clamp01,
};

#[derive(Debug)]
/// Live animation instance bound to a frame host and a clock.
pub struct Session<H, C> {
    config: Config,
    targets: Vec<Target>,
    target_key: TargetKey,
    scheduler: Scheduler,
    host: H,
    clock: C,
}

impl<H: FrameHost, C: Clock> Session<H, C> {
    /// Validate and normalize `config`, generate targets, and start playback if the
    /// snapshot says it is playing.
    pub fn new(config: Config, host: H, clock: C) -> PlaneshiftResult<Self> {
        config.validate()?;
        let config = config.normalized();
        let targets = generate_targets(&config);
        let mut session = Self {
            target_key: TargetKey::of(&config),
            targets,
            config,
            scheduler: Scheduler::new(),
            host,
            clock,
        };
        if session.config.is_playing {
            session.scheduler.start(&mut session.host, session.clock.now_ms());
        }
        Ok(session)
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current target set, one per item.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// The frame host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The frame host, mutably. Drivers use this to pop fired requests.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The clock, mutably.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Whether a frame callback is armed.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Apply an edit to a copy of the configuration and commit it if it validates.
    ///
    /// On error the session is left unchanged. Targets are regenerated when any parameter
    /// they derive from changed; the scheduler follows `is_playing`. An edit that moves
    /// `progress` is an interactive seek and pauses playback, like [`Session::scrub`].
    pub fn update_config<F>(&mut self, edit: F) -> PlaneshiftResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut next = self.config.clone();
        edit(&mut next);
        next.validate()?;
        let mut next = next.normalized();
        if next.progress != self.config.progress {
            next.is_playing = false;
        }

        let was_playing = self.config.is_playing;
        self.config = next;
        self.refresh_targets();
        match (was_playing, self.config.is_playing) {
            (false, true) => self.scheduler.start(&mut self.host, self.clock.now_ms()),
            (true, false) => self.scheduler.stop(&mut self.host),
            _ => {}
        }
        Ok(())
    }

    /// Resize the container to the largest box of the configured aspect ratio that fits
    /// `viewport`.
    pub fn fit_container(&mut self, viewport: Dims) -> PlaneshiftResult<()> {
        self.update_config(|c| c.container = Dims::fit_aspect(c.aspect_ratio, viewport))
    }

    /// Re-seed the target set.
    pub fn randomize(&mut self, seed: u64) {
        self.config.random_seed = seed;
        self.refresh_targets();
    }

    fn refresh_targets(&mut self) {
        let key = TargetKey::of(&self.config);
        if key == self.target_key {
            return;
        }
        self.targets = generate_targets(&self.config);
        self.target_key = key;
        tracing::debug!(
            items = key.num_items,
            seed = key.random_seed,
            "regenerated target set"
        );
    }

    /// Start or pause playback.
    pub fn set_playing(&mut self, playing: bool) {
        if self.config.is_playing == playing {
            return;
        }
        self.config.is_playing = playing;
        if playing {
            self.scheduler.start(&mut self.host, self.clock.now_ms());
        } else {
            self.scheduler.stop(&mut self.host);
        }
    }

    /// Flip playback. Returns the new playing state.
    pub fn toggle_playing(&mut self) -> bool {
        self.set_playing(!self.config.is_playing);
        self.config.is_playing
    }

    /// Jump to `progress`, pausing playback. Out-of-range values are clamped.
    pub fn scrub(&mut self, progress: f64) {
        self.set_playing(false);
        self.config.progress = if progress.is_finite() {
            clamp01(progress)
        } else {
            0.0
        };
    }

    /// Host frame callback. Advances playback and reports the applied tick, or `None` when
    /// nothing was running.
    pub fn on_frame(&mut self) -> Option<Tick> {
        let now = self.clock.now_ms();
        let state = PlaybackState {
            progress: self.config.progress,
            direction: self.config.direction,
            is_playing: self.config.is_playing,
        };
        let timing = PlaybackTiming {
            mode: self.config.playback_mode,
            speed_seconds: self.config.animation_speed,
        };

        let config = &mut self.config;
        let tick = self
            .scheduler
            .on_frame(&mut self.host, now, state, timing, |tick| {
                config.progress = tick.progress;
                config.direction = tick.direction;
            })?;

        if !tick.should_continue {
            self.config.is_playing = false;
        }
        Some(tick)
    }

    /// Wrapper transform and item poses at the current progress.
    pub fn frame(&self) -> FrameState {
        evaluate_frame(self.config.progress, &self.config, &self.targets)
    }

    /// Depth-sorted flat scene at the current progress.
    pub fn projected(&self) -> ProjectedScene {
        project_frame(&self.frame(), &self.config)
    }

    /// Standalone HTML export of the current configuration.
    pub fn export_html(&self) -> PlaneshiftResult<String> {
        export_html(&self.config)
    }

    /// Capture the current frame at the configured resolution.
    ///
    /// Playback is paused for the capture and restored afterwards whether or not the
    /// backend succeeds.
    pub fn capture_frame<B>(&mut self, backend: &mut B) -> PlaneshiftResult<CapturedFrame>
    where
        B: CaptureBackend + ?Sized,
    {
        let was_playing = self.config.is_playing;
        self.set_playing(false);

        let result = backend.capture(&self.projected(), self.config.export_resolution);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "frame capture failed");
        }

        if was_playing {
            self.set_playing(true);
        }
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;
