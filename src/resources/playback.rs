//! Playback clock resource.
//!
//! Drives the normalized `progress` value of the active problem's animation.
//! The clock is a small state machine over {stopped-at-0, playing,
//! paused-midway, completed}: `completed` is observably `paused-midway` with
//! `progress == 1.0`.
//!
//! [`Playback::tick`] is called once per rendered frame regardless of the
//! play/pause state (a paused tick is a no-op), so the delta-time baseline
//! never accumulates while paused and resuming cannot jump. One clock
//! belongs to one displayed problem; switching problems resets it through
//! the [`ProblemChangedEvent`](crate::events::problemchange::ProblemChangedEvent)
//! observer rather than by mutating shared global state.

use bevy_ecs::prelude::Resource;

/// Wall-clock seconds of a full playback cycle at 1x rate, independent of
/// the problem's simulated duration.
pub const BASE_CYCLE_SECS: f32 = 10.0;

/// Allowed rate multipliers, in cycling order.
pub const RATE_STEPS: [f32; 4] = [0.5, 1.0, 2.0, 5.0];

/// Seekable, speed-adjustable animation clock over `progress ∈ [0, 1]`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Playback {
    progress: f32,
    playing: bool,
    rate: f32,
    /// Wall-clock seconds for one full cycle at 1x. Normally
    /// [`BASE_CYCLE_SECS`]; configurable from `[playback]` in config.ini.
    base_cycle_secs: f32,
}

impl Default for Playback {
    fn default() -> Self {
        Playback {
            progress: 0.0,
            playing: false,
            rate: 1.0,
            base_cycle_secs: BASE_CYCLE_SECS,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the nominal cycle length (clamped to a sane positive value).
    pub fn with_base_cycle_secs(mut self, secs: f32) -> Self {
        if secs.is_finite() && secs > 0.0 {
            self.base_cycle_secs = secs;
        }
        self
    }

    /// Current normalized playback position in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Whether playback has run to the end and auto-stopped.
    pub fn is_completed(&self) -> bool {
        self.progress >= 1.0 && !self.playing
    }

    /// Start playing. No-op at the completion boundary; seek or reset first
    /// to replay.
    pub fn play(&mut self) {
        if self.progress < 1.0 {
            self.playing = true;
        }
    }

    /// Stop advancing, keeping the current position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle between playing and paused (the transport's one-button UX).
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to an arbitrary position. Scrubbing always pauses, whatever the
    /// prior state; out-of-range values are clamped.
    pub fn seek(&mut self, progress: f32) {
        self.progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.playing = false;
    }

    /// Change the rate multiplier. Takes effect on the next tick; does not
    /// start or stop playback. Non-positive or non-finite rates are ignored.
    pub fn set_rate(&mut self, rate: f32) {
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
    }

    /// Step to the next entry of [`RATE_STEPS`], wrapping around.
    pub fn cycle_rate(&mut self) {
        let next = RATE_STEPS
            .iter()
            .position(|r| (*r - self.rate).abs() < 1e-6)
            .map(|i| RATE_STEPS[(i + 1) % RATE_STEPS.len()])
            .unwrap_or(RATE_STEPS[0]);
        self.rate = next;
    }

    /// Back to the start, paused.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.playing = false;
    }

    /// Advance by one frame of `dt` wall-clock seconds.
    ///
    /// Called every frame; while paused this is a no-op, which keeps the
    /// caller's frame loop uniform. While playing, progress advances by
    /// `dt / (base_cycle / rate)`; reaching 1.0 clamps and auto-pauses.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let dt = dt.max(0.0);
        let cycle = self.base_cycle_secs / self.rate;
        self.progress += dt / cycle;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== TRANSPORT COMMAND TESTS ====================

    #[test]
    fn test_new_clock_is_stopped_at_zero() {
        let pb = Playback::new();
        assert!(approx_eq(pb.progress(), 0.0));
        assert!(!pb.is_playing());
        assert!(approx_eq(pb.rate(), 1.0));
        assert!(!pb.is_completed());
    }

    #[test]
    fn test_play_starts_playback() {
        let mut pb = Playback::new();
        pb.play();
        assert!(pb.is_playing());
    }

    #[test]
    fn test_play_is_noop_at_completion() {
        let mut pb = Playback::new();
        pb.seek(1.0);
        pb.play();
        assert!(!pb.is_playing());
        assert!(pb.is_completed());
    }

    #[test]
    fn test_play_works_again_after_seek_back() {
        let mut pb = Playback::new();
        pb.seek(1.0);
        pb.seek(0.4);
        pb.play();
        assert!(pb.is_playing());
    }

    #[test]
    fn test_pause_preserves_progress() {
        let mut pb = Playback::new();
        pb.play();
        pb.tick(1.0);
        let at = pb.progress();
        pb.pause();
        assert!(!pb.is_playing());
        assert!(approx_eq(pb.progress(), at));
    }

    #[test]
    fn test_seek_always_pauses() {
        // From every reachable state, seeking must leave the clock paused.
        let mut playing = Playback::new();
        playing.play();
        playing.seek(0.5);
        assert!(!playing.is_playing());

        let mut paused = Playback::new();
        paused.seek(0.25);
        assert!(!paused.is_playing());

        let mut completed = Playback::new();
        completed.seek(1.0);
        completed.seek(0.75);
        assert!(!completed.is_playing());
    }

    #[test]
    fn test_seek_clamps_out_of_range() {
        let mut pb = Playback::new();
        pb.seek(1.7);
        assert!(approx_eq(pb.progress(), 1.0));
        pb.seek(-0.3);
        assert!(approx_eq(pb.progress(), 0.0));
        pb.seek(f32::NAN);
        assert!(approx_eq(pb.progress(), 0.0));
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut pb = Playback::new();
        pb.play();
        pb.tick(2.0);
        pb.reset();
        assert!(approx_eq(pb.progress(), 0.0));
        assert!(!pb.is_playing());
    }

    #[test]
    fn test_set_rate_does_not_change_play_state() {
        let mut pb = Playback::new();
        pb.set_rate(2.0);
        assert!(!pb.is_playing());
        pb.play();
        pb.set_rate(0.5);
        assert!(pb.is_playing());
        assert!(approx_eq(pb.rate(), 0.5));
    }

    #[test]
    fn test_set_rate_rejects_bad_values() {
        let mut pb = Playback::new();
        pb.set_rate(0.0);
        assert!(approx_eq(pb.rate(), 1.0));
        pb.set_rate(-2.0);
        assert!(approx_eq(pb.rate(), 1.0));
        pb.set_rate(f32::INFINITY);
        assert!(approx_eq(pb.rate(), 1.0));
    }

    #[test]
    fn test_cycle_rate_walks_the_step_table() {
        let mut pb = Playback::new();
        assert!(approx_eq(pb.rate(), 1.0));
        pb.cycle_rate();
        assert!(approx_eq(pb.rate(), 2.0));
        pb.cycle_rate();
        assert!(approx_eq(pb.rate(), 5.0));
        pb.cycle_rate();
        assert!(approx_eq(pb.rate(), 0.5));
        pb.cycle_rate();
        assert!(approx_eq(pb.rate(), 1.0));
    }

    #[test]
    fn test_cycle_rate_recovers_from_custom_rate() {
        let mut pb = Playback::new();
        pb.set_rate(3.0);
        pb.cycle_rate();
        assert!(approx_eq(pb.rate(), RATE_STEPS[0]));
    }

    // ==================== TICK TESTS ====================

    #[test]
    fn test_tick_while_paused_never_moves() {
        let mut pb = Playback::new();
        pb.seek(0.3);
        for _ in 0..100 {
            pb.tick(0.016);
        }
        assert!(approx_eq(pb.progress(), 0.3));
        assert!(!pb.is_playing());
    }

    #[test]
    fn test_tick_advances_at_base_cycle_rate() {
        // One second at 1x over a 10-second cycle is 0.1 progress.
        let mut pb = Playback::new();
        pb.play();
        pb.tick(1.0);
        assert!(approx_eq(pb.progress(), 0.1));
    }

    #[test]
    fn test_tick_respects_rate_multiplier() {
        let mut pb = Playback::new();
        pb.set_rate(2.0);
        pb.play();
        pb.tick(1.0);
        assert!(approx_eq(pb.progress(), 0.2));
    }

    #[test]
    fn test_rate_change_applies_mid_flight() {
        let mut pb = Playback::new();
        pb.play();
        pb.tick(1.0); // 0.1
        pb.set_rate(5.0);
        pb.tick(1.0); // + 0.5
        assert!(approx_eq(pb.progress(), 0.6));
    }

    #[test]
    fn test_tick_is_monotonic_until_completion() {
        let mut pb = Playback::new();
        pb.play();
        let mut prev = pb.progress();
        while pb.is_playing() {
            pb.tick(0.4);
            assert!(pb.progress() >= prev);
            prev = pb.progress();
        }
        assert!(approx_eq(pb.progress(), 1.0));
    }

    #[test]
    fn test_tick_clamps_and_autostops_at_one() {
        let mut pb = Playback::new();
        pb.seek(0.95);
        pb.play();
        pb.tick(3.0); // would overshoot to 1.25
        assert!(approx_eq(pb.progress(), 1.0));
        assert!(!pb.is_playing());
        assert!(pb.is_completed());
        // Further ticks stay put.
        pb.tick(1.0);
        assert!(approx_eq(pb.progress(), 1.0));
        assert!(!pb.is_playing());
    }

    #[test]
    fn test_tick_ignores_negative_delta() {
        let mut pb = Playback::new();
        pb.seek(0.5);
        pb.play();
        pb.tick(-1.0);
        assert!(approx_eq(pb.progress(), 0.5));
    }

    #[test]
    fn test_custom_base_cycle() {
        let mut pb = Playback::new().with_base_cycle_secs(5.0);
        pb.play();
        pb.tick(1.0);
        assert!(approx_eq(pb.progress(), 0.2));
    }

    #[test]
    fn test_with_base_cycle_secs_rejects_bad_values() {
        let mut pb = Playback::new().with_base_cycle_secs(0.0);
        pb.play();
        pb.tick(1.0);
        assert!(approx_eq(pb.progress(), 0.1)); // still the 10s default
    }
}
