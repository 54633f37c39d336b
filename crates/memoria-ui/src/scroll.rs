//! Cancellable smooth-scroll animation.
//!
//! The host drives [`SmoothScroller::frame`] once per animation frame with
//! a timestamp; the scroller answers with the eased scroll offset to apply.
//! Starting a new animation cancels any in-flight one, so exactly one loop
//! is ever active and a cancelled animation never emits another offset.

use memoria_math::ease_in_out_quad;

/// In-flight animation state: start/target offsets, duration, and the
/// timestamp latched on the first frame.
#[derive(Clone, Copy, Debug)]
struct Animation {
    start_offset: f64,
    target_offset: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

/// Outcome of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollFrame {
    /// Animation running; apply this scroll offset and request another frame.
    Progress(f64),
    /// Final frame; apply this offset, no further frames needed.
    Finished(f64),
    /// No animation is active (idle, completed, or cancelled).
    Inactive,
}

/// Session-lived scroll animation driver.
///
/// States: idle -> running -> (completed | cancelled) -> idle. The only
/// mutable state is the current animation; everything else is derived per
/// frame from the latched start time.
#[derive(Debug, Default)]
pub struct SmoothScroller {
    active: Option<Animation>,
}

impl SmoothScroller {
    /// Create an idle scroller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new animation from `start_offset` to `target_offset`.
    ///
    /// Any in-flight animation is cancelled first; its pending frame will
    /// observe [`ScrollFrame::Inactive`] semantics through the replacement.
    pub fn start(&mut self, start_offset: f64, target_offset: f64, duration_ms: f64) {
        if self.active.is_some() {
            log::debug!("cancelling in-flight scroll animation");
        }
        self.active = Some(Animation {
            start_offset,
            target_offset,
            duration_ms,
            started_at: None,
        });
    }

    /// Cancel the current animation, if any. Subsequent frames are
    /// [`ScrollFrame::Inactive`] until [`SmoothScroller::start`] is called
    /// again.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether an animation is currently armed or running.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the animation to `now_ms` and return the offset to apply.
    ///
    /// The first frame latches the start time, so scheduling latency before
    /// the initial callback does not eat into the duration.
    pub fn frame(&mut self, now_ms: f64) -> ScrollFrame {
        let Some(animation) = self.active.as_mut() else {
            return ScrollFrame::Inactive;
        };

        let started_at = *animation.started_at.get_or_insert(now_ms);
        let progress = if animation.duration_ms > 0.0 {
            ((now_ms - started_at) / animation.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let eased = ease_in_out_quad(progress);
        let offset =
            animation.start_offset + (animation.target_offset - animation.start_offset) * eased;

        if progress >= 1.0 {
            self.active = None;
            ScrollFrame::Finished(offset)
        } else {
            ScrollFrame::Progress(offset)
        }
    }
}

/// Scroll offset that brings the surface line into view.
///
/// Targets `lead` pixels above `surface_start`, clamped to the reachable
/// scroll range for the given content and viewport heights. An unreachable
/// target is reported at warn level and degrades to the maximum scroll.
pub fn surface_scroll_target(
    surface_start: f64,
    lead: f64,
    content_height: f64,
    viewport_height: f64,
) -> f64 {
    let desired = (surface_start - lead).max(0.0);
    let max_scroll = (content_height - viewport_height).max(0.0);
    if desired > max_scroll {
        log::warn!(
            "scroll target {desired}px is unreachable (max {max_scroll}px); clamping"
        );
        max_scroll
    } else {
        desired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_scroller_is_inactive() {
        let mut scroller = SmoothScroller::new();
        assert_eq!(scroller.frame(0.0), ScrollFrame::Inactive);
        assert!(!scroller.is_running());
    }

    #[test]
    fn test_animation_runs_to_completion() {
        let mut scroller = SmoothScroller::new();
        scroller.start(0.0, 1000.0, 2000.0);

        assert_eq!(scroller.frame(100.0), ScrollFrame::Progress(0.0));
        // Eased midpoint lands exactly halfway.
        assert_eq!(scroller.frame(1100.0), ScrollFrame::Progress(500.0));
        assert_eq!(scroller.frame(2100.0), ScrollFrame::Finished(1000.0));
        assert_eq!(scroller.frame(2200.0), ScrollFrame::Inactive);
        assert!(!scroller.is_running());
    }

    #[test]
    fn test_start_time_latched_on_first_frame() {
        let mut scroller = SmoothScroller::new();
        scroller.start(100.0, 200.0, 1000.0);
        // First frame arrives 500ms after start() was called; progress
        // still begins at zero.
        assert_eq!(scroller.frame(500.0), ScrollFrame::Progress(100.0));
        assert_eq!(scroller.frame(1500.0), ScrollFrame::Finished(200.0));
    }

    #[test]
    fn test_restart_cancels_previous_animation() {
        let mut scroller = SmoothScroller::new();
        scroller.start(0.0, 1000.0, 2000.0);
        scroller.frame(0.0);
        scroller.frame(500.0);

        // Second request before the first completes: exactly one animation
        // remains, and it tracks the new endpoints from its own first frame.
        scroller.start(250.0, 50.0, 1000.0);
        assert_eq!(scroller.frame(600.0), ScrollFrame::Progress(250.0));
        assert_eq!(scroller.frame(1600.0), ScrollFrame::Finished(50.0));
        assert_eq!(scroller.frame(1700.0), ScrollFrame::Inactive);
    }

    #[test]
    fn test_no_updates_after_cancel() {
        let mut scroller = SmoothScroller::new();
        scroller.start(0.0, 1000.0, 2000.0);
        scroller.frame(0.0);
        scroller.cancel();
        assert_eq!(scroller.frame(100.0), ScrollFrame::Inactive);
        assert_eq!(scroller.frame(5000.0), ScrollFrame::Inactive);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut scroller = SmoothScroller::new();
        scroller.start(10.0, 900.0, 0.0);
        assert_eq!(scroller.frame(0.0), ScrollFrame::Finished(900.0));
    }

    #[test]
    fn test_offsets_monotonic_toward_target() {
        let mut scroller = SmoothScroller::new();
        scroller.start(0.0, 1000.0, 1000.0);
        let mut prev = -1.0;
        for t in (0..=1000).step_by(50) {
            match scroller.frame(t as f64) {
                ScrollFrame::Progress(offset) | ScrollFrame::Finished(offset) => {
                    assert!(offset >= prev, "offset regressed at {t}ms");
                    prev = offset;
                }
                ScrollFrame::Inactive => break,
            }
        }
        assert_eq!(prev, 1000.0);
    }

    #[test]
    fn test_surface_target_reachable() {
        assert_eq!(surface_scroll_target(6000.0, 450.0, 12000.0, 1080.0), 5550.0);
    }

    #[test]
    fn test_surface_target_clamps_to_max_scroll() {
        // Short content: target past the scrollable range clamps.
        assert_eq!(surface_scroll_target(6000.0, 450.0, 4000.0, 1080.0), 2920.0);
        // Content shorter than the viewport cannot scroll at all.
        assert_eq!(surface_scroll_target(6000.0, 450.0, 800.0, 1080.0), 0.0);
    }

    #[test]
    fn test_surface_target_never_negative() {
        assert_eq!(surface_scroll_target(100.0, 450.0, 12000.0, 1080.0), 0.0);
    }
}
