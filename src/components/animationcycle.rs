//! Frame cursor over a [`FrameSequence`] with loop/no-loop playback.
//!
//! The cycle is tick driven: every call to [`AnimationCycle::advance`]
//! returns the frame to show now and moves the cursor one step. Reaching the
//! last frame completes the cycle, which is reported at most once until the
//! next [`AnimationCycle::reset`]:
//!
//! - the optional completion callback runs inline, and
//! - `advance` returns [`CycleEvent::CycleCompleted`] so callers that prefer
//!   message passing can react without a callback.
//!
//! In [`PlayMode::NoLoop`] the cursor freezes on the last frame; in
//! [`PlayMode::Loop`] it wraps to 0 on the completing tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::framesequence::FrameSequence;
use crate::error::CoreError;
use crate::resources::imagestore::Image;

/// Playback behaviour when the last frame is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    #[default]
    Loop,
    NoLoop,
}

/// Outcome of one [`AnimationCycle::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    Advanced,
    /// The cycle completed on this tick and had not reported it since the
    /// last reset.
    CycleCompleted,
}

/// Completion callback. Runs synchronously on the completing tick.
pub type CycleCallback = Box<dyn FnMut() + Send + Sync>;

pub struct AnimationCycle {
    sequence: FrameSequence,
    cursor: usize,
    mode: PlayMode,
    callback: Option<CycleCallback>,
    fired: bool,
}

impl fmt::Debug for AnimationCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationCycle")
            .field("frames", &self.sequence.len())
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .field("has_callback", &self.callback.is_some())
            .field("fired", &self.fired)
            .finish()
    }
}

impl AnimationCycle {
    /// Looping cycle without callback.
    pub fn new(sequence: FrameSequence) -> Self {
        Self {
            sequence,
            cursor: 0,
            mode: PlayMode::Loop,
            callback: None,
            fired: false,
        }
    }

    /// Build directly from a list of frames. Fails on an empty list.
    pub fn from_frames(frames: Vec<Image>, mode: PlayMode) -> Result<Self, CoreError> {
        let sequence = FrameSequence::new(frames, "animation cycle")?;
        Ok(Self::new(sequence).with_mode(mode))
    }

    pub fn with_mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Image under the cursor. Does not move it.
    pub fn current_frame(&self) -> &Image {
        &self.sequence[self.cursor]
    }

    /// Return the pre-advance image and move the cursor one step.
    pub fn advance(&mut self) -> (Image, CycleEvent) {
        let image = self.sequence[self.cursor].clone();
        let mut event = CycleEvent::Advanced;

        if self.cursor + 1 == self.sequence.len() {
            if !self.fired {
                self.fired = true;
                event = CycleEvent::CycleCompleted;
                if let Some(callback) = self.callback.as_mut() {
                    callback();
                }
            }
            if self.mode == PlayMode::Loop {
                self.cursor = 0;
            }
        } else {
            self.cursor += 1;
        }

        (image, event)
    }

    /// Back to frame 0 and re-arm the completion report.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.fired = false;
    }

    /// Change future advance behaviour. The cursor is untouched.
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
    }

    /// Replace the callback. Does not re-arm it.
    pub fn set_callback(&mut self, callback: impl FnMut() + Send + Sync + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn frames(n: usize) -> FrameSequence {
        let images = (0..n)
            .map(|i| Image::new(format!("f{i:02}.png"), 8, 8))
            .collect();
        FrameSequence::new(images, "test").unwrap()
    }

    fn counting(n: usize, mode: PlayMode) -> (AnimationCycle, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let cycle = AnimationCycle::new(frames(n))
            .with_mode(mode)
            .with_callback(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        (cycle, count)
    }

    #[test]
    fn test_current_frame_is_pure() {
        let cycle = AnimationCycle::new(frames(3));
        assert_eq!(&*cycle.current_frame().id, "f00.png");
        assert_eq!(&*cycle.current_frame().id, "f00.png");
        assert_eq!(cycle.cursor(), 0);
    }

    #[test]
    fn test_no_loop_three_frames_scenario() {
        let (mut cycle, count) = counting(3, PlayMode::NoLoop);

        let (img, ev) = cycle.advance();
        assert_eq!(&*img.id, "f00.png");
        assert_eq!(ev, CycleEvent::Advanced);
        assert_eq!(cycle.cursor(), 1);

        let (img, _) = cycle.advance();
        assert_eq!(&*img.id, "f01.png");
        assert_eq!(cycle.cursor(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let (img, ev) = cycle.advance();
        assert_eq!(&*img.id, "f02.png");
        assert_eq!(ev, CycleEvent::CycleCompleted);
        assert_eq!(cycle.cursor(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let (img, ev) = cycle.advance();
        assert_eq!(&*img.id, "f02.png");
        assert_eq!(ev, CycleEvent::Advanced);
        assert_eq!(cycle.cursor(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_loop_holds_last_frame_after_n_advances() {
        for n in 1..6 {
            let (mut cycle, count) = counting(n, PlayMode::NoLoop);
            for _ in 0..n {
                cycle.advance();
            }
            assert_eq!(cycle.cursor(), n - 1);
            for _ in 0..n {
                cycle.advance();
            }
            assert_eq!(cycle.cursor(), n - 1);
            assert_eq!(count.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_loop_fires_once_until_reset() {
        let n = 4;
        let (mut cycle, count) = counting(n, PlayMode::Loop);
        for _ in 0..n {
            cycle.advance();
        }
        assert_eq!(cycle.cursor(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        for _ in 0..n {
            cycle.advance();
        }
        assert_eq!(cycle.cursor(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        cycle.reset();
        for _ in 0..n {
            cycle.advance();
        }
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_single_frame_no_loop_fires_on_first_advance() {
        let (mut cycle, count) = counting(1, PlayMode::NoLoop);
        let (_, ev) = cycle.advance();
        assert_eq!(ev, CycleEvent::CycleCompleted);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        for _ in 0..3 {
            let (img, ev) = cycle.advance();
            assert_eq!(&*img.id, "f00.png");
            assert_eq!(ev, CycleEvent::Advanced);
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut a, _) = counting(3, PlayMode::NoLoop);
        let (mut b, _) = counting(3, PlayMode::NoLoop);
        for _ in 0..3 {
            a.advance();
            b.advance();
        }
        a.reset();
        b.reset();
        b.reset();
        assert_eq!(a.cursor(), b.cursor());
        assert_eq!(a.has_fired(), b.has_fired());
        assert!(!b.has_fired());
    }

    #[test]
    fn test_set_mode_keeps_cursor() {
        let mut cycle = AnimationCycle::new(frames(3));
        cycle.advance();
        cycle.set_mode(PlayMode::NoLoop);
        assert_eq!(cycle.cursor(), 1);
        assert_eq!(cycle.mode(), PlayMode::NoLoop);
    }

    #[test]
    fn test_set_callback_does_not_rearm() {
        let (mut cycle, first) = counting(2, PlayMode::Loop);
        cycle.advance();
        cycle.advance();
        assert_eq!(first.load(Ordering::SeqCst), 1);

        let second = Arc::new(AtomicUsize::new(0));
        let s = second.clone();
        cycle.set_callback(move || {
            s.fetch_add(1, Ordering::SeqCst);
        });
        cycle.advance();
        cycle.advance();
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_completion_reported_without_callback() {
        let mut cycle = AnimationCycle::new(frames(2)).with_mode(PlayMode::NoLoop);
        assert_eq!(cycle.advance().1, CycleEvent::Advanced);
        assert_eq!(cycle.advance().1, CycleEvent::CycleCompleted);
        assert!(cycle.has_fired());
    }

    #[test]
    fn test_from_frames_rejects_empty() {
        assert!(AnimationCycle::from_frames(Vec::new(), PlayMode::Loop).is_err());
    }
}
