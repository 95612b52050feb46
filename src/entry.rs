//! Tween and timer construction requests.

use std::fmt;
use std::sync::Arc;

use crate::animator::Animator;
use crate::easing::Easing;
use crate::types::{SubjectId, Tag};

/// Callback fired when a tween or timer reaches its target.
///
/// Runs inside the engine's update pass with full mutable access, so it may
/// push follow-up tweens or kill tags; those take effect per the reentrancy
/// rules on [`Animator::push`] and [`Animator::kill_by_tag`].
pub type DoneCallback = Arc<dyn Fn(&mut Animator) + Send + Sync>;

/// Host hook that rescales the smooth ticker's per-frame horizontal pixel
/// increment, given the current video dimensions.
pub type ScaleAdjust = Arc<dyn Fn(f32, u32, u32) -> f32 + Send + Sync>;

/// A tween request for [`Animator::push`].
#[derive(Clone)]
pub struct AnimationEntry {
    pub subject: SubjectId,
    pub target_value: f32,
    pub duration_ms: f32,
    pub easing: Easing,
    pub tag: Option<Tag>,
    pub on_done: Option<DoneCallback>,
}

impl AnimationEntry {
    pub fn new(subject: SubjectId, target_value: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            subject,
            target_value,
            duration_ms,
            easing,
            tag: None,
            on_done: None,
        }
    }

    /// Makes the tween cancellable via [`Animator::kill_by_tag`].
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_on_done<F>(mut self, on_done: F) -> Self
    where
        F: Fn(&mut Animator) + Send + Sync + 'static,
    {
        self.on_done = Some(Arc::new(on_done));
        self
    }
}

impl fmt::Debug for AnimationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationEntry")
            .field("subject", &self.subject)
            .field("target_value", &self.target_value)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("tag", &self.tag)
            .field("on_done", &self.on_done.as_ref().map(|_| "Fn"))
            .finish()
    }
}

/// A countdown request for [`Animator::timer_start`].
#[derive(Clone, Default)]
pub struct TimerEntry {
    pub duration_ms: f32,
    pub on_done: Option<DoneCallback>,
}

impl TimerEntry {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            on_done: None,
        }
    }

    pub fn with_on_done<F>(mut self, on_done: F) -> Self
    where
        F: Fn(&mut Animator) + Send + Sync + 'static,
    {
        self.on_done = Some(Arc::new(on_done));
        self
    }
}

impl fmt::Debug for TimerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEntry")
            .field("duration_ms", &self.duration_ms)
            .field("on_done", &self.on_done.as_ref().map(|_| "Fn"))
            .finish()
    }
}
