//! The engine object: tween scheduler plus the shared ticker clock.

use std::fmt;

use crate::easing::Easing;
use crate::entry::{AnimationEntry, DoneCallback, ScaleAdjust, TimerEntry};
use crate::subjects::Subjects;
use crate::types::{SubjectId, Tag};

/// Coarse ticker tick period at speed factor 1, in microseconds.
pub const TICKER_SPEED_US: u64 = 333_333;

/// Slow ticker tick period at speed factor 1, in microseconds.
pub const TICKER_SLOW_SPEED_US: u64 = 1_666_666;

/// Spacer inserted between loop-mode repetitions when the caller does not
/// supply one.
pub const DEFAULT_SPACER: &str = "   |   ";

/// One 60 Hz frame, in milliseconds. Pixel ticker indices advance by one
/// per frame-equivalent of elapsed time.
const TICKER_PIXEL_PERIOD_MS: f32 = 1000.0 / 60.0;

/// A live tween. `initial_value` is sampled from the subject at push time.
struct Tween {
    running_since: f32,
    duration: f32,
    initial_value: f32,
    target_value: f32,
    subject: SubjectId,
    easing: Easing,
    tag: Option<Tag>,
    on_done: Option<DoneCallback>,
    /// Tombstone set by a kill that lands mid-update.
    deleted: bool,
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("running_since", &self.running_since)
            .field("duration", &self.duration)
            .field("initial_value", &self.initial_value)
            .field("target_value", &self.target_value)
            .field("subject", &self.subject)
            .field("easing", &self.easing)
            .field("tag", &self.tag)
            .field("deleted", &self.deleted)
            .finish()
    }
}

/// Tween scheduler and ticker clock for one frame loop.
///
/// The host drives it with [`Animator::advance`] once per frame, then asks
/// the ticker entry points for the visible window of any overflowing text.
/// Animated values live in engine-owned subject slots addressed by
/// [`SubjectId`].
#[derive(Default)]
pub struct Animator {
    list: Vec<Tween>,
    pending: Vec<Tween>,
    subjects: Subjects,
    scale_adjust: Option<ScaleAdjust>,

    in_update: bool,
    pending_deletes: bool,
    anim_active: bool,
    ticker_active: bool,

    cur_time_us: u64,
    old_time_us: u64,
    delta_time_ms: f32,
    last_clock_update_us: u64,
    last_ticker_update_us: u64,
    last_ticker_slow_update_us: u64,

    ticker_idx: u64,
    ticker_slow_idx: u64,
    ticker_pixel_idx: u64,
    ticker_pixel_line_idx: u64,
    pixel_accumulator: f32,
    pixel_line_accumulator: f32,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("tweens", &self.list.len())
            .field("pending", &self.pending.len())
            .field("subjects", &self.subjects.len())
            .field("anim_active", &self.anim_active)
            .field("ticker_active", &self.ticker_active)
            .field("ticker_idx", &self.ticker_idx)
            .field("ticker_pixel_idx", &self.ticker_pixel_idx)
            .finish()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the host hook applied to the horizontal pixel increment
    /// each frame (typically a DPI / menu-scale correction).
    pub fn set_scale_adjust<F>(&mut self, adjust: F)
    where
        F: Fn(f32, u32, u32) -> f32 + Send + Sync + 'static,
    {
        self.scale_adjust = Some(std::sync::Arc::new(adjust));
    }

    // Subject slots.

    /// Allocates an animated value slot.
    pub fn add_subject(&mut self, initial: f32) -> SubjectId {
        self.subjects.add(initial)
    }

    /// Frees a slot. Tweens still targeting it are dropped on the next
    /// [`advance`](Self::advance) without firing their callbacks.
    pub fn remove_subject(&mut self, id: SubjectId) -> bool {
        self.subjects.remove(id)
    }

    pub fn subject_value(&self, id: SubjectId) -> Option<f32> {
        self.subjects.get(id)
    }

    pub fn set_subject_value(&mut self, id: SubjectId, value: f32) -> bool {
        self.subjects.set(id, value)
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    // Scheduling.

    /// Queues a tween. Returns `false` for born-dead requests: zero or
    /// negative duration, a dead subject, or a start value already equal
    /// to the target (NaN targets never compare equal, so they pass this
    /// gate and run their course).
    ///
    /// Pushes from inside a completion callback land in a staging buffer
    /// and join the live list when the current update pass ends; their
    /// first advance happens on the next frame.
    pub fn push(&mut self, entry: AnimationEntry) -> bool {
        let Some(initial_value) = self.subjects.get(entry.subject) else {
            mdebug!("push rejected: dead subject {:?}", entry.subject);
            return false;
        };
        if entry.duration_ms <= 0.0 || initial_value == entry.target_value {
            return false;
        }

        let tween = Tween {
            running_since: 0.0,
            duration: entry.duration_ms,
            initial_value,
            target_value: entry.target_value,
            subject: entry.subject,
            easing: entry.easing,
            tag: entry.tag,
            on_done: entry.on_done,
            deleted: false,
        };
        mtrace!(
            "push: {:?} -> {} over {}ms",
            tween.subject,
            tween.target_value,
            tween.duration
        );
        if self.in_update {
            self.pending.push(tween);
        } else {
            self.list.push(tween);
        }
        true
    }

    /// Kills every live or staged tween carrying `tag`. Returns the
    /// number killed. Inside an update pass live entries are tombstoned
    /// and swept at the end of the pass; outside they are erased
    /// immediately.
    pub fn kill_by_tag(&mut self, tag: Tag) -> usize {
        let mut killed = 0;
        if self.in_update {
            for tween in &mut self.list {
                if tween.tag == Some(tag) && !tween.deleted {
                    tween.deleted = true;
                    self.pending_deletes = true;
                    killed += 1;
                }
            }
            let staged = self.pending.len();
            self.pending.retain(|t| t.tag != Some(tag));
            killed += staged - self.pending.len();
        } else {
            let live = self.list.len();
            self.list.retain(|t| t.tag != Some(tag));
            killed += live - self.list.len();
        }
        if killed > 0 {
            mdebug!("kill_by_tag: {:?} killed {}", tag, killed);
        }
        killed
    }

    /// Starts a countdown on `timer`: any previous tween tagged with the
    /// slot's derived tag is killed, the slot resets to `0.0` and ramps
    /// linearly to `1.0` over `entry.duration_ms`.
    pub fn timer_start(&mut self, timer: SubjectId, entry: TimerEntry) {
        self.kill_by_tag(timer.tag());
        self.subjects.set(timer, 0.0);
        let mut tween = AnimationEntry::new(timer, 1.0, entry.duration_ms, Easing::Linear)
            .with_tag(timer.tag());
        tween.on_done = entry.on_done;
        let _ = self.push(tween);
    }

    /// Queues `entry` to be pushed after `delay_ms`. The delay runs on an
    /// engine-internal subject, freed when it fires. A non-positive delay
    /// pushes immediately.
    pub fn push_delayed(&mut self, delay_ms: f32, entry: AnimationEntry) {
        if delay_ms <= 0.0 {
            let _ = self.push(entry);
            return;
        }
        let timer = self.subjects.add(0.0);
        self.timer_start(
            timer,
            TimerEntry::new(delay_ms).with_on_done(move |animator: &mut Animator| {
                animator.remove_subject(timer);
                let _ = animator.push(entry.clone());
            }),
        );
    }

    /// One frame of the clock and the scheduler.
    ///
    /// `current_time_us` is the host's monotonic timestamp. Discrete and
    /// pixel ticker indices only advance if a ticker drew during the
    /// previous frame, so freshly overflowing text holds its first window
    /// for one frame before moving. `ticker_speed` scales all ticker
    /// pacing; tween durations are unaffected.
    ///
    /// Returns `true` when anything visible may have changed: a tween is
    /// live, a ticker drew last frame, or (with `timedate_enable`) the
    /// wall-clock second rolled over.
    pub fn advance(
        &mut self,
        current_time_us: u64,
        timedate_enable: bool,
        ticker_speed: f32,
        video_width: u32,
        video_height: u32,
    ) -> bool {
        let ticker_was_active = self.ticker_active;
        self.ticker_active = false;

        let speed_factor = if ticker_speed > 0.0001 { ticker_speed } else { 1.0 };
        let ticker_period_us = ((TICKER_SPEED_US as f32 / speed_factor) + 0.5) as u64;
        let ticker_slow_period_us = ((TICKER_SLOW_SPEED_US as f32 / speed_factor) + 0.5) as u64;

        self.cur_time_us = current_time_us;
        self.delta_time_ms = if self.old_time_us == 0 {
            0.0
        } else {
            self.cur_time_us.saturating_sub(self.old_time_us) as f32 / 1000.0
        };
        self.old_time_us = self.cur_time_us;

        let mut clock_ticked = false;
        if timedate_enable
            && self.cur_time_us.saturating_sub(self.last_clock_update_us) > 1_000_000
        {
            clock_ticked = true;
            self.last_clock_update_us = self.cur_time_us;
        }

        if ticker_was_active {
            if self.cur_time_us.saturating_sub(self.last_ticker_update_us) >= ticker_period_us {
                self.ticker_idx += 1;
                self.last_ticker_update_us = self.cur_time_us;
            }
            if self.cur_time_us.saturating_sub(self.last_ticker_slow_update_us)
                >= ticker_slow_period_us
            {
                self.ticker_slow_idx += 1;
                self.last_ticker_slow_update_us = self.cur_time_us;
            }

            let base_increment = self.delta_time_ms / TICKER_PIXEL_PERIOD_MS * speed_factor;
            let mut pixel_increment = base_increment;
            if let Some(adjust) = &self.scale_adjust {
                pixel_increment = adjust(pixel_increment, video_width, video_height);
            }

            self.pixel_accumulator += pixel_increment;
            let whole = self.pixel_accumulator as u64;
            if whole > 0 {
                self.ticker_pixel_idx += whole;
                self.pixel_accumulator -= whole as f32;
            }

            // The vertical accumulator is not scale-adjusted; line height
            // already comes from the host in pixels.
            self.pixel_line_accumulator += base_increment;
            let whole = self.pixel_line_accumulator as u64;
            if whole > 0 {
                self.ticker_pixel_line_idx += whole;
                self.pixel_line_accumulator -= whole as f32;
            }
        }

        self.in_update = true;
        self.pending_deletes = false;

        let delta = self.delta_time_ms;
        let mut i = 0;
        while i < self.list.len() {
            if self.list[i].deleted {
                i += 1;
                continue;
            }

            let tween = &mut self.list[i];
            tween.running_since += delta;
            let subject = tween.subject;

            if tween.running_since >= tween.duration {
                let target = tween.target_value;
                let finished = self.list.remove(i);
                // A dead subject drops the tween without firing its
                // callback.
                if self.subjects.set(subject, target) {
                    if let Some(on_done) = finished.on_done {
                        on_done(self);
                    }
                }
                continue;
            }

            let value = tween.easing.apply(
                tween.running_since,
                tween.initial_value,
                tween.target_value - tween.initial_value,
                tween.duration,
            );
            if !self.subjects.set(subject, value) {
                self.list.remove(i);
                continue;
            }
            i += 1;
        }

        if self.pending_deletes {
            self.list.retain(|t| !t.deleted);
            self.pending_deletes = false;
        }
        if !self.pending.is_empty() {
            self.list.append(&mut self.pending);
        }

        self.in_update = false;
        self.anim_active = !self.list.is_empty();

        self.anim_active || ticker_was_active || clock_ticked
    }

    /// Kills all tweens and zeroes the clock. Subject slots survive, so
    /// handles held by the host stay valid.
    pub fn reset(&mut self) {
        self.list.clear();
        self.pending.clear();
        self.in_update = false;
        self.pending_deletes = false;
        self.anim_active = false;
        self.ticker_active = false;
        self.cur_time_us = 0;
        self.old_time_us = 0;
        self.delta_time_ms = 0.0;
        self.last_clock_update_us = 0;
        self.last_ticker_update_us = 0;
        self.last_ticker_slow_update_us = 0;
        self.ticker_idx = 0;
        self.ticker_slow_idx = 0;
        self.ticker_pixel_idx = 0;
        self.ticker_pixel_line_idx = 0;
        self.pixel_accumulator = 0.0;
        self.pixel_line_accumulator = 0.0;
    }

    // Clock queries.

    /// Coarse ticker index (one step per 333.333 ms at speed 1).
    pub fn ticker_idx(&self) -> u64 {
        self.ticker_idx
    }

    /// Slow ticker index (one step per 1.666 s at speed 1).
    pub fn ticker_slow_idx(&self) -> u64 {
        self.ticker_slow_idx
    }

    /// Horizontal pixel ticker index (scale-adjusted).
    pub fn ticker_pixel_idx(&self) -> u64 {
        self.ticker_pixel_idx
    }

    /// Vertical pixel ticker index.
    pub fn ticker_pixel_line_idx(&self) -> u64 {
        self.ticker_pixel_line_idx
    }

    /// Whether the last [`advance`](Self::advance) left any tween live or
    /// any ticker drew since then.
    pub fn is_active(&self) -> bool {
        self.anim_active || self.ticker_active
    }

    pub fn has_tweens(&self) -> bool {
        !self.list.is_empty() || !self.pending.is_empty()
    }

    /// Marks that a ticker produced an animating window this frame; the
    /// next [`advance`](Self::advance) will step the ticker indices.
    pub(crate) fn mark_ticker_active(&mut self) {
        self.ticker_active = true;
    }
}
