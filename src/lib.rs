//! Headless tween scheduler and text ticker engine for menu UIs.
//!
//! `marquee` animates scalar values and scrolls overflowing text, without
//! knowing anything about rendering. The host owns the frame loop and the
//! font geometry; the engine owns the animated values, the tween list and
//! the shared ticker clock.
//!
//! # Frame loop
//!
//! Call [`Animator::advance`] once per frame with a monotonic microsecond
//! timestamp. It steps every live tween, fires completion callbacks, and
//! advances the ticker indices that pace text scrolling. Its `bool` return
//! tells the host whether anything visible may have changed, so idle menus
//! can skip redraws.
//!
//! # Tweens
//!
//! Animated values live in engine-owned slots created with
//! [`Animator::add_subject`]. A tween is queued with [`Animator::push`]
//! and eased from the slot's current value to a target over a duration:
//!
//! ```
//! use marquee::{AnimationEntry, Animator, Easing, Tag};
//!
//! let mut animator = Animator::new();
//! let alpha = animator.add_subject(0.0);
//!
//! animator.push(
//!     AnimationEntry::new(alpha, 1.0, 300.0, Easing::OutQuad).with_tag(Tag(1)),
//! );
//!
//! let mut now_us = 0;
//! while animator.advance(now_us, false, 1.0, 1920, 1080) {
//!     now_us += 16_667;
//! }
//! assert_eq!(animator.subject_value(alpha), Some(1.0));
//! ```
//!
//! # Tickers
//!
//! Text that overflows its field scrolls through a fixed-size window.
//! [`Animator::ticker`] works in whole chars, [`Animator::ticker_smooth`]
//! in pixels with caller-supplied [`GlyphMetrics`]; [`Animator::line_ticker`]
//! and [`Animator::line_ticker_smooth`] scroll word-wrapped line blocks
//! vertically. Tickers only animate while the host keeps drawing them:
//! each call marks the clock active for the next frame's `advance`.

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod animator;
mod easing;
mod entry;
mod line_ticker;
mod subjects;
mod text;
mod ticker;
mod types;


pub use animator::{Animator, DEFAULT_SPACER, TICKER_SLOW_SPEED_US, TICKER_SPEED_US};
pub use easing::Easing;
pub use entry::{AnimationEntry, DoneCallback, ScaleAdjust, TimerEntry};
pub use line_ticker::{LineTicker, LineTickerSmooth};
pub use ticker::{GlyphMetrics, Ticker, TickerSmooth};
pub use types::{
    LineFade, LineTickerSmoothResult, SubjectId, Tag, TickerMode, TickerSmoothResult,
};
