//! Small shared plain-data types.

/// Cancellation tag attached to a tween.
///
/// Tags are opaque caller-chosen values; `Tag(0)` is an ordinary tag, not a
/// sentinel. Subject handles derive a tag of their own via
/// [`SubjectId::tag`], carved out of the upper half of the value space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u64);

/// Handle to an animated `f32` slot owned by the engine.
///
/// Handles are generational: removing a subject invalidates every copy of
/// its id, and a stale id is rejected by all lookups rather than aliasing a
/// later allocation of the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl SubjectId {
    /// The tag that [`crate::Animator::timer_start`] and
    /// [`crate::Animator::push_delayed`] use for tweens driving this slot.
    ///
    /// Derived from the handle identity, so it changes when the slot is
    /// reused. Caller-chosen tags in the same numeric range can collide
    /// with it; keep hand-picked tags below `1 << 32` to stay clear.
    pub fn tag(self) -> Tag {
        Tag(((self.generation as u64) << 32) | self.index as u64)
    }
}

/// Scroll style for strings and line blocks that overflow their field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickerMode {
    /// Sweep to the end, pause, sweep back.
    #[default]
    Bounce,
    /// Scroll through continuously with a spacer between repetitions.
    Loop,
}

/// Output of [`crate::Animator::ticker_smooth`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickerSmoothResult {
    /// Whether the text is animating. `false` means the string fits (or was
    /// truncated for a non-selected entry) and the output is static.
    pub scrolling: bool,
    /// Horizontal draw offset of the first output glyph, in pixels.
    pub x_offset: u32,
    /// Total width of the output string, capped at the field width.
    pub display_width: u32,
}

/// A partially faded line emitted above or below a smooth line ticker
/// window while a line boundary is being crossed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineFade {
    pub text: String,
    /// Vertical draw offset relative to the top of the field, in pixels.
    pub y_offset: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

/// Output of [`crate::Animator::line_ticker_smooth`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineTickerSmoothResult {
    /// Whether the block is animating.
    pub scrolling: bool,
    /// Vertical draw offset of the first output line, in pixels. Zero or
    /// negative; the fractional part of the scroll position.
    pub y_offset: f32,
    /// Fading line scrolling out above the window, if any.
    pub top_fade: Option<LineFade>,
    /// Fading line scrolling in below the window, if any.
    pub bottom_fade: Option<LineFade>,
}
