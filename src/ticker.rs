//! Horizontal ticker phase algorithms and engine entry points.
//!
//! The discrete functions work in whole chars and are driven by the
//! coarse ticker index; the smooth functions work in pixels, driven by the
//! pixel index, and need glyph geometry from the caller.

use crate::animator::{Animator, DEFAULT_SPACER};
use crate::text::{self, Segment};
use crate::types::{TickerMode, TickerSmoothResult};

/// Ticks spent paused at each end of a smooth bounce sweep.
const SMOOTH_PAUSE_TICKS: u32 = 32;

/// Placeholder appended to non-selected entries that overflow.
const ELLIPSIS: &str = "...";
const ELLIPSIS_CHARS: usize = 3;

/// A ticker request in whole-char units.
#[derive(Clone, Copy, Debug)]
pub struct Ticker<'a> {
    pub text: &'a str,
    /// Loop-mode separator; `None` selects the built-in `"   |   "`.
    pub spacer: Option<&'a str>,
    /// Field width in chars.
    pub field_chars: usize,
    /// Coarse ticker index, usually [`Animator::ticker_idx`] or
    /// [`Animator::ticker_slow_idx`].
    pub idx: u64,
    pub mode: TickerMode,
    /// Non-selected entries are truncated with `...` and never animate.
    pub selected: bool,
}

/// Glyph geometry for smooth (pixel-space) tickers.
#[derive(Clone, Copy, Debug)]
pub enum GlyphMetrics<'a> {
    /// Monospaced text: every glyph is `glyph_width` pixels wide.
    Fixed { glyph_width: u32 },
    /// Proportional text: per-char advance widths, in char order.
    /// `char_widths` must have one entry per char of the ticker text and
    /// `spacer_widths` one per char of the effective spacer.
    Table {
        char_widths: &'a [u32],
        spacer_widths: &'a [u32],
        /// Total width of the `...` suffix.
        ellipsis_width: u32,
    },
}

/// A ticker request in pixel units.
#[derive(Clone, Copy, Debug)]
pub struct TickerSmooth<'a> {
    pub text: &'a str,
    /// Loop-mode separator; `None` selects the built-in `"   |   "`.
    pub spacer: Option<&'a str>,
    pub metrics: GlyphMetrics<'a>,
    /// Field width in pixels.
    pub field_width: u32,
    /// Pixel ticker index, usually [`Animator::ticker_pixel_idx`].
    pub idx: u64,
    pub mode: TickerMode,
    pub selected: bool,
}

/// Char offset of a bouncing window over a string `overflow` chars wider
/// than its field. The sweep pauses two ticks at each end.
pub(crate) fn bounce_offset(idx: u64, overflow: usize) -> usize {
    let period = (2 * overflow + 4) as u64;
    let phase = (idx % period) as usize;
    let left_stop = 2;
    let left_moving = left_stop + overflow;
    let right_stop = left_moving + 2;
    if phase < left_stop {
        0
    } else if phase < left_moving {
        phase - left_stop
    } else if phase < right_stop {
        overflow
    } else {
        overflow - (phase - right_stop)
    }
}

/// The three source ranges (text tail, spacer, text head) of a looping
/// window. The segment lengths always sum to `field_chars`.
pub(crate) fn loop_segments(
    idx: u64,
    field_chars: usize,
    text_chars: usize,
    spacer_chars: usize,
) -> [Segment; 3] {
    let period = (text_chars + spacer_chars) as u64;
    if period == 0 {
        return [Segment::default(); 3];
    }
    let phase = (idx % period) as usize;

    let offset1 = if phase < text_chars { phase } else { 0 };
    let len1 = text_chars.saturating_sub(phase).min(field_chars);

    let offset2 = phase.saturating_sub(text_chars);
    let len2 = (spacer_chars - offset2).min(field_chars - len1);

    let len3 = field_chars - len1 - len2;

    [
        Segment {
            offset: offset1,
            len: len1,
        },
        Segment {
            offset: offset2,
            len: len2,
        },
        Segment {
            offset: 0,
            len: len3,
        },
    ]
}

/// Pixel scroll offset of a smooth bounce sweep over a string
/// `text_width - field_width` pixels too wide.
pub(crate) fn smooth_bounce_scroll_offset(idx: u64, text_width: u32, field_width: u32) -> u32 {
    let scroll_width = text_width - field_width;
    let period = 2 * (scroll_width + SMOOTH_PAUSE_TICKS);
    let phase = (idx % period as u64) as u32;
    if phase < SMOOTH_PAUSE_TICKS {
        0
    } else if phase < period >> 1 {
        phase - SMOOTH_PAUSE_TICKS
    } else if phase < (period >> 1) + SMOOTH_PAUSE_TICKS {
        (period - 2 * SMOOTH_PAUSE_TICKS) >> 1
    } else {
        period - phase
    }
}

/// Result of scanning a string for the visible char range at a given
/// pixel scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SmoothScan {
    pub char_offset: usize,
    pub num_chars: usize,
    /// Draw offset of the first visible char.
    pub x_offset: u32,
    /// Summed advance width of the visible chars.
    pub text_width: u32,
    /// `x_offset + text_width` including a final partially-clipped char,
    /// capped at the field width.
    pub display_width: u32,
}

/// Fixed-width scan. When the scroll position falls exactly on a glyph
/// boundary the window still starts one char later with a full-glyph
/// `x_offset`; renderers rely on that one-glyph lead-in staying stable.
pub(crate) fn scan_fixed(
    text_chars: usize,
    glyph_width: u32,
    field_width: u32,
    scroll_offset: u32,
) -> SmoothScan {
    let mut scan = SmoothScan::default();
    if scroll_offset > 0 {
        scan.char_offset = (scroll_offset / glyph_width) as usize + 1;
        scan.x_offset = glyph_width - (scroll_offset % glyph_width);
    }
    if scan.char_offset < text_chars && field_width > scan.x_offset {
        let fit = ((field_width - scan.x_offset) / glyph_width) as usize;
        scan.num_chars = fit.min(text_chars - scan.char_offset);
    }
    scan.text_width = scan.num_chars as u32 * glyph_width;
    scan.display_width = (scan.x_offset + scan.text_width).min(field_width);
    scan
}

/// Width-table scan.
pub(crate) fn scan_table(widths: &[u32], field_width: u32, scroll_offset: u32) -> SmoothScan {
    let mut scan = SmoothScan::default();
    if scroll_offset > 0 {
        let mut scroll_pos = scroll_offset;
        for (i, &w) in widths.iter().enumerate() {
            if scroll_pos > w {
                scroll_pos -= w;
            } else {
                scan.char_offset = i + 1;
                scan.x_offset = w - scroll_pos;
                break;
            }
        }
    }
    let start = scan.char_offset.min(widths.len());
    let mut running_width = 0u32;
    let mut clipped = false;
    for &w in &widths[start..] {
        running_width += w;
        if scan.x_offset + running_width <= field_width {
            scan.num_chars += 1;
        } else {
            scan.text_width = running_width - w;
            clipped = true;
            break;
        }
    }
    if !clipped {
        scan.text_width = running_width;
    }
    scan.display_width = (scan.x_offset + running_width).min(field_width);
    scan
}

/// Visible ranges of a smooth loop window: text tail, spacer, text head.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SmoothLoopScan {
    pub seg1: (usize, usize),
    pub seg2: (usize, usize),
    pub seg3: (usize, usize),
    pub x_offset: u32,
    pub text_width: u32,
}

/// Width-table smooth loop scan. `char_widths`/`spacer_widths` are the
/// advance widths of the text and spacer, `text_width`/`spacer_width`
/// their sums.
pub(crate) fn scan_loop_table(
    idx: u64,
    char_widths: &[u32],
    spacer_widths: &[u32],
    text_width: u32,
    spacer_width: u32,
    field_width: u32,
) -> SmoothLoopScan {
    let mut out = SmoothLoopScan::default();
    let period = (text_width + spacer_width) as u64;
    if period == 0 {
        return out;
    }
    let phase = (idx % period) as u32;
    let mut remaining = field_width;

    if phase < text_width {
        let scan = scan_table(char_widths, remaining, phase);
        out.seg1 = (scan.char_offset, scan.num_chars);
        out.x_offset = scan.x_offset;
        out.text_width += scan.text_width;
        remaining -= scan.display_width;
    }

    if remaining > 0 {
        let scroll = phase.saturating_sub(text_width);
        let scan = scan_table(spacer_widths, remaining, scroll);
        out.seg2 = (scan.char_offset, scan.num_chars);
        out.text_width += scan.text_width;
        remaining -= scan.display_width;
        if scroll > 0 {
            out.x_offset = scan.x_offset;
        }
    }

    if remaining > 0 {
        let mut running_width = 0u32;
        let mut num = 0usize;
        for &w in char_widths {
            running_width += w;
            if running_width <= remaining {
                num += 1;
            } else {
                out.text_width += running_width - w;
                break;
            }
        }
        out.seg3 = (0, num);
    }
    out
}

/// Fixed-width smooth loop scan.
pub(crate) fn scan_loop_fixed(
    idx: u64,
    text_chars: usize,
    spacer_chars: usize,
    glyph_width: u32,
    field_width: u32,
) -> SmoothLoopScan {
    let mut out = SmoothLoopScan::default();
    let text_width = text_chars as u32 * glyph_width;
    let spacer_width = spacer_chars as u32 * glyph_width;
    let period = (text_width + spacer_width) as u64;
    if period == 0 {
        return out;
    }
    let phase = (idx % period) as u32;
    let mut remaining = field_width;

    if phase < text_width {
        let scan = scan_fixed(text_chars, glyph_width, remaining, phase);
        out.seg1 = (scan.char_offset, scan.num_chars);
        out.x_offset = scan.x_offset;
        remaining = remaining.saturating_sub(scan.display_width);
    }

    if remaining > glyph_width {
        let scroll = phase.saturating_sub(text_width);
        let scan = scan_fixed(spacer_chars, glyph_width, remaining, scroll);
        out.seg2 = (scan.char_offset, scan.num_chars);
        remaining = remaining.saturating_sub(scan.display_width);
        if scroll > 0 {
            out.x_offset = scan.x_offset;
        }
    }

    if remaining > glyph_width {
        let num = ((remaining / glyph_width) as usize).min(text_chars);
        out.seg3 = (0, num);
    }

    out.text_width = (out.seg1.1 + out.seg2.1 + out.seg3.1) as u32 * glyph_width;
    out
}

impl Animator {
    /// Discrete char-granularity ticker. Writes the visible window into
    /// `dst` and returns whether the text is animating.
    ///
    /// Strings that fit are copied verbatim; non-selected overflowing
    /// strings are truncated with `...`. Both cases return `false` and do
    /// not mark the ticker clock active.
    pub fn ticker(&mut self, request: &Ticker<'_>, dst: &mut String) -> bool {
        dst.clear();
        let text_chars = text::char_len(request.text);

        if text_chars <= request.field_chars {
            dst.push_str(request.text);
            return false;
        }

        if !request.selected {
            text::push_chars(
                dst,
                request.text,
                0,
                request.field_chars.saturating_sub(ELLIPSIS_CHARS),
            );
            dst.push_str(ELLIPSIS);
            return false;
        }

        match request.mode {
            TickerMode::Bounce => {
                let offset = bounce_offset(request.idx, text_chars - request.field_chars);
                text::push_chars(dst, request.text, offset, request.field_chars);
            }
            TickerMode::Loop => {
                let spacer = request.spacer.unwrap_or(DEFAULT_SPACER);
                let segments = loop_segments(
                    request.idx,
                    request.field_chars,
                    text_chars,
                    text::char_len(spacer),
                );
                text::build_ticker_loop_string(request.text, spacer, &segments, dst);
            }
        }

        mtrace!(
            "ticker: idx={} field={} window={:?}",
            request.idx,
            request.field_chars,
            dst
        );
        self.mark_ticker_active();
        true
    }

    /// Smooth pixel-granularity ticker. Writes the visible chars into
    /// `dst`; the result carries the sub-glyph draw offset.
    ///
    /// Malformed geometry (zero glyph width, width-table length not
    /// matching the text, field too narrow for the `...` suffix) degrades
    /// to an empty, non-scrolling result.
    pub fn ticker_smooth(
        &mut self,
        request: &TickerSmooth<'_>,
        dst: &mut String,
    ) -> TickerSmoothResult {
        dst.clear();
        let mut result = TickerSmoothResult::default();
        if request.text.is_empty() || request.field_width == 0 {
            return result;
        }

        match request.metrics {
            GlyphMetrics::Fixed { glyph_width } => {
                self.ticker_smooth_fixed(request, glyph_width, dst, &mut result)
            }
            GlyphMetrics::Table {
                char_widths,
                spacer_widths,
                ellipsis_width,
            } => self.ticker_smooth_table(
                request,
                char_widths,
                spacer_widths,
                ellipsis_width,
                dst,
                &mut result,
            ),
        }
        result
    }

    fn ticker_smooth_fixed(
        &mut self,
        request: &TickerSmooth<'_>,
        glyph_width: u32,
        dst: &mut String,
        result: &mut TickerSmoothResult,
    ) {
        if glyph_width == 0 {
            return;
        }
        let text_chars = text::char_len(request.text);
        let text_width = text_chars as u32 * glyph_width;

        if text_width <= request.field_width {
            dst.push_str(request.text);
            result.display_width = text_width;
            return;
        }

        if !request.selected {
            let suffix_width = ELLIPSIS_CHARS as u32 * glyph_width;
            if request.field_width < suffix_width {
                return;
            }
            let num_chars = ((request.field_width - suffix_width) / glyph_width) as usize;
            text::push_chars(dst, request.text, 0, num_chars);
            dst.push_str(ELLIPSIS);
            result.display_width = num_chars as u32 * glyph_width + suffix_width;
            return;
        }

        match request.mode {
            TickerMode::Bounce => {
                let scroll =
                    smooth_bounce_scroll_offset(request.idx, text_width, request.field_width);
                let scan = scan_fixed(text_chars, glyph_width, request.field_width, scroll);
                text::push_chars(dst, request.text, scan.char_offset, scan.num_chars);
                result.x_offset = scan.x_offset;
                result.display_width = scan.display_width;
            }
            TickerMode::Loop => {
                let spacer = request.spacer.unwrap_or(DEFAULT_SPACER);
                let spacer_chars = text::char_len(spacer);
                if spacer_chars == 0 {
                    return;
                }
                let scan = scan_loop_fixed(
                    request.idx,
                    text_chars,
                    spacer_chars,
                    glyph_width,
                    request.field_width,
                );
                text::push_chars(dst, request.text, scan.seg1.0, scan.seg1.1);
                text::push_chars(dst, spacer, scan.seg2.0, scan.seg2.1);
                text::push_chars(dst, request.text, scan.seg3.0, scan.seg3.1);
                result.x_offset = scan.x_offset;
                result.display_width = (scan.x_offset + scan.text_width).min(request.field_width);
            }
        }

        result.scrolling = true;
        self.mark_ticker_active();
    }

    fn ticker_smooth_table(
        &mut self,
        request: &TickerSmooth<'_>,
        char_widths: &[u32],
        spacer_widths: &[u32],
        ellipsis_width: u32,
        dst: &mut String,
        result: &mut TickerSmoothResult,
    ) {
        let text_chars = text::char_len(request.text);
        if char_widths.len() != text_chars {
            mwarn!(
                "ticker_smooth: width table has {} entries for {} chars",
                char_widths.len(),
                text_chars
            );
            return;
        }
        let text_width: u32 = char_widths.iter().sum();

        if text_width <= request.field_width {
            dst.push_str(request.text);
            result.display_width = text_width;
            return;
        }

        if !request.selected {
            if request.field_width < ellipsis_width {
                return;
            }
            let budget = request.field_width - ellipsis_width;
            let mut used = 0u32;
            let mut num_chars = 0usize;
            for &w in char_widths {
                if used + w > budget {
                    break;
                }
                used += w;
                num_chars += 1;
            }
            text::push_chars(dst, request.text, 0, num_chars);
            dst.push_str(ELLIPSIS);
            result.display_width = used + ellipsis_width;
            return;
        }

        match request.mode {
            TickerMode::Bounce => {
                let scroll =
                    smooth_bounce_scroll_offset(request.idx, text_width, request.field_width);
                let scan = scan_table(char_widths, request.field_width, scroll);
                text::push_chars(dst, request.text, scan.char_offset, scan.num_chars);
                result.x_offset = scan.x_offset;
                result.display_width = scan.display_width;
            }
            TickerMode::Loop => {
                let spacer = request.spacer.unwrap_or(DEFAULT_SPACER);
                let spacer_chars = text::char_len(spacer);
                if spacer_chars == 0 || spacer_widths.len() != spacer_chars {
                    mwarn!(
                        "ticker_smooth: spacer width table has {} entries for {} chars",
                        spacer_widths.len(),
                        spacer_chars
                    );
                    return;
                }
                let spacer_width: u32 = spacer_widths.iter().sum();
                let scan = scan_loop_table(
                    request.idx,
                    char_widths,
                    spacer_widths,
                    text_width,
                    spacer_width,
                    request.field_width,
                );
                text::push_chars(dst, request.text, scan.seg1.0, scan.seg1.1);
                text::push_chars(dst, spacer, scan.seg2.0, scan.seg2.1);
                text::push_chars(dst, request.text, scan.seg3.0, scan.seg3.1);
                result.x_offset = scan.x_offset;
                result.display_width = (scan.x_offset + scan.text_width).min(request.field_width);
            }
        }

        result.scrolling = true;
        self.mark_ticker_active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_pauses_then_sweeps() {
        // overflow 3: period 10, two-tick stops at each end.
        let offsets: Vec<usize> = (0..10).map(|i| bounce_offset(i, 3)).collect();
        assert_eq!(offsets, vec![0, 0, 0, 1, 2, 3, 3, 3, 2, 1]);
    }

    #[test]
    fn loop_segments_always_fill_the_field() {
        for spacer in 1..12usize {
            for field in 1..10usize {
                let text = field + 5;
                for idx in 0..3 * (text + spacer) as u64 {
                    let segs = loop_segments(idx, field, text, spacer);
                    let total: usize = segs.iter().map(|s| s.len).sum();
                    assert_eq!(
                        total, field,
                        "idx={idx} field={field} text={text} spacer={spacer}"
                    );
                    assert!(segs[0].offset + segs[0].len <= text);
                    assert!(segs[1].offset + segs[1].len <= spacer);
                    assert!(segs[2].len <= text);
                }
            }
        }
    }

    #[test]
    fn smooth_bounce_scroll_pauses_at_extremes() {
        let text_width = 100;
        let field_width = 60;
        // scroll_width 40, period 2*(40+32) = 144.
        for idx in 0..32 {
            assert_eq!(smooth_bounce_scroll_offset(idx, text_width, field_width), 0);
        }
        assert_eq!(smooth_bounce_scroll_offset(32, text_width, field_width), 0);
        assert_eq!(smooth_bounce_scroll_offset(33, text_width, field_width), 1);
        assert_eq!(smooth_bounce_scroll_offset(71, text_width, field_width), 39);
        for idx in 72..104 {
            assert_eq!(
                smooth_bounce_scroll_offset(idx, text_width, field_width),
                40,
                "idx={idx}"
            );
        }
        assert_eq!(smooth_bounce_scroll_offset(104, text_width, field_width), 40);
        assert_eq!(smooth_bounce_scroll_offset(143, text_width, field_width), 1);
        assert_eq!(smooth_bounce_scroll_offset(144, text_width, field_width), 0);
    }

    #[test]
    fn fixed_scan_keeps_full_glyph_lead_in_on_exact_boundary() {
        let scan = scan_fixed(20, 10, 85, 30);
        // Scroll divides the glyph width evenly: window starts one char
        // later with a full-glyph x_offset.
        assert_eq!(scan.char_offset, 4);
        assert_eq!(scan.x_offset, 10);
        assert_eq!(scan.num_chars, 7);
        assert_eq!(scan.display_width, 80);
    }

    #[test]
    fn table_scan_splits_partial_glyph() {
        let widths = [4, 6, 8, 2, 10];
        let scan = scan_table(&widths, 12, 7);
        // 7 pixels scroll into the second glyph (4 + 3): window starts at
        // char 2 with 3 pixels of that glyph still visible.
        assert_eq!(scan.char_offset, 2);
        assert_eq!(scan.x_offset, 3);
        // 3 + 8 = 11 <= 12, next char overflows.
        assert_eq!(scan.num_chars, 1);
        assert_eq!(scan.text_width, 8);
        assert_eq!(scan.display_width, 12);
    }

    #[test]
    fn table_scan_without_scroll_starts_at_origin() {
        let widths = [5, 5, 5];
        let scan = scan_table(&widths, 11, 0);
        assert_eq!(scan.char_offset, 0);
        assert_eq!(scan.x_offset, 0);
        assert_eq!(scan.num_chars, 2);
        assert_eq!(scan.display_width, 11);
    }
}
