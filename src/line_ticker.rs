//! Vertical (multi-line) ticker family.
//!
//! Scroll pacing is derived from a reading-speed heuristic: each line is
//! held long enough to read `line_chars` chars at [`TICKER_CPM`] chars per
//! minute. The discrete variant converts that duration into coarse ticker
//! ticks, the smooth variant into 60 Hz pixel ticks.

use crate::animator::{Animator, TICKER_SPEED_US};
use crate::text;
use crate::types::{LineFade, LineTickerSmoothResult, TickerMode};

/// Reading speed used to pace line scrolling, in chars per minute.
const TICKER_CPM: f32 = 1000.0;

/// A line ticker request in whole-line units.
#[derive(Clone, Copy, Debug)]
pub struct LineTicker<'a> {
    pub text: &'a str,
    /// Wrap width in chars.
    pub line_chars: usize,
    /// Window height in lines.
    pub max_lines: usize,
    /// Coarse ticker index, usually [`Animator::ticker_idx`].
    pub idx: u64,
    pub mode: TickerMode,
}

/// A line ticker request in pixel units.
#[derive(Clone, Copy, Debug)]
pub struct LineTickerSmooth<'a> {
    pub text: &'a str,
    /// Wrap width in chars.
    pub line_chars: usize,
    /// Line height in pixels.
    pub glyph_height: u32,
    /// Window height in pixels.
    pub field_height: u32,
    /// Vertical pixel ticker index, usually
    /// [`Animator::ticker_pixel_line_idx`].
    pub idx: u64,
    pub mode: TickerMode,
    /// Emit [`LineFade`] ghosts while a line boundary is being crossed.
    pub fade_enabled: bool,
}

/// Coarse ticks each line stays on screen: the time to read `line_chars`
/// chars at [`TICKER_CPM`], divided by the tick period.
fn line_display_ticks(line_chars: usize) -> u64 {
    let duration_ms = line_chars as f32 * 60.0 * 1000.0 / TICKER_CPM;
    let ticks = duration_ms / (TICKER_SPEED_US as f32 / 1000.0);
    (ticks as u64).max(1)
}

/// Pixel ticks per one-line smooth scroll: twice the per-line display
/// duration, in 60 Hz frames.
fn line_smooth_scroll_ticks(line_chars: usize) -> u64 {
    let duration_ms = line_chars as f32 * 60.0 * 1000.0 / TICKER_CPM;
    let frames = duration_ms * 60.0 / 1000.0;
    ((2.0 * frames) as u64).max(1)
}

/// First visible line of a bouncing window over `num_lines` lines, of which
/// `excess` do not fit. The sweep dwells one step at each extreme.
pub(crate) fn line_bounce_offset(idx: u64, line_chars: usize, excess: usize) -> usize {
    let period = (2 * excess + 2) as u64;
    let mut phase = ((idx / line_display_ticks(line_chars)) % period) as usize;
    if phase > 0 {
        phase -= 1;
    }
    if phase > excess {
        phase -= 1;
    }
    if phase <= excess {
        phase
    } else {
        2 * excess - phase
    }
}

/// First visible line of a looping window; index `num_lines` is the blank
/// wrap-gap line.
pub(crate) fn line_loop_offset(idx: u64, line_chars: usize, num_lines: usize) -> usize {
    let period = (num_lines + 1) as u64;
    ((idx / line_display_ticks(line_chars)) % period) as usize
}

impl Animator {
    /// Discrete line ticker. Word-wraps `text` to `line_chars`, writes a
    /// `max_lines`-line window into `dst` (newline-separated) and returns
    /// whether the block is animating.
    pub fn line_ticker(&mut self, request: &LineTicker<'_>, dst: &mut String) -> bool {
        dst.clear();
        if request.text.is_empty() || request.line_chars == 0 || request.max_lines == 0 {
            return false;
        }

        let lines = text::word_wrap(request.text, request.line_chars);
        if lines.len() <= request.max_lines {
            dst.push_str(&lines.join("\n"));
            return false;
        }

        let line_offset = match request.mode {
            TickerMode::Bounce => line_bounce_offset(
                request.idx,
                request.line_chars,
                lines.len() - request.max_lines,
            ),
            TickerMode::Loop => line_loop_offset(request.idx, request.line_chars, lines.len()),
        };
        text::build_line_ticker_string(&lines, line_offset, request.max_lines, dst);

        mtrace!(
            "line_ticker: idx={} offset={} of {} lines",
            request.idx,
            line_offset,
            lines.len()
        );
        self.mark_ticker_active();
        true
    }

    /// Smooth pixel-granularity line ticker. The window scrolls through
    /// line boundaries with a fractional `y_offset`; while mid-scroll the
    /// output carries one extra line and, when fades are enabled, ghost
    /// lines above and below the window.
    pub fn line_ticker_smooth(
        &mut self,
        request: &LineTickerSmooth<'_>,
        dst: &mut String,
    ) -> LineTickerSmoothResult {
        dst.clear();
        let mut result = LineTickerSmoothResult::default();
        if request.text.is_empty()
            || request.line_chars == 0
            || request.glyph_height == 0
            || request.field_height < request.glyph_height
        {
            return result;
        }

        let max_lines = (request.field_height / request.glyph_height) as usize;
        let lines = text::word_wrap(request.text, request.line_chars);
        if lines.len() <= max_lines {
            dst.push_str(&lines.join("\n"));
            return result;
        }

        let glyph_height = request.glyph_height as u64;
        let scroll_ticks = line_smooth_scroll_ticks(request.line_chars);
        let excess = (lines.len() - max_lines) as u64;

        // Scroll position in pixels. Bounce dwells one full line-scroll
        // duration at each extreme; loop runs through the blank gap line.
        let y_pixels = match request.mode {
            TickerMode::Bounce => {
                let span = excess * scroll_ticks;
                let period = 2 * (span + scroll_ticks);
                let phase = request.idx % period;
                let pos = if phase < scroll_ticks {
                    0
                } else if phase < scroll_ticks + span {
                    phase - scroll_ticks
                } else if phase < 2 * scroll_ticks + span {
                    span
                } else {
                    period - phase
                };
                pos * glyph_height / scroll_ticks
            }
            TickerMode::Loop => {
                let period = (lines.len() as u64 + 1) * scroll_ticks;
                let phase = request.idx % period;
                phase * glyph_height / scroll_ticks
            }
        };

        let line_offset = (y_pixels / glyph_height) as usize;
        let line_phase_px = (y_pixels % glyph_height) as u32;
        let mid_scroll = line_phase_px != 0;
        let display_lines = if mid_scroll { max_lines + 1 } else { max_lines };

        text::build_line_ticker_string(&lines, line_offset, display_lines, dst);
        result.y_offset = -(line_phase_px as f32);
        result.scrolling = true;

        if request.fade_enabled && mid_scroll {
            let frac = line_phase_px as f32 / request.glyph_height as f32;
            let period = lines.len() + 1;

            // Ghost above the window fades out over the first half of the
            // line scroll, the one below fades in over the second half.
            let top_alpha = (1.0 - 2.0 * frac).max(0.0);
            if top_alpha > 0.0 {
                let top_index = match request.mode {
                    TickerMode::Bounce => line_offset.checked_sub(1),
                    TickerMode::Loop => Some((line_offset + period - 1) % period),
                };
                if let Some(index) = top_index {
                    result.top_fade = Some(LineFade {
                        text: lines.get(index).cloned().unwrap_or_default(),
                        y_offset: result.y_offset - request.glyph_height as f32,
                        alpha: top_alpha,
                    });
                }
            }

            let bottom_alpha = (2.0 * frac - 1.0).max(0.0);
            if bottom_alpha > 0.0 {
                let bottom_index = match request.mode {
                    TickerMode::Bounce => {
                        let index = line_offset + display_lines;
                        (index < lines.len()).then_some(index)
                    }
                    TickerMode::Loop => Some((line_offset + display_lines) % period),
                };
                if let Some(index) = bottom_index {
                    result.bottom_fade = Some(LineFade {
                        text: lines.get(index).cloned().unwrap_or_default(),
                        y_offset: result.y_offset
                            + (display_lines as u32 * request.glyph_height) as f32,
                        alpha: bottom_alpha,
                    });
                }
            }
        }

        self.mark_ticker_active();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ticks_follow_reading_speed() {
        // 40 chars at 1000 cpm is 2400 ms; at 333.333 ms per tick that is
        // 7 whole ticks.
        assert_eq!(line_display_ticks(40), 7);
        assert_eq!(line_display_ticks(10), 1);
        // Degenerate widths still advance.
        assert_eq!(line_display_ticks(1), 1);
    }

    #[test]
    fn bounce_dwells_once_at_each_extreme() {
        // excess 3: period 8, raw phases map to offsets with folded dwells.
        let ticks = line_display_ticks(10);
        let offsets: Vec<usize> = (0..8)
            .map(|p| line_bounce_offset(p * ticks, 10, 3))
            .collect();
        assert_eq!(offsets, vec![0, 0, 1, 2, 3, 3, 2, 1]);
    }

    #[test]
    fn loop_period_includes_gap_line() {
        let ticks = line_display_ticks(10);
        let offsets: Vec<usize> = (0..6)
            .map(|p| line_loop_offset(p * ticks, 10, 4))
            .collect();
        // Offset 4 is the blank gap line, then the window wraps.
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 0]);
    }
}
