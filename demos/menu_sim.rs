//! Simulates a tiny menu frame loop: a fade-in tween, a delayed slide,
//! and a scrolling title, all driven from one `advance` call per frame.

use marquee::{AnimationEntry, Animator, Easing, Tag, Ticker, TickerMode};

const FRAME_US: u64 = 16_667;

fn main() {
    let mut animator = Animator::new();

    let alpha = animator.add_subject(0.0);
    let slide_x = animator.add_subject(-200.0);

    animator.push(AnimationEntry::new(alpha, 1.0, 250.0, Easing::OutQuad).with_tag(Tag(1)));
    animator.push_delayed(
        300.0,
        AnimationEntry::new(slide_x, 0.0, 400.0, Easing::OutCubic).with_tag(Tag(2)),
    );

    let mut window = String::new();
    let mut now_us = FRAME_US;

    for frame in 0u32..90 {
        let busy = animator.advance(now_us, false, 1.0, 1280, 720);
        now_us += FRAME_US;

        animator.ticker(
            &Ticker {
                text: "The Legend of Example: A Link to the Docs",
                spacer: None,
                field_chars: 20,
                idx: animator.ticker_idx(),
                mode: TickerMode::Loop,
                selected: true,
            },
            &mut window,
        );

        if frame % 10 == 0 {
            println!(
                "frame {frame:>3}  busy={busy}  alpha={:>5.2}  x={:>7.1}  [{window}]",
                animator.subject_value(alpha).unwrap_or(0.0),
                animator.subject_value(slide_x).unwrap_or(0.0),
            );
        }
    }
}
