//! Prints the window of each ticker mode for a range of ticker indices,
//! which makes the bounce stops and the loop wrap easy to eyeball.

use marquee::{Animator, LineTicker, Ticker, TickerMode};

fn main() {
    let mut animator = Animator::new();
    let mut window = String::new();
    let text = "Super Nintendo Entertainment System";

    println!("bounce, field 10:");
    for idx in 0..60 {
        animator.ticker(
            &Ticker {
                text,
                spacer: None,
                field_chars: 10,
                idx,
                mode: TickerMode::Bounce,
                selected: true,
            },
            &mut window,
        );
        println!("  {idx:>2} [{window}]");
    }

    println!("loop, field 10:");
    for idx in 0..45 {
        animator.ticker(
            &Ticker {
                text,
                spacer: None,
                field_chars: 10,
                idx,
                mode: TickerMode::Loop,
                selected: true,
            },
            &mut window,
        );
        println!("  {idx:>2} [{window}]");
    }

    println!("line loop, 3 of 5 lines:");
    for idx in 0..12 {
        animator.line_ticker(
            &LineTicker {
                text: "alpha bravo gamma delta omega",
                line_chars: 5,
                max_lines: 3,
                idx,
                mode: TickerMode::Loop,
            },
            &mut window,
        );
        println!("  -- idx {idx}\n{window}");
    }
}
