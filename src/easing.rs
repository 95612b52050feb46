//! Easing curve library.
//!
//! Every curve follows the classic `(t, b, c, d)` convention: `t` is the
//! elapsed time, `b` the start value, `c` the total change and `d` the
//! duration. `t` is expected in `[0, d]`; callers clamp by snapping to the
//! target once a tween finishes.

use std::f32::consts::{FRAC_PI_2, PI};

/// Easing curve applied to a tween's progress.
///
/// `In*` curves start slow, `Out*` curves end slow, `InOut*` combine both
/// halves and `OutIn*` invert that combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    OutInQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutInCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    OutInQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    OutInQuint,
    InSine,
    OutSine,
    InOutSine,
    OutInSine,
    InExpo,
    OutExpo,
    InOutExpo,
    OutInExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    OutInCirc,
    InBounce,
    OutBounce,
    InOutBounce,
    OutInBounce,
}

impl Easing {
    /// Evaluates the curve at elapsed time `t`.
    pub fn apply(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Easing::Linear => linear(t, b, c, d),
            Easing::InQuad => in_quad(t, b, c, d),
            Easing::OutQuad => out_quad(t, b, c, d),
            Easing::InOutQuad => in_out_quad(t, b, c, d),
            Easing::OutInQuad => out_in_quad(t, b, c, d),
            Easing::InCubic => in_cubic(t, b, c, d),
            Easing::OutCubic => out_cubic(t, b, c, d),
            Easing::InOutCubic => in_out_cubic(t, b, c, d),
            Easing::OutInCubic => out_in_cubic(t, b, c, d),
            Easing::InQuart => in_quart(t, b, c, d),
            Easing::OutQuart => out_quart(t, b, c, d),
            Easing::InOutQuart => in_out_quart(t, b, c, d),
            Easing::OutInQuart => out_in_quart(t, b, c, d),
            Easing::InQuint => in_quint(t, b, c, d),
            Easing::OutQuint => out_quint(t, b, c, d),
            Easing::InOutQuint => in_out_quint(t, b, c, d),
            Easing::OutInQuint => out_in_quint(t, b, c, d),
            Easing::InSine => in_sine(t, b, c, d),
            Easing::OutSine => out_sine(t, b, c, d),
            Easing::InOutSine => in_out_sine(t, b, c, d),
            Easing::OutInSine => out_in_sine(t, b, c, d),
            Easing::InExpo => in_expo(t, b, c, d),
            Easing::OutExpo => out_expo(t, b, c, d),
            Easing::InOutExpo => in_out_expo(t, b, c, d),
            Easing::OutInExpo => out_in_expo(t, b, c, d),
            Easing::InCirc => in_circ(t, b, c, d),
            Easing::OutCirc => out_circ(t, b, c, d),
            Easing::InOutCirc => in_out_circ(t, b, c, d),
            Easing::OutInCirc => out_in_circ(t, b, c, d),
            Easing::InBounce => in_bounce(t, b, c, d),
            Easing::OutBounce => out_bounce(t, b, c, d),
            Easing::InOutBounce => in_out_bounce(t, b, c, d),
            Easing::OutInBounce => out_in_bounce(t, b, c, d),
        }
    }
}

fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

fn in_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t + b
}

fn out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

fn in_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

fn out_in_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_quad(t * 2.0, b, c / 2.0, d)
    } else {
        in_quad(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn in_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

fn out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

fn in_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}

fn out_in_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_cubic(t * 2.0, b, c / 2.0, d)
    } else {
        in_cubic(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn in_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t * t + b
}

fn out_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

fn in_out_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t * t * t + b
    } else {
        let t = t - 2.0;
        -c / 2.0 * (t * t * t * t - 2.0) + b
    }
}

fn out_in_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_quart(t * 2.0, b, c / 2.0, d)
    } else {
        in_quart(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn in_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t * t * t + b
}

fn out_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

fn in_out_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t * t * t + 2.0) + b
    }
}

fn out_in_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_quint(t * 2.0, b, c / 2.0, d)
    } else {
        in_quint(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn in_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * FRAC_PI_2).cos() + c + b
}

fn out_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * FRAC_PI_2).sin() + b
}

fn in_out_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

fn out_in_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_sine(t * 2.0, b, c / 2.0, d)
    } else {
        in_sine(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

// The expo family keeps the small boundary offsets (`0.001 * c` and the
// `1.001` factor) from the reference curves so the endpoints land exactly
// on `b` and `b + c`.
fn in_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        b
    } else {
        c * 2.0f32.powf(10.0 * (t / d - 1.0)) + b - c * 0.001
    }
}

fn out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        b + c
    } else {
        c * 1.001 * (-(2.0f32.powf(-10.0 * t / d)) + 1.0) + b
    }
}

fn in_out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / d * 2.0;
    if t < 1.0 {
        c / 2.0 * 2.0f32.powf(10.0 * (t - 1.0)) + b - c * 0.0005
    } else {
        let t = t - 1.0;
        c / 2.0 * 1.0005 * (-(2.0f32.powf(-10.0 * t)) + 2.0) + b
    }
}

fn out_in_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_expo(t * 2.0, b, c / 2.0, d)
    } else {
        in_expo(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn in_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

fn out_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

fn in_out_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
    }
}

fn out_in_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_circ(t * 2.0, b, c / 2.0, d)
    } else {
        in_circ(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn out_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

fn in_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - out_bounce(d - t, 0.0, c, d) + b
}

fn in_out_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        in_bounce(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        out_bounce(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

fn out_in_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        out_bounce(t * 2.0, b, c / 2.0, d)
    } else {
        in_bounce(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 33] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::OutInQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::OutInCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::OutInQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::OutInQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::OutInSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::OutInExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::OutInCirc,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
        Easing::OutInBounce,
    ];

    #[test]
    fn endpoints_land_on_b_and_b_plus_c() {
        for easing in ALL {
            let start = easing.apply(0.0, 10.0, 50.0, 200.0);
            let end = easing.apply(200.0, 10.0, 50.0, 200.0);
            assert!(
                (start - 10.0).abs() < 0.11,
                "{easing:?} start {start}"
            );
            assert!((end - 60.0).abs() < 0.11, "{easing:?} end {end}");
        }
    }

    #[test]
    fn expo_boundaries_are_exact() {
        assert_eq!(Easing::InExpo.apply(0.0, 3.0, 7.0, 100.0), 3.0);
        assert_eq!(Easing::OutExpo.apply(100.0, 3.0, 7.0, 100.0), 10.0);
        assert_eq!(Easing::InOutExpo.apply(0.0, 3.0, 7.0, 100.0), 3.0);
        assert_eq!(Easing::InOutExpo.apply(100.0, 3.0, 7.0, 100.0), 10.0);
    }

    #[test]
    fn linear_midpoint() {
        assert_eq!(Easing::Linear.apply(50.0, 0.0, 100.0, 100.0), 50.0);
    }

    #[test]
    fn monotone_curves_stay_monotone() {
        // Bounce and the composite curves overshoot internally by design;
        // the plain in/out polynomials must not.
        let curves = [
            Easing::Linear,
            Easing::InQuad,
            Easing::OutQuad,
            Easing::InCubic,
            Easing::OutCubic,
            Easing::InSine,
            Easing::OutSine,
            Easing::InCirc,
            Easing::OutCirc,
        ];
        for easing in curves {
            let mut prev = easing.apply(0.0, 0.0, 1.0, 100.0);
            for step in 1..=100 {
                let v = easing.apply(step as f32, 0.0, 1.0, 100.0);
                assert!(v >= prev - 1e-4, "{easing:?} step {step}");
                prev = v;
            }
        }
    }
}
