use crate::{
    assets::color::{GRADIENT_LEN, GradientColors},
    foundation::core::Rgb8,
};

/// Length of one full trip through the gradient.
pub const CYCLE_SECONDS: f64 = 7.0;

/// CSS `@keyframes` selectors, as emitted into the SVG.
pub const STOP_LABELS: [&str; GRADIENT_LEN + 1] = [
    "0%", "14.28%", "28.57%", "42.86%", "57.14%", "71.43%", "85.72%", "100%",
];

/// `STOP_LABELS` as fractions of the cycle.
pub const STOP_OFFSETS: [f64; GRADIENT_LEN + 1] = [
    0.0, 0.1428, 0.2857, 0.4286, 0.5714, 0.7143, 0.8572, 1.0,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub label: &'static str,
    pub color: Rgb8,
}

/// Linear, looping keyframe track over the seven gradient colors.
/// The final stop repeats the first color so the loop is seamless.
#[derive(Clone, Debug, PartialEq)]
pub struct RainbowCycle {
    stops: [ColorStop; GRADIENT_LEN + 1],
}

impl RainbowCycle {
    pub fn new(colors: &GradientColors) -> Self {
        let colors = colors.colors();
        let stops = std::array::from_fn(|i| ColorStop {
            offset: STOP_OFFSETS[i],
            label: STOP_LABELS[i],
            color: colors[i % GRADIENT_LEN],
        });
        Self { stops }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Fill color `t_sec` seconds into the animation. Negative times wrap.
    pub fn sample(&self, t_sec: f64) -> Rgb8 {
        if !t_sec.is_finite() {
            return self.stops[0].color;
        }
        let p = t_sec.rem_euclid(CYCLE_SECONDS) / CYCLE_SECONDS;
        self.sample_progress(p)
    }

    /// Fill color at cycle progress `p` in `[0, 1]`.
    pub fn sample_progress(&self, p: f64) -> Rgb8 {
        let p = p.clamp(0.0, 1.0);
        let idx = self.stops.partition_point(|s| s.offset <= p);

        if idx == 0 {
            return self.stops[0].color;
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].color;
        }

        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        let t = (p - a.offset) / (b.offset - a.offset);
        Rgb8::lerp(a.color, b.color, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cycle.rs"]
mod tests;
