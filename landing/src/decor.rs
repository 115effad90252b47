//! Ambient backdrop decorations.
//!
//! Per-instance parameters are sampled once when the page mounts and
//! handed to CSS as custom properties; the keyframes in
//! [`crate::styles`] do the actual animating. Sampling takes any
//! `FnMut() -> f64` yielding values in `[0, 1)`, so the browser can pass
//! `Math.random` and tests a fixed sequence.

pub const CLOUD_COUNT: usize = 5;
pub const ISLAND_COUNT: usize = 4;
pub const PARTICLE_COUNT: usize = 15;
pub const RING_COUNT: usize = 8;

/// Blurred white blob drifting left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub width: f64,
    pub height: f64,
    pub top_pct: f64,
    pub opacity: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Cloud {
    fn sample(index: usize, random: &mut impl FnMut() -> f64) -> Self {
        let i = index as f64;
        Self {
            width: 100.0 + random() * 200.0,
            height: 60.0 + random() * 100.0,
            top_pct: 10.0 + i * 20.0,
            opacity: 0.2 + random() * 0.3,
            duration_s: 60.0 + random() * 40.0,
            delay_s: i * 10.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {:.1}px; height: {:.1}px; top: {}%; opacity: {:.3}; \
             --duration: {:.2}s; --delay: {}s;",
            self.width, self.height, self.top_pct, self.opacity, self.duration_s, self.delay_s
        )
    }
}

/// Faint island image bobbing in the distance. Fully determined by its index.
#[derive(Clone, Debug, PartialEq)]
pub struct Island {
    pub top_pct: f64,
    pub right_pct: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rise_px: f64,
    pub tilt_deg: f64,
    pub duration_s: f64,
}

impl Island {
    fn at(index: usize) -> Self {
        let i = index as f64;
        let even = index % 2 == 0;
        Self {
            top_pct: 15.0 + i * 20.0,
            right_pct: if even { 5.0 + i * 10.0 } else { 60.0 - i * 10.0 },
            opacity: 0.15 + i * 0.05,
            scale: 0.3 + i * 0.1,
            rise_px: if even { 20.0 } else { -20.0 },
            tilt_deg: if even { 2.0 } else { -2.0 },
            duration_s: 8.0 + i * 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "top: {}%; right: {}%; opacity: {:.2}; --scale: {:.1}; --rise: {}px; \
             --tilt: {}deg; --duration: {}s;",
            self.top_pct,
            self.right_pct,
            self.opacity,
            self.scale,
            self.rise_px,
            self.tilt_deg,
            self.duration_s
        )
    }
}

/// Gold speck falling across the page, drifting right (even) or left (odd).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub width: f64,
    pub height: f64,
    pub start_x_vw: f64,
    pub end_x_vw: f64,
    pub duration_s: f64,
}

impl Particle {
    fn sample(index: usize, random: &mut impl FnMut() -> f64) -> Self {
        let width = 3.0 + random() * 5.0;
        let height = 3.0 + random() * 5.0;
        let start_x_vw = random() * 100.0;
        let end_x_vw = if index % 2 == 0 {
            random() * 20.0 + 90.0
        } else {
            random() * 20.0
        };
        Self {
            width,
            height,
            start_x_vw,
            end_x_vw,
            duration_s: 10.0 + random() * 15.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; --x0: {:.2}vw; --x1: {:.2}vw; --duration: {:.2}s;",
            self.width, self.height, self.start_x_vw, self.end_x_vw, self.duration_s
        )
    }
}

/// Concentric outline pulsing out from the page center.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub diameter_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Ring {
    fn at(index: usize) -> Self {
        let i = index as f64;
        Self {
            diameter_px: 50.0 + i * 30.0,
            duration_s: 4.0 + i * 0.5,
            delay_s: i * 0.5,
        }
    }

    pub fn style(&self) -> String {
        let radius = self.diameter_px / 2.0;
        format!(
            "width: {d}px; height: {d}px; left: calc(50% - {r}px); top: calc(50% - {r}px); \
             --duration: {}s; --delay: {}s;",
            self.duration_s,
            self.delay_s,
            d = self.diameter_px,
            r = radius
        )
    }
}

/// Everything the backdrop draws, sampled once per page view.
#[derive(Clone, Debug, PartialEq)]
pub struct Decorations {
    pub clouds: Vec<Cloud>,
    pub islands: Vec<Island>,
    pub particles: Vec<Particle>,
    pub rings: Vec<Ring>,
}

impl Decorations {
    pub fn sample(mut random: impl FnMut() -> f64) -> Self {
        Self {
            clouds: (0..CLOUD_COUNT)
                .map(|i| Cloud::sample(i, &mut random))
                .collect(),
            islands: (0..ISLAND_COUNT).map(Island::at).collect(),
            particles: (0..PARTICLE_COUNT)
                .map(|i| Particle::sample(i, &mut random))
                .collect(),
            rings: (0..RING_COUNT).map(Ring::at).collect(),
        }
    }
}
