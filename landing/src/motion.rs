//! Pointer-driven parallax math. No DOM here, everything is plain numbers.

/// Pointer position normalized to the viewport, both axes in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Normalize client coordinates against the viewport size.
    ///
    /// Out-of-range coordinates (pointer captured outside the window,
    /// scrollbars, fractional zoom) are clamped. A degenerate viewport maps
    /// that axis to `0`.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: normalize(client_x, width),
            y: normalize(client_y, height),
        }
    }
}

fn normalize(value: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / extent).clamp(0.0, 1.0)
}

/// Pixel offset applied to a layer as a CSS transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn transform(&self) -> String {
        format!("transform: translate3d({:.2}px, {:.2}px, 0);", self.x, self.y)
    }
}

/// Damped harmonic spring, one axis.
///
/// Mass and damping default to 1 and 10, so both parallax stiffnesses
/// (50 and 100) settle underdamped with a small overshoot.
#[derive(Clone, Debug)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    position: f64,
    velocity: f64,
}

impl Spring {
    pub const DEFAULT_DAMPING: f64 = 10.0;
    pub const DEFAULT_MASS: f64 = 1.0;
    /// Distance under which the spring counts as arrived.
    pub const REST_DELTA: f64 = 0.01;
    /// Speed under which the spring counts as stopped, px/s.
    pub const REST_SPEED: f64 = 0.05;
    /// Largest integration slice; longer frames are subdivided.
    const MAX_SUBSTEP: f64 = 1.0 / 120.0;

    pub fn new(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: Self::DEFAULT_DAMPING,
            mass: Self::DEFAULT_MASS,
            position: 0.0,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Advance by `dt` seconds toward `target`, returning the new position.
    /// Non-positive or non-finite steps leave the spring where it is.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }
        let slices = (dt / Self::MAX_SUBSTEP).ceil().max(1.0);
        let h = dt / slices;
        for _ in 0..slices as u32 {
            // semi-implicit Euler: velocity first, then position
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
        }
        if self.is_settled(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < Self::REST_DELTA && self.velocity.abs() < Self::REST_SPEED
    }
}

/// The two layers that follow the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Sky image, moves against the pointer.
    Background,
    /// Hero icon, moves with the pointer around its resting place.
    Hero,
}

impl Layer {
    pub fn stiffness(self) -> f64 {
        match self {
            Layer::Background => 100.0,
            Layer::Hero => 50.0,
        }
    }

    pub fn target(self, pointer: PointerPosition) -> Offset {
        match self {
            Layer::Background => Offset {
                x: pointer.x * -20.0,
                y: pointer.y * -20.0,
            },
            Layer::Hero => Offset {
                x: pointer.x * 15.0 - 7.5,
                y: pointer.y * 15.0 - 7.5,
            },
        }
    }
}

/// A layer plus its two springs.
#[derive(Clone, Debug)]
pub struct ParallaxLayer {
    layer: Layer,
    x: Spring,
    y: Spring,
}

impl ParallaxLayer {
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            x: Spring::new(layer.stiffness()),
            y: Spring::new(layer.stiffness()),
        }
    }

    pub fn offset(&self) -> Offset {
        Offset {
            x: self.x.position(),
            y: self.y.position(),
        }
    }

    pub fn step(&mut self, pointer: PointerPosition, dt: f64) -> Offset {
        let target = self.layer.target(pointer);
        Offset {
            x: self.x.step(target.x, dt),
            y: self.y.step(target.y, dt),
        }
    }

    pub fn is_settled(&self, pointer: PointerPosition) -> bool {
        let target = self.layer.target(pointer);
        self.x.is_settled(target.x) && self.y.is_settled(target.y)
    }
}

/// Turns `requestAnimationFrame` timestamps into step sizes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Longest step handed to the springs. A backgrounded tab resumes here
    /// instead of jumping.
    pub const MAX_STEP: f64 = 0.05;

    /// Seconds since the previous frame, `0` on the first one.
    pub fn advance(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.last {
            Some(last) => ((timestamp_ms - last) / 1000.0).clamp(0.0, Self::MAX_STEP),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn normalized_position_stays_in_unit_square() {
        let samples = [
            (0.0, 0.0, 1280.0, 720.0),
            (1280.0, 720.0, 1280.0, 720.0),
            (640.0, 360.0, 1280.0, 720.0),
            (-15.0, 9000.0, 1280.0, 720.0),
            (12.0, 12.0, 0.0, 0.0),
            (f64::NAN, 3.0, 800.0, 600.0),
            (f64::INFINITY, -3.0, 800.0, 600.0),
        ];
        for (cx, cy, w, h) in samples {
            let p = PointerPosition::from_client(cx, cy, w, h);
            assert!((0.0..=1.0).contains(&p.x), "x={} for {:?}", p.x, (cx, cy, w, h));
            assert!((0.0..=1.0).contains(&p.y), "y={} for {:?}", p.y, (cx, cy, w, h));
        }
    }

    #[test]
    fn pointer_sweep_never_leaves_viewport_mapping() {
        let (w, h) = (1024.0, 768.0);
        let mut cx = -50.0;
        while cx <= w + 50.0 {
            let p = PointerPosition::from_client(cx, h - cx, w, h);
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
            cx += 7.3;
        }
    }

    #[test]
    fn center_of_viewport_is_half() {
        let p = PointerPosition::from_client(400.0, 300.0, 800.0, 600.0);
        assert_eq!(p, PointerPosition { x: 0.5, y: 0.5 });
    }

    #[test]
    fn layer_targets() {
        let corner = PointerPosition { x: 1.0, y: 1.0 };
        assert_eq!(Layer::Background.target(corner), Offset { x: -20.0, y: -20.0 });
        assert_eq!(Layer::Hero.target(corner), Offset { x: 7.5, y: 7.5 });
        assert_eq!(
            Layer::Hero.target(PointerPosition::default()),
            Offset { x: -7.5, y: -7.5 }
        );
    }

    #[test]
    fn both_stiffnesses_are_underdamped() {
        assert!(Spring::new(Layer::Background.stiffness()).damping_ratio() < 1.0);
        assert!(Spring::new(Layer::Hero.stiffness()).damping_ratio() < 1.0);
    }

    #[test]
    fn spring_overshoots_then_settles() {
        let mut spring = Spring::new(100.0);
        let mut peak: f64 = 0.0;
        for _ in 0..600 {
            peak = peak.max(spring.step(10.0, FRAME));
        }
        assert!(peak > 10.0, "expected overshoot, peak={peak}");
        assert!(spring.is_settled(10.0));
        assert_eq!(spring.position(), 10.0);
    }

    #[test]
    fn spring_ignores_non_positive_steps() {
        let mut spring = Spring::new(50.0);
        assert_eq!(spring.step(5.0, 0.0), 0.0);
        assert_eq!(spring.step(5.0, -1.0), 0.0);
    }

    #[test]
    fn spring_survives_non_finite_steps() {
        let mut spring = Spring::new(100.0);
        spring.step(10.0, FRAME);
        let before = spring.position();

        assert_eq!(spring.step(10.0, f64::INFINITY), before);
        assert_eq!(spring.step(10.0, f64::NAN), before);
        assert!(spring.position().is_finite());

        for _ in 0..600 {
            spring.step(10.0, FRAME);
        }
        assert_eq!(spring.position(), 10.0);
    }

    #[test]
    fn parallax_layer_follows_pointer() {
        let pointer = PointerPosition { x: 0.25, y: 0.75 };
        let mut layer = ParallaxLayer::new(Layer::Background);
        assert!(!layer.is_settled(pointer));
        for _ in 0..900 {
            layer.step(pointer, FRAME);
        }
        assert!(layer.is_settled(pointer));
        assert_eq!(layer.offset(), Layer::Background.target(pointer));
    }

    #[test]
    fn frame_clock_caps_long_gaps() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(1000.0), 0.0);
        assert!((clock.advance(1016.0) - 0.016).abs() < 1e-9);
        assert_eq!(clock.advance(9000.0), FrameClock::MAX_STEP);
        assert_eq!(clock.advance(8000.0), 0.0);
    }
}
