// src/animation/particle.rs
//
// One grid-sampled square. Spawns somewhere random on the canvas and
// eases home every frame.

use nannou::prelude::*;
use rand::Rng;

/// Side length of a particle square, and the grid sampling step.
pub const PIXEL_SIZE: f32 = 10.0;

/// Fraction of the remaining distance covered per update.
pub const EASE_SPEED: f32 = 0.05;

#[derive(Debug, Clone)]
pub struct Particle {
    // current position, mutated every frame
    pub x: f32,
    pub y: f32,

    // final resting position on the canvas, fixed at creation
    origin_x: f32,
    origin_y: f32,

    color: Srgb<u8>,
}

impl Particle {
    /// `x` / `y` are the sampled grid coordinates; the starting position is
    /// a uniformly random point on the canvas.
    pub fn new(
        x: f32,
        y: f32,
        color: Srgb<u8>,
        canvas_width: f32,
        canvas_height: f32,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            x: rng.gen_range(0.0..canvas_width),
            y: rng.gen_range(0.0..canvas_height),
            origin_x: x.floor(),
            origin_y: y.floor(),
            color,
        }
    }

    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    pub fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// Exponential decay toward the origin, each axis independently.
    /// The particle approaches but never algebraically reaches home.
    pub fn update(&mut self) {
        self.x += (self.origin_x - self.x) * EASE_SPEED;
        self.y += (self.origin_y - self.y) * EASE_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::color::rgb8;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_particle(x: f32, y: f32) -> Particle {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = Particle::new(x, y, rgb8(1, 2, 3), 800.0, 500.0, &mut rng);
        p.x = 0.0;
        p.y = 0.0;
        p
    }

    #[test]
    fn test_easing_single_step() {
        let mut p = test_particle(100.0, 100.0);
        p.update();
        assert_eq!((p.x, p.y), (5.0, 5.0));
    }

    #[test]
    fn test_easing_geometric_convergence() {
        let mut p = test_particle(100.0, 100.0);
        for _ in 0..2 {
            p.update();
        }
        assert!((p.x - 9.75).abs() < 1e-4);
        assert!((p.y - 9.75).abs() < 1e-4);

        // after N steps the remaining distance is 0.95^N of the original
        let mut q = test_particle(100.0, 100.0);
        let n = 20;
        for _ in 0..n {
            q.update();
        }
        let expected = 100.0 * (1.0 - 0.95f32.powi(n));
        assert!((q.x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_never_reaches_origin() {
        let mut p = test_particle(100.0, 100.0);
        for _ in 0..200 {
            p.update();
            assert!(p.x < 100.0);
        }
    }

    #[test]
    fn test_origin_is_floored() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::new(13.9, 27.2, rgb8(0, 0, 0), 800.0, 500.0, &mut rng);
        assert_eq!(p.origin(), (13.0, 27.0));
    }

    #[test]
    fn test_start_position_within_canvas() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = Particle::new(0.0, 0.0, rgb8(0, 0, 0), 800.0, 500.0, &mut rng);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..500.0).contains(&p.y));
        }
    }
}
