// src/animation/session.rs
//
// Owns the particle set and the canvas it animates on.
// Samples an image once, then draws and eases the particles every frame.

use super::{Particle, PIXEL_SIZE};
use crate::pixel::PixelBuffer;
use nannou::prelude::*;
use rand::Rng;

pub struct AnimationSession {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    sampled: bool,
}

impl AnimationSession {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
            sampled: false,
        }
    }

    /// Walk the canvas grid and spawn one particle per non-transparent cell.
    /// Runs once per session; later calls are no-ops until `reset`.
    ///
    /// Note the axis swap: the outer variable steps the height range but
    /// feeds the horizontal index term and the particle's x origin, and the
    /// inner variable does the reverse. Grid coverage is therefore only
    /// square-complete when width == height.
    pub fn sample(&mut self, pixels: &PixelBuffer, rng: &mut impl Rng) {
        if self.sampled {
            return;
        }
        self.sampled = true;

        let step = PIXEL_SIZE as usize;
        for x in (0..self.height).step_by(step) {
            for y in (0..self.width).step_by(step) {
                let index = ((x + y * self.width) * 4) as usize;
                let Some([r, g, b, a]) = pixels.channels_at(index) else {
                    continue;
                };

                // transparent cells produce no visual matter
                if a > 0 {
                    self.particles.push(Particle::new(
                        x as f32,
                        y as f32,
                        rgb8(r, g, b),
                        self.width as f32,
                        self.height as f32,
                        rng,
                    ));
                }
            }
        }
    }

    /// Paint every particle at its current position, in insertion order.
    /// Canvas coordinates are top-left origin with y running down; nannou
    /// draws from the window center, so squares are re-anchored here.
    pub fn draw(&self, draw: &Draw) {
        let half_w = self.width as f32 / 2.0;
        let half_h = self.height as f32 / 2.0;

        for particle in &self.particles {
            draw.rect()
                .x_y(
                    particle.x + PIXEL_SIZE / 2.0 - half_w,
                    half_h - (particle.y + PIXEL_SIZE / 2.0),
                )
                .w_h(PIXEL_SIZE, PIXEL_SIZE)
                .color(particle.color());
        }
    }

    /// Ease every particle one step toward its origin.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
    }

    /// Clear the particle set so the next `sample` call repopulates it with
    /// fresh random starting positions.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.sampled = false;
    }

    pub fn is_running(&self) -> bool {
        self.sampled
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
