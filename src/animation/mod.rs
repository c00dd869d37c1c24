pub mod particle;
pub mod session;

pub use particle::{Particle, EASE_SPEED, PIXEL_SIZE};
pub use session::AnimationSession;
