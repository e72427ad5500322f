use std::collections::VecDeque;

use crate::utils::vector2d::Vector2D;

/// Kinematic state of the one live shot, in absolute display coordinates.
/// The trail keeps a bounded, chronological history of past positions; it
/// feeds both the renderer and the orbit-closure check.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vector2D,
    pub velocity: Vector2D,
    trail: VecDeque<Vector2D>,
}

impl Projectile {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Projectile {
            position,
            velocity,
            trail: VecDeque::new(),
        }
    }

    /// The empty state a run is reset to.
    pub fn zeroed() -> Self {
        Projectile::new(Vector2D::zero(), Vector2D::zero())
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Appends the current position; once the trail exceeds `cap` the oldest
    /// point is evicted, so insertion order stays chronological.
    pub fn record_trail(&mut self, cap: usize) {
        self.trail.push_back(self.position);
        if self.trail.len() > cap {
            self.trail.pop_front();
        }
    }

    pub fn trail(&self) -> &VecDeque<Vector2D> {
        &self.trail
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Oldest surviving trail point.
    pub fn trail_head(&self) -> Option<&Vector2D> {
        self.trail.front()
    }
}
