//! Moving circular bodies

use centerfall_math::Vec2;

/// A circular body moving in screen space
///
/// The radius is shared by every body and lives in [`PhysicsConfig`](crate::PhysicsConfig).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    /// Center position in pixels
    pub position: Vec2,
    /// Displacement applied each tick
    pub velocity: Vec2,
}

impl Body {
    /// Create a body at rest
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Move by one tick's worth of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Pull the body toward `center` and return its distance from it
    ///
    /// The pull strength is `gravity * distance`, so bodies far from the center
    /// are pulled harder. A body sitting exactly on the center gets no pull.
    pub fn apply_central_pull(&mut self, center: Vec2, gravity: f64) -> f64 {
        let to_center = center - self.position;
        let distance = to_center.length();

        if distance > 0.0 {
            let acceleration = gravity * distance;
            self.velocity += (to_center / distance) * acceleration;
        }

        distance
    }

    /// Negate each velocity component whose axis has the body past a wall
    ///
    /// Position is left as is; a body may overlap the wall for a tick.
    pub fn reflect_off_walls(&mut self, radius: f64, bounds: Vec2) {
        if self.position.x - radius < 0.0 || self.position.x + radius > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - radius < 0.0 || self.position.y + radius > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Center position rounded to whole pixels
    pub fn pixel_position(&self) -> (i32, i32) {
        self.position.round_to_i32()
    }
}

/// Whether a body at `distance` from the center counts as arrived
#[inline]
pub fn has_arrived(distance: f64, radius: f64) -> bool {
    distance < radius
}
