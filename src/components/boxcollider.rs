use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned box collider.
///
/// `solid` colliders block movement; non-solid colliders are trigger volumes
/// that detect overlapping bodies without blocking them (goal regions).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    pub solid: bool,
}

impl BoxCollider {
    /// Create a solid collider with the given size, centered on the entity.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::new(-width * 0.5, -height * 0.5),
            solid: true,
        }
    }

    /// Create a non-solid trigger volume with the given size.
    pub fn trigger(width: f32, height: f32) -> Self {
        Self {
            solid: false,
            ..Self::new(width, height)
        }
    }

    /// Modify the collider with a custom offset from the entity position.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vec2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vec2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB vs AABB overlap test against another collider at a different
    /// entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Minimum translation vector that separates this collider from `other`,
    /// or `None` when they do not overlap.
    ///
    /// The vector points away from `other`; adding it to `position` resolves
    /// the overlap along the axis of least penetration.
    pub fn separation(&self, position: Vec2, other: &Self, other_position: Vec2) -> Option<Vec2> {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);

        let overlap_x = (max_a.x - min_b.x).min(max_b.x - min_a.x);
        let overlap_y = (max_a.y - min_b.y).min(max_b.y - min_a.y);
        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            return None;
        }

        let center_a = (min_a + max_a) * 0.5;
        let center_b = (min_b + max_b) * 0.5;

        if overlap_x < overlap_y {
            let dir = if center_a.x < center_b.x { -1.0 } else { 1.0 };
            Some(Vec2::new(overlap_x * dir, 0.0))
        } else {
            let dir = if center_a.y < center_b.y { -1.0 } else { 1.0 };
            Some(Vec2::new(0.0, overlap_y * dir))
        }
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
