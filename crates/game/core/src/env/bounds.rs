use crate::math::{Aabb, Vec2};

/// Rectangular play area consulted by movement and knockback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    area: Aabb,
}

impl WorldBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            area: Aabb::new(min, max),
        }
    }

    /// Bounds anchored at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn area(&self) -> Aabb {
        self.area
    }

    pub fn is_in_limits(&self, point: Vec2) -> bool {
        self.area.contains(point)
    }

    /// Clamps `point` so a body of `radius` stays fully inside.
    ///
    /// When the area is narrower than the body, the point is centered on
    /// that axis.
    pub fn clamp_to_limits(&self, point: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(point.x, self.area.min.x + radius, self.area.max.x - radius),
            clamp_axis(point.y, self.area.min.y + radius, self.area.max.y - radius),
        )
    }
}

fn clamp_axis(value: f32, low: f32, high: f32) -> f32 {
    if low > high {
        (low + high) * 0.5
    } else {
        value.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_by_radius() {
        let bounds = WorldBounds::from_size(3000.0, 2500.0);
        assert_eq!(
            bounds.clamp_to_limits(Vec2::new(-10.0, 2600.0), 25.0),
            Vec2::new(25.0, 2475.0)
        );
        assert_eq!(
            bounds.clamp_to_limits(Vec2::new(100.0, 100.0), 25.0),
            Vec2::new(100.0, 100.0)
        );
    }

    #[test]
    fn limits_are_inclusive() {
        let bounds = WorldBounds::from_size(10.0, 10.0);
        assert!(bounds.is_in_limits(Vec2::new(10.0, 0.0)));
        assert!(!bounds.is_in_limits(Vec2::new(10.1, 0.0)));
    }

    #[test]
    fn degenerate_axis_centers() {
        let bounds = WorldBounds::from_size(20.0, 100.0);
        assert_eq!(bounds.clamp_to_limits(Vec2::new(0.0, 50.0), 25.0).x, 10.0);
    }
}
