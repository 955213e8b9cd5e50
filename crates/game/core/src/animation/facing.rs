use crate::math::Vec2;

/// Cardinal direction a sprite faces.
///
/// Sheets carry `_up`, `_down` and `_right` variants; left reuses the right
/// row mirrored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing along the dominant axis of `direction`; `None` for zero.
    pub fn from_vector(direction: Vec2) -> Option<Self> {
        if direction.is_zero() {
            return None;
        }
        Some(if direction.x.abs() > direction.y.abs() {
            if direction.x < 0.0 { Self::Left } else { Self::Right }
        } else if direction.y < 0.0 {
            Self::Up
        } else {
            Self::Down
        })
    }

    pub fn vector(self) -> Vec2 {
        match self {
            Self::Up => Vec2::UP,
            Self::Down => Vec2::DOWN,
            Self::Left => Vec2::LEFT,
            Self::Right => Vec2::RIGHT,
        }
    }

    /// Sheet suffix and whether the sprite is mirrored.
    pub fn suffix(self) -> (&'static str, bool) {
        match self {
            Self::Up => ("_up", false),
            Self::Down => ("_down", false),
            Self::Left => ("_right", true),
            Self::Right => ("_right", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(Facing::from_vector(Vec2::new(-5.0, 2.0)), Some(Facing::Left));
        assert_eq!(Facing::from_vector(Vec2::new(1.0, -3.0)), Some(Facing::Up));
        assert_eq!(Facing::from_vector(Vec2::ZERO), None);
    }

    #[test]
    fn left_mirrors_right() {
        assert_eq!(Facing::Left.suffix(), ("_right", true));
    }
}
