//! Deterministic integer-grid geometry over a 2-component vector.
//!
//! The crate offers:
//!
//! * Measurements between vectors ([`Vector2::angle`], [`Vector2::distance`]) and the inverse of the angle measurement
//!   ([`Vector2::from_angle`]).
//! * Scaling of integer vectors ([`Vector2::multiply`], [`Vector2::multiply_f32`]).
//! * Rasterization of straight segments between grid points ([`line`], [`line_exact`]).
//! * A bare `[x, y]` wire encoding for [`Vector2`] (behind the `serde` feature).
//!
//! Angles follow the screen convention: the Y-axis grows downward, so an angle of 90 degrees points "up" (negative Y).

#[cfg(feature = "serde")]
mod codec;
mod line;
mod measure;

pub use line::{line, line_exact, Line};

/// A vector in 2D space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Vector2<T> {
    /// The X-component.
    pub x: T,
    /// The Y-component.
    pub y: T,
}

impl<T> Vector2<T> {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `x`: The X-component.
    /// * `y`: The Y-component.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<A, B, T> From<(A, B)> for Vector2<T> where
    A: Into<T>,
    B: Into<T>,
{
    #[inline(always)]
    fn from(components: (A, B)) -> Self {
        Self::new(components.0.into(), components.1.into())
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    #[inline(always)]
    fn from(vector: Vector2<T>) -> Self {
        (vector.x, vector.y)
    }
}

#[cfg(test)]
mod test_vector2 {
    use super::Vector2;

    #[test]
    fn test_from_tuple() {
        let vector: Vector2<i32> = (3i16, -4i32).into();
        assert_eq!(Vector2::new(3, -4), vector);
    }

    #[test]
    fn test_into_tuple() {
        let tuple: (i32, i32) = Vector2::new(7, 8).into();
        assert_eq!((7, 8), tuple);
    }

    #[test]
    fn test_equality_is_componentwise() {
        assert_eq!(Vector2::new(1, 2), Vector2::new(1, 2));
        assert_ne!(Vector2::new(1, 2), Vector2::new(2, 1));
        assert_ne!(Vector2::new(1, 2), Vector2::new(1, 3));
    }
}
