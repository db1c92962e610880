use std::ops::Mul;

use crate::Vector2;

impl<T> Vector2<T> where
    T: Copy + Into<f64>,
{
    /// Calculates the angle of the direction from this vector towards another vector.
    ///
    /// The angle is measured from the positive X-axis, with the Y-axis growing downward. As a result, a vector that lies directly
    /// "above" this one (smaller Y) is at 90 degrees and one directly "below" it is at -90 degrees.
    ///
    /// # Parameters
    /// * `other`: The other vector.
    ///
    /// # Return
    /// The angle in degrees, in the range `(-180, 180]`. Coincident vectors yield `0`.
    pub fn angle(self, other: Self) -> f64 {
        // Adding +0.0 turns -0.0 into +0.0, which keeps atan2 out of -180
        let dy = self.y.into() - other.y.into() + 0.0;
        let dx = other.x.into() - self.x.into();
        dy.atan2(dx).to_degrees()
    }

    /// Calculates the Euclidean distance to another vector.
    ///
    /// # Parameters
    /// * `other`: The other vector.
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x.into() - self.x.into();
        let dy = other.y.into() - self.y.into();
        (dx * dx + dy * dy).sqrt()
    }
}

impl Vector2<f64> {
    /// Creates a unit vector that points in the direction of the provided angle.
    ///
    /// This is the inverse of [`Vector2::angle`] when measured from the origin. The Y-component is negated, since the Y-axis grows
    /// downward.
    ///
    /// # Parameters
    /// * `degrees`: The angle in degrees. Any value is accepted; non-finite values produce non-finite components.
    pub fn from_angle(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), -radians.sin())
    }
}

impl Vector2<i32> {
    /// Multiplies both components with a factor.
    ///
    /// Components that would overflow saturate at [`i32::MIN`] or [`i32::MAX`].
    ///
    /// # Parameters
    /// * `value`: The factor.
    #[inline(always)]
    pub fn multiply(self, value: i32) -> Self {
        Self::new(self.x.saturating_mul(value), self.y.saturating_mul(value))
    }

    /// Multiplies both components with a floating-point factor.
    ///
    /// The products are truncated toward zero, not rounded: `(3, 3) * 0.5` yields `(1, 1)`. Products outside of the `i32` range
    /// saturate at [`i32::MIN`] or [`i32::MAX`] and a NaN product becomes `0`.
    ///
    /// # Parameters
    /// * `value`: The factor.
    #[inline(always)]
    pub fn multiply_f32(self, value: f32) -> Self {
        // `as` truncates toward zero and saturates
        Self::new((self.x as f32 * value) as i32, (self.y as f32 * value) as i32)
    }
}

impl Mul<i32> for Vector2<i32> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: i32) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f32> for Vector2<i32> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        self.multiply_f32(rhs)
    }
}
