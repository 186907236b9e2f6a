//! Generic two dimensional vector.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Zero and one constants for the component types a [`Vector2`] can hold.
///
/// Floats and integers use their numeric identities; [`UDim`](super::UDim)
/// uses a zero/one value in both scale and offset.
pub trait TypeSensitive: Copy {
    /// Additive identity.
    fn zero() -> Self;
    /// Multiplicative identity.
    fn one() -> Self;
}

macro_rules! impl_type_sensitive {
    ($($ty:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl TypeSensitive for $ty {
                fn zero() -> Self {
                    $zero
                }

                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_type_sensitive! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    u32 => 0, 1;
    usize => 0, 1;
}

/// A two dimensional vector, also used as a point.
///
/// Arithmetic is component-wise. Scalar multiplication and division are
/// available for any `T` that can be multiplied by itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// Float vector, the common case for widget and texture coordinates.
pub type Vector2f = Vector2<f32>;

impl<T> Vector2<T> {
    /// Create a vector from its components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: TypeSensitive> Vector2<T> {
    /// `(0, 0)`
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `(1, 1)`
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    /// `(1, 0)`
    pub fn one_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// `(0, 1)`
    pub fn one_y() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T>> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Div<Output = T>> Div for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: MulAssign> MulAssign for Vector2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl<T: DivAssign> DivAssign for Vector2<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

// Scalar forms. Written per component type rather than as a blanket
// `impl<T> Mul<T>`, which would overlap with the vector-vector impls.
macro_rules! impl_scalar_ops {
    ($($ty:ty),*) => {
        $(
            impl Mul<$ty> for Vector2<$ty> {
                type Output = Self;

                fn mul(self, c: $ty) -> Self {
                    Self::new(self.x * c, self.y * c)
                }
            }

            impl Div<$ty> for Vector2<$ty> {
                type Output = Self;

                fn div(self, c: $ty) -> Self {
                    Self::new(self.x / c, self.y / c)
                }
            }

            impl MulAssign<$ty> for Vector2<$ty> {
                fn mul_assign(&mut self, c: $ty) {
                    self.x *= c;
                    self.y *= c;
                }
            }

            impl DivAssign<$ty> for Vector2<$ty> {
                fn div_assign(&mut self, c: $ty) {
                    self.x /= c;
                    self.y /= c;
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i32, u32, usize);

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "Vector2<{short}>({}, {})", self.x, self.y)
    }
}
