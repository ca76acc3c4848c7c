//! Readiness of a polled condition.
//!
//! A condition-check reports either a usable value or "not ready yet". The
//! explicit form is [`Readiness`]; everything else a check may return is
//! mapped onto it through [`IntoReadiness`].

/// Outcome of a single condition-check evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readiness<T> {
    Ready(T),
    NotReady,
}

impl<T> Readiness<T> {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Converts into an `Option`, discarding the readiness tag.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NotReady => None,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Readiness<U> {
        match self {
            Self::Ready(value) => Readiness::Ready(f(value)),
            Self::NotReady => Readiness::NotReady,
        }
    }
}

impl<T> From<Option<T>> for Readiness<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotReady, Self::Ready)
    }
}

impl<T> From<Readiness<T>> for Option<T> {
    fn from(value: Readiness<T>) -> Self {
        value.into_option()
    }
}

/// Conversion from a condition-check's return value into [`Readiness`].
///
/// # Truthiness policy
///
/// Typed returns carry their readiness explicitly:
///
/// - `Readiness<T>` is taken as-is.
/// - `Option<T>`: `Some(v)` is ready with `v`, `None` is not ready. The value
///   inside `Some` is never inspected, so `Some(0)` and `Some(String::new())`
///   are valid results.
/// - `bool`: `true` is ready (yielding `true`), `false` is not ready.
///
/// Bare scalars follow truthiness rules, which means some defined values count
/// as "not ready":
///
/// - integers: `0` is not ready;
/// - floats: `0.0`, `-0.0` and `NaN` are not ready;
/// - `String` / `&str`: the empty string is not ready.
///
/// Return `Some(value)` when zero or empty is a legitimate result.
pub trait IntoReadiness {
    type Output;

    fn into_readiness(self) -> Readiness<Self::Output>;
}

impl<T> IntoReadiness for Readiness<T> {
    type Output = T;

    fn into_readiness(self) -> Readiness<T> {
        self
    }
}

impl<T> IntoReadiness for Option<T> {
    type Output = T;

    fn into_readiness(self) -> Readiness<T> {
        self.into()
    }
}

impl IntoReadiness for bool {
    type Output = bool;

    fn into_readiness(self) -> Readiness<bool> {
        if self {
            Readiness::Ready(true)
        } else {
            Readiness::NotReady
        }
    }
}

macro_rules! integer_readiness {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoReadiness for $ty {
                type Output = $ty;

                fn into_readiness(self) -> Readiness<$ty> {
                    if self == 0 {
                        Readiness::NotReady
                    } else {
                        Readiness::Ready(self)
                    }
                }
            }
        )*
    };
}

integer_readiness!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! float_readiness {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoReadiness for $ty {
                type Output = $ty;

                fn into_readiness(self) -> Readiness<$ty> {
                    // `NaN == 0.0` is false, so check it separately.
                    if self == 0.0 || self.is_nan() {
                        Readiness::NotReady
                    } else {
                        Readiness::Ready(self)
                    }
                }
            }
        )*
    };
}

float_readiness!(f32, f64);

impl IntoReadiness for String {
    type Output = String;

    fn into_readiness(self) -> Readiness<String> {
        if self.is_empty() {
            Readiness::NotReady
        } else {
            Readiness::Ready(self)
        }
    }
}

impl<'a> IntoReadiness for &'a str {
    type Output = &'a str;

    fn into_readiness(self) -> Readiness<&'a str> {
        if self.is_empty() {
            Readiness::NotReady
        } else {
            Readiness::Ready(self)
        }
    }
}
