//! Values a string validator can inspect.
//!
//! Validators look at strings. [`StringConvertible`] lets callers hand them
//! anything with an obvious string rendering (booleans, numbers, chars)
//! without converting by hand first.

use std::borrow::Cow;

/// Anything that renders to the string a validator inspects.
///
/// Borrowed strings are passed through without allocating. Numbers render
/// through `Display`, so `1.0_f64` becomes `"1"` and `true` becomes `"true"`.
pub trait StringConvertible {
    /// The string form of `self`.
    fn to_validatable(&self) -> Cow<'_, str>;
}

impl StringConvertible for str {
    #[inline]
    fn to_validatable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl StringConvertible for String {
    #[inline]
    fn to_validatable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl StringConvertible for Cow<'_, str> {
    #[inline]
    fn to_validatable(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: StringConvertible + ?Sized> StringConvertible for &T {
    #[inline]
    fn to_validatable(&self) -> Cow<'_, str> {
        (**self).to_validatable()
    }
}

macro_rules! display_convertible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl StringConvertible for $ty {
                #[inline]
                fn to_validatable(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

display_convertible!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_borrow() {
        let owned = String::from("hello");
        assert!(matches!(owned.to_validatable(), Cow::Borrowed("hello")));
        assert!(matches!("hi".to_validatable(), Cow::Borrowed("hi")));
    }

    #[test]
    fn scalars_render_with_display() {
        assert_eq!(true.to_validatable(), "true");
        assert_eq!('x'.to_validatable(), "x");
        assert_eq!(42_u8.to_validatable(), "42");
        assert_eq!((-7_i64).to_validatable(), "-7");
        assert_eq!(1.0_f64.to_validatable(), "1");
        assert_eq!(1.2_f32.to_validatable(), "1.2");
    }
}
