use bnum::{
    cast::As,
    types::{I256, I512},
};

/// Describes a number type that can be cast into another type of a bigger
/// word size.
///
/// For example, `i64` can be safely cast to `i128`. In this case,
/// [`NextNumber`] should be implemented for `i64` with `Next` being `i128`.
///
/// [`Rational`](crate::Rational) relies on this when comparing two values:
/// the cross-multiplied products are evaluated in the next word size, where
/// they cannot overflow.
pub trait NextNumber {
    type Next;

    fn into_next(self) -> Self::Next;
}

// ------------------------------------ std ------------------------------------

macro_rules! impl_next {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            fn into_next(self) -> Self::Next {
                self.into()
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next!($this => $next);
        )+
    };
}

impl_next! {
    i8  => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
}

// ----------------------------------- bnum ------------------------------------

macro_rules! impl_next_bnum {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            fn into_next(self) -> Self::Next {
                self.as_()
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next_bnum!($this => $next);
        )+
    };
}

impl_next_bnum! {
    i128 => I256,
    I256 => I512,
}
