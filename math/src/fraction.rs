use {
    crate::{Gcd, IsZero, MathResult, NumberConst, Rational, Sign},
    std::ops::{Div, Neg},
};

/// Describes a number that can be expressed as the quotient of two integers.
pub trait Fraction<U>: Sized {
    fn numerator(&self) -> U;

    fn denominator(&self) -> U;

    /// Compute the fraction's multiplicative inverse, i.e. the numerator and
    /// denominator swapped.
    ///
    /// Errors on zero, whose inverse would carry a zero denominator.
    fn checked_inv(&self) -> MathResult<Self>;
}

impl<U> Fraction<U> for Rational<U>
where
    U: NumberConst + IsZero + Sign + Gcd + Copy + Neg<Output = U> + Div<Output = U> + ToString,
{
    fn numerator(&self) -> U {
        self.numerator
    }

    fn denominator(&self) -> U {
        self.denominator
    }

    fn checked_inv(&self) -> MathResult<Self> {
        Self::checked_new(self.denominator, self.numerator)
    }
}

// ----------------------------------- tests -----------------------------------
