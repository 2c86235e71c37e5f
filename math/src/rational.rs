use {
    crate::{Fraction, Gcd, IsZero, MathError, MathResult, NextNumber, NumberConst, Sign},
    bnum::types::I256,
    std::{
        cmp::Ordering,
        fmt::{self, Display},
        iter::Sum,
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
        str::FromStr,
    },
};

// ------------------------------- generic type --------------------------------

/// An exact rational number, stored as a numerator/denominator pair of signed
/// integer words `U`.
///
/// Every live value is normalized:
///
/// - the denominator is strictly positive; the sign lives in the numerator;
/// - zero is uniquely represented as `0/1`;
/// - numerator and denominator share no common factor greater than one.
///
/// Every constructor and mutator re-establishes these invariants before
/// returning, so structural equality on the pair coincides with mathematical
/// equality of the fractions.
///
/// The one fatal condition is a zero denominator; the `checked_*` methods
/// surface it as [`MathError::ZeroDenominator`], their unchecked counterparts
/// panic. Overflow of the inner word is not guarded: arithmetic uses the
/// native operators and inherits their overflow semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational<U> {
    pub(crate) numerator: U,
    pub(crate) denominator: U,
}

impl<U> Rational<U>
where
    U: Copy,
{
    pub fn numerator(&self) -> U {
        self.numerator
    }

    pub fn denominator(&self) -> U {
        self.denominator
    }
}

impl<U> Rational<U>
where
    U: NumberConst + IsZero + Sign + Gcd + Copy + Neg<Output = U> + Div<Output = U>,
{
    /// Re-establish the invariants after a field has changed.
    ///
    /// The caller must have already ruled out a zero denominator.
    fn normalize(&mut self) {
        debug_assert!(
            self.denominator.is_non_zero(),
            "zero denominator must be rejected before normalizing"
        );

        // Zero has a unique representation.
        if self.numerator.is_zero() {
            self.denominator = U::ONE;
            return;
        }

        // Only the numerator may carry the sign.
        if self.denominator.is_negative() {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }

        // Reduce.
        let divisor = self.numerator.gcd(self.denominator);
        self.numerator = self.numerator / divisor;
        self.denominator = self.denominator / divisor;
    }
}

impl<U> Rational<U>
where
    U: NumberConst + IsZero + Sign + Gcd + Copy + Neg<Output = U> + Div<Output = U> + ToString,
{
    /// Create a new [`Rational`] from the given numerator and denominator,
    /// normalizing the pair.
    ///
    /// Errors if the denominator is zero.
    pub fn checked_new(numerator: U, denominator: U) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::zero_denominator(numerator));
        }

        let mut rational = Self {
            numerator,
            denominator,
        };
        rational.normalize();

        Ok(rational)
    }

    /// Create a new [`Rational`] from the given numerator and denominator,
    /// normalizing the pair.
    ///
    /// Panics if the denominator is zero.
    pub fn new(numerator: U, denominator: U) -> Self {
        Self::checked_new(numerator, denominator).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Replace the numerator, then renormalize.
    ///
    /// A zero numerator forces the denominator back to one.
    pub fn set_numerator(&mut self, numerator: U) {
        self.numerator = numerator;
        self.normalize();
    }

    /// Replace the denominator, then renormalize.
    ///
    /// Errors if the new denominator is zero.
    pub fn checked_set_denominator(&mut self, denominator: U) -> MathResult<()> {
        if denominator.is_zero() {
            return Err(MathError::zero_denominator(self.numerator));
        }

        self.denominator = denominator;
        self.normalize();

        Ok(())
    }

    /// Replace the denominator, then renormalize.
    ///
    /// Panics if the new denominator is zero.
    pub fn set_denominator(&mut self, denominator: U) {
        self.checked_set_denominator(denominator)
            .unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Rational<U>
where
    U: NumberConst
        + IsZero
        + Sign
        + Gcd
        + Copy
        + Neg<Output = U>
        + Mul<Output = U>
        + Div<Output = U>
        + ToString,
{
    /// Divide by another rational, by multiplying with its inverse.
    ///
    /// Errors when dividing by zero.
    pub fn checked_div(self, divisor: Self) -> MathResult<Self> {
        divisor.checked_inv().map(|inverse| self * inverse)
    }
}

impl<U> Default for Rational<U>
where
    U: NumberConst,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U> From<U> for Rational<U>
where
    U: NumberConst,
{
    fn from(numerator: U) -> Self {
        // A whole number over one is normalized by construction.
        Self {
            numerator,
            denominator: U::ONE,
        }
    }
}

impl<U> Neg for Rational<U>
where
    U: Neg<Output = U>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        // Negating the numerator of a normalized value preserves every
        // invariant, so no renormalization is needed.
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl<U> Display for Rational<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<U> FromStr for Rational<U>
where
    U: NumberConst
        + IsZero
        + Sign
        + Gcd
        + Copy
        + Neg<Output = U>
        + Div<Output = U>
        + FromStr
        + ToString,
{
    type Err = MathError;

    /// Parse a rational from either a plain integer string (`"5"`) or a
    /// numerator/denominator pair (`"-2/7"`). The parsed value is normalized.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = numerator.parse().map_err(|_| {
                    MathError::parse_number::<Self, _, _>(input, "error parsing numerator")
                })?;
                let denominator = denominator.parse().map_err(|_| {
                    MathError::parse_number::<Self, _, _>(input, "error parsing denominator")
                })?;

                Self::checked_new(numerator, denominator)
            },
            None => {
                let numerator: U = input.parse().map_err(|_| {
                    MathError::parse_number::<Self, _, _>(input, "error parsing numerator")
                })?;

                Ok(Self::from(numerator))
            },
        }
    }
}

// --------------------------------- ordering ----------------------------------

impl<U> PartialOrd for Rational<U>
where
    U: NextNumber + Copy + Eq,
    U::Next: Mul<Output = U::Next> + Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U> Ord for Rational<U>
where
    U: NextNumber + Copy + Eq,
    U::Next: Mul<Output = U::Next> + Ord,
{
    /// Compare by cross-multiplication in the next bigger word size, where
    /// the products cannot overflow. Denominators of live values are always
    /// positive, so no sign adjustment is involved.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator.into_next() * other.denominator.into_next();
        let rhs = other.numerator.into_next() * self.denominator.into_next();

        lhs.cmp(&rhs)
    }
}

// -------------------------------- arithmetic ---------------------------------

impl<U> Add for Rational<U>
where
    U: NumberConst
        + IsZero
        + Sign
        + Gcd
        + Copy
        + Neg<Output = U>
        + Add<Output = U>
        + Mul<Output = U>
        + Div<Output = U>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = Self {
            numerator: self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            denominator: self.denominator * rhs.denominator,
        };
        sum.normalize();
        sum
    }
}

impl<U> Sub for Rational<U>
where
    U: NumberConst
        + IsZero
        + Sign
        + Gcd
        + Copy
        + Neg<Output = U>
        + Sub<Output = U>
        + Mul<Output = U>
        + Div<Output = U>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut difference = Self {
            numerator: self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            denominator: self.denominator * rhs.denominator,
        };
        difference.normalize();
        difference
    }
}

impl<U> Mul for Rational<U>
where
    U: NumberConst
        + IsZero
        + Sign
        + Gcd
        + Copy
        + Neg<Output = U>
        + Mul<Output = U>
        + Div<Output = U>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = Self {
            numerator: self.numerator * rhs.numerator,
            denominator: self.denominator * rhs.denominator,
        };
        product.normalize();
        product
    }
}

impl<U> Div for Rational<U>
where
    U: NumberConst
        + IsZero
        + Sign
        + Gcd
        + Copy
        + Neg<Output = U>
        + Mul<Output = U>
        + Div<Output = U>
        + ToString,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> AddAssign for Rational<U>
where
    Self: Add<Output = Self> + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U> SubAssign for Rational<U>
where
    Self: Sub<Output = Self> + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U> MulAssign for Rational<U>
where
    Self: Mul<Output = Self> + Copy,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<U> DivAssign for Rational<U>
where
    Self: Div<Output = Self> + Copy,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<U> Sum for Rational<U>
where
    Self: AddAssign + NumberConst,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut sum = Self::ZERO;
        for rational in iter {
            sum += rational;
        }
        sum
    }
}

// ------------------------------ concrete types -------------------------------

macro_rules! generate_rational {
    (
        name       = $name:ident,
        inner_type = $inner:ty,
        doc        = $doc:literal,
    ) => {
        #[doc = $doc]
        pub type $name = Rational<$inner>;

        impl $name {
            /// Create a whole-number rational, i.e. with a denominator of one.
            pub const fn from_int(numerator: $inner) -> Self {
                Self {
                    numerator,
                    denominator: <$inner as NumberConst>::ONE,
                }
            }
        }
    };
}

generate_rational! {
    name       = Rational64,
    inner_type = i64,
    doc        = "Rational number with a 64-bit numerator and denominator.",
}

generate_rational! {
    name       = Rational128,
    inner_type = i128,
    doc        = "Rational number with a 128-bit numerator and denominator.",
}

generate_rational! {
    name       = Rational256,
    inner_type = I256,
    doc        = "Rational number with a 256-bit numerator and denominator.",
}

// ----------------------------------- tests -----------------------------------


// -------------------------------- properties ---------------------------------
