mod error;
mod fraction;
mod gcd;
mod is_zero;
mod next;
mod number_const;
mod rational;
mod sign;

pub use {
    error::*, fraction::*, gcd::*, is_zero::*, next::*, number_const::*, rational::*, sign::*,
};

// ---------------------------------- testing ----------------------------------

#[cfg(test)]
pub(crate) mod test_utils;
