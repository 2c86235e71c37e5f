/// `derive_type`
///
/// Allow compiler to derive the type of a variable,
/// which is necessary for the test functions.
pub(crate) fn dt<T>(_: T, _: T) {}

/// `built_type`
///
///  Allow compiler to derive the type of a variable, and return right.
pub(crate) fn bt<T>(_: T, ret: T) -> T {
    ret
}

/// Macro for unit tests over the concrete [`Rational`](crate::Rational)
/// widths.
///
/// It is not possible to use [`test_case::test_case`] here because the sample
/// types differ per width, and `Rational<U>` is a different type for each
/// test case.
///
/// The macro passes the respective width's `Rational::ZERO` as the callback's
/// first parameter, so the compiler can derive the sample types.
/// (See [`dt`] and [`bt`].)
#[macro_export(local_inner_macros)]
macro_rules! rat_test {
    // No args
    (
        $name:ident
        method = $test_fn:expr
    ) => {
        rat_test!($name
            inputs = {
                rational64 = []
                rational128 = []
                rational256 = []
            }
            method = $test_fn
        );
    };
    // Multiple optional tests.
    (
        $name:ident
        inputs = {
            $(rational64 = [$($p64:expr),* $(,)?] $(,)?)?
            $(rational128 = [$($p128:expr),* $(,)?] $(,)?)?
            $(rational256 = [$($p256:expr),* $(,)?] $(,)?)?
        } $(,)?
        method = $test_fn:expr
    ) => {
        paste::paste! {
            $(
                #[test]
                #[allow(clippy::just_underscores_and_digits)]
                fn [<$name _rational64>]() {
                    ($test_fn)(<$crate::Rational64 as $crate::NumberConst>::ZERO, $($p64),*);
                }
            )?

            $(
                #[test]
                #[allow(clippy::just_underscores_and_digits)]
                fn [<$name _rational128>]() {
                    ($test_fn)(<$crate::Rational128 as $crate::NumberConst>::ZERO, $($p128),*);
                }
            )?

            $(
                #[test]
                #[allow(clippy::just_underscores_and_digits)]
                fn [<$name _rational256>]() {
                    ($test_fn)(<$crate::Rational256 as $crate::NumberConst>::ZERO, $($p256),*);
                }
            )?
        }
    };
    // Multiple optional passing/failing tests.
    (
        $name:ident
        inputs = {
            $(rational64 = {
                passing: [$($p64:expr),* $(,)?] $(,)?
                $(failing: [$($f64:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(rational128 = {
                passing: [$($p128:expr),* $(,)?] $(,)?
                $(failing: [$($f128:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(rational256 = {
                passing: [$($p256:expr),* $(,)?] $(,)?
                $(failing: [$($f256:expr),* $(,)?])? $(,)?
            } $(,)? )?
        } $(,)?
        method = $test_fn:expr
    ) => {
        rat_test!(
            $name
            inputs = {
                $(rational64 = [[$($p64),*] $(, [$($f64),*])?])?
                $(rational128 = [[$($p128),*] $(, [$($f128),*])?])?
                $(rational256 = [[$($p256),*] $(, [$($f256),*])?])?
            }
            method = $test_fn
        );
    };
}
