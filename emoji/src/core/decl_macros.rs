// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in [`Ok`], or return `Ok(())` if no value is given.
///
/// ```
/// use r3bl_emoji::{CommonResult, ok};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<usize> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Drop in replacement for [`assert_eq!`] that prints a colored diff when the two sides
/// don't match, using [`pretty_assertions`](https://docs.rs/pretty_assertions). Only
/// available in tests.
#[cfg(test)]
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
