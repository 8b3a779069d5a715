//! Miscellaneous utilities.

use alloc::string::String;
use core::fmt::{self, Write};

/// Renders `values` joined with `", "`.
pub(crate) fn join<'a, T, I>(values: I) -> String
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{}", value);
    }
    out
}
