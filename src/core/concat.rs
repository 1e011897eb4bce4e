//! Back-to-back rendering of heterogeneous values

use std::fmt;

/// Renders each value with its `Display` implementation, with no separator.
///
/// This is what the plain (non-`f`) macros pass to the logger:
///
/// ```
/// use leveled_logger::Concat;
///
/// let rendered = Concat(&[&"id=", &42, &' ', &1.5]).to_string();
/// assert_eq!(rendered, "id=42 1.5");
/// ```
#[derive(Clone, Copy)]
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concat({:?})", self.to_string())
    }
}
