/// Quotient and remainder produced by a single division.
///
/// Returned by `div_mod` on every integer type so that callers needing both
/// halves pay for one division instead of two.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DivMod<T> {
    pub quotient: T,
    pub remainder: T,
}

impl<T> DivMod<T> {
    pub(crate) const fn new(quotient: T, remainder: T) -> Self {
        Self {
            quotient,
            remainder,
        }
    }

    /// Splits the pair into a `(quotient, remainder)` tuple.
    pub fn into_parts(self) -> (T, T) {
        (self.quotient, self.remainder)
    }
}
