//! Text alphabets the index can be built over.

/// One unit of indexed text.
///
/// Suffixes are ordered by the type's natural `Ord`: bytes by value,
/// `char` by code point.
pub trait Symbol: Ord + Copy + Send + Sync {
    /// Simple case folding used by case-insensitive indexes
    fn fold_case(self) -> Self;
}

impl Symbol for u8 {
    #[inline]
    fn fold_case(self) -> Self {
        self.to_ascii_lowercase()
    }
}

impl Symbol for char {
    /// Folds to the single lowercase code point, if there is exactly one.
    /// Characters whose lowercase form expands (e.g. 'İ') are kept as-is so
    /// that offsets stay aligned with the input.
    #[inline]
    fn fold_case(self) -> Self {
        let mut lower = self.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(c), None) => c,
            _ => self,
        }
    }
}
