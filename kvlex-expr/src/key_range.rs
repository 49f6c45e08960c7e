//! Key ranges: scan intervals over encoded row-key bytes.

use std::ops::Bound;

/// A possibly half-open or fully unbound interval over encoded key bytes.
///
/// `Bound::Unbounded` models an unbound end, which carries no inclusivity
/// meaning; `Included`/`Excluded` carry the inclusivity flag alongside the
/// bound bytes. Ranges are expressed so that lower precedes upper under the
/// current encoding's natural byte-lexicographic order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRange {
    pub lower: Bound<Vec<u8>>,
    pub upper: Bound<Vec<u8>>,
}

impl KeyRange {
    pub fn new(lower: Bound<Vec<u8>>, upper: Bound<Vec<u8>>) -> Self {
        KeyRange { lower, upper }
    }

    /// The range covering every key.
    pub fn everything() -> Self {
        KeyRange {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    #[inline]
    pub fn lower_unbound(&self) -> bool {
        matches!(self.lower, Bound::Unbounded)
    }

    #[inline]
    pub fn upper_unbound(&self) -> bool {
        matches!(self.upper, Bound::Unbounded)
    }

    #[inline]
    pub fn lower_inclusive(&self) -> bool {
        matches!(self.lower, Bound::Included(_))
    }

    #[inline]
    pub fn upper_inclusive(&self) -> bool {
        matches!(self.upper, Bound::Included(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_accessors() {
        let r = KeyRange::new(
            Bound::Included(b"\x01".to_vec()),
            Bound::Excluded(b"\x05".to_vec()),
        );
        assert!(!r.lower_unbound());
        assert!(!r.upper_unbound());
        assert!(r.lower_inclusive());
        assert!(!r.upper_inclusive());

        let all = KeyRange::everything();
        assert!(all.lower_unbound());
        assert!(all.upper_unbound());
        assert!(!all.lower_inclusive());
        assert!(!all.upper_inclusive());
    }
}
