//! Sort-order markers and the order-preserving byte codec.
//!
//! The codec re-encodes ascending-sorted key bytes into descending-sorted
//! equivalents by complementing every byte. The transform is total,
//! length-preserving, and its own inverse: applying it twice restores the
//! original bytes, and for any two sequences of the same value domain it
//! reverses their lexicographic order.

/// Direction marker carried by an encoded value.
///
/// A value carries at most one marker at a time; flipping twice cancels back
/// to [`SortOrder::Ascending`], mirroring the codec being self-inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Natural byte-lexicographic order. The unmarked default.
    #[default]
    Ascending,
    /// Byte-complemented order.
    Descending,
}

impl SortOrder {
    /// Compose one direction flip onto this marker.
    #[inline]
    pub fn flip(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    #[inline]
    pub fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}

/// Complement `bytes` into a freshly owned buffer.
///
/// A zero-length input yields a zero-length output; this models the
/// empty-bytes encoding of SQL NULL used by the row format.
#[inline]
pub fn invert(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| !b).collect()
}

/// Complement `src` into the caller-supplied `dst`.
///
/// Both slices must have the same length. Callers compose with adjacent
/// encoded columns by slicing sub-ranges of larger key buffers on either
/// side, so no intermediate copy is ever required.
#[inline]
pub fn invert_into(src: &[u8], dst: &mut [u8]) {
    assert_eq!(src.len(), dst.len(), "codec source/destination length mismatch");
    for (d, s) in dst.iter_mut().zip(src) {
        *d = !*s;
    }
}

/// Complement `buf` without allocating.
#[inline]
pub fn invert_in_place(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = !*b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_is_self_inverse() {
        let inputs: [&[u8]; 5] = [b"", b"\x00", b"\xff", b"abc", b"\x00\x7f\x80\xff"];
        for s in inputs {
            assert_eq!(invert(&invert(s)), s);
            assert_eq!(invert(s).len(), s.len());
        }
    }

    #[test]
    fn invert_reverses_lexicographic_order() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"\x01", b"\x05"),
            (b"aaa", b"aab"),
            (b"\x00\x00", b"\x00\x01"),
            (b"\x7f\xff", b"\x80\x00"),
        ];
        for (a, b) in pairs {
            assert!(a < b);
            assert!(invert(a) > invert(b), "order must reverse for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn zero_length_input_is_a_noop() {
        assert_eq!(invert(b""), Vec::<u8>::new());
        let mut empty: [u8; 0] = [];
        invert_in_place(&mut empty);
        invert_into(b"", &mut empty);
    }

    #[test]
    fn invert_into_operates_on_sub_ranges() {
        // Middle column of a three-column composite key.
        let key = b"aa\x01\x02zz";
        let mut out = vec![0u8; key.len()];
        out[..2].copy_from_slice(&key[..2]);
        invert_into(&key[2..4], &mut out[2..4]);
        out[4..].copy_from_slice(&key[4..]);
        assert_eq!(out, b"aa\xfe\xfdzz");
    }

    #[test]
    fn flip_composition_cancels() {
        assert_eq!(SortOrder::Ascending.flip(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.flip().flip(), SortOrder::Ascending);
        assert!(SortOrder::default() == SortOrder::Ascending);
        assert!(SortOrder::Descending.is_descending());
    }
}
