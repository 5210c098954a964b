//! Advisor and bishop moves always have the same WXF code, so they are
//! decoded through a lookup table. Squares are from red's side; black
//! uses the rotated squares.

use crate::board::types::Square;

const FIXED: [(&[u8; 4], u8, u8); 28] = [
    (b"A4-5", 0xa8, 0xb7),
    (b"A4+5", 0xc8, 0xb7),
    (b"A5-4", 0xb7, 0xc8),
    (b"A5+4", 0xb7, 0xa8),
    (b"A5-6", 0xb7, 0xc6),
    (b"A5+6", 0xb7, 0xa6),
    (b"A6-5", 0xa6, 0xb7),
    (b"A6+5", 0xc6, 0xb7),
    (b"B1-3", 0xab, 0xc9),
    (b"B1+3", 0xab, 0x89),
    (b"B3-1", 0x89, 0xab),
    (b"B3+1", 0xc9, 0xab),
    (b"B3-5", 0x89, 0xa7),
    (b"B3+5", 0xc9, 0xa7),
    (b"B5-3", 0xa7, 0xc9),
    (b"B5+3", 0xa7, 0x89),
    (b"B5-7", 0xa7, 0xc5),
    (b"B5+7", 0xa7, 0x85),
    (b"B7-5", 0x85, 0xa7),
    (b"B7+5", 0xc5, 0xa7),
    (b"B7-9", 0x85, 0xa3),
    (b"B7+9", 0xc5, 0xa3),
    (b"B9-7", 0xa3, 0xc5),
    (b"B9+7", 0xa3, 0x85),
    // promotions
    (b"A4=P", 0xc8, 0xc8),
    (b"A6=P", 0xc6, 0xc6),
    (b"B3=P", 0xc9, 0xc9),
    (b"B7=P", 0xc5, 0xc5),
];

/// Source and destination for a normalised advisor or bishop code, as
/// seen from red.
pub(super) fn lookup(code: &[u8; 4]) -> Option<(Square, Square)> {
    FIXED
        .iter()
        .find(|(fixed, _, _)| *fixed == code)
        .map(|&(_, src, dst)| (Square(src), Square(dst)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_is_on_the_board() {
        for (code, src, dst) in FIXED {
            let (src, dst) = (Square(src), Square(dst));
            assert!(src.in_board() && dst.in_board(), "{:?}", code);
            if code[2] == b'=' {
                assert!(src.can_promote());
            } else {
                assert_ne!(src, dst);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(b"A4+5"), Some((Square(0xc8), Square(0xb7))));
        assert_eq!(lookup(b"B7=P"), Some((Square(0xc5), Square(0xc5))));
        assert_eq!(lookup(b"A4+6"), None);
    }
}
