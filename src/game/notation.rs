//! Move text as typed or produced by a front end.
//!
//! Accepted forms: `"e2 e4"`, `"e2e4"`, and either with a promotion letter
//! (`"e7 e8 n"`, `"e7e8n"`). Squares are read in the game's orientation.

use crate::board::{MoveError, Orientation, PieceKind, Square};

/// A parsed but not yet validated move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub fn parse(text: &str, orientation: Orientation) -> Result<Self, MoveError> {
        let malformed = || MoveError::MalformedMove {
            text: text.to_string(),
        };
        if !text.is_ascii() {
            return Err(malformed());
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let (from, to, promotion) = match tokens.as_slice() {
            [from, to] => (*from, *to, None),
            [from, to, promo] => (*from, *to, Some(*promo)),
            [compact] if compact.len() == 4 => (&compact[..2], &compact[2..], None),
            [compact] if compact.len() == 5 => (&compact[..2], &compact[2..4], Some(&compact[4..])),
            _ => return Err(malformed()),
        };

        let promotion = match promotion {
            None => None,
            Some(letter) => {
                let mut chars = letter.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(malformed());
                };
                Some(PieceKind::from_char(c).ok_or(MoveError::InvalidPromotion { found: c })?)
            }
        };

        Ok(MoveRequest {
            from: orientation.square(from)?,
            to: orientation.square(to)?,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn parses_spaced_and_compact_forms() {
        let spaced = MoveRequest::parse("e2 e4", Orientation::Standard).unwrap();
        let compact = MoveRequest::parse("e2e4", Orientation::Standard).unwrap();
        assert_eq!(spaced, compact);
        assert_eq!(spaced.from, sq("e2"));
        assert_eq!(spaced.to, sq("e4"));
        assert_eq!(spaced.promotion, None);
    }

    #[test]
    fn parses_promotion_letter() {
        let req = MoveRequest::parse("e7 e8 n", Orientation::Standard).unwrap();
        assert_eq!(req.promotion, Some(PieceKind::Knight));
        let req = MoveRequest::parse("e7e8Q", Orientation::Standard).unwrap();
        assert_eq!(req.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn mirrored_orientation_flips_squares() {
        let req = MoveRequest::parse("e7 e5", Orientation::Mirrored).unwrap();
        assert_eq!(req.from, sq("d2"));
        assert_eq!(req.to, sq("d4"));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "e2", "e2 e4 q q", "e2e", "e2e4e6", "é2 e4"] {
            assert!(
                matches!(
                    MoveRequest::parse(text, Orientation::Standard),
                    Err(MoveError::MalformedMove { .. })
                ),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn reports_bad_squares_and_promotions() {
        assert_eq!(
            MoveRequest::parse("e2 e9", Orientation::Standard),
            Err(MoveError::InvalidSquare(SquareError::InvalidNotation {
                notation: "e9".to_string()
            }))
        );
        assert_eq!(
            MoveRequest::parse("e7 e8 x", Orientation::Standard),
            Err(MoveError::InvalidPromotion { found: 'x' })
        );
    }
}
