use std::fmt;
use uuid::Uuid;

/// Identity of one placed letter.
///
/// Ids are random v4 UUIDs, so two shuffles of the same text never share an
/// id and a stale click or position can't resolve against a new token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(Uuid);

impl TokenId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first block is plenty to tell tokens apart in logs
        let text = self.0.simple().to_string();
        write!(f, "{}", &text[..8])
    }
}

/// One letter instance placed on the wheel.
///
/// Tokens are never mutated; a reshuffle replaces the whole set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterToken {
    letter: char,
    /// Degrees in `[0, 360)`, 0 on the positive x-axis, growing clockwise on screen
    angle: f32,
    id: TokenId,
}

impl LetterToken {
    pub fn new(letter: char, angle: f32) -> Self {
        Self {
            letter,
            angle,
            id: TokenId::random(),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    /// The letter as shown on the wheel
    pub fn label(&self) -> String {
        self.letter.to_ascii_uppercase().to_string()
    }
}

/// Finds a token by id in the current token set.
pub fn find_token(tokens: &[LetterToken], id: TokenId) -> Option<&LetterToken> {
    tokens.iter().find(|token| token.id() == id)
}
