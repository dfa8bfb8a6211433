use crate::token::TokenId;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A fresh token set replaced the old one
    LettersPlaced {
        count: usize,
        reshuffle: bool,
    },
    /// The input filtered down to nothing
    LettersCleared,
    LetterAdded {
        id: TokenId,
        letter: char,
        word: String,
    },
    Rewound {
        id: TokenId,
        discarded: usize,
        word: String,
    },
    ClickIgnored {
        id: TokenId,
    },
    LayoutMeasured {
        generation: u64,
        known: usize,
        total: usize,
    },
    /// A measurement arrived after a newer one had been scheduled
    MeasurementDiscarded {
        generation: u64,
    },
}
