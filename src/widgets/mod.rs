pub mod letter_button;

pub use letter_button::LetterButton;
