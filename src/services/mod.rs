pub mod review_validator;

pub use review_validator::{validate_review, MAX_WORDS, MAX_WORD_LENGTH, MIN_WORDS};
