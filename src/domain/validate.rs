use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("episode count must be digits only, got {0:?}")]
    EpisodeCount(String),

    #[error("rating must be between 1 and 10 with at most one decimal, got {0:?}")]
    Rating(String),
}

fn episode_count_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("valid episode pattern"))
}

fn rating_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(10(\.0)?|[1-9](\.\d)?)$").expect("valid rating pattern"))
}

pub fn is_valid_episode_count(value: &str) -> bool {
    // \d is Unicode-aware in regex; restrict to ASCII digits
    value.is_ascii() && episode_count_pattern().is_match(value)
}

pub fn is_valid_rating(value: &str) -> bool {
    value.is_ascii() && rating_pattern().is_match(value)
}

/// Episode counts are kept as the validated digit string.
pub fn parse_episode_count(value: &str) -> Result<String, ValidationError> {
    if is_valid_episode_count(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::EpisodeCount(value.to_string()))
    }
}

pub fn parse_rating(value: &str) -> Result<f64, ValidationError> {
    if !is_valid_rating(value) {
        return Err(ValidationError::Rating(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| ValidationError::Rating(value.to_string()))
}
