use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One anime in the inventory. Position in the collection is its only identity.
///
/// Stored entries are not re-validated: odd field types are coerced on load
/// instead of rejected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnimeEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub episodes: String, // raw digit string, no upper bound
    #[serde(
        default = "missing_rating",
        deserialize_with = "lenient_rating",
        serialize_with = "rating_as_json_number"
    )]
    pub rating: f64,
}

impl AnimeEntry {
    pub fn new(title: &str, genre: &str, episodes: &str, rating: f64) -> Self {
        Self {
            title: title.to_string(),
            genre: genre.to_string(),
            episodes: episodes.to_string(),
            rating,
        }
    }
}

/// Column a search is run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Genre,
    Episodes,
    Rating,
}

impl SearchField {
    /// Maps the search menu choice ("1".."4") to a field.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(SearchField::Title),
            "2" => Some(SearchField::Genre),
            "3" => Some(SearchField::Episodes),
            "4" => Some(SearchField::Rating),
            _ => None,
        }
    }
}

/// Whole ratings render without a fractional part (8, not 8.0).
pub fn format_rating(rating: f64) -> String {
    match whole_number(rating) {
        Some(whole) => whole.to_string(),
        None => format!("{rating}"),
    }
}

/// The rating as an integer, when it is whole and fits in an `i64`.
fn whole_number(rating: f64) -> Option<i64> {
    (rating.fract() == 0.0 && rating.abs() < i64::MAX as f64).then(|| rating as i64)
}

fn missing_rating() -> f64 {
    f64::NAN
}

/// Strings are kept as-is, numbers and other values as their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Numbers and numeric strings become the rating; anything else is NaN.
fn lenient_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

fn rating_as_json_number<S>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match whole_number(*rating) {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(*rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(8.0), "8");
        assert_eq!(format_rating(8.5), "8.5");
        assert_eq!(format_rating(10.0), "10");
        assert_eq!(format_rating(1.0), "1");
        assert_eq!(format_rating(9.9), "9.9");
    }

    #[test]
    fn test_search_field_from_choice() {
        assert_eq!(SearchField::from_choice("1"), Some(SearchField::Title));
        assert_eq!(SearchField::from_choice("4"), Some(SearchField::Rating));
        assert_eq!(SearchField::from_choice("5"), None);
        assert_eq!(SearchField::from_choice(" 1"), None);
    }

    #[test]
    fn test_episodes_accepts_number_or_string() {
        let entry: AnimeEntry =
            serde_json::from_str(r#"{"title":"A","genre":"G","episodes":24,"rating":7}"#)
                .unwrap();
        assert_eq!(entry.episodes, "24");
        assert_eq!(entry.rating, 7.0);

        let entry: AnimeEntry =
            serde_json::from_str(r#"{"title":"A","genre":"G","episodes":"012","rating":7.5}"#)
                .unwrap();
        assert_eq!(entry.episodes, "012");
        assert_eq!(entry.rating, 7.5);
    }

    #[test]
    fn test_odd_fields_are_coerced() {
        let entry: AnimeEntry = serde_json::from_str(
            r#"{"title":"Odd","genre":"G","episodes":12.5,"rating":"7.5"}"#,
        )
        .unwrap();
        assert_eq!(entry, AnimeEntry::new("Odd", "G", "12.5", 7.5));

        let entry: AnimeEntry =
            serde_json::from_str(r#"{"title":42,"genre":null,"episodes":"3","rating":"high"}"#)
                .unwrap();
        assert_eq!(entry.title, "42");
        assert_eq!(entry.genre, "");
        assert!(entry.rating.is_nan());
        assert_eq!(format_rating(entry.rating), "NaN");
    }

    #[test]
    fn test_missing_fields_default() {
        let entry: AnimeEntry = serde_json::from_str(r#"{"title":"Only Title"}"#).unwrap();
        assert_eq!(entry.title, "Only Title");
        assert_eq!(entry.episodes, "");
        assert!(entry.rating.is_nan());
    }

    #[test]
    fn test_huge_whole_rating_is_not_truncated() {
        assert_ne!(format_rating(1e300), i64::MAX.to_string());

        let entry = AnimeEntry::new("A", "G", "1", 1e300);
        let json = serde_json::to_string(&entry).unwrap();
        let back: AnimeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rating, 1e300);
    }

    #[test]
    fn test_whole_rating_serializes_as_integer() {
        let json = serde_json::to_string(&AnimeEntry::new("A", "G", "10", 5.0)).unwrap();
        assert_eq!(
            json,
            r#"{"title":"A","genre":"G","episodes":"10","rating":5}"#
        );

        let json = serde_json::to_string(&AnimeEntry::new("A", "G", "10", 9.5)).unwrap();
        assert!(json.ends_with(r#""rating":9.5}"#));
    }
}
