//! Movie records and their wire representation.
//!
//! The JSON keys (`Id`, `Title`, `Desc`, `ReleaseYear`) are the public wire
//! format. Decoding is permissive: missing keys take zero values and unknown
//! keys are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single movie record.
///
/// `id` is chosen by the caller and is conventionally unique, but the store
/// never enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Desc")]
    pub description: String,
    #[serde(rename = "ReleaseYear")]
    pub release_year: i32,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: i32,
    ) -> Self {
        Movie {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            release_year,
        }
    }

    /// Overwrites every mutable field with `fields`. The id is untouched.
    pub fn apply(&mut self, fields: MovieFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.release_year = fields.release_year;
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie({}: {} [{}])", self.id, self.title, self.release_year)
    }
}

/// The mutable subset of a [`Movie`], used by updates.
///
/// Shares the wire shape of [`Movie`]; an `Id` key in the input is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieFields {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Desc")]
    pub description: String,
    #[serde(rename = "ReleaseYear")]
    pub release_year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uses_wire_names() {
        let movie: Movie = serde_json::from_str(
            r#"{"Id":"7","Title":"Heat","Desc":"Crime","ReleaseYear":1995}"#,
        )
        .unwrap();
        assert_eq!(movie, Movie::new("7", "Heat", "Crime", 1995));
    }

    #[test]
    fn test_missing_keys_decode_to_zero_values() {
        let movie: Movie = serde_json::from_str(r#"{"Title":"New"}"#).unwrap();
        assert_eq!(movie.id, "");
        assert_eq!(movie.title, "New");
        assert_eq!(movie.description, "");
        assert_eq!(movie.release_year, 0);
    }

    #[test]
    fn test_fields_ignore_id_key() {
        let fields: MovieFields =
            serde_json::from_str(r#"{"Id":"99","Title":"New","ReleaseYear":2020}"#).unwrap();
        assert_eq!(fields.title, "New");
        assert_eq!(fields.release_year, 2020);
    }

    #[test]
    fn test_display() {
        let movie = Movie::new("2", "Super Troopers", "Pranks", 2001);
        assert_eq!(movie.to_string(), "Movie(2: Super Troopers [2001])");
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let json = serde_json::to_value(Movie::new("1", "A", "B", 2000)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Id": "1", "Title": "A", "Desc": "B", "ReleaseYear": 2000})
        );
    }
}
