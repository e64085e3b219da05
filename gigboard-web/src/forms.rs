//! Form binding and validation
//!
//! Raw form types deserialize from urlencoded bodies (every field defaulted
//! so a missing field becomes an empty value rather than an extractor
//! rejection). `validate()` produces a draft ready for the storage layer,
//! or a list of field-level error messages.
//!
//! The seeking checkbox is a presence-based boolean: the field appears in
//! the submission only when checked, with an arbitrary value. Absence means
//! false, never an error.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

/// Genre choices offered on the create/edit forms
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Search box submission for the venue and artist search endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Raw venue form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

/// Validated venue record draft
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn validate(self) -> Result<VenueDraft, Vec<String>> {
        let mut errors = Vec::new();
        require(&self.name, "name", &mut errors);
        require(&self.city, "city", &mut errors);
        require(&self.state, "state", &mut errors);
        require(&self.address, "address", &mut errors);
        require(&self.phone, "phone", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(VenueDraft {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            genres: self.genres,
            image_link: optional(self.image_link),
            website_link: optional(self.website_link),
            facebook_link: optional(self.facebook_link),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: optional(self.seeking_description),
        })
    }
}

/// Raw artist form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

/// Validated artist record draft
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn validate(self) -> Result<ArtistDraft, Vec<String>> {
        let mut errors = Vec::new();
        require(&self.name, "name", &mut errors);
        require(&self.city, "city", &mut errors);
        require(&self.state, "state", &mut errors);
        require(&self.phone, "phone", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ArtistDraft {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: self.phone.trim().to_string(),
            genres: self.genres,
            image_link: optional(self.image_link),
            website_link: optional(self.website_link),
            facebook_link: optional(self.facebook_link),
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: optional(self.seeking_description),
        })
    }
}

/// Raw show form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// Validated show draft (referential integrity is checked by the schema,
/// not here)
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDraft {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    pub fn validate(self) -> Result<ShowDraft, Vec<String>> {
        let mut errors = Vec::new();

        let venue_id = self.venue_id.trim().parse::<i64>();
        if venue_id.is_err() {
            errors.push("venue_id must be a number".to_string());
        }
        let artist_id = self.artist_id.trim().parse::<i64>();
        if artist_id.is_err() {
            errors.push("artist_id must be a number".to_string());
        }
        let start_time = parse_start_time(self.start_time.trim());
        if start_time.is_none() {
            errors.push("start_time must be a valid date and time".to_string());
        }

        match (venue_id, artist_id, start_time) {
            (Ok(venue_id), Ok(artist_id), Some(start_time)) => Ok(ShowDraft {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Accept RFC 3339, the datetime-local input format, and a plain
/// "YYYY-MM-DD HH:MM[:SS]" form. Naive times are taken as UTC.
fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

fn require(value: &str, field: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{} is required", field));
    }
}

/// Empty or whitespace-only optional fields become None
fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_venue_form() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            ..VenueForm::default()
        }
    }

    #[test]
    fn valid_venue_form_produces_draft() {
        let draft = valid_venue_form().validate().unwrap();
        assert_eq!(draft.name, "The Musical Hop");
        assert_eq!(draft.genres, vec!["Jazz".to_string(), "Folk".to_string()]);
        assert!(!draft.seeking_talent);
        assert!(draft.website_link.is_none());
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let form = VenueForm {
            name: "  ".to_string(),
            ..valid_venue_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec!["name is required".to_string()]);

        let errors = VenueForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn seeking_flag_is_presence_based() {
        // Absent → false
        let draft = valid_venue_form().validate().unwrap();
        assert!(!draft.seeking_talent);

        // Present with any value → true, even "false" or empty
        for value in ["y", "true", "false", ""] {
            let form = VenueForm {
                seeking_talent: Some(value.to_string()),
                ..valid_venue_form()
            };
            assert!(form.validate().unwrap().seeking_talent, "value: {:?}", value);
        }
    }

    #[test]
    fn artist_form_mirrors_venue_form_without_address() {
        let form = ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            seeking_venue: Some("y".to_string()),
            seeking_description: "Looking for shows".to_string(),
            ..ArtistForm::default()
        };
        let draft = form.validate().unwrap();
        assert!(draft.seeking_venue);
        assert_eq!(draft.seeking_description.as_deref(), Some("Looking for shows"));
    }

    #[test]
    fn show_form_accepts_common_datetime_formats() {
        for raw in [
            "2026-06-15T19:30:00Z",
            "2026-06-15T19:30:00",
            "2026-06-15T19:30",
            "2026-06-15 19:30:00",
        ] {
            let form = ShowForm {
                venue_id: "1".to_string(),
                artist_id: "2".to_string(),
                start_time: raw.to_string(),
            };
            let draft = form.validate().unwrap_or_else(|e| panic!("{raw}: {e:?}"));
            assert_eq!(draft.venue_id, 1);
            assert_eq!(draft.artist_id, 2);
        }
    }

    #[test]
    fn show_form_rejects_bad_ids_and_times() {
        let form = ShowForm {
            venue_id: "abc".to_string(),
            artist_id: "".to_string(),
            start_time: "not a time".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
