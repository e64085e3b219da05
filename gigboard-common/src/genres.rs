//! Genre list storage encoding
//!
//! Genres are always an ordered `Vec<String>` in memory. The single TEXT
//! column encoding lives entirely in this module: records are written as a
//! JSON array (order preserving, round-trips exactly). Decode also accepts
//! the legacy brace-delimited form (`{Rock,Jazz}`) produced by earlier
//! imports, so pre-existing rows still parse.

/// Encode an ordered genre list for the `genres` TEXT column
pub fn encode_genres(genres: &[String]) -> String {
    // Vec<String> to JSON array cannot fail
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a `genres` column value back to the ordered list
pub fn decode_genres(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(genres) = serde_json::from_str::<Vec<String>>(trimmed) {
        return genres;
    }

    // Legacy encoding: "{Rock,Jazz}" or bare "Rock,Jazz"
    trimmed
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}
