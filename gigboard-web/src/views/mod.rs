//! View rendering layer
//!
//! Pure functions from query results to HTML pages. All user-supplied data
//! goes through `esc` before interpolation.

pub mod artists;
pub mod errors;
pub mod layout;
pub mod shows;
pub mod venues;

use layout::page;

/// Escape user data for HTML interpolation
pub fn esc(value: &str) -> String {
    html_escape::encode_text(value).to_string()
}

/// GET / home page
pub fn home_page(flash: Option<&str>) -> String {
    let body = r#"
        <h1>Gigboard</h1>
        <p>Browse venues and artists, and book shows connecting the two.</p>
        <ul>
            <li><a href="/venues">Browse venues</a></li>
            <li><a href="/artists">Browse artists</a></li>
            <li><a href="/shows">See scheduled shows</a></li>
        </ul>
    "#;
    page("Gigboard", flash, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_data_is_escaped() {
        assert_eq!(esc("<script>"), "&lt;script&gt;");
        assert_eq!(esc("R&B"), "R&amp;B");
    }

    #[test]
    fn home_page_renders_flash_banner_only_when_present() {
        let with_flash = home_page(Some("Venue created"));
        assert!(with_flash.contains("Venue created"));

        let without = home_page(None);
        assert!(!without.contains("class=\"flash\""));
    }
}
