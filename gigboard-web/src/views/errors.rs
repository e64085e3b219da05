//! Fixed error pages: 404 and 500

use super::layout::page;

pub fn not_found_page() -> String {
    page(
        "Not Found",
        None,
        r#"<h1>404 — Not Found</h1>
        <p>The page or record you asked for does not exist.</p>
        <p><a href="/">Back to the home page</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    page(
        "Server Error",
        None,
        r#"<h1>500 — Something went wrong</h1>
        <p>An unexpected error occurred. Please try again.</p>
        <p><a href="/">Back to the home page</a></p>"#,
    )
}
