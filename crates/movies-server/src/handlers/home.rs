//! Welcome page.

pub const WELCOME_TEXT: &str = "Welcome to the homepage of the movies service 🂡";

/// `GET /`
pub async fn home_page() -> &'static str {
    tracing::info!("endpoint hit: homepage");
    WELCOME_TEXT
}
