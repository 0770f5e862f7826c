//! Paths of the reservation backend. Only [`RESERVATION_SEND`] is called by
//! the form; the rest are named so the site and backend agree on them.

// Reservations
pub const RESERVATIONS: &str = "/api/v1/reservations";
pub const RESERVATION_SEND: &str = "/api/v1/reservation/send";

// Tables
pub const TABLES: &str = "/api/v1/tables";
pub const AVAILABLE_TABLES: &str = "/api/v1/tables/available";

// Auth
pub const AUTH_REGISTER: &str = "/api/v1/auth/register";
pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const AUTH_LOGOUT: &str = "/api/v1/auth/logout";

// Contact
pub const CONTACT: &str = "/api/v1/contact";

/// Prefix forwarded to the backend by the dev server.
pub const API_PREFIX: &str = "/api";

pub fn reservation_by_id(id: impl std::fmt::Display) -> String {
    format!("{}/{}", RESERVATIONS, id)
}

/// Joins a base URL and an absolute path without doubling the slash.
pub fn url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_by_id_appends_the_id() {
        assert_eq!(reservation_by_id(42), "/api/v1/reservations/42");
        assert_eq!(reservation_by_id("abc"), "/api/v1/reservations/abc");
    }

    #[test]
    fn url_handles_trailing_slash_on_base() {
        assert_eq!(
            url("http://localhost:5000/", RESERVATION_SEND),
            "http://localhost:5000/api/v1/reservation/send"
        );
        assert_eq!(
            url("http://localhost:5000", RESERVATION_SEND),
            "http://localhost:5000/api/v1/reservation/send"
        );
    }
}
