//! Request handlers
//!
//! Each handler is a short composition: require login where the route
//! demands it, reach the stores on the blocking pool, then either
//! render a view or answer 303 See Other (post/redirect/get). No
//! application route returns JSON.

pub mod account;
pub mod listing;
pub mod tables;

use actix_web::{http::header, HttpResponse};

/// 303 See Other to `location`.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_see_other_sets_status_and_location() {
        let response = see_other("/login");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }
}
