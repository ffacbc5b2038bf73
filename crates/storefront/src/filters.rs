//! Askama filters for values shared by every page.
//!
//! None of these read the piped value; templates call them as `{{ ""|name }}`.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Store name shown in the header, footer and page titles.
pub const STORE_NAME: &str = "E-Commerce Store";

/// Content-hashed path of the main stylesheet, produced by `build.rs`.
pub const STYLESHEET_HREF: &str = concat!("/static/css/derived/main.", env!("CSS_HASH"), ".css");

/// Year printed in the footer copyright line.
#[askama::filter_fn]
pub fn copyright_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

#[askama::filter_fn]
pub fn stylesheet_href(
    _value: impl Display,
    _env: &dyn askama::Values,
) -> askama::Result<&'static str> {
    Ok(STYLESHEET_HREF)
}

#[askama::filter_fn]
pub fn store_name(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(STORE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_href_points_at_derived_copy() {
        let hash = STYLESHEET_HREF
            .strip_prefix("/static/css/derived/main.")
            .and_then(|rest| rest.strip_suffix(".css"))
            .expect("derived stylesheet path");
        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
