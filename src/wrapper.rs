//! Wrapper URL helpers.
//!
//! Internal pages are served from `http://localhost` and wrap the URL they
//! refer to in a query parameter:
//!
//! | Page | Path | Wrapped URL |
//! |------|------|-------------|
//! | Reader mode | `/reader-mode/page` | sole query parameter |
//! | Error page | `/errors/error.html` | `url` query parameter |
//! | About page | `/about/<component>` | none |
//!
//! These helpers are independent of suffix resolution.

use url::Url;

use crate::error::Result;

const INTERNAL_SCHEME: &str = "http";
const INTERNAL_HOST: &str = "localhost";
const READER_MODE_PATH: &str = "/reader-mode/page";
const ERROR_PAGE_PATH: &str = "/errors/error.html";
const ABOUT_PREFIX: &str = "/about/";
const URL_PARAM: &str = "url";

/// Kind of internal page a URL points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalPage {
    ReaderMode,
    ErrorPage,
    /// About page with its component, e.g. `home`
    About(String),
}

/// Classify `url` as one of the internal pages, if it is one.
pub fn classify(url: &Url) -> Option<InternalPage> {
    if is_reader_mode_url(url) {
        Some(InternalPage::ReaderMode)
    } else if is_error_page_url(url) {
        Some(InternalPage::ErrorPage)
    } else {
        about_component(url).map(|c| InternalPage::About(c.to_string()))
    }
}

fn is_internal(url: &Url) -> bool {
    url.scheme() == INTERNAL_SCHEME && url.host_str() == Some(INTERNAL_HOST)
}

pub fn is_reader_mode_url(url: &Url) -> bool {
    is_internal(url) && url.path() == READER_MODE_PATH
}

/// Recover the page wrapped by a reader-mode URL.
///
/// The wrapper must carry exactly one query parameter.
pub fn decode_reader_mode_url(url: &Url) -> Option<Url> {
    if !is_reader_mode_url(url) {
        return None;
    }

    let mut pairs = url.query_pairs();
    let (_, value) = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }
    Url::parse(&value).ok()
}

/// Wrap `target` in a reader-mode URL rooted at `base`.
///
/// `base` is the reader-mode page, e.g. `http://localhost:6571/reader-mode/page`.
pub fn encode_reader_mode_url(target: &Url, base: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair(URL_PARAM, target.as_str());
    Ok(url)
}

pub fn is_error_page_url(url: &Url) -> bool {
    is_internal(url) && url.path() == ERROR_PAGE_PATH
}

/// Recover the URL that failed to load from an error page URL.
pub fn original_url_from_error_url(url: &Url) -> Option<Url> {
    if !is_error_page_url(url) {
        return None;
    }
    wrapped_url(url)
}

fn wrapped_url(url: &Url) -> Option<Url> {
    url.query_pairs()
        .find(|(key, _)| key == URL_PARAM)
        .and_then(|(_, value)| Url::parse(&value).ok())
}

pub fn is_about_url(url: &Url) -> bool {
    about_component(url).is_some()
}

/// Path remainder after `/about/`, e.g. `home` for `http://localhost/about/home`.
pub fn about_component(url: &Url) -> Option<&str> {
    if !is_internal(url) {
        return None;
    }
    url.path().strip_prefix(ABOUT_PREFIX)
}

/// Whether `url` is the about home page, directly or wrapped by an error page.
pub fn is_about_home_url(url: &Url) -> bool {
    if is_error_page_url(url) {
        if let Some(original) = wrapped_url(url) {
            return about_component(&original) == Some("home");
        }
    }
    about_component(url) == Some("home")
}

/// Copy of `url` with user and password removed.
///
/// URLs that cannot carry credentials (no host, `file:`) are returned as is.
pub fn strip_credentials(url: &Url) -> Url {
    let mut stripped = url.clone();
    if stripped.set_username("").is_err() || stripped.set_password(None).is_err() {
        return url.clone();
    }
    stripped
}
