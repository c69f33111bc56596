use bytes::Bytes;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, IntoUrl, Response};

use crate::config::CONFIG;
use crate::error::Result;
use crate::session::CookieStore;

/// Control and zero-width formatting characters stripped from display text.
static CONTROL_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x1f\x7f\u{200b}-\u{200f}\u{2028}\u{2029}\u{feff}]").unwrap()
});

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("image/avif,image/webp,*/*"));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    Client::builder()
        .default_headers(headers)
        .user_agent(CONFIG.user_agent.clone())
        .timeout(CONFIG.timeout())
        .build()
        .unwrap()
});

/// Strip control and formatting characters from backend-provided text.
pub fn plain_text(text: &str) -> String {
    CONTROL_EXPR.replace_all(text, "").into_owned()
}

/// Open an authenticated byte stream. The response has been checked for a
/// success status; the caller drives the download.
pub async fn url_stream(url: impl IntoUrl, cookies: &CookieStore) -> Result<Response> {
    debug!("open stream, url: {}", url.as_str());
    let mut request = HTTP_CLIENT.get(url);
    if !cookies.is_empty() {
        request = request.header(header::COOKIE, cookies.header_value());
    }
    Ok(request.send().await?.error_for_status()?)
}

/// Fetch a whole body at once.
pub async fn url_bytes(url: impl IntoUrl, cookies: &CookieStore) -> Result<Bytes> {
    let res = url_stream(url, cookies).await?;
    let bytes = res.bytes().await?;
    trace!("fetched {} bytes", bytes.len());
    Ok(bytes)
}
