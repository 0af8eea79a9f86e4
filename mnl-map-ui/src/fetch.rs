//! Runtime fetch helpers for static data files served alongside the WASM
//! bundle.
//!
//! The lake list and species table are embedded at compile time; the bulk
//! fish tables are too large for that and are served as gzip-compressed
//! JSON next to the bundle, fetched on first use. Failures are reported
//! once and never retried: a source that fails to fetch stays empty for
//! the session.

use anyhow::{anyhow, bail, Context};
use flate2::read::GzDecoder;
use std::io::Read;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn js_error(context: &str, value: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, value)
}

async fn fetch_response(url: &str) -> anyhow::Result<web_sys::Response> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|e| js_error("fetch returned a non-Response", e))?;
    if !response.ok() {
        bail!("HTTP {} fetching {}", response.status(), url);
    }
    Ok(response)
}

/// Fetch a static file as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let response = fetch_response(url).await?;
    let text_value = JsFuture::from(
        response
            .text()
            .map_err(|e| js_error("response.text() failed", e))?,
    )
    .await
    .map_err(|e| js_error("reading response body failed", e))?;
    text_value
        .as_string()
        .ok_or_else(|| anyhow!("response body was not a string"))
}

/// Fetch a static file as raw bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let response = fetch_response(url).await?;
    let buffer_value = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| js_error("response.arrayBuffer() failed", e))?,
    )
    .await
    .map_err(|e| js_error("reading response body failed", e))?;
    Ok(js_sys::Uint8Array::new(&buffer_value).to_vec())
}

/// Fetch a gzip-compressed static file and decompress it to text.
pub async fn fetch_gz_text(url: &str) -> anyhow::Result<String> {
    let bytes = fetch_bytes(url).await?;
    gunzip_to_string(&bytes).with_context(|| format!("decompressing {}", url))
}

/// Decompress a gzip byte buffer to a UTF-8 string.
pub fn gunzip_to_string(bytes: &[u8]) -> anyhow::Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    Ok(out)
}
