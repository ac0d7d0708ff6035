//! Request and response plumbing shared by the provider adapters.

use crate::ProviderError;
use bytes::Bytes;
use linkdrop_filesystem::FileSystem;
use linkdrop_models::ProviderKind;
use reqwest::multipart::Part;
use reqwest::{Body, Response, Url};

const MAX_ERROR_BODY: usize = 200;

/// Multipart file part carrying the payload and a MIME type guessed from the name
pub(crate) fn file_part(
    provider: ProviderKind,
    filename: &str,
    payload: Bytes,
) -> Result<Part, ProviderError> {
    typed_part(provider, filename, payload, &FileSystem::mime_type(filename))
}

fn typed_part(
    provider: ProviderKind,
    filename: &str,
    payload: Bytes,
    mime: &str,
) -> Result<Part, ProviderError> {
    let len = payload.len() as u64;
    Part::stream_with_length(Body::from(payload), len)
        .file_name(filename.to_string())
        .mime_str(mime)
        .map_err(|e| ProviderError::InvalidPayload {
            provider,
            reason: format!("MIME type '{}': {}", mime, e),
        })
}

/// Reads the response body, turning non-2xx statuses into `HttpStatus`
pub(crate) async fn read_body(
    provider: ProviderKind,
    response: Response,
) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::transport(provider, e))?;

    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            provider,
            status: status.as_u16(),
            body: snippet(&body),
        });
    }

    Ok(body)
}

/// Trimmed body, or a parse error when nothing is left
pub(crate) fn non_empty(provider: ProviderKind, body: &str) -> Result<String, ProviderError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::parse(provider, "empty response body"));
    }
    Ok(trimmed.to_string())
}

/// Appends `segment` to the endpoint path, escaping it as a single segment
pub(crate) fn endpoint_with_segment(
    provider: ProviderKind,
    endpoint: &str,
    segment: &str,
) -> Result<Url, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidEndpoint {
        provider,
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("endpoint cannot take a path".to_string()))?
        .pop_if_empty()
        .push(segment);

    Ok(url)
}

/// Joins a public link prefix and an identifier with exactly one slash
pub(crate) fn public_link(base: &str, id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id.trim_start_matches('/'))
}

fn snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
