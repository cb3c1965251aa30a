//! API request helpers.

use url::Url;

use crate::config::{CO2_INTENSITY_PATH, GREENCHECK_PATH, HTTP_STATUS_OK};
use crate::error_handling::FetchError;

/// URL of the greencheck endpoint for `hostname`.
pub(crate) fn greencheck_url(api_base_url: &str, hostname: &str) -> Result<Url, FetchError> {
    endpoint_url(api_base_url, GREENCHECK_PATH, hostname)
}

/// URL of the CO2 intensity endpoint for `ip`.
pub(crate) fn co2_intensity_url(api_base_url: &str, ip: &str) -> Result<Url, FetchError> {
    endpoint_url(api_base_url, CO2_INTENSITY_PATH, ip)
}

/// Appends the endpoint path and `subject` to the base URL's path.
///
/// `subject` always stays a single percent-encoded path segment.
fn endpoint_url(api_base_url: &str, endpoint_path: &str, subject: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: api_base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(api_base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(endpoint_path.split('/').filter(|segment| !segment.is_empty()))
        .push(subject);
    Ok(url)
}

/// Performs a GET request and returns the body of a 200 response.
///
/// # Errors
///
/// Returns `FetchError::UnexpectedStatus` for any status other than 200 and
/// `FetchError::Request` for transport failures.
pub(crate) async fn get_body(client: &reqwest::Client, url: Url) -> Result<String, FetchError> {
    let url_text = url.to_string();
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    if status != HTTP_STATUS_OK {
        return Err(FetchError::UnexpectedStatus {
            status,
            url: url_text,
        });
    }
    Ok(response.text().await?)
}
