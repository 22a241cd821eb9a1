use crate::api::params::Params;
use crate::error::ClientError;
use crate::utils::error_helpers::{convert_error_response, convert_request_error};
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use std::fmt;

const USER_AGENT: &str = concat!("face-client/", env!("CARGO_PKG_VERSION"));
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// How the parameter set becomes the request body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyEncoding {
    /// The whole parameter set as a JSON object.
    Json,
    /// The bytes of the `data` parameter, sent verbatim with the given content type.
    Binary { content_type: String },
}

impl BodyEncoding {
    pub fn octet_stream() -> Self {
        BodyEncoding::Binary {
            content_type: OCTET_STREAM.to_string(),
        }
    }
}

/// Issues one HTTP call per invocation and normalizes the outcome into the raw body
/// text or a [`ClientError`].
#[derive(Clone)]
pub struct RequestExecutor {
    client: Client,
    subscription_key: String,
}

impl fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("client", &self.client)
            .field("subscription_key", &"<redacted>")
            .finish()
    }
}

impl RequestExecutor {
    // Create the executor with default transport settings
    pub fn new(subscription_key: String) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init"))?;

        Ok(RequestExecutor {
            client,
            subscription_key,
        })
    }

    /// Append `params` to `base` as an encoded query string, in insertion order.
    pub fn build_url(base: &str, params: &Params) -> Result<String, ClientError> {
        let mut url = base.to_string();
        for (index, (key, value)) in params.iter().enumerate() {
            let value = value
                .to_query_value()
                .ok_or_else(|| ClientError::InvalidRequest {
                    message: format!("Parameter '{}' cannot be sent in a query string", key),
                })?;
            url.push(if index == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
        Ok(url)
    }

    pub fn build_request(
        &self,
        url: &str,
        method: Method,
        params: &Params,
        encoding: &BodyEncoding,
    ) -> Result<RequestBuilder, ClientError> {
        let carries_body = method != Method::GET && method != Method::DELETE;
        let mut request = self
            .client
            .request(method, url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key);

        if !carries_body {
            return Ok(request);
        }

        request = match encoding {
            BodyEncoding::Binary { content_type } => {
                let data = params.get("data").and_then(|v| v.as_bytes()).ok_or_else(|| {
                    ClientError::InvalidRequest {
                        message: "Binary request requires a 'data' byte parameter".to_string(),
                    }
                })?;
                request
                    .header(CONTENT_TYPE, content_type.as_str())
                    .body(data.to_vec())
            }
            BodyEncoding::Json => request.json(params),
        };

        Ok(request)
    }

    /// Send one request and return the response body unchanged on success.
    pub async fn request(
        &self,
        url: &str,
        method: Method,
        params: &Params,
        encoding: &BodyEncoding,
    ) -> Result<String, ClientError> {
        debug!("{} {}", method, url);
        let response = self
            .build_request(url, method.clone(), params, encoding)?
            .send()
            .await
            .map_err(|e| convert_request_error(e, url))?;

        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| convert_request_error(e, url))?;
            debug!("{} {} -> {} ({} bytes)", method, url, status.as_u16(), body.len());
            Ok(body)
        } else {
            let error_text = error_body(response.text().await, &method, url);
            let error = convert_error_response(status.as_u16(), &error_text, url);
            warn!("{} {} failed: {}", method, url, error);
            Err(error)
        }
    }
}

/// Body of an error response; a failed read degrades to an empty body.
fn error_body<E: fmt::Display>(
    result: Result<String, E>,
    method: &Method,
    url: &str,
) -> String {
    result.unwrap_or_else(|e| {
        warn!("{} {} error body could not be read: {}", method, url, e);
        String::new()
    })
}
