use std::time::{Duration, Instant};

use percent_encoding::percent_decode_str;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::EsConfig;
use crate::error::EsError;
use crate::{BoxFuture, SearchEngine};

/// Hard cap on a single engine response body.
pub const MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;
const ERROR_BODY_PREVIEW: usize = 512;

/// Elasticsearch client. One instance is built at startup and shared;
/// the inner `reqwest::Client` pools connections across calls.
#[derive(Clone)]
pub struct EsClient {
    http: reqwest::Client,
    base: Url,
    username: String,
    password: String,
    pub req_timeout: Duration,
}

impl EsClient {
    pub fn new(cfg: &EsConfig) -> Result<Self, EsError> {
        let (base, username, password) = split_credentials(cfg)?;
        let builder = reqwest::Client::builder().use_rustls_tls().no_proxy();
        let http = crate::tls::configure(builder, cfg)?.build()?;
        Ok(Self {
            http,
            base,
            username,
            password,
            req_timeout: Duration::from_secs(cfg.timeout_secs),
        })
    }

    /// `{host}/{index}/_search`, keeping any base path from the host url.
    pub fn search_url(&self, index: &str) -> Result<Url, EsError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| EsError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push(index)
            .push("_search");
        Ok(url)
    }

    /// `POST /{index}/_search` with `body`, returning the decoded response.
    pub async fn search_index(&self, index: &str, body: &Value) -> Result<Value, EsError> {
        let url = self.search_url(index)?;
        let started = Instant::now();
        let resp = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .timeout(self.req_timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if resp.content_length().is_some_and(|n| n > MAX_RESPONSE_BYTES as u64) {
            return Err(EsError::TooLarge { max: MAX_RESPONSE_BYTES });
        }
        let bytes = resp.bytes().await.map_err(|e| self.classify(e))?;
        debug!(
            target: "easylaw_es",
            index,
            status = status.as_u16(),
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search call finished"
        );
        if bytes.len() > MAX_RESPONSE_BYTES {
            return Err(EsError::TooLarge { max: MAX_RESPONSE_BYTES });
        }
        if !status.is_success() {
            return Err(EsError::Status { status: status.as_u16(), body: preview(&bytes) });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn classify(&self, err: reqwest::Error) -> EsError {
        if err.is_timeout() {
            EsError::Timeout(self.req_timeout.as_secs())
        } else {
            EsError::Http(err)
        }
    }
}

impl SearchEngine for EsClient {
    fn engine_name(&self) -> &'static str {
        "elasticsearch"
    }

    fn search<'a>(&'a self, index: &'a str, body: &'a Value) -> BoxFuture<'a, Result<Value, EsError>> {
        Box::pin(self.search_index(index, body))
    }
}

/// Base url without userinfo, plus the credentials to send.
/// Userinfo in `ELASTIC_HOST` wins over `ELASTIC_USER`/`ELASTIC_PASSWORD`
/// and is percent-decoded.
fn split_credentials(cfg: &EsConfig) -> Result<(Url, String, String), EsError> {
    let mut url = Url::parse(&cfg.host).map_err(|_| EsError::InvalidUrl(cfg.host.clone()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(EsError::InvalidUrl(cfg.host.clone()));
    }
    if url.username().is_empty() {
        return Ok((url, cfg.username.clone(), cfg.password.clone()));
    }
    let user = decode(url.username());
    let password = url.password().map(decode).unwrap_or_default();
    // Both setters only fail for cannot-be-a-base urls, excluded above.
    let _ = url.set_username("");
    let _ = url.set_password(None);
    Ok((url, user, password))
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    text.chars().take(ERROR_BODY_PREVIEW).collect()
}
