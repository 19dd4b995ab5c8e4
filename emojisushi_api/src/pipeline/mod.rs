//! Request shaping: every outgoing call gets the configured static headers
//! and a `lang=<locale>` query parameter.

mod options;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::truncate_body;
use crate::Error;

use self::options::encode_query;
pub use self::options::{merge_params, RequestOptions};

/// Builds, shapes and sends requests against the configured backend.
///
/// Static headers live behind a lock: reads happen on every request and
/// writes through [`RequestPipeline::set_header`] are serialized.
#[derive(Debug)]
pub struct RequestPipeline {
    http: reqwest::Client,
    base_url: Url,
    lang: String,
    http_errors: bool,
    static_headers: RwLock<HeaderMap>,
}

impl RequestPipeline {
    pub fn new(config: &ClientConfig, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: config.parsed_base_url()?,
            lang: config.lang.clone(),
            http_errors: config.http_errors,
            static_headers: RwLock::new(HeaderMap::new()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Sets or replaces a header sent with every subsequent request.
    pub fn set_header(&self, name: &str, value: &str) -> Result<(), Error> {
        let (header_name, header_value) = parse_header(name, value)?;
        self.write_headers().insert(header_name, header_value);
        Ok(())
    }

    /// Snapshot of the static headers.
    pub fn static_headers(&self) -> HeaderMap {
        self.read_headers().clone()
    }

    fn read_headers(&self) -> RwLockReadGuard<'_, HeaderMap> {
        self.static_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_headers(&self) -> RwLockWriteGuard<'_, HeaderMap> {
        self.static_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolves an endpoint path against the base URL.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Appends `lang=<locale>` after whatever query the URL already carries.
    pub fn append_locale(&self, url: &mut Url) {
        let lang: String = url::form_urlencoded::byte_serialize(self.lang.as_bytes()).collect();
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&lang={}", existing, lang),
            _ => format!("lang={}", lang),
        };
        url.set_query(Some(&query));
    }

    /// Applies the static headers, overwriting same-named ones, then the locale.
    pub fn shape(&self, request: &mut reqwest::Request) {
        {
            let headers = self.read_headers();
            for (name, value) in headers.iter() {
                request.headers_mut().insert(name.clone(), value.clone());
            }
        }
        self.append_locale(request.url_mut());
    }

    /// Builds a shaped request without sending it.
    ///
    /// `operation_query` and `operation_json` are merged over the caller's
    /// `options` with [`merge_params`]. A JSON body is attached when the
    /// operation supplies one or the caller set JSON fields.
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        operation_query: &Map<String, Value>,
        operation_json: Option<&Map<String, Value>>,
        options: &RequestOptions,
    ) -> Result<reqwest::Request, Error> {
        let mut url = self.endpoint_url(path)?;
        let pairs = encode_query(&merge_params(options.query(), operation_query));
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let mut builder = self.http.request(method, url);
        for (name, value) in options.headers() {
            let (header_name, header_value) = parse_header(name, value)?;
            builder = builder.header(header_name, header_value);
        }
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }
        match operation_json {
            Some(json) => builder = builder.json(&merge_params(options.json(), json)),
            None if !options.json().is_empty() => builder = builder.json(options.json()),
            None => {}
        }

        let mut request = builder.build()?;
        self.shape(&mut request);
        Ok(request)
    }

    /// Issues a GET and returns the decoded JSON body.
    pub async fn get(
        &self,
        path: &str,
        query: &Map<String, Value>,
        options: &RequestOptions,
    ) -> Result<Value, Error> {
        let request = self.prepare(Method::GET, path, query, None, options)?;
        self.execute(request).await
    }

    /// Issues a POST with a JSON body and returns the decoded JSON body.
    pub async fn post(
        &self,
        path: &str,
        json: &Map<String, Value>,
        options: &RequestOptions,
    ) -> Result<Value, Error> {
        let request = self.prepare(Method::POST, path, &Map::new(), Some(json), options)?;
        self.execute(request).await
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Value, Error> {
        tracing::debug!("{} {}", request.method(), request.url());
        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if self.http_errors && !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        decode_body(&body)
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), Error> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
    Ok((header_name, header_value))
}

/// Decodes a response body. An empty body is treated as `{}`.
fn decode_body(body: &str) -> Result<Value, Error> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|source| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse response: {} | body: {}", source, snippet);
        Error::Decode {
            source,
            body: snippet,
        }
    })
}
