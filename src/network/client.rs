use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, CONNECTION, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

/// 单个镜像请求失败的原因。由调用方吞掉并切换到下一个镜像。
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected status HTTP {0}")]
    Status(u16),
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Request(err)
        }
    }
}

/// 打开一个镜像地址并返回响应体读取器。
///
/// 实现需要把非 2xx 的响应视为错误；返回的读取器被 drop 时连接即释放。
pub trait MirrorClient: Send + Sync {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, FetchError>;
}

impl<T: MirrorClient + ?Sized> MirrorClient for Arc<T> {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        (**self).open(url)
    }
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(15),
            user_agent: concat!("quran-page-fetcher/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

pub struct HttpMirrorClient {
    client: Client,
}

impl HttpMirrorClient {
    pub fn new(options: &ClientOptions) -> Result<Self, FetchError> {
        // reqwest in this project is built without default features (no gzip decoder).
        // Request identity encoding so the bytes land on disk exactly as served.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("image/*,*/*"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&options.user_agent)
                .unwrap_or(HeaderValue::from_static("quran-page-fetcher")),
        );

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(options.connect_timeout)
            .timeout(options.read_timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl MirrorClient for HttpMirrorClient {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(Box::new(resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts_are_fifteen_seconds() {
        let opts = ClientOptions::default();
        assert_eq!(opts.connect_timeout, Duration::from_secs(15));
        assert_eq!(opts.read_timeout, Duration::from_secs(15));
        assert!(opts.user_agent.starts_with("quran-page-fetcher/"));
    }

    #[test]
    fn status_error_message() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "unexpected status HTTP 404"
        );
    }
}
