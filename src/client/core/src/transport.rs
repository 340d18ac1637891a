/* src/client/core/src/transport.rs */

use std::future::Future;
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;
use std::pin::Pin;

use crate::error::FetchError;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Raw response: status plus body bytes. Status checks belong to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  pub status: u16,
  pub body: Vec<u8>,
}

impl Response {
  pub fn ok(body: impl Into<Vec<u8>>) -> Self {
    Self { status: 200, body: body.into() }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// One GET request. Only network-level failures are errors here.
pub trait Transport: Send + Sync {
  fn get(&self, url: &str) -> BoxFuture<Result<Response, FetchError>>;
}

/// HTTP(S) content server.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Transport for HttpTransport {
  fn get(&self, url: &str) -> BoxFuture<Result<Response, FetchError>> {
    let client = self.client.clone();
    let url = url.to_string();
    Box::pin(async move {
      let network = |e: reqwest::Error| FetchError::Network { url: url.clone(), message: e.to_string() };
      let resp = client.get(&url).send().await.map_err(network)?;
      let status = resp.status().as_u16();
      let body = resp.bytes().await.map_err(network)?;
      Ok(Response { status, body: body.to_vec() })
    })
  }
}

/// Content served from a local directory; a missing file reads as HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct FileTransport;

impl Transport for FileTransport {
  fn get(&self, url: &str) -> BoxFuture<Result<Response, FetchError>> {
    let path = PathBuf::from(url);
    let url = url.to_string();
    Box::pin(async move {
      match tokio::fs::read(&path).await {
        Ok(body) => Ok(Response::ok(body)),
        Err(e) if e.kind() == IoErrorKind::NotFound => Ok(Response { status: 404, body: Vec::new() }),
        Err(e) => Err(FetchError::Network { url, message: e.to_string() }),
      }
    })
  }
}

/// Pick a transport from the shape of the content base.
pub fn transport_for(base_url: &str) -> Box<dyn Transport> {
  if base_url.starts_with("http://") || base_url.starts_with("https://") {
    Box::new(HttpTransport::new())
  } else {
    Box::new(FileTransport)
  }
}
