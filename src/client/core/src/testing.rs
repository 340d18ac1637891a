/* src/client/core/src/testing.rs */

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::FetchError;
use crate::transport::{BoxFuture, Response, Transport};

#[derive(Default)]
struct Route {
  responses: VecDeque<Result<Response, FetchError>>,
  delay: Duration,
  calls: usize,
}

/// Per-URL scripted responses. Each request consumes one entry; the last entry
/// repeats. Unscripted URLs answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
  routes: Mutex<HashMap<String, Route>>,
}

impl ScriptedTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn script(&self, url: &str, responses: Vec<Result<Response, FetchError>>) {
    let mut routes = self.routes.lock().unwrap();
    routes.entry(url.to_string()).or_default().responses = responses.into();
  }

  pub fn serve(&self, url: &str, body: &str) {
    self.script(url, vec![Ok(Response::ok(body))]);
  }

  /// Hold every response for `url` back by `delay`.
  pub fn delay(&self, url: &str, delay: Duration) {
    let mut routes = self.routes.lock().unwrap();
    routes.entry(url.to_string()).or_default().delay = delay;
  }

  pub fn calls(&self, url: &str) -> usize {
    self.routes.lock().unwrap().get(url).map_or(0, |r| r.calls)
  }

  pub fn total_calls(&self) -> usize {
    self.routes.lock().unwrap().values().map(|r| r.calls).sum()
  }
}

impl Transport for ScriptedTransport {
  fn get(&self, url: &str) -> BoxFuture<Result<Response, FetchError>> {
    let (delay, response) = {
      let mut routes = self.routes.lock().unwrap();
      let route = routes.entry(url.to_string()).or_default();
      route.calls += 1;
      let response = if route.responses.len() > 1 {
        route.responses.pop_front()
      } else {
        route.responses.front().cloned()
      };
      (route.delay, response.unwrap_or(Ok(Response { status: 404, body: Vec::new() })))
    };
    Box::pin(async move {
      if !delay.is_zero() {
        tokio::time::sleep(delay).await;
      }
      response
    })
  }
}
