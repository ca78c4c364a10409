//! Transport boundary between the client core and the network stack.

mod client;

pub use client::HttpTransport;

use async_trait::async_trait;

use crate::error::Result;

/// Performs one HTTP POST and yields the response body.
///
/// `Err` signals a transport failure (unreachable host, timeout or a non-2xx
/// status). Any timeout is enforced here; the client core never adds one.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<String>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: String) -> Result<String> {
        (**self).post(url, headers, body).await
    }
}
