use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

pub mod client;
pub mod config;
pub mod error;
mod tls;

pub use client::EsClient;
pub use config::EsConfig;
pub use error::EsError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The one capability the daemon needs from the search backend.
/// Implementations must be shareable across request tasks.
pub trait SearchEngine: Send + Sync {
    fn engine_name(&self) -> &'static str;

    /// Run `body` against `index` and return the raw response document.
    fn search<'a>(&'a self, index: &'a str, body: &'a Value) -> BoxFuture<'a, Result<Value, EsError>>;
}
