use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

/// Transport used by the resource clients.
///
/// Paths without a leading slash are resolved against the API root
/// (`homes/abc` -> `{base_url}/homes/abc`); paths with one are resolved
/// against the server origin (`/health`).
pub trait ApiTransport: Send + Sync + Clone {
    /// Issue a GET and decode the JSON body
    fn get_json<T>(&self, path: &str) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send;

    /// Issue a POST with a JSON body and decode the JSON response
    fn post_json<B, T>(&self, path: &str, body: &B) -> impl Future<Output = Result<T>> + Send
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;

    /// Issue a POST without a body and decode the JSON response
    fn post_empty<T>(&self, path: &str) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send;
}
