use crate::error::Result;
use crate::profile::{HomeProfile, HomeResponse};
use crate::traits::ApiTransport;
use crate::url_builder::paths;

/// Client for the home profile resource
#[derive(Debug, Clone)]
pub struct HomeApi<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> HomeApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Create a new home profile (`POST /homes`)
    pub async fn create_home(&self, profile: &HomeProfile) -> Result<HomeResponse> {
        self.transport.post_json(&paths::homes(), profile).await
    }

    /// Get a home profile by ID (`GET /homes/{id}`)
    pub async fn get_home(&self, id: &str) -> Result<HomeResponse> {
        self.transport.get_json(&paths::home(id)).await
    }
}
