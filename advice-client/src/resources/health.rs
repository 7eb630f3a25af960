use crate::error::Result;
use crate::traits::ApiTransport;
use crate::types::HealthStatus;
use crate::url_builder::paths;

/// Client for the backend health route
#[derive(Debug, Clone)]
pub struct HealthApi<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> HealthApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn check(&self) -> Result<HealthStatus> {
        self.transport.get_json(paths::HEALTH).await
    }
}
