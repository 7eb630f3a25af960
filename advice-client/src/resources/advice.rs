use crate::error::Result;
use crate::traits::ApiTransport;
use crate::types::EnergyAdvice;
use crate::url_builder::paths;

/// Client for the advice resource
#[derive(Debug, Clone)]
pub struct AdviceApi<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> AdviceApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Generate energy-saving advice for a home (`POST /homes/{id}/advice`)
    pub async fn get_advice(&self, home_id: &str) -> Result<EnergyAdvice> {
        self.transport.post_empty(&paths::advice(home_id)).await
    }
}
