//! Advice Client - client side of the Home Energy Advisor
//!
//! This crate submits home profiles to the advisor API, requests generated
//! energy-saving advice, orders the recommendations for display and turns
//! failures into messages fit for end users.

// Core modules
pub mod config;
pub mod error;
pub mod profile;
pub mod types;

// Shared utility modules
pub mod formatter;
pub mod traits;
pub mod url_builder;

// Main functionality modules
pub mod analysis;
pub mod controller;
pub mod http;
pub mod ranking;
pub mod resources;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use analysis::{classify, handle_error, ErrorCategory, UserFriendlyError};
pub use config::{load_profile, ClientConfig};
pub use controller::{AdviceController, Phase, ViewState};
pub use error::{AdviceError, Result};
pub use http::ApiClient;
pub use profile::{
    BudgetRange, ClimateZone, EnergySource, HeatingType, HomeProfile, HomeResponse,
    InsulationType, RoofType, WindowType,
};
pub use ranking::{compare_recommendations, sort_recommendations};
pub use resources::{AdviceApi, HealthApi, HomeApi};
pub use traits::ApiTransport;
pub use types::{Difficulty, EnergyAdvice, HealthStatus, Priority, Recommendation};

/// Build a controller talking to the backend described by `config`
pub fn build_controller(config: &ClientConfig) -> Result<AdviceController<ApiClient>> {
    let client = ApiClient::new(config)?;
    Ok(AdviceController::new(client))
}
