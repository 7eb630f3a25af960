//! Typed wrappers over the advisor API. Each operation is exactly one HTTP
//! call; failures are returned untouched.

pub mod advice;
pub mod health;
pub mod home;

pub use advice::AdviceApi;
pub use health::HealthApi;
pub use home::HomeApi;
