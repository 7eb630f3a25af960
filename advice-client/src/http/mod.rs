pub mod client;
pub mod response_converter;

pub use client::ApiClient;
pub use response_converter::{extract_detail, ResponseConverter};
