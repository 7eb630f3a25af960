pub mod error_classifier;

pub use error_classifier::{
    categorize, classify, format_error_for_display, handle_error, ErrorCategory,
    UserFriendlyError, DEFAULT_CONTEXT,
};
