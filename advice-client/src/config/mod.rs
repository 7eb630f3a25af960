pub mod loader;
pub mod templates;
pub mod types;

pub use loader::{load_profile, ConfigLoader, DefaultConfigLoader};
pub use templates::{
    generate_default_config_template, generate_default_profile_template, write_template_files,
    TemplateFiles,
};
pub use types::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
