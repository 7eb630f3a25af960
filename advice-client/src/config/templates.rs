use crate::error::{AdviceError, Result};
use std::fs;
use std::path::Path;

/// Generate default energy-advisor.toml template
pub fn generate_default_config_template() -> String {
    r#"# Energy Advisor client configuration

# Root of the advisor API
base_url = "http://localhost:8000/api"

# Optional version segment appended to base_url, e.g. "v1" -> /api/v1
# api_version = "v1"

# Request timeout in seconds; advice generation can take a while
timeout_seconds = 120

# Log every request and response (debug level)
development = false

# user_agent = "energy-advisor/0.1"
"#
    .to_string()
}

/// Generate default home-profile.toml template
pub fn generate_default_profile_template() -> String {
    r#"# Home profile submitted for energy advice

# Basic information
size_sqft = 2000
age_years = 15
heating_type = "gas"            # gas, electric, oil, heat_pump, solar, wood, other
insulation_type = "moderate"    # none, basic, moderate, good, excellent
window_type = "double_pane"     # single_pane, double_pane, triple_pane, low_e
num_floors = 2
num_occupants = 4
has_basement = true
has_attic = true
has_solar_panels = false
has_smart_thermostat = false

# Optional details, uncomment what applies
# country = "Germany"
# zip_code = "10115"
# climate_zone = "cold"               # hot_humid, hot_dry, mixed_humid, mixed_dry, cold, very_cold, subarctic, marine
# primary_energy_source = "natural_gas" # electricity, natural_gas, propane, oil, mixed
# avg_monthly_energy_cost = 250.5
# avg_monthly_kwh = 900.0
# hvac_age_years = 8
# roof_type = "asphalt_shingle"       # asphalt_shingle, metal, tile, slate, flat, wood_shake
# roof_age_years = 10
# budget_range = "medium"             # low, medium, high, premium
# planning_to_sell_years = 5
"#
    .to_string()
}

/// Which template files a call to `write_template_files` actually wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateFiles {
    pub config_written: bool,
    pub profile_written: bool,
}

/// Write the config and home profile templates.
///
/// Missing files are always created. Existing files are replaced only when
/// `overwrite` is set.
pub fn write_template_files<P, Q>(
    config_path: P,
    profile_path: Q,
    overwrite: bool,
) -> Result<TemplateFiles>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Ok(TemplateFiles {
        config_written: write_template(
            config_path.as_ref(),
            &generate_default_config_template(),
            overwrite,
        )?,
        profile_written: write_template(
            profile_path.as_ref(),
            &generate_default_profile_template(),
            overwrite,
        )?,
    })
}

fn write_template(path: &Path, contents: &str, overwrite: bool) -> Result<bool> {
    if path.exists() && !overwrite {
        tracing::debug!(path = %path.display(), "template already present, skipping");
        return Ok(false);
    }

    fs::write(path, contents).map_err(AdviceError::Io)?;
    Ok(true)
}
