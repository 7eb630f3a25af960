use crate::error::{CliError, Result};
use crate::ui;
use advice_client::config::write_template_files;

pub fn execute(config_path: String, profile_path: String, force: bool) -> Result<()> {
    ui::heading("Energy Advisor Setup");

    let written = write_template_files(&config_path, &profile_path, force)
        .map_err(|e| CliError::Client(e).with_context("Failed to create template files"))?;

    report(&config_path, written.config_written, "to point at your advisor backend");
    report(&profile_path, written.profile_written, "to describe your home");

    if written.config_written || written.profile_written {
        ui::next_step(&format!("energy-advisor advise --profile {profile_path}"));
    }
    Ok(())
}

fn report(path: &str, written: bool, purpose: &str) {
    if written {
        ui::file_written(path, purpose);
    } else {
        ui::file_kept(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advice_client::config::generate_default_profile_template;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_then_preserves_files() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("energy-advisor.toml");
        let profile = dir.path().join("home-profile.toml");
        let config_path = config.to_string_lossy().to_string();
        let profile_path = profile.to_string_lossy().to_string();

        execute(config_path.clone(), profile_path.clone(), false).unwrap();
        assert!(config.exists());
        assert!(profile.exists());

        fs::write(&profile, "# mine").unwrap();
        execute(config_path.clone(), profile_path.clone(), false).unwrap();
        assert_eq!(fs::read_to_string(&profile).unwrap(), "# mine");

        execute(config_path, profile_path, true).unwrap();
        assert_eq!(
            fs::read_to_string(&profile).unwrap(),
            generate_default_profile_template()
        );
    }
}
