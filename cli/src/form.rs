use crate::error::Result;
use crate::ui;
use advice_client::{
    BudgetRange, ClimateZone, EnergySource, HeatingType, HomeProfile, InsulationType, RoofType,
    WindowType,
};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fmt::Display;
use std::str::FromStr;

const NOT_SPECIFIED: &str = "(not specified)";

/// Walk the user through every profile field. Ranges are checked as they
/// are typed; the finished profile is validated once more before returning.
pub fn prompt_profile() -> Result<HomeProfile> {
    let theme = ColorfulTheme::default();

    ui::form_section("Basic Information", false);
    let size_sqft = prompt_number(&theme, "Home size (sq ft)", 2000, 1, 50_000)?;
    let age_years = prompt_number(&theme, "Home age (years)", 20, 0, 300)?;
    let heating_type = select_value(&theme, "Heating type", HeatingType::ALL, 0)?;
    let insulation_type = select_value(&theme, "Insulation", InsulationType::ALL, 2)?;
    let window_type = select_value(&theme, "Windows", WindowType::ALL, 1)?;
    let num_floors = prompt_number(&theme, "Number of floors", 2, 1, 10)?;
    let num_occupants = prompt_number(&theme, "Number of occupants", 3, 1, 20)?;

    let mut profile = HomeProfile::new(
        size_sqft,
        age_years,
        heating_type,
        insulation_type,
        window_type,
        num_floors,
        num_occupants,
    );
    profile.has_basement = confirm(&theme, "Has a basement?")?;
    profile.has_attic = confirm(&theme, "Has an attic?")?;
    profile.has_solar_panels = confirm(&theme, "Has solar panels?")?;
    profile.has_smart_thermostat = confirm(&theme, "Has a smart thermostat?")?;

    ui::form_section("Location & Climate", true);
    profile.country = prompt_optional_text(&theme, "Country", 100)?;
    profile.zip_code = prompt_optional(&theme, "ZIP code", |raw: &str| {
        if raw.chars().count() > 10 {
            Err("at most 10 characters".to_string())
        } else if !raw.chars().all(|c| c.is_ascii_digit() || c == '-') {
            Err("only digits and hyphens".to_string())
        } else {
            Ok(raw.to_string())
        }
    })?;
    profile.climate_zone = select_optional(&theme, "Climate zone", ClimateZone::ALL)?;

    ui::form_section("Energy Details", true);
    profile.primary_energy_source =
        select_optional(&theme, "Primary energy source", EnergySource::ALL)?;
    profile.avg_monthly_energy_cost =
        prompt_optional(&theme, "Average monthly energy cost (EUR)", parse_non_negative)?;
    profile.avg_monthly_kwh =
        prompt_optional(&theme, "Average monthly usage (kWh)", parse_non_negative)?;
    profile.hvac_age_years = prompt_optional(&theme, "HVAC age (years)", |raw: &str| {
        parse_bounded(raw, 0, 50)
    })?;

    ui::form_section("Building Characteristics", true);
    profile.roof_type = select_optional(&theme, "Roof type", RoofType::ALL)?;
    profile.roof_age_years = prompt_optional(&theme, "Roof age (years)", |raw: &str| {
        parse_bounded(raw, 0, 100)
    })?;

    ui::form_section("Preferences", true);
    profile.budget_range = select_optional(&theme, "Budget", BudgetRange::ALL)?;
    profile.planning_to_sell_years =
        prompt_optional(&theme, "Planning to sell within (years)", |raw: &str| {
            parse_bounded(raw, 0, 50)
        })?;

    profile.validate()?;
    Ok(profile)
}

fn prompt_number(
    theme: &ColorfulTheme,
    prompt: &str,
    default: u32,
    min: u32,
    max: u32,
) -> Result<u32> {
    let value = Input::<u32>::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .validate_with(|v: &u32| -> std::result::Result<(), String> {
            if (min..=max).contains(v) {
                Ok(())
            } else {
                Err(format!("must be between {min} and {max}"))
            }
        })
        .interact_text()?;
    Ok(value)
}

fn confirm(theme: &ColorfulTheme, prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn select_value<E: Copy + Display>(
    theme: &ColorfulTheme,
    prompt: &str,
    all: &[E],
    default: usize,
) -> Result<E> {
    let idx = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(all)
        .default(default)
        .interact()?;
    Ok(all[idx])
}

fn select_optional<E: Copy + Display>(
    theme: &ColorfulTheme,
    prompt: &str,
    all: &[E],
) -> Result<Option<E>> {
    let mut items = vec![NOT_SPECIFIED.to_string()];
    items.extend(all.iter().map(ToString::to_string));

    let idx = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(idx.checked_sub(1).map(|i| all[i]))
}

fn prompt_optional_text(
    theme: &ColorfulTheme,
    prompt: &str,
    max_len: usize,
) -> Result<Option<String>> {
    prompt_optional(theme, prompt, |raw: &str| {
        if raw.chars().count() > max_len {
            Err(format!("at most {max_len} characters"))
        } else {
            Ok(raw.to_string())
        }
    })
}

/// Free-text prompt where an empty answer means "not specified"
fn prompt_optional<T, F>(theme: &ColorfulTheme, prompt: &str, parse: F) -> Result<Option<T>>
where
    F: Fn(&str) -> std::result::Result<T, String>,
{
    let raw: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} [leave empty to skip]"))
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_optional(input, &parse).map(|_| ())
        })
        .interact_text()?;

    // Already validated above
    Ok(parse_optional(&raw, &parse).unwrap_or(None))
}

fn parse_optional<T, F>(raw: &str, parse: F) -> std::result::Result<Option<T>, String>
where
    F: Fn(&str) -> std::result::Result<T, String>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        parse(trimmed).map(Some)
    }
}

fn parse_non_negative(raw: &str) -> std::result::Result<f64, String> {
    match f64::from_str(raw) {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err("must be a non-negative number".to_string()),
    }
}

fn parse_bounded(raw: &str, min: u32, max: u32) -> std::result::Result<u32, String> {
    match u32::from_str(raw) {
        Ok(v) if (min..=max).contains(&v) => Ok(v),
        _ => Err(format!("must be a whole number between {min} and {max}")),
    }
}
