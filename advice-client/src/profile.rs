//! Home profile submitted by the user and the stored record returned for it.

use crate::error::{AdviceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declare a closed set of snake_case values shared with the backend.
macro_rules! profile_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant),+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AdviceError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let accepted = Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        AdviceError::invalid_profile(
                            stringify!($name),
                            format!("unknown value '{}', expected one of: {}", s, accepted),
                        )
                    })
            }
        }
    };
}

profile_enum!(
    /// Primary heating system
    HeatingType {
        Gas => "gas",
        Electric => "electric",
        Oil => "oil",
        HeatPump => "heat_pump",
        Solar => "solar",
        Wood => "wood",
        Other => "other",
    }
);

profile_enum!(
    /// Overall insulation quality
    InsulationType {
        None => "none",
        Basic => "basic",
        Moderate => "moderate",
        Good => "good",
        Excellent => "excellent",
    }
);

profile_enum!(
    WindowType {
        SinglePane => "single_pane",
        DoublePane => "double_pane",
        TriplePane => "triple_pane",
        LowE => "low_e",
    }
);

profile_enum!(
    ClimateZone {
        HotHumid => "hot_humid",
        HotDry => "hot_dry",
        MixedHumid => "mixed_humid",
        MixedDry => "mixed_dry",
        Cold => "cold",
        VeryCold => "very_cold",
        Subarctic => "subarctic",
        Marine => "marine",
    }
);

profile_enum!(
    EnergySource {
        Electricity => "electricity",
        NaturalGas => "natural_gas",
        Propane => "propane",
        Oil => "oil",
        Mixed => "mixed",
    }
);

profile_enum!(
    RoofType {
        AsphaltShingle => "asphalt_shingle",
        Metal => "metal",
        Tile => "tile",
        Slate => "slate",
        Flat => "flat",
        WoodShake => "wood_shake",
    }
);

profile_enum!(
    /// Budget bracket for improvements: low is under 2k, premium over 30k
    BudgetRange {
        Low => "low",
        Medium => "medium",
        High => "high",
        Premium => "premium",
    }
);

/// Description of a dwelling as collected by the profile form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeProfile {
    // Basic information
    pub size_sqft: u32,
    pub age_years: u32,
    pub heating_type: HeatingType,
    pub insulation_type: InsulationType,
    pub window_type: WindowType,
    pub num_floors: u32,
    pub num_occupants: u32,
    #[serde(default)]
    pub has_basement: bool,
    #[serde(default)]
    pub has_attic: bool,
    #[serde(default)]
    pub has_solar_panels: bool,
    #[serde(default)]
    pub has_smart_thermostat: bool,

    // Location and climate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_zone: Option<ClimateZone>,

    // Energy details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_energy_source: Option<EnergySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_monthly_energy_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_monthly_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hvac_age_years: Option<u32>,

    // Building characteristics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<RoofType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_age_years: Option<u32>,

    // Preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planning_to_sell_years: Option<u32>,
}

impl HomeProfile {
    /// Create a profile with the required basic attributes and nothing else
    pub fn new(
        size_sqft: u32,
        age_years: u32,
        heating_type: HeatingType,
        insulation_type: InsulationType,
        window_type: WindowType,
        num_floors: u32,
        num_occupants: u32,
    ) -> Self {
        Self {
            size_sqft,
            age_years,
            heating_type,
            insulation_type,
            window_type,
            num_floors,
            num_occupants,
            has_basement: false,
            has_attic: false,
            has_solar_panels: false,
            has_smart_thermostat: false,
            country: None,
            zip_code: None,
            climate_zone: None,
            primary_energy_source: None,
            avg_monthly_energy_cost: None,
            avg_monthly_kwh: None,
            hvac_age_years: None,
            roof_type: None,
            roof_age_years: None,
            budget_range: None,
            planning_to_sell_years: None,
        }
    }

    /// Check the profile against the limits the backend enforces.
    ///
    /// Returns the first violation found so the form can point at one field.
    pub fn validate(&self) -> Result<()> {
        check_range("size_sqft", self.size_sqft, 1, 50_000)?;
        check_range("age_years", self.age_years, 0, 300)?;
        check_range("num_floors", self.num_floors, 1, 10)?;
        check_range("num_occupants", self.num_occupants, 1, 20)?;

        if let Some(country) = &self.country {
            if country.chars().count() > 100 {
                return Err(AdviceError::invalid_profile(
                    "country",
                    "must be at most 100 characters",
                ));
            }
        }

        if let Some(zip) = &self.zip_code {
            if zip.chars().count() > 10 {
                return Err(AdviceError::invalid_profile(
                    "zip_code",
                    "must be at most 10 characters",
                ));
            }
            if !zip.chars().all(|c| c.is_ascii_digit() || c == '-') {
                return Err(AdviceError::invalid_profile(
                    "zip_code",
                    "must contain only digits and hyphens",
                ));
            }
        }

        check_non_negative("avg_monthly_energy_cost", self.avg_monthly_energy_cost)?;
        check_non_negative("avg_monthly_kwh", self.avg_monthly_kwh)?;

        if let Some(years) = self.hvac_age_years {
            check_range("hvac_age_years", years, 0, 50)?;
        }
        if let Some(years) = self.roof_age_years {
            check_range("roof_age_years", years, 0, 100)?;
        }
        if let Some(years) = self.planning_to_sell_years {
            check_range("planning_to_sell_years", years, 0, 50)?;
        }

        Ok(())
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(AdviceError::invalid_profile(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AdviceError::invalid_profile(
            field,
            format!("must be a non-negative number, got {}", v),
        )),
        _ => Ok(()),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for HomeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Home Profile:")?;
        writeln!(f, "- Size: {} square feet", self.size_sqft)?;
        writeln!(f, "- Age: {} years old", self.age_years)?;
        writeln!(f, "- Heating Type: {}", self.heating_type)?;
        writeln!(f, "- Insulation: {}", self.insulation_type)?;
        writeln!(f, "- Windows: {}", self.window_type)?;
        writeln!(f, "- Floors: {}", self.num_floors)?;
        writeln!(f, "- Occupants: {}", self.num_occupants)?;
        writeln!(f, "- Basement: {}", yes_no(self.has_basement))?;
        writeln!(f, "- Attic: {}", yes_no(self.has_attic))?;
        writeln!(f, "- Solar Panels: {}", yes_no(self.has_solar_panels))?;
        write!(f, "- Smart Thermostat: {}", yes_no(self.has_smart_thermostat))?;

        if let Some(country) = &self.country {
            write!(f, "\n- Country: {}", country)?;
        }
        if let Some(zip) = &self.zip_code {
            write!(f, "\n- Zip Code: {}", zip)?;
        }
        if let Some(zone) = &self.climate_zone {
            write!(f, "\n- Climate Zone: {}", zone)?;
        }
        if let Some(source) = &self.primary_energy_source {
            write!(f, "\n- Primary Energy Source: {}", source)?;
        }
        if let Some(cost) = self.avg_monthly_energy_cost {
            write!(f, "\n- Average Monthly Energy Cost: {:.2}", cost)?;
        }
        if let Some(kwh) = self.avg_monthly_kwh {
            write!(f, "\n- Average Monthly Electricity Usage: {:.1} kWh", kwh)?;
        }
        if let Some(years) = self.hvac_age_years {
            write!(f, "\n- HVAC System Age: {} years", years)?;
        }
        if let Some(roof) = &self.roof_type {
            write!(f, "\n- Roof Type: {}", roof)?;
        }
        if let Some(years) = self.roof_age_years {
            write!(f, "\n- Roof Age: {} years", years)?;
        }
        if let Some(budget) = &self.budget_range {
            write!(f, "\n- Budget Range: {}", budget)?;
        }
        if let Some(years) = self.planning_to_sell_years {
            write!(f, "\n- Planning to Sell Within: {} years", years)?;
        }
        Ok(())
    }
}

/// A profile as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub id: String,
    #[serde(flatten)]
    pub profile: HomeProfile,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn basic_profile() -> HomeProfile {
        HomeProfile::new(
            2000,
            15,
            HeatingType::Gas,
            InsulationType::Moderate,
            WindowType::DoublePane,
            2,
            4,
        )
    }

    #[test]
    fn test_basic_profile_serializes_without_optional_fields() {
        let value = serde_json::to_value(basic_profile()).unwrap();

        assert_eq!(value["heating_type"], "gas");
        assert_eq!(value["window_type"], "double_pane");
        assert_eq!(value["has_attic"], false);
        assert!(value.get("country").is_none());
        assert!(value.get("budget_range").is_none());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("heat_pump".parse::<HeatingType>().unwrap(), HeatingType::HeatPump);
        assert_eq!(" Low_E ".parse::<WindowType>().unwrap(), WindowType::LowE);

        let err = "thatch".parse::<RoofType>().unwrap_err();
        assert!(err.to_string().contains("asphalt_shingle"));
    }

    #[test]
    fn test_validate_accepts_reasonable_profile() {
        let mut profile = basic_profile();
        profile.zip_code = Some("94105-1234".to_string());
        profile.avg_monthly_energy_cost = Some(250.5);
        profile.hvac_age_years = Some(8);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let mut profile = basic_profile();
        profile.size_sqft = 0;
        let err = profile.validate().unwrap_err();
        assert!(
            matches!(err, AdviceError::InvalidProfile { ref field, .. } if field == "size_sqft")
        );

        let mut profile = basic_profile();
        profile.num_floors = 11;
        assert!(profile.validate().is_err());

        let mut profile = basic_profile();
        profile.roof_age_years = Some(101);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_zip_and_negative_usage() {
        let mut profile = basic_profile();
        profile.zip_code = Some("SW1A".to_string());
        assert!(profile.validate().is_err());

        let mut profile = basic_profile();
        profile.avg_monthly_kwh = Some(-1.0);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_summary_lists_only_present_optional_fields() {
        let mut profile = basic_profile();
        profile.has_attic = true;
        profile.country = Some("Germany".to_string());

        let summary = profile.to_string();
        assert!(summary.starts_with("Home Profile:"));
        assert!(summary.contains("- Attic: Yes"));
        assert!(summary.contains("- Basement: No"));
        assert!(summary.contains("- Country: Germany"));
        assert!(!summary.contains("Zip Code"));
    }

    #[test]
    fn test_home_response_decodes_flattened_profile() {
        let payload = json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "size_sqft": 2000,
            "age_years": 15,
            "heating_type": "gas",
            "insulation_type": "moderate",
            "window_type": "double_pane",
            "num_floors": 2,
            "num_occupants": 4,
            "has_basement": true,
            "has_attic": true,
            "has_solar_panels": false,
            "has_smart_thermostat": false,
            "country": null,
            "zip_code": "94105",
            "climate_zone": "cold",
            "primary_energy_source": null,
            "avg_monthly_energy_cost": 250.5,
            "avg_monthly_kwh": null,
            "hvac_age_years": null,
            "roof_type": null,
            "roof_age_years": null,
            "budget_range": "medium",
            "planning_to_sell_years": null,
            "created_at": "2025-12-30T10:30:00",
            "updated_at": "2025-12-30T10:30:00"
        });

        let home: HomeResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(home.id, "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(home.profile.climate_zone, Some(ClimateZone::Cold));
        assert_eq!(home.profile.budget_range, Some(BudgetRange::Medium));
        assert!(home.profile.has_basement);
        assert_eq!(home.profile.country, None);
    }
}
