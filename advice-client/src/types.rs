use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a recommendation as reported by the advice generator.
///
/// Matching is case-insensitive. Anything outside the four known levels is
/// kept verbatim in `Unrecognized` so decoding never fails on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Priority {
    /// Sort rank, lower comes first. Unknown priorities rank below `Low`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
            Self::Unrecognized(_) => 5,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effort needed to carry out a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Unrecognized(String),
}

impl Difficulty {
    /// Sort rank, lower comes first. Unknown values rank like `Moderate`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Moderate | Self::Unrecognized(_) => 2,
            Self::Difficult => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "moderate" => Self::Moderate,
            "difficult" => Self::Difficult,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank of an optional difficulty; a missing value counts as moderate.
pub fn difficulty_rank(difficulty: Option<&Difficulty>) -> u8 {
    difficulty.map_or(Difficulty::Moderate.rank(), Difficulty::rank)
}

/// One suggested improvement for a home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    /// Estimated annual savings in EUR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_savings_annual: Option<f64>,
    /// Estimated implementation cost in EUR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback_period_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_difficulty: Option<Difficulty>,
}

impl Recommendation {
    /// Difficulty with the moderate default applied
    pub fn difficulty(&self) -> Difficulty {
        self.implementation_difficulty
            .clone()
            .unwrap_or(Difficulty::Moderate)
    }
}

/// Generated advice for a single home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAdvice {
    pub home_id: String,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total_annual_savings: Option<f64>,
    /// Generation timestamp as sent by the backend (ISO-8601, possibly naive)
    pub generated_at: String,
    pub llm_provider: String,
}

/// Body of the backend's health route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_matching_is_case_insensitive() {
        assert_eq!(Priority::from("HIGH"), Priority::High);
        assert_eq!(Priority::from("Critical"), Priority::Critical);
        assert_eq!(Priority::from("low"), Priority::Low);
        assert_eq!(
            Priority::from("urgent"),
            Priority::Unrecognized("urgent".to_string())
        );
    }

    #[test]
    fn test_unrecognized_priority_ranks_last() {
        let unknown = Priority::from("someday");
        assert!(unknown.rank() > Priority::Low.rank());
    }

    #[test]
    fn test_difficulty_fallbacks() {
        assert_eq!(Difficulty::from("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from("DIFFICULT").rank(), 3);
        assert_eq!(Difficulty::from("impossible").rank(), 2);
        assert_eq!(difficulty_rank(None), 2);
        assert_eq!(difficulty_rank(Some(&Difficulty::Easy)), 1);
    }

    #[test]
    fn test_recommendation_decodes_backend_payload() {
        let payload = json!({
            "title": "Upgrade Attic Insulation",
            "description": "Increase attic insulation to R-49.",
            "priority": "high",
            "category": "insulation",
            "estimated_savings_annual": 500.0,
            "estimated_cost": 2000.0,
            "payback_period_years": 4.0,
            "implementation_difficulty": "Moderate"
        });

        let rec: Recommendation = serde_json::from_value(payload).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.implementation_difficulty, Some(Difficulty::Moderate));
        assert_eq!(rec.estimated_cost, Some(2000.0));
    }

    #[test]
    fn test_recommendation_with_unknown_values_and_nulls() {
        let payload = json!({
            "title": "Seal ducts",
            "description": "Seal leaky ducts.",
            "priority": "Whenever",
            "category": "heating_cooling",
            "estimated_cost": null,
            "implementation_difficulty": null
        });

        let rec: Recommendation = serde_json::from_value(payload).unwrap();
        assert_eq!(rec.priority, Priority::Unrecognized("Whenever".to_string()));
        assert_eq!(rec.estimated_cost, None);
        assert_eq!(rec.difficulty(), Difficulty::Moderate);
    }

    #[test]
    fn test_energy_advice_decodes() {
        let payload = json!({
            "home_id": "123e4567-e89b-12d3-a456-426614174000",
            "recommendations": [],
            "summary": "Moderate efficiency.",
            "estimated_total_annual_savings": 2500.0,
            "generated_at": "2025-12-21T10:30:00Z",
            "llm_provider": "ollama-llama3.2"
        });

        let advice: EnergyAdvice = serde_json::from_value(payload).unwrap();
        assert_eq!(advice.llm_provider, "ollama-llama3.2");
        assert!(advice.recommendations.is_empty());
    }

    #[test]
    fn test_health_status() {
        let status: HealthStatus = serde_json::from_value(json!({"status": "healthy"})).unwrap();
        assert!(status.is_healthy());
    }
}
