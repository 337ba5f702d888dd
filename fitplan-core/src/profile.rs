//! User profile: the attributes collected once per run and read by every planner.
//!
//! Free-text answers are parsed into closed enums. How unknown answers are
//! treated is decided by [`InputPolicy`]: lenient parsing falls back to a
//! documented default, strict parsing reports a [`ProfileError`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("unknown goal '{0}' (expected weight_loss/muscle_gain/maintenance)")]
    UnknownGoal(String),
    #[error("unknown dietary preference '{0}' (expected keto/vegan/other)")]
    UnknownDiet(String),
    #[error(
        "unknown activity level '{0}' (expected sedentary/lightly_active/moderately_active/very_active/extra_active)"
    )]
    UnknownActivity(String),
    #[error("unknown gender '{0}' (expected male/female)")]
    UnknownGender(String),
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
}

/// How free-text answers that match no known value are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Unknown values fall back to the type's default variant.
    #[default]
    Lenient,
    /// Unknown values are rejected.
    Strict,
}

/// Lowercase, trim, and fold `-`/space separators into `_`.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Parse `raw` with `FromStr`, falling back to `T::default()` under the lenient policy.
pub fn parse_with_policy<T>(raw: &str, policy: InputPolicy) -> Result<T, ProfileError>
where
    T: FromStr<Err = ProfileError> + Default + std::fmt::Debug,
{
    match raw.parse::<T>() {
        Ok(v) => Ok(v),
        Err(e) => match policy {
            InputPolicy::Strict => Err(e),
            InputPolicy::Lenient => {
                let fallback = T::default();
                tracing::warn!("{e}; using {fallback:?}");
                Ok(fallback)
            }
        },
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintenance,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
        }
    }
}

impl FromStr for Goal {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "maintenance" => Ok(Goal::Maintenance),
            _ => Err(ProfileError::UnknownGoal(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    Keto,
    Vegan,
    #[default]
    Other,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Keto => "keto",
            DietPreference::Vegan => "vegan",
            DietPreference::Other => "other",
        }
    }
}

impl FromStr for DietPreference {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "keto" => Ok(DietPreference::Keto),
            "vegan" => Ok(DietPreference::Vegan),
            "other" => Ok(DietPreference::Other),
            _ => Err(ProfileError::UnknownDiet(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(ProfileError::UnknownActivity(s.trim().to_string())),
        }
    }
}

/// Only selects the BMR formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ProfileError::UnknownGender(s.trim().to_string())),
        }
    }
}

/// Immutable personal attributes for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub goal: Goal,
    pub diet: DietPreference,
    #[serde(default)]
    pub allergies: String,
    pub activity: ActivityLevel,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub health_conditions: Vec<String>,
}

impl Profile {
    /// Build a profile, rejecting non-positive age, height or weight.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        goal: Goal,
        diet: DietPreference,
        allergies: impl Into<String>,
        activity: ActivityLevel,
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        health_conditions: Vec<String>,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            goal,
            diet,
            allergies: allergies.into(),
            activity,
            age,
            gender,
            height_cm,
            weight_kg,
            health_conditions,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the numeric invariants. Used after deserializing a profile file too.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::NonPositive {
                field: "age",
                value: 0.0,
            });
        }
        check_measurement("height", self.height_cm)?;
        check_measurement("weight", self.weight_kg)?;
        Ok(())
    }
}

fn check_measurement(field: &'static str, value: f64) -> Result<(), ProfileError> {
    if !value.is_finite() {
        return Err(ProfileError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ProfileError::NonPositive { field, value });
    }
    Ok(())
}

/// Profile as written in a file: choice fields stay free text until an
/// [`InputPolicy`] is applied, exactly like answers typed at the prompts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileAnswers {
    pub goal: String,
    pub diet: String,
    #[serde(default)]
    pub allergies: String,
    pub activity: String,
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub health_conditions: Vec<String>,
}

impl ProfileAnswers {
    pub fn into_profile(self, policy: InputPolicy) -> Result<Profile, ProfileError> {
        let conditions = self
            .health_conditions
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Profile::new(
            parse_with_policy(&self.goal, policy)?,
            parse_with_policy(&self.diet, policy)?,
            self.allergies,
            parse_with_policy(&self.activity, policy)?,
            self.age,
            parse_with_policy(&self.gender, policy)?,
            self.height_cm,
            self.weight_kg,
            conditions,
        )
    }
}
