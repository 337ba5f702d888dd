//! Calorie and macronutrient calculator.
//!
//! BMR uses the revised Harris-Benedict equation, TDEE scales it by an
//! activity multiplier, and the daily target adjusts TDEE for the goal.

use serde::{Deserialize, Serialize};

use crate::profile::{ActivityLevel, DietPreference, Gender, Goal, Profile};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily calorie offset applied for weight loss (deficit) and muscle gain (surplus).
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

/// Percentage of calories from each macronutrient. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: u8,
    pub carbs: u8,
    pub fats: u8,
}

impl MacroSplit {
    pub fn total(&self) -> u32 {
        u32::from(self.protein) + u32::from(self.carbs) + u32::from(self.fats)
    }
}

/// Grams of each macronutrient for a given calorie amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub daily_calories: f64,
    pub macros: MacroSplit,
}

/// Basal metabolic rate in kcal/day.
pub fn bmr(profile: &Profile) -> f64 {
    let w = profile.weight_kg;
    let h = profile.height_cm;
    let age = f64::from(profile.age);
    match profile.gender {
        Gender::Male => 88.362 + 13.397 * w + 4.799 * h - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * w + 3.098 * h - 4.330 * age,
    }
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Total daily energy expenditure in kcal/day.
pub fn tdee(profile: &Profile) -> f64 {
    bmr(profile) * activity_multiplier(profile.activity)
}

/// Caloric target: TDEE shifted by the goal's offset.
pub fn daily_calories(profile: &Profile) -> f64 {
    let tdee = tdee(profile);
    match profile.goal {
        Goal::WeightLoss => tdee - GOAL_CALORIE_OFFSET,
        Goal::MuscleGain => tdee + GOAL_CALORIE_OFFSET,
        Goal::Maintenance => tdee,
    }
}

pub fn macro_split(diet: DietPreference) -> MacroSplit {
    match diet {
        DietPreference::Keto => MacroSplit {
            protein: 20,
            carbs: 5,
            fats: 75,
        },
        DietPreference::Vegan => MacroSplit {
            protein: 25,
            carbs: 50,
            fats: 25,
        },
        DietPreference::Other => MacroSplit {
            protein: 30,
            carbs: 40,
            fats: 30,
        },
    }
}

/// Convert a calorie amount into grams per macro using the split's percentages.
pub fn macro_grams(calories: f64, split: MacroSplit) -> MacroGrams {
    let share = |pct: u8| calories * f64::from(pct) / 100.0;
    MacroGrams {
        protein: share(split.protein) / KCAL_PER_GRAM_PROTEIN,
        carbs: share(split.carbs) / KCAL_PER_GRAM_CARBS,
        fats: share(split.fats) / KCAL_PER_GRAM_FAT,
    }
}

pub fn nutrition_plan(profile: &Profile) -> NutritionPlan {
    let plan = NutritionPlan {
        daily_calories: daily_calories(profile),
        macros: macro_split(profile.diet),
    };
    tracing::debug!(
        daily_calories = plan.daily_calories,
        goal = profile.goal.as_str(),
        diet = profile.diet.as_str(),
        "computed nutrition plan"
    );
    plan
}
