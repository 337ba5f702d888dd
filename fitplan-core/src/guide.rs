//! Personalized nutrition guide: the computed plan plus fixed advice.

use serde::{Deserialize, Serialize};

use crate::nutrition::{MacroGrams, MacroSplit, macro_grams, nutrition_plan};
use crate::profile::{DietPreference, Profile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGuide {
    pub daily_caloric_intake: f64,
    pub macro_ratios: MacroSplit,
    pub daily_macro_grams: MacroGrams,
    pub meal_timing: String,
    pub hydration_guidelines: String,
    pub supplement_recommendations: String,
    pub actionable_tips: Vec<String>,
    pub adaptation_and_feedback: String,
    /// Echoed from the profile; the plan itself does not filter on it.
    pub allergies: String,
}

fn supplement_note(diet: DietPreference) -> &'static str {
    match diet {
        DietPreference::Vegan => "Consider B12, vitamin D and omega-3 (algae) supplements.",
        DietPreference::Keto => "Consider electrolytes (sodium, potassium, magnesium).",
        DietPreference::Other => "Based on dietary preferences; e.g., B12 for vegans.",
    }
}

pub fn nutrition_guide(profile: &Profile) -> NutritionGuide {
    let plan = nutrition_plan(profile);
    NutritionGuide {
        daily_caloric_intake: plan.daily_calories,
        macro_ratios: plan.macros,
        daily_macro_grams: macro_grams(plan.daily_calories, plan.macros),
        meal_timing: "3 main meals and 2 snacks, adjust based on schedule and hunger levels."
            .into(),
        hydration_guidelines: "Aim for 8 glasses of water per day, more if active.".into(),
        supplement_recommendations: supplement_note(profile.diet).into(),
        actionable_tips: vec![
            "Prepare meals in advance".into(),
            "Keep healthy snacks on hand".into(),
            "Read labels to stay within targets".into(),
        ],
        adaptation_and_feedback: "Regularly review and adjust your plan, consult a professional for significant changes.".into(),
        allergies: profile.allergies.trim().to_string(),
    }
}
