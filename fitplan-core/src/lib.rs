//! fitplan-core: profile model and the nutrition/fitness planners

pub mod guide;
pub mod meals;
pub mod nutrition;
pub mod planner;
pub mod profile;
pub mod reference;
pub mod workout;

pub use guide::{NutritionGuide, nutrition_guide};
pub use meals::{DayMeals, Meal, MealPlan, MealSlot, weekday_name, weekly_meal_plan};
pub use nutrition::{MacroGrams, MacroSplit, NutritionPlan};
pub use planner::{PlanReport, Planner};
pub use profile::{
    ActivityLevel, DietPreference, Gender, Goal, InputPolicy, Profile, ProfileAnswers, ProfileError,
    parse_with_policy,
};
pub use reference::{
    CommunitySupport, HealthTips, InjuryPreventionSupport, MindfulnessSupport,
    community_support, health_fitness_tips, injury_prevention_support, mindfulness_support,
};
pub use workout::{
    Exercise, ExerciseModification, FitnessPlan, HealthCondition, Intensity, Reps,
    WorkoutRoutine, WorkoutSession, fitness_plan,
};
