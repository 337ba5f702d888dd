//! Planner facade: borrows one immutable profile and derives every plan from it.

use serde::Serialize;

use crate::guide::{NutritionGuide, nutrition_guide};
use crate::meals::{MealPlan, weekly_meal_plan};
use crate::nutrition::{self, NutritionPlan};
use crate::profile::Profile;
use crate::reference::{HealthTips, health_fitness_tips};
use crate::workout::{self, ExerciseModification, FitnessPlan, WorkoutRoutine};

/// Everything shown at the end of a planning run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub nutrition: NutritionPlan,
    pub meal_plan: MealPlan,
    pub fitness_plan: FitnessPlan,
    pub health_tips: HealthTips,
}

#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    profile: &'a Profile,
}

impl<'a> Planner<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        self.profile
    }

    pub fn bmr(&self) -> f64 {
        nutrition::bmr(self.profile)
    }

    pub fn tdee(&self) -> f64 {
        nutrition::tdee(self.profile)
    }

    pub fn nutrition_plan(&self) -> NutritionPlan {
        nutrition::nutrition_plan(self.profile)
    }

    pub fn meal_plan(&self) -> MealPlan {
        weekly_meal_plan(&self.nutrition_plan())
    }

    pub fn exercise_modifications(&self) -> Vec<ExerciseModification> {
        workout::applicable_modifications(&self.profile.health_conditions)
    }

    pub fn workout_routine(&self) -> WorkoutRoutine {
        workout::workout_routine(self.profile.goal, &self.exercise_modifications())
    }

    pub fn fitness_plan(&self) -> FitnessPlan {
        workout::fitness_plan(self.profile)
    }

    pub fn nutrition_guide(&self) -> NutritionGuide {
        nutrition_guide(self.profile)
    }

    pub fn health_tips(&self) -> HealthTips {
        health_fitness_tips()
    }

    pub fn report(&self) -> PlanReport {
        let nutrition = self.nutrition_plan();
        PlanReport {
            meal_plan: weekly_meal_plan(&nutrition),
            nutrition,
            fitness_plan: self.fitness_plan(),
            health_tips: self.health_tips(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, DietPreference, Gender, Goal};
    use chrono::Weekday;

    fn sample() -> Profile {
        Profile::new(
            Goal::WeightLoss,
            DietPreference::Keto,
            "",
            ActivityLevel::ModeratelyActive,
            35,
            Gender::Female,
            168.0,
            72.0,
            vec!["knee_pain".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_report_is_consistent() {
        let profile = sample();
        let planner = Planner::new(&profile);
        let report = planner.report();

        assert!((planner.tdee() - planner.bmr() * 1.55).abs() < 1e-9);
        assert_eq!(report.nutrition.daily_calories, planner.tdee() - 500.0);
        let monday = report.meal_plan.day(Weekday::Mon).unwrap();
        assert!((monday.total_calories() - report.nutrition.daily_calories).abs() < 1e-6);
    }

    #[test]
    fn test_routine_matches_fitness_plan_schedule() {
        let profile = sample();
        let planner = Planner::new(&profile);
        assert_eq!(
            planner.workout_routine(),
            planner.fitness_plan().workout_schedule
        );
        let wed = planner.workout_routine();
        let wed = wed.session(Weekday::Wed).unwrap();
        assert!(wed.lines.iter().any(|l| l.starts_with("Modification for Running")));
    }
}
