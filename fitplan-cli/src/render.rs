//! Text rendering for terminal output.

use fitplan_core::{
    CommunitySupport, FitnessPlan, HealthTips, InjuryPreventionSupport, MealPlan,
    MindfulnessSupport, NutritionGuide, PlanReport, weekday_name,
};
use std::fmt::{self, Write};

/// Run a block writer against a fresh `String`. Writing to a `String` cannot fail.
fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut s = String::new();
    let _ = write(&mut s);
    s
}

fn write_meal_plan(s: &mut String, plan: &MealPlan) -> fmt::Result {
    s.push_str("== Meal Plan ==\n");
    for day in &plan.days {
        writeln!(s, "\n{}", weekday_name(day.day))?;
        writeln!(s, "  Breakfast: {}", day.breakfast.description)?;
        writeln!(s, "  Lunch:     {}", day.lunch.description)?;
        writeln!(s, "  Dinner:    {}", day.dinner.description)?;
        for snack in &day.snacks {
            writeln!(s, "  Snack:     {}", snack.description)?;
        }
    }
    Ok(())
}

fn write_fitness_plan(s: &mut String, plan: &FitnessPlan) -> fmt::Result {
    s.push_str("== Workout Plan ==\n");
    for session in &plan.workout_schedule.sessions {
        writeln!(
            s,
            "\n{} ({} minutes)",
            weekday_name(session.day),
            session.duration_minutes
        )?;
        for line in &session.lines {
            writeln!(s, "  - {}", line)?;
        }
    }
    if !plan.exercise_modifications.is_empty() {
        s.push_str("\nExercise modifications:\n");
        for m in &plan.exercise_modifications {
            writeln!(s, "  - {} -> {} ({})", m.original, m.modified, m.reason)?;
        }
    }
    writeln!(s, "\nProgressive overload: {}", plan.progressive_overload_suggestions)?;
    writeln!(s, "Recovery and rest: {}", plan.recovery_and_rest)?;
    writeln!(s, "Visual aids: {}", plan.visual_aids)
}

fn write_health_tips(s: &mut String, tips: &HealthTips) -> fmt::Result {
    s.push_str("== Health Tips ==\n");
    for (label, items) in tips.sections() {
        writeln!(s, "\n{}:", label)?;
        for tip in items {
            writeln!(s, "  - {}", tip)?;
        }
    }
    Ok(())
}

pub fn meal_plan(plan: &MealPlan) -> String {
    render(|s| write_meal_plan(s, plan))
}

pub fn fitness_plan(plan: &FitnessPlan) -> String {
    render(|s| write_fitness_plan(s, plan))
}

pub fn health_tips(tips: &HealthTips) -> String {
    render(|s| write_health_tips(s, tips))
}

/// The three end-of-run blocks: meal plan, workout plan, health tips.
pub fn report(report: &PlanReport) -> String {
    render(|s| {
        let n = &report.nutrition;
        writeln!(
            s,
            "Daily caloric target: {:.2} kcal (protein {}% / carbs {}% / fats {}%)\n",
            n.daily_calories, n.macros.protein, n.macros.carbs, n.macros.fats
        )?;
        write_meal_plan(s, &report.meal_plan)?;
        s.push('\n');
        write_fitness_plan(s, &report.fitness_plan)?;
        s.push('\n');
        write_health_tips(s, &report.health_tips)
    })
}

pub fn nutrition_guide(guide: &NutritionGuide) -> String {
    render(|s| {
        let (ratios, grams) = (&guide.macro_ratios, &guide.daily_macro_grams);
        s.push_str("== Nutrition Guide ==\n\n");
        writeln!(s, "Daily caloric intake: {:.2} kcal", guide.daily_caloric_intake)?;
        writeln!(
            s,
            "Macro ratios: protein {}% / carbs {}% / fats {}%",
            ratios.protein, ratios.carbs, ratios.fats
        )?;
        writeln!(
            s,
            "Daily grams: protein {:.2}g / carbs {:.2}g / fats {:.2}g",
            grams.protein, grams.carbs, grams.fats
        )?;
        if !guide.allergies.is_empty() {
            writeln!(s, "Allergies noted: {}", guide.allergies)?;
        }
        writeln!(s, "Meal timing: {}", guide.meal_timing)?;
        writeln!(s, "Hydration: {}", guide.hydration_guidelines)?;
        writeln!(s, "Supplements: {}", guide.supplement_recommendations)?;
        s.push_str("Actionable tips:\n");
        for tip in &guide.actionable_tips {
            writeln!(s, "  - {}", tip)?;
        }
        writeln!(s, "Adaptation and feedback: {}", guide.adaptation_and_feedback)
    })
}

/// Label/value rows under a `== title ==` heading.
fn write_section(s: &mut String, title: &str, rows: &[(&str, &str)]) -> fmt::Result {
    writeln!(s, "== {} ==", title)?;
    for (label, value) in rows {
        writeln!(s, "  {}: {}", label, value)?;
    }
    Ok(())
}

pub fn resources(
    community: &CommunitySupport,
    mindfulness: &MindfulnessSupport,
    injury: &InjuryPreventionSupport,
) -> String {
    render(|s| {
        write_section(
            s,
            "Community Support",
            &[
                ("Forum access", &community.forum_access),
                ("Group challenges", &community.group_challenges),
                ("Success stories", &community.success_stories),
                ("Expert Q&A sessions", &community.expert_qa_sessions),
                ("Peer support groups", &community.peer_support_groups),
            ],
        )?;
        s.push('\n');
        write_section(
            s,
            "Mindfulness & Mental Health",
            &[
                ("Stress management", &mindfulness.stress_management_techniques),
                ("Mindfulness exercises", &mindfulness.mindfulness_exercises),
                ("Sleep improvement", &mindfulness.sleep_improvement_tips),
            ],
        )?;
        s.push('\n');
        write_section(
            s,
            "Injury Prevention & Rehab",
            &[
                ("Warm-up routines", &injury.warm_up_routines),
                ("Cool-down routines", &injury.cool_down_routines),
                ("Knee injuries", &injury.rehab_exercises.knee_injuries),
                ("Back injuries", &injury.rehab_exercises.back_injuries),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::{
        ActivityLevel, DietPreference, Gender, Goal, Planner, Profile, community_support,
        injury_prevention_support, mindfulness_support,
    };

    fn profile(goal: Goal, conditions: &[&str]) -> Profile {
        Profile::new(
            goal,
            DietPreference::Other,
            "",
            ActivityLevel::Sedentary,
            30,
            Gender::Male,
            175.0,
            70.0,
            conditions.iter().map(|c| c.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_has_three_blocks_in_order() {
        let p = profile(Goal::Maintenance, &[]);
        let text = report(&Planner::new(&p).report());
        let meal = text.find("== Meal Plan ==").unwrap();
        let workout = text.find("== Workout Plan ==").unwrap();
        let tips = text.find("== Health Tips ==").unwrap();
        assert!(meal < workout && workout < tips);
        assert!(text.contains("Sunday"));
        assert!(!text.contains("Exercise modifications:"));
    }

    #[test]
    fn test_workout_block_lists_modifications() {
        let p = profile(Goal::WeightLoss, &["knee_pain"]);
        let text = fitness_plan(&Planner::new(&p).fitness_plan());
        assert!(text.contains("Monday (30 minutes)"));
        assert!(text.contains("  - Modification for Running: Speed Walking - Lowers impact on knees"));
        assert!(text.contains("Squats -> Chair Squats"));
        assert!(!text.contains("Tuesday"));
    }

    #[test]
    fn test_resources_block() {
        let text = resources(
            &community_support(),
            &mindfulness_support(),
            &injury_prevention_support(),
        );
        assert!(text.contains("Forum access: URL_to_Fitness_Forum"));
        assert!(text.contains("Back injuries: Routines for back strength."));
    }
}
