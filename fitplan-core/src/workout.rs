//! Three-day workout skeleton and health-condition exercise modifications.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::meals::by_weekday;
use crate::profile::{Goal, Profile};

pub const TRAINING_DAYS: [Weekday; 3] = [Weekday::Mon, Weekday::Wed, Weekday::Fri];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Cardio,
    Strength,
    /// First cardio exercise plus first strength exercise.
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Moderate,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reps {
    Count(u32),
    Minutes(u32),
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{n}"),
            Reps::Minutes(m) => write!(f, "{m} mins"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub intensity: Intensity,
    pub reps: Reps,
    pub sets: u32,
}

impl Exercise {
    fn new(name: &str, intensity: Intensity, reps: Reps, sets: u32) -> Self {
        Self {
            name: name.to_string(),
            intensity,
            reps,
            sets,
        }
    }

    pub fn line(&self) -> String {
        format!("{} - Sets: {}, Reps: {}", self.name, self.sets, self.reps)
    }
}

/// Workout type, intensity and session duration (minutes) for a goal.
pub fn workout_parameters(goal: Goal) -> (WorkoutType, Intensity, u32) {
    match goal {
        Goal::WeightLoss => (WorkoutType::Cardio, Intensity::Moderate, 30),
        Goal::MuscleGain => (WorkoutType::Strength, Intensity::High, 45),
        Goal::Maintenance => (WorkoutType::Mixed, Intensity::Moderate, 30),
    }
}

pub fn exercises_for(workout_type: WorkoutType, intensity: Intensity) -> Vec<Exercise> {
    let cardio = [
        Exercise::new("Running", intensity, Reps::Minutes(30), 1),
        Exercise::new("Cycling", intensity, Reps::Minutes(30), 1),
    ];
    let strength = [
        Exercise::new("Squats", intensity, Reps::Count(12), 3),
        Exercise::new("Deadlifts", intensity, Reps::Count(10), 3),
    ];
    match workout_type {
        WorkoutType::Cardio => cardio.to_vec(),
        WorkoutType::Strength => strength.to_vec(),
        WorkoutType::Mixed => vec![cardio[0].clone(), strength[0].clone()],
    }
}

/// Health conditions with a known exercise substitution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    KneePain,
    LowerBackIssues,
}

impl HealthCondition {
    /// Exact match on the lowercased, trimmed label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "knee_pain" => Some(HealthCondition::KneePain),
            "lower_back_issues" => Some(HealthCondition::LowerBackIssues),
            _ => None,
        }
    }

    pub fn modifications(&self) -> Vec<ExerciseModification> {
        let m = ExerciseModification::new;
        match self {
            HealthCondition::KneePain => vec![
                m("Squats", "Chair Squats", "Reduces strain on knees"),
                m("Running", "Speed Walking", "Lowers impact on knees"),
            ],
            HealthCondition::LowerBackIssues => vec![
                m("Deadlifts", "Kettlebell Swings", "Minimizes lower back stress"),
                m("Sit-ups", "Planks", "Strengthens core with less spine pressure"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseModification {
    pub original: String,
    pub modified: String,
    pub reason: String,
}

impl ExerciseModification {
    fn new(original: &str, modified: &str, reason: &str) -> Self {
        Self {
            original: original.to_string(),
            modified: modified.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn line(&self) -> String {
        format!(
            "Modification for {}: {} - {}",
            self.original, self.modified, self.reason
        )
    }
}

/// Substitutions for every recognised condition, in condition order.
/// Unknown labels are ignored and repeated conditions contribute once.
pub fn applicable_modifications(conditions: &[String]) -> Vec<ExerciseModification> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for label in conditions {
        match HealthCondition::from_label(label) {
            Some(c) if !seen.contains(&c) => {
                seen.push(c);
                out.extend(c.modifications());
            }
            Some(_) => {}
            None => tracing::debug!(condition = %label, "no exercise modifications for condition"),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub day: Weekday,
    pub exercises: Vec<Exercise>,
    pub duration_minutes: u32,
    /// Rendered exercises followed by any modification suggestions.
    pub lines: Vec<String>,
}

impl by_weekday::Dated for WorkoutSession {
    fn day(&self) -> Weekday {
        self.day
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRoutine {
    #[serde(with = "by_weekday")]
    pub sessions: Vec<WorkoutSession>,
}

impl WorkoutRoutine {
    pub fn session(&self, day: Weekday) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.day == day)
    }
}

pub fn workout_routine(goal: Goal, modifications: &[ExerciseModification]) -> WorkoutRoutine {
    let (workout_type, intensity, duration) = workout_parameters(goal);
    let sessions = TRAINING_DAYS
        .iter()
        .map(|&day| {
            let exercises = exercises_for(workout_type, intensity);
            let mut lines: Vec<String> = exercises.iter().map(Exercise::line).collect();
            lines.extend(
                modifications
                    .iter()
                    .filter(|m| exercises.iter().any(|e| e.name == m.original))
                    .map(ExerciseModification::line),
            );
            WorkoutSession {
                day,
                exercises,
                duration_minutes: duration,
                lines,
            }
        })
        .collect();
    WorkoutRoutine { sessions }
}

pub const PROGRESSIVE_OVERLOAD: &str =
    "Gradually increase weights or intensity every 2 weeks to continue making progress.";
pub const RECOVERY_AND_REST: &str =
    "Include at least 2 rest days per week to allow for muscle recovery and growth.";
pub const VISUAL_AIDS: &str =
    "Links to exercise demonstrations will be provided in the final app.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessPlan {
    pub workout_schedule: WorkoutRoutine,
    pub exercise_modifications: Vec<ExerciseModification>,
    pub progressive_overload_suggestions: String,
    pub recovery_and_rest: String,
    pub visual_aids: String,
}

pub fn fitness_plan(profile: &Profile) -> FitnessPlan {
    let modifications = applicable_modifications(&profile.health_conditions);
    FitnessPlan {
        workout_schedule: workout_routine(profile.goal, &modifications),
        exercise_modifications: modifications,
        progressive_overload_suggestions: PROGRESSIVE_OVERLOAD.to_string(),
        recovery_and_rest: RECOVERY_AND_REST.to_string(),
        visual_aids: VISUAL_AIDS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(session: &WorkoutSession) -> Vec<&str> {
        session.exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_muscle_gain_routine() {
        let routine = workout_routine(Goal::MuscleGain, &[]);
        let days: Vec<Weekday> = routine.sessions.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        for s in &routine.sessions {
            assert_eq!(s.duration_minutes, 45);
            assert_eq!(names(s), vec!["Squats", "Deadlifts"]);
            assert!(s.exercises.iter().all(|e| e.intensity == Intensity::High));
        }
        assert!(routine.session(Weekday::Tue).is_none());
    }

    #[test]
    fn test_weight_loss_and_maintenance_routines() {
        let cardio = workout_routine(Goal::WeightLoss, &[]);
        let monday = cardio.session(Weekday::Mon).unwrap();
        assert_eq!(names(monday), vec!["Running", "Cycling"]);
        assert_eq!(monday.duration_minutes, 30);
        assert_eq!(monday.lines[0], "Running - Sets: 1, Reps: 30 mins");

        let mixed = workout_routine(Goal::Maintenance, &[]);
        let friday = mixed.session(Weekday::Fri).unwrap();
        assert_eq!(names(friday), vec!["Running", "Squats"]);
        assert!(friday.exercises.iter().all(|e| e.intensity == Intensity::Moderate));
        assert_eq!(friday.lines[1], "Squats - Sets: 3, Reps: 12");
    }

    #[test]
    fn test_routine_json_is_keyed_by_training_day() {
        let v = serde_json::to_value(workout_routine(Goal::WeightLoss, &[])).unwrap();
        let sessions = v["sessions"].as_object().unwrap();
        let mut days: Vec<&str> = sessions.keys().map(String::as_str).collect();
        days.sort();
        assert_eq!(days, vec!["Friday", "Monday", "Wednesday"]);
        assert_eq!(sessions["Wednesday"]["duration_minutes"], 30);
    }

    #[test]
    fn test_condition_matching() {
        let mods = applicable_modifications(&[
            "Knee_Pain".to_string(),
            "asthma".to_string(),
            "knee_pain".to_string(),
        ]);
        assert_eq!(mods.len(), 2);
        assert_eq!(mods[0].modified, "Chair Squats");
        assert!(applicable_modifications(&["lower back".to_string()]).is_empty());
    }

    #[test]
    fn test_modification_lines_only_for_present_exercises() {
        let mods = applicable_modifications(&[
            "knee_pain".to_string(),
            "lower_back_issues".to_string(),
        ]);
        let routine = workout_routine(Goal::MuscleGain, &mods);
        let monday = routine.session(Weekday::Mon).unwrap();
        assert_eq!(
            monday.lines,
            vec![
                "Squats - Sets: 3, Reps: 12".to_string(),
                "Deadlifts - Sets: 3, Reps: 10".to_string(),
                "Modification for Squats: Chair Squats - Reduces strain on knees".to_string(),
                "Modification for Deadlifts: Kettlebell Swings - Minimizes lower back stress"
                    .to_string(),
            ]
        );
        // Sit-ups never appear in a routine, so that substitution is listed but never inlined
        assert!(!monday.lines.iter().any(|l| l.contains("Planks")));
    }
}
