//! Static wellness reference data. None of it depends on the profile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTips {
    pub general_wellness: Vec<String>,
    pub nutritional_advice: Vec<String>,
    pub exercise_and_activity: Vec<String>,
    pub injury_prevention: Vec<String>,
    pub motivation_and_habit_building: Vec<String>,
    pub community_and_support: Vec<String>,
}

impl HealthTips {
    /// Category label and tips, in display order.
    pub fn sections(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("General wellness", self.general_wellness.as_slice()),
            ("Nutritional advice", self.nutritional_advice.as_slice()),
            ("Exercise and activity", self.exercise_and_activity.as_slice()),
            ("Injury prevention", self.injury_prevention.as_slice()),
            ("Motivation and habit building", self.motivation_and_habit_building.as_slice()),
            ("Community and support", self.community_and_support.as_slice()),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn health_fitness_tips() -> HealthTips {
    HealthTips {
        general_wellness: strings(&[
            "Aim for 7-9 hours of sleep",
            "Practice stress-reducing activities",
        ]),
        nutritional_advice: strings(&[
            "Stay hydrated",
            "Incorporate a variety of fruits and vegetables",
        ]),
        exercise_and_activity: strings(&[
            "Incorporate stretching or yoga",
            "Use a fitness tracker for daily steps",
        ]),
        injury_prevention: strings(&["Always warm up and cool down", "Maintain proper form"]),
        motivation_and_habit_building: strings(&["Set SMART goals", "Celebrate small victories"]),
        community_and_support: strings(&[
            "Join fitness groups",
            "Work with a fitness coach or nutritionist",
        ]),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySupport {
    pub forum_access: String,
    pub group_challenges: String,
    pub success_stories: String,
    pub expert_qa_sessions: String,
    pub peer_support_groups: String,
}

pub fn community_support() -> CommunitySupport {
    CommunitySupport {
        forum_access: "URL_to_Fitness_Forum".into(),
        group_challenges: "List_of_Upcoming_Group_Challenges".into(),
        success_stories: "Featured_Success_Stories".into(),
        expert_qa_sessions: "Schedule_of_Upcoming_Q&A_Sessions".into(),
        peer_support_groups: "Links_to_Join_Peer_Support_Groups".into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindfulnessSupport {
    pub stress_management_techniques: String,
    pub mindfulness_exercises: String,
    pub sleep_improvement_tips: String,
}

pub fn mindfulness_support() -> MindfulnessSupport {
    MindfulnessSupport {
        stress_management_techniques: "Effective stress management techniques.".into(),
        mindfulness_exercises: "Guided mindfulness exercises.".into(),
        sleep_improvement_tips: "Advice on improving sleep quality.".into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RehabExercises {
    pub knee_injuries: String,
    pub back_injuries: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryPreventionSupport {
    pub warm_up_routines: String,
    pub cool_down_routines: String,
    pub rehab_exercises: RehabExercises,
}

pub fn injury_prevention_support() -> InjuryPreventionSupport {
    InjuryPreventionSupport {
        warm_up_routines: "Warm-up exercises to prevent injuries.".into(),
        cool_down_routines: "Cooldown routines for recovery.".into(),
        rehab_exercises: RehabExercises {
            knee_injuries: "Exercises for knee injuries.".into(),
            back_injuries: "Routines for back strength.".into(),
        },
    }
}
