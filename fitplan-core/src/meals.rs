//! Weekly meal-plan skeleton.
//!
//! Every day receives the same four slots; each slot is a fixed share of the
//! daily calorie target rendered with its macro grams.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::nutrition::{MacroGrams, MacroSplit, NutritionPlan, macro_grams};

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Share of the daily calorie target.
    pub fn calorie_share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub calories: f64,
    pub grams: MacroGrams,
    pub description: String,
}

impl Meal {
    pub fn for_slot(slot: MealSlot, daily_calories: f64, split: MacroSplit) -> Self {
        let calories = daily_calories * slot.calorie_share();
        let grams = macro_grams(calories, split);
        let description = format!(
            "Sample {} meal - Calories: {:.2}, Protein: {:.2}g, Carbs: {:.2}g, Fats: {:.2}g",
            slot.as_str(),
            calories,
            grams.protein,
            grams.carbs,
            grams.fats
        );
        Self {
            slot,
            calories,
            grams,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    pub day: Weekday,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Vec<Meal>,
}

impl DayMeals {
    pub fn total_calories(&self) -> f64 {
        self.breakfast.calories
            + self.lunch.calories
            + self.dinner.calories
            + self.snacks.iter().map(|m| m.calories).sum::<f64>()
    }
}

impl by_weekday::Dated for DayMeals {
    fn day(&self) -> Weekday {
        self.day
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(with = "by_weekday")]
    pub days: Vec<DayMeals>,
}

impl MealPlan {
    pub fn day(&self, day: Weekday) -> Option<&DayMeals> {
        self.days.iter().find(|d| d.day == day)
    }
}

pub fn weekly_meal_plan(plan: &NutritionPlan) -> MealPlan {
    let meal = |slot| Meal::for_slot(slot, plan.daily_calories, plan.macros);
    let days = WEEK
        .iter()
        .map(|&day| DayMeals {
            day,
            breakfast: meal(MealSlot::Breakfast),
            lunch: meal(MealSlot::Lunch),
            dinner: meal(MealSlot::Dinner),
            snacks: vec![meal(MealSlot::Snack)],
        })
        .collect();
    MealPlan { days }
}

/// Full English weekday name ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Per-day entries (de)serialized as a map keyed by full weekday name, Monday first.
pub(crate) mod by_weekday {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    use super::weekday_name;

    pub trait Dated {
        fn day(&self) -> Weekday;
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, T>(items: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize + Dated,
    {
        serializer.collect_map(items.iter().map(|item| (weekday_name(item.day()), item)))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Dated,
    {
        let by_name: HashMap<String, T> = HashMap::deserialize(deserializer)?;
        let mut items: Vec<T> = by_name.into_values().collect();
        items.sort_by_key(|item| item.day().num_days_from_monday());
        Ok(items)
    }
}
