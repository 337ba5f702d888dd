use anyhow::{Result, bail};
use fitplan_core::{
    ActivityLevel, DietPreference, Gender, Goal, InputPolicy, Profile, ProfileError,
    parse_with_policy,
};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Answer that ends the health-condition loop (any letter case).
pub const CONDITIONS_DONE: &str = "done";

/// Sequential line prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask once and return the trimmed answer. Errors if input is closed.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush().ok();
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            bail!("input closed while waiting for {}", label);
        }
        Ok(s.trim().to_string())
    }

    /// Ask for an enum value. Unknown answers fall back (lenient) or are re-asked (strict).
    pub fn prompt_choice<T>(&mut self, label: &str, policy: InputPolicy) -> Result<T>
    where
        T: FromStr<Err = ProfileError> + Default + std::fmt::Debug,
    {
        loop {
            let answer = self.prompt(label)?;
            match parse_with_policy(&answer, policy) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Ask until the answer parses as a finite number greater than zero.
    pub fn prompt_positive<T>(&mut self, label: &str) -> Result<T>
    where
        T: FromStr + Copy + Into<f64>,
    {
        loop {
            let answer = self.prompt(label)?;
            match answer.parse::<T>() {
                Ok(v) if is_measurement(v.into()) => return Ok(v),
                _ => {
                    tracing::warn!(answer = %answer, "rejected non-positive, non-finite or malformed number");
                    writeln!(self.output, "Please enter a number greater than zero.")?;
                }
            }
        }
    }

    /// Collect answers until one equals "done" (case-insensitive). Blank answers are skipped.
    pub fn prompt_until_done(&mut self, label: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        loop {
            let answer = self.prompt(label)?;
            if answer.eq_ignore_ascii_case(CONDITIONS_DONE) {
                break;
            }
            if answer.is_empty() {
                continue;
            }
            out.push(answer);
        }
        Ok(out)
    }
}

fn is_measurement(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

pub fn collect_profile<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    policy: InputPolicy,
) -> Result<Profile> {
    let goal: Goal =
        prompter.prompt_choice("Enter your goal (weight_loss/muscle_gain/maintenance)", policy)?;
    let diet: DietPreference =
        prompter.prompt_choice("Enter your dietary preferences (keto/vegan/other)", policy)?;
    let allergies = prompter.prompt("Enter any allergies you have")?;
    let activity: ActivityLevel = prompter.prompt_choice(
        "Enter your activity level (sedentary/lightly_active/moderately_active/very_active/extra_active)",
        policy,
    )?;
    let age: u32 = prompter.prompt_positive("Enter your age")?;
    let gender: Gender = prompter.prompt_choice("Enter your gender (male/female)", policy)?;
    let height_cm: f64 = prompter.prompt_positive("Enter your height in cm")?;
    let weight_kg: f64 = prompter.prompt_positive("Enter your weight in kg")?;
    let health_conditions =
        prompter.prompt_until_done("Enter any health conditions or 'done'")?;

    let profile = Profile::new(
        goal,
        diet,
        allergies,
        activity,
        age,
        gender,
        height_cm,
        weight_kg,
        health_conditions,
    )?;
    tracing::info!(
        goal = profile.goal.as_str(),
        diet = profile.diet.as_str(),
        activity = profile.activity.as_str(),
        conditions = profile.health_conditions.len(),
        "collected profile"
    );
    Ok(profile)
}
