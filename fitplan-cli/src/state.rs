use anyhow::{Context, Result};
use fitplan_core::{InputPolicy, Profile, ProfileAnswers};
use std::fs;
use std::path::{Path, PathBuf};

/// `$FITPLAN_HOME`, or `~/.fitplan`.
pub fn fitplan_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FITPLAN_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".fitplan"))
}

pub fn ensure_fitplan_home() -> Result<PathBuf> {
    let dir = fitplan_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Load a profile from a TOML file. Choice fields go through the same
/// policy as interactive answers.
pub fn read_profile(path: &Path, policy: InputPolicy) -> Result<Profile> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let answers: ProfileAnswers =
        toml::from_str(&s).with_context(|| format!("parse profile {}", path.display()))?;
    let profile = answers
        .into_profile(policy)
        .with_context(|| format!("invalid profile {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?policy, "loaded profile file");
    Ok(profile)
}
