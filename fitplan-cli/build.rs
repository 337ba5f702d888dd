use std::path::{Path, PathBuf};
use std::process::Command;

const SHA_VAR: &str = "FITPLAN_BUILD_SHA";

/// Abbreviated commit of the checkout, if `git` is available and this is a work tree.
fn git_short_sha(repo_root: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}

fn main() {
    let workspace_root = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(|dir| PathBuf::from(dir).join(".."))
        .unwrap_or_else(|| PathBuf::from(".."));

    // Packagers building from a tarball pin the revision through the environment.
    let sha = std::env::var(SHA_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git_short_sha(&workspace_root))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={}={}", SHA_VAR, sha);
    println!("cargo:rerun-if-env-changed={}", SHA_VAR);
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
