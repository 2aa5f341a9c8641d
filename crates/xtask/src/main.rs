//! Workspace tasks.
//!
//! `cargo xtask arch-check` verifies the layering rule the workspace is
//! built around: the domain crate carries no UI, async runtime, or
//! randomness dependencies. Randomness is injected by the caller and all
//! platform access goes through the player's ports.

use anyhow::Context;

#[derive(serde::Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(serde::Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(serde::Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

const DOMAIN_CRATE: &str = "refactory-domain";

const FORBIDDEN_IN_DOMAIN: &[&str] = &[
    "anyhow",
    "dioxus",
    "getrandom",
    "gloo-timers",
    "js-sys",
    "rand",
    "tokio",
    "tracing",
    "wasm-bindgen-futures",
    "web-sys",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let domain = metadata
        .packages
        .iter()
        .find(|package| package.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    // Dev-dependencies are exempt; the rule covers what ships.
    let mut violations: Vec<&str> = domain
        .dependencies
        .iter()
        .filter(|dependency| dependency.kind.is_none())
        .map(|dependency| dependency.name.as_str())
        .filter(|name| FORBIDDEN_IN_DOMAIN.contains(name))
        .collect();
    violations.sort_unstable();

    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} must stay platform-free but depends on: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed: {DOMAIN_CRATE} dependencies are clean");
    Ok(())
}
