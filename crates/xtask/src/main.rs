use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Domain crates the pure core is allowed to depend on.
const DOMAIN_ALLOWED: &[&str] = &["serde", "serde_json", "thiserror"];

/// Verify the layering rule: `phantasm-domain` stays free of UI, HTTP and
/// runtime dependencies so it keeps compiling for every target.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;
    if !output.status.success() {
        anyhow::bail!("cargo metadata failed");
    }

    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let packages = metadata["packages"]
        .as_array()
        .context("metadata has no packages array")?;

    let domain = packages
        .iter()
        .find(|p| p["name"] == "phantasm-domain")
        .context("phantasm-domain not found in workspace")?;
    let empty = Vec::new();
    let violations: Vec<&str> = domain["dependencies"]
        .as_array()
        .unwrap_or(&empty)
        .iter()
        .filter_map(|d| d["name"].as_str())
        .filter(|name| !DOMAIN_ALLOWED.contains(name))
        .collect();

    if !violations.is_empty() {
        anyhow::bail!(
            "phantasm-domain must stay dependency-light; found: {}",
            violations.join(", ")
        );
    }

    println!("arch-check: ok");
    Ok(())
}
