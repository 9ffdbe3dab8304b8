//! Injects version and source-control metadata as compile-time env vars.
//!
//! Git lookups are best-effort: any failure degrades to `unknown` with a
//! cargo warning and never aborts the build.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

struct GitInfo {
    commit_hash: String,
    commit_date: String,
    branch: String,
}

fn git(args: &[&str]) -> Result<String, String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| format!("failed to run `git {}`: {e}", args.join(" ")))?;
    if !output.status.success() {
        return Err(format!(
            "`git {}` exited with {}: {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if value.is_empty() {
        return Err(format!("`git {}` printed nothing", args.join(" ")));
    }
    Ok(value)
}

fn git_info() -> Result<GitInfo, String> {
    Ok(GitInfo {
        commit_hash: git(&["rev-parse", "--short", "HEAD"])?,
        commit_date: git(&["log", "-1", "--format=%cI"])?,
        branch: git(&["rev-parse", "--abbrev-ref", "HEAD"])?,
    })
}

/// New commits move the branch ref, not HEAD, so both are watched.
fn watch_git_refs(git_dir: &Path) {
    let head = git_dir.join("HEAD");
    let Ok(contents) = fs::read_to_string(&head) else {
        return;
    };
    println!("cargo:rerun-if-changed={}", head.display());

    if let Some(reference) = contents.trim().strip_prefix("ref: ") {
        let ref_file = git_dir.join(reference);
        if ref_file.exists() {
            println!("cargo:rerun-if-changed={}", ref_file.display());
        }
    }
    // Refs may be packed after `git gc`.
    let packed = git_dir.join("packed-refs");
    if packed.exists() {
        println!("cargo:rerun-if-changed={}", packed.display());
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KUMO_DOCS_VERSION");
    watch_git_refs(Path::new(".git"));

    let info = git_info().unwrap_or_else(|err| {
        println!("cargo:warning=git info unavailable during build: {err}");
        println!(
            "cargo:warning=this may happen with shallow clones; fetch full history in CI"
        );
        GitInfo {
            commit_hash: UNKNOWN.to_owned(),
            commit_date: UNKNOWN.to_owned(),
            branch: UNKNOWN.to_owned(),
        }
    });

    let library_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| UNKNOWN.to_owned());
    let docs_version = env::var("KUMO_DOCS_VERSION").unwrap_or_else(|_| library_version.clone());
    let build_date = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    println!("cargo:rustc-env=KUMO_LIBRARY_VERSION={library_version}");
    println!("cargo:rustc-env=KUMO_DOCS_VERSION={docs_version}");
    println!("cargo:rustc-env=KUMO_COMMIT_HASH={}", info.commit_hash);
    println!("cargo:rustc-env=KUMO_COMMIT_DATE={}", info.commit_date);
    println!("cargo:rustc-env=KUMO_BRANCH={}", info.branch);
    println!("cargo:rustc-env=KUMO_BUILD_DATE={build_date}");
}
