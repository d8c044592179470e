use std::process::Command;

/// Capture the git revision and dirty state at compile time so the binary
/// can identify itself in the User-Agent header. Falls back to "unknown" and
/// a clean tree when git is unavailable (e.g. building from a tarball).
fn main() {
    let revision = git(&["rev-parse", "HEAD"])
        .map(|hash| hash.chars().take(7).collect::<String>())
        .unwrap_or_else(|| "unknown".to_string());
    let dirty = git(&["status", "--porcelain"]).is_some_and(|out| !out.is_empty());

    println!("cargo:rustc-env=SEGMENT_SMOKE_GIT_REVISION={revision}");
    println!("cargo:rustc-env=SEGMENT_SMOKE_GIT_DIRTY={}", u8::from(dirty));
    println!("cargo:rerun-if-changed=../.git/HEAD");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
