use std::process::Command;

/// Release tag of the checkout (`v0.3.0` -> `0.3.0`), if git can describe it.
fn git_release_tag() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty=+dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(out.stdout).ok()?;
    let described = described.trim();
    let tag = described.strip_prefix('v').unwrap_or(described);
    (!tag.is_empty()).then(|| tag.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    // outside a checkout, e.g. a packaged source tree, the manifest version stands
    let version = git_release_tag().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=S2M_DIST_VERSION={}", version);
}
