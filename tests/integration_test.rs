use assert_cmd::Command;
use assert_cmd::cargo;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Command running in `work`, isolated from any real user config.
fn s2m(work: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("sbml2matlab-dist"));
    cmd.current_dir(work)
        .env("HOME", work)
        .env("XDG_CONFIG_HOME", work.join(".config"))
        .env_remove("S2M_DIST_CONFIG")
        .env_remove("S2M_DIST_OS")
        .env_remove("S2M_DIST_ARCH");
    cmd
}

fn stage_package(dir: &Path, files: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for file in files {
        fs::write(dir.join(file), b"").unwrap();
    }
}

#[test]
fn test_tag_for_each_supported_platform() {
    let work = tempdir().unwrap();
    let cases = [
        ("Darwin", "64bit (ELF)", "macosx_x86_64"),
        ("Linux", "64bit ELF", "linux_x86_64"),
        ("linux2", "32bit", "linux_i386"),
        ("Windows", "32bit", "win_32"),
        ("Windows", "64bit", "win_32"),
    ];

    for (os, arch, expected) in cases {
        s2m(work.path())
            .args(["--os", os, "--arch", arch, "tag"])
            .assert()
            .success()
            .stdout(format!("{}\n", expected));
    }
}

#[test]
fn test_tag_from_host() {
    let work = tempdir().unwrap();
    let assert = s2m(work.path()).arg("tag").assert();

    #[cfg(target_os = "linux")]
    assert.success().stdout(predicates::str::starts_with("linux_"));

    #[cfg(target_os = "macos")]
    assert.success().stdout(predicates::str::starts_with("macosx_"));

    #[cfg(target_os = "windows")]
    assert.success().stdout("win_32\n");

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    assert.failure();
}

#[test]
fn test_version_uses_default_base_version() {
    let work = tempdir().unwrap();

    s2m(work.path())
        .args(["--os", "Windows", "--arch", "32bit", "version"])
        .assert()
        .success()
        .stdout("1.2.3-win_32\n");

    s2m(work.path())
        .args(["--os", "Darwin", "--arch", "64bit", "version", "--base-version", "1.3.0"])
        .assert()
        .success()
        .stdout("1.3.0-macosx_x86_64\n");
}

#[test]
fn test_unsupported_platform_fails() {
    let work = tempdir().unwrap();

    s2m(work.path())
        .args(["--os", "SolarisX", "--arch", "64bit", "version"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicates::str::contains("solarisx"))
        .stderr(predicates::str::contains(
            "macOS x86_64, Linux i386/x86_64, Windows 32-bit",
        ));
}

#[test]
fn test_unknown_unix_architecture_fails() {
    let work = tempdir().unwrap();

    s2m(work.path())
        .args(["--os", "Linux", "--arch", "armv7l", "tag"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("armv7l"));
}

#[test]
fn test_platform_overrides_from_env() {
    let work = tempdir().unwrap();

    s2m(work.path())
        .env("S2M_DIST_OS", "Darwin")
        .env("S2M_DIST_ARCH", "32bit")
        .arg("tag")
        .assert()
        .success()
        .stdout("macosx_i386\n");
}

#[test]
fn test_describe_to_stdout() {
    let work = tempdir().unwrap();

    let output = s2m(work.path())
        .args(["--os", "Linux", "--arch", "64bit", "describe"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "sbml2matlab");
    assert_eq!(json["version"], "1.2.3-linux_x86_64");
    assert_eq!(json["author"], "Stanley Gu, Lucian Smith");
    assert_eq!(json["url"], "https://github.com/stanleygu/sbml2matlab");
    assert_eq!(json["binary_distribution"], true);
    assert_eq!(json["platform_tag"], "linux_x86_64");
}

#[test]
fn test_describe_with_config_and_package_dir() {
    let work = tempdir().unwrap();
    let package = work.path().join("build/sbml2matlab");
    stage_package(&package, &["_sbml2matlab.so", "LICENSE.txt", "__init__.py"]);

    let config = work.path().join("custom.json");
    fs::write(
        &config,
        r#"{ "base_version": "1.2.0", "package_data": ["*.so"], "binary_distribution": false }"#,
    )
    .unwrap();

    let out = work.path().join("dist/release.json");
    s2m(work.path())
        .args(["--os", "Darwin", "--arch", "64bit", "--config"])
        .arg(&config)
        .arg("describe")
        .arg("--package-dir")
        .arg(&package)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["version"], "1.2.0-macosx_x86_64");
    assert_eq!(json["binary_distribution"], false);
    assert_eq!(json["files"], serde_json::json!(["_sbml2matlab.so"]));
    assert_eq!(json["package_data"]["sbml2matlab"], serde_json::json!(["*.so"]));
}

#[test]
fn test_release_json_in_current_dir_is_used() {
    let work = tempdir().unwrap();
    fs::write(
        work.path().join("release.json"),
        r#"{ "base_version": "2.0.0" }"#,
    )
    .unwrap();

    s2m(work.path())
        .args(["--os", "Linux", "--arch", "32bit", "version"])
        .assert()
        .success()
        .stdout("2.0.0-linux_i386\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let work = tempdir().unwrap();

    s2m(work.path())
        .args(["--os", "Linux", "--arch", "64bit", "--config", "nope.json", "version"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("does not exist"));
}

#[test]
fn test_describe_unsupported_writes_no_file() {
    let work = tempdir().unwrap();
    let out = work.path().join("release-out.json");

    s2m(work.path())
        .args(["--os", "aix", "describe", "--output"])
        .arg(&out)
        .assert()
        .failure();

    assert!(!out.exists());
}

#[test]
fn test_manifest_lists_bundled_files() {
    let work = tempdir().unwrap();
    let package = work.path().join("pkg");
    stage_package(
        &package,
        &["_sbml2matlab.pyd", "libsbml.dll", "sbml2matlab.lib", "notes.md"],
    );

    s2m(work.path())
        .args(["--os", "Windows", "manifest", "--strict", "--package-dir"])
        .arg(&package)
        .assert()
        .success()
        .stdout("_sbml2matlab.pyd\nlibsbml.dll\nsbml2matlab.lib\n");
}

#[test]
fn test_manifest_strict_rejects_foreign_artifacts() {
    let work = tempdir().unwrap();
    let package = work.path().join("pkg");
    stage_package(&package, &["_sbml2matlab.so", "libsbml.dll"]);

    s2m(work.path())
        .args(["--os", "Linux", "--arch", "64bit", "manifest", "--strict", "-p"])
        .arg(&package)
        .assert()
        .failure()
        .stderr(predicates::str::contains("libsbml.dll"));

    // without --strict it is only a warning
    s2m(work.path())
        .args(["--os", "Linux", "--arch", "64bit", "manifest", "-p"])
        .arg(&package)
        .assert()
        .success()
        .stdout(predicates::str::contains("_sbml2matlab.so"));
}
