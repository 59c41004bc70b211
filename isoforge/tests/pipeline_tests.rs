use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A throwaway copy of `demos/reference_project`.
struct IsoforgeTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl IsoforgeTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let project_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .context("Workspace root not found")?
            .join("demos/reference_project");

        let dest = tmp.path().join("reference_project");
        Self::copy_dir(&project_root, &dest)?;

        Ok(Self {
            _tmp: tmp,
            root: dest,
        })
    }

    fn copy_dir(src: &PathBuf, dst: &PathBuf) -> std::io::Result<()> {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.skip_exist = true;
        options.content_only = true;

        std::fs::create_dir_all(dst)?;
        fs_extra::dir::copy(src, dst, &options)
            .map(|_| ())
            .map_err(|e| std::io::Error::other(e.to_string()))
    }

    fn isoforge(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("isoforge"));
        cmd.current_dir(&self.root);
        cmd.env_remove("ISOFORGE_TARGET_PATH");
        cmd.env_remove("ISOFORGE_STRICT");
        cmd
    }

    fn output(&self, file: &str) -> Result<String> {
        let path = self.root.join("output").join(file);
        std::fs::read_to_string(&path).with_context(|| format!("{} not generated", file))
    }
}

#[test]
fn test_run_generates_enum_files() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;

    env.isoforge()
        .arg("run")
        .assert()
        .success()
        .stdout(predicates::str::contains("SUCCESS"));

    insta::assert_snapshot!("continent_c_eu", env.output("C_EU.txt")?);
    insta::assert_snapshot!("countries", env.output("countries.txt")?);
    insta::assert_snapshot!("currencies", env.output("currencies.txt")?);
    insta::assert_snapshot!("subdivision_types", env.output("subdivision_types.txt")?);

    assert_eq!(
        env.output("C_AS.txt")?,
        "JP_01(\"Hokkaido\", PREFECTURE, JP),\n\
         JP_13(\"Tokyo\", PREFECTURE, JP),\n\
         JP_47(\"Okinawa\", PREFECTURE, JP),\n"
    );
    assert_eq!(
        env.output("C_NA.txt")?,
        "US_CA(\"California\", STATE, US),\n\
         US_DC(\"District of Columbia\", DISTRICT, US),\n\
         US_LA(\"Louisiana\", STATE, US),\n"
    );
    // Kosovo has no continent at the gazetteer
    assert_eq!(
        env.output("unassigned.txt")?,
        "XK_01(\"Pristina\", DISTRICT, XK),\n"
    );
    Ok(())
}

#[test]
fn test_run_report_lists_degraded_data() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;
    env.isoforge().arg("run").assert().success();

    let report = env.output("run_report.json")?;
    assert!(report.contains("\"project_name\": \"iso3166\""));
    assert!(report.contains("\"countries\": 7"));
    assert!(report.contains("\"aliases\": 2"));
    assert!(report.contains("\"kind\": \"unresolvable_reference\""));
    // Christmas Island publishes no subdivisions at all
    assert!(report.contains("subdivisions of CX"));
    Ok(())
}

#[test]
fn test_strict_mode_fails_but_still_writes() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;

    env.isoforge()
        .arg("run")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicates::str::contains("issue(s) reported"));

    assert!(env.root.join("output/countries.txt").exists());
    Ok(())
}

#[test]
fn test_target_path_env_override() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;

    env.isoforge()
        .env("ISOFORGE_TARGET_PATH", "enums")
        .arg("run")
        .assert()
        .success();

    assert!(env.root.join("enums/C_EU.txt").exists());
    assert!(!env.root.join("output").exists());
    Ok(())
}

#[test]
fn test_inconsistent_renames_abort_before_any_output() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;

    // Poisoning: FR-A now resolves to two different codes
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(env.root.join("config/renames.yml"))?;
    use std::io::Write;
    writeln!(file, "  - {{ deprecated: FR-A, current: FR-IDF }}")?;

    env.isoforge()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Rename table inconsistency"));

    env.isoforge().arg("run").assert().failure();
    assert!(!env.root.join("output").exists());
    Ok(())
}

#[test]
fn test_check_valid_project() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;

    env.isoforge()
        .arg("check")
        .assert()
        .success()
        .stdout(predicates::str::contains("2 renames"))
        .stdout(predicates::str::contains("Configuration is valid"));

    assert!(!env.root.join("output").exists());
    Ok(())
}

#[test]
fn test_clean_removes_output() -> Result<()> {
    let env = IsoforgeTestEnv::new()?;

    env.isoforge().arg("run").assert().success();
    assert!(env.root.join("output").exists());

    env.isoforge()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicates::str::contains("Artifact removed: output"));

    assert!(!env.root.join("output").exists());
    Ok(())
}
