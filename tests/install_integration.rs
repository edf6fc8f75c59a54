//! Install command integration tests
//!
//! Only file system state is asserted; log wording is free to change.

mod common;

use predicates::prelude::*;

use common::TestProject;

fn write_app(project: &TestProject) -> std::path::PathBuf {
    project.write_zip("target/myapp-1.0.zip", &["mule-config.xml", "lib/app.jar"])
}

#[test]
fn test_install_archive_into_apps() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd_with_home()
        .args(["install", "--copy-to-apps", "--final-name", "myapp", "--archive"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("myapp.zip"));

    assert_eq!(TestProject::entries(&project.apps()), vec!["myapp.zip"]);
    assert_eq!(
        std::fs::read(project.apps().join("myapp.zip")).unwrap(),
        std::fs::read(&archive).unwrap()
    );
}

#[test]
fn test_install_domain_then_archive() {
    let project = TestProject::new();
    let archive = write_app(&project);
    let domain = project.write_zip("deps/mydomain-1.0.zip", &["mule-domain-config.xml"]);

    project
        .cmd_with_home()
        .args([
            "install",
            "--copy-to-apps",
            "--final-name",
            "myapp",
            "--install-domain",
            "--domain-dependency",
            "org.acme:mydomain:1.0",
            "--verify",
            "--archive",
        ])
        .arg(&archive)
        .arg("--dependency")
        .arg(format!("org.acme:mydomain:1.0={}", domain.display()))
        .assert()
        .success();

    assert_eq!(
        std::fs::read(project.domains().join("mydomain-1.0.zip")).unwrap(),
        std::fs::read(&domain).unwrap()
    );
    assert_eq!(TestProject::entries(&project.apps()), vec!["myapp.zip"]);
}

#[test]
fn test_install_from_config_file() {
    let project = TestProject::new();
    write_app(&project);
    project.write_zip("deps/mydomain-1.0.zip", &["mule-domain-config.xml"]);
    project.write_file(
        "mule-app.yaml",
        r#"
finalName: myapp
archive: target/myapp-1.0.zip
installDomain: true
domainDependency: "org.acme:mydomain:1.0"
copyToAppsDirectory: true
dependencies:
  - groupId: org.acme
    artifactId: mydomain
    version: "1.0"
    file: deps/mydomain-1.0.zip
    type: zip
"#,
    );

    project.cmd_with_home().arg("install").assert().success();

    assert_eq!(
        TestProject::entries(&project.domains()),
        vec!["mydomain-1.0.zip"]
    );
    assert_eq!(TestProject::entries(&project.apps()), vec!["myapp.zip"]);
}

#[test]
fn test_home_from_property_fallback() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd()
        .arg("-D")
        .arg(format!("mule.home={}", project.home.display()))
        .args(["install", "--copy-to-apps", "--final-name", "myapp", "--archive"])
        .arg(&archive)
        .assert()
        .success();

    assert!(project.apps().join("myapp.zip").is_file());
}

#[test]
fn test_unset_home_skips_install() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd()
        .args(["install", "--copy-to-apps", "--final-name", "myapp", "--archive"])
        .arg(&archive)
        .assert()
        .success()
        .stderr(predicate::str::contains("MULE_HOME"));

    assert!(TestProject::entries(&project.apps()).is_empty());
    assert!(TestProject::entries(&project.domains()).is_empty());
}

#[test]
fn test_missing_home_fails() {
    let project = TestProject::new();
    let archive = write_app(&project);
    let missing = project.temp.path().join("no-such-mule");

    project
        .cmd()
        .env("MULE_HOME", &missing)
        .args(["install", "--copy-to-apps", "--final-name", "myapp", "--archive"])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!missing.exists());
}

#[test]
fn test_undeclared_domain_fails_without_writing() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd_with_home()
        .args([
            "install",
            "--copy-to-apps",
            "--final-name",
            "myapp",
            "--install-domain",
            "--domain-dependency",
            "org.acme:mydomain:1.0",
            "--archive",
        ])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("org.acme:mydomain:1.0"))
        .stderr(predicate::str::contains("type zip"));

    assert!(TestProject::entries(&project.domains()).is_empty());
    assert!(TestProject::entries(&project.apps()).is_empty());
}

#[test]
fn test_install_domain_alone_installs_nothing() {
    let project = TestProject::new();
    let domain = project.write_zip("deps/mydomain-1.0.zip", &["mule-domain-config.xml"]);

    project
        .cmd_with_home()
        .args([
            "install",
            "--install-domain",
            "--domain-dependency",
            "org.acme:mydomain:1.0",
            "--dependency",
        ])
        .arg(format!("org.acme:mydomain:1.0={}", domain.display()))
        .assert()
        .success();

    assert!(TestProject::entries(&project.domains()).is_empty());
    assert!(TestProject::entries(&project.apps()).is_empty());
}

#[test]
fn test_install_domain_without_coordinates_fails() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd_with_home()
        .args([
            "install",
            "--copy-to-apps",
            "--final-name",
            "myapp",
            "--install-domain",
            "--archive",
        ])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("domainDependency"));

    assert!(TestProject::entries(&project.apps()).is_empty());
}

#[test]
fn test_malformed_domain_coordinates_fail() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd_with_home()
        .args([
            "install",
            "--copy-to-apps",
            "--final-name",
            "myapp",
            "--install-domain",
            "--domain-dependency",
            "org.acme:mydomain",
            "--archive",
        ])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("org.acme:mydomain"));

    assert!(TestProject::entries(&project.apps()).is_empty());
}

#[test]
fn test_missing_archive_fails() {
    let project = TestProject::new();

    project
        .cmd_with_home()
        .args([
            "install",
            "--copy-to-apps",
            "--final-name",
            "myapp",
            "--archive",
            "target/missing.zip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.zip"));

    assert!(TestProject::entries(&project.apps()).is_empty());
}

#[test]
fn test_copy_to_apps_requires_final_name() {
    let project = TestProject::new();
    let archive = write_app(&project);

    project
        .cmd_with_home()
        .args(["install", "--copy-to-apps", "--archive"])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("finalName"));
}

#[test]
fn test_explicit_config_not_found() {
    let project = TestProject::new();

    project
        .cmd_with_home()
        .args(["install", "--config", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
