use hoist_core::manifest::Manifest;
use hoist_core::properties::{PropertySnapshot, PropertySource};
use hoist_core::snapshot::BuildSnapshot;
use hoist_publish::plugin::{FinalizedPlan, PublishPlugin};
use hoist_publish::publication::{PublicationSource, DISTRIBUTION_PUBLICATION, JAVA_LIBRARY_PUBLICATION};
use hoist_publish::signing::SigningSetup;
use hoist_publish::tasks;
use hoist_util::errors::HoistError;

const CENTRAL: &str = r#"
[package]
name = "span-normalizer"
group = "org.example"
version = "1.2.3"
plugins = ["java-library"]

[publish]
license = "APACHE_2_0"
repo-name = "span-normalizer"
scm-organization = "example"

[publish.maven-central]
"#;

const ARTIFACTORY: &str = r#"
[package]
name = "internal-lib"
version = "0.4.0"
plugins = ["java-library", "distribution"]

[publish]
license = "PROPRIETARY"

[publish.artifactory]
"#;

fn snapshot(manifest: &str, props: &[(&str, &str)]) -> BuildSnapshot {
    let manifest = Manifest::from_str(manifest).unwrap();
    let properties = PropertySnapshot::builder()
        .layer(PropertySource::UserFile, props.iter().copied())
        .build();
    BuildSnapshot::new(manifest, properties)
}

fn finalize(snap: &BuildSnapshot) -> Result<FinalizedPlan, HoistError> {
    PublishPlugin::configure(&snap.publish, &snap.components).finalize(snap)
}

#[test]
fn test_missing_license_fails_at_finalize() {
    let snap = snapshot("[package]\nname = \"lib\"\n", &[]);
    match finalize(&snap).unwrap_err() {
        HoistError::Structural { field, .. } => assert_eq!(field, "license"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_repo_name_fails_for_maven_central() {
    let manifest = CENTRAL.replace("repo-name = \"span-normalizer\"\n", "");
    match finalize(&snapshot(&manifest, &[])).unwrap_err() {
        HoistError::Structural { field, message } => {
            assert_eq!(field, "repo-name");
            assert!(message.contains("Repository name"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_package_group_fails_for_maven_central() {
    let manifest = CENTRAL.replace("group = \"org.example\"\n", "");
    match finalize(&snapshot(&manifest, &[])).unwrap_err() {
        HoistError::Structural { field, .. } => assert_eq!(field, "maven-central.package-group"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_repo_name_not_required_without_maven_central() {
    assert!(finalize(&snapshot(ARTIFACTORY, &[])).is_ok());
}

#[test]
fn test_configure_registers_staging_tasks_for_maven_central() {
    let snap = snapshot(CENTRAL, &[]);
    let configured = PublishPlugin::configure(&snap.publish, &snap.components);
    let tasks: Vec<&str> = configured.tasks().iter().map(String::as_str).collect();
    assert_eq!(
        tasks,
        vec![
            tasks::PUBLISH,
            tasks::GENERATE_POM,
            tasks::CLOSE_REPOSITORY,
            tasks::RELEASE_REPOSITORY,
            tasks::CLOSE_AND_RELEASE_REPOSITORY,
            tasks::GET_STAGING_PROFILE,
        ]
    );
    assert_eq!(configured.requirements().for_task(tasks::CLOSE_REPOSITORY).len(), 2);
}

#[test]
fn test_finalize_succeeds_without_credentials() {
    let plan = finalize(&snapshot(CENTRAL, &[])).unwrap();
    assert_eq!(plan.targets.len(), 1);
    assert!(plan.targets.targets[0].credentials.is_none());
}

#[test]
fn test_missing_credentials_fail_only_dependent_tasks() {
    let plan = finalize(&snapshot(CENTRAL, &[])).unwrap();

    let err = plan.before_task(tasks::PUBLISH).unwrap_err();
    assert!(err.to_string().contains("ossrhUsername"), "got: {err}");
    assert!(plan.before_task(tasks::CLOSE_REPOSITORY).is_err());

    assert!(plan.before_task(tasks::GENERATE_POM).is_ok());
}

#[test]
fn test_before_task_passes_with_credentials() {
    let plan = finalize(&snapshot(
        CENTRAL,
        &[("ossrhUsername", "u"), ("ossrhPassword", "p")],
    ))
    .unwrap();
    for task in plan.tasks() {
        assert!(plan.before_task(task).is_ok(), "task {task} should pass");
    }
    assert!(plan.blocked_tasks().is_empty());
}

#[test]
fn test_before_unknown_task_fails() {
    let plan = finalize(&snapshot(ARTIFACTORY, &[])).unwrap();
    match plan.before_task(tasks::CLOSE_REPOSITORY).unwrap_err() {
        HoistError::UnknownTask { task } => assert_eq!(task, "closeRepository"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_artifactory_publish_requires_context_and_credentials() {
    let plan = finalize(&snapshot(
        ARTIFACTORY,
        &[("artifactory_contextUrl", "https://acme.jfrog.io/artifactory")],
    ))
    .unwrap();
    let err = plan.before_task(tasks::PUBLISH).unwrap_err();
    assert!(err.to_string().contains("artifactory_user"), "got: {err}");

    let blocked = plan.blocked_tasks();
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].0, tasks::PUBLISH);
    let missing: Vec<&str> = blocked[0].1.iter().map(|r| r.property.as_str()).collect();
    assert_eq!(missing, vec!["artifactory_user", "artifactory_password"]);
}

#[test]
fn test_publications_for_plain_library_with_distribution() {
    let plan = finalize(&snapshot(ARTIFACTORY, &[])).unwrap();
    let names: Vec<&str> = plan.publications.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![JAVA_LIBRARY_PUBLICATION, DISTRIBUTION_PUBLICATION]);

    let lib = plan.publication(JAVA_LIBRARY_PUBLICATION).unwrap();
    assert!(lib.classifiers.is_empty());
    assert_eq!(lib.source, PublicationSource::Component("java".to_string()));
    let dist = plan.publication(DISTRIBUTION_PUBLICATION).unwrap();
    assert_eq!(dist.source, PublicationSource::TaskOutput("distZip".to_string()));
    assert!(plan.signing.is_none());
    assert!(plan.staging.is_none());
}

#[test]
fn test_gradle_plugin_component_suppresses_plain_publication() {
    let manifest = ARTIFACTORY.replace(
        "plugins = [\"java-library\", \"distribution\"]",
        "plugins = [\"java-library\", \"java-gradle-plugin\"]",
    );
    let plan = finalize(&snapshot(&manifest, &[])).unwrap();
    assert!(plan.publications.is_empty());
    assert!(!plan.tasks().iter().any(|t| t == tasks::GENERATE_POM));
}

#[test]
fn test_maven_central_publication_has_docs_and_signing() {
    let plan = finalize(&snapshot(CENTRAL, &[])).unwrap();
    let lib = plan.publication(JAVA_LIBRARY_PUBLICATION).unwrap();
    assert_eq!(lib.classifiers, vec!["javadoc", "sources"]);

    let signing = plan.signing.as_ref().unwrap();
    assert_eq!(signing.publication, JAVA_LIBRARY_PUBLICATION);
    assert_eq!(signing.setup, SigningSetup::Default);
}

#[test]
fn test_in_memory_signing_keys() {
    let plan = finalize(&snapshot(
        CENTRAL,
        &[
            ("signingKey", "-----BEGIN PGP-----"),
            ("signingPassword", "pw"),
            ("signingKeyId", "ABCD1234"),
        ],
    ))
    .unwrap();
    match &plan.signing.as_ref().unwrap().setup {
        SigningSetup::InMemory { key_id, .. } => assert_eq!(key_id.as_deref(), Some("ABCD1234")),
        other => panic!("unexpected signing setup: {other:?}"),
    }
}

#[test]
fn test_staging_configuration() {
    let plan = finalize(&snapshot(
        CENTRAL,
        &[("ossrhUsername", "u"), ("ossrhPassword", "p")],
    ))
    .unwrap();
    let staging = plan.staging.as_ref().unwrap();
    assert_eq!(staging.server_url, "https://s01.oss.sonatype.org/service/local/");
    assert_eq!(staging.package_group, "org.example");
    assert_eq!(staging.credentials.as_ref().unwrap().username, "u");
}

#[test]
fn test_blank_package_group_falls_back_to_project_group() {
    let manifest = format!("{CENTRAL}package-group = \"\"\n");
    let plan = finalize(&snapshot(&manifest, &[])).unwrap();
    assert_eq!(plan.staging.as_ref().unwrap().package_group, "org.example");
}

#[test]
fn test_blank_nexus_host_fails_for_maven_central() {
    let manifest = format!("{CENTRAL}nexus-url = \"\"\n");
    match finalize(&snapshot(&manifest, &[])).unwrap_err() {
        HoistError::Structural { field, .. } => assert_eq!(field, "maven-central.nexus-url"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_maven_central_without_java_library_registers_no_uploads() {
    let manifest = CENTRAL.replace("plugins = [\"java-library\"]", "plugins = [\"distribution\"]");
    let plan = finalize(&snapshot(&manifest, &[])).unwrap();

    assert!(plan.targets.is_empty());
    assert!(plan.staging.is_none());
    assert!(plan.signing.is_none());
    assert_eq!(plan.tasks(), &[tasks::PUBLISH.to_string()]);
    assert!(plan.before_task(tasks::PUBLISH).is_ok());
}
