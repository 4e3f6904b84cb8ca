//! POM metadata assembled from the project and `[publish]` settings, and its
//! XML rendering.

use hoist_core::snapshot::BuildSnapshot;
use hoist_util::errors::HoistError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;

/// Descriptive metadata attached to a Maven publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomMetadata {
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub licenses: Vec<PomLicense>,
    pub developers: Vec<PomDeveloper>,
    pub scm: Option<PomScm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomLicense {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomDeveloper {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomScm {
    pub connection: String,
    pub developer_connection: String,
    pub url: String,
}

impl PomScm {
    /// GitHub-hosted SCM coordinates for `<organization>/<repo>`.
    pub fn github(organization: &str, repo: &str) -> Self {
        let qualified = format!("{organization}/{repo}");
        Self {
            connection: format!("scm:git:git://github.com/{qualified}.git"),
            developer_connection: format!("scm:git:ssh://github.com:{qualified}.git"),
            url: format!("https://github.com/{qualified}/tree/main"),
        }
    }
}

impl PomMetadata {
    /// Copy POM fields out of the snapshot; absent inputs stay absent.
    pub fn assemble(snapshot: &BuildSnapshot) -> Self {
        let project = &snapshot.project;
        let publish = &snapshot.publish;

        let name = match &project.group {
            Some(group) => format!("{group}:{}", project.name),
            None => project.name.clone(),
        };

        let scm = match (
            non_blank(publish.scm_organization.as_deref()),
            non_blank(publish.repo_name.as_deref()),
        ) {
            (Some(org), Some(repo)) => Some(PomScm::github(org, repo)),
            _ => None,
        };

        let developers = publish
            .developer
            .as_ref()
            .map(|d| PomDeveloper {
                id: d.id.clone(),
                name: d.name.clone(),
                email: d.email.clone(),
                organization: d.organization.clone(),
                organization_url: d.organization_url.clone(),
            })
            .into_iter()
            .collect();

        let licenses = publish
            .license
            .map(|l| PomLicense {
                name: l.display_name().to_string(),
            })
            .into_iter()
            .collect();

        Self {
            group_id: project.group.clone(),
            artifact_id: project.name.clone(),
            version: project.version.clone(),
            name,
            description: project.description.clone(),
            url: publish.url.clone(),
            licenses,
            developers,
            scm,
        }
    }

    /// Render as a `pom.xml` document.
    pub fn to_xml(&self) -> Result<String, HoistError> {
        let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

        emit(
            &mut w,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        emit(
            &mut w,
            Event::Start(BytesStart::new("project").with_attributes([
                ("xmlns", "http://maven.apache.org/POM/4.0.0"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
                (
                    "xsi:schemaLocation",
                    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd",
                ),
            ])),
        )?;
        text(&mut w, "modelVersion", "4.0.0")?;
        opt_text(&mut w, "groupId", self.group_id.as_deref())?;
        text(&mut w, "artifactId", &self.artifact_id)?;
        text(&mut w, "version", &self.version)?;
        text(&mut w, "name", &self.name)?;
        opt_text(&mut w, "description", self.description.as_deref())?;
        opt_text(&mut w, "url", self.url.as_deref())?;

        if !self.licenses.is_empty() {
            open(&mut w, "licenses")?;
            for license in &self.licenses {
                open(&mut w, "license")?;
                text(&mut w, "name", &license.name)?;
                close(&mut w, "license")?;
            }
            close(&mut w, "licenses")?;
        }

        if !self.developers.is_empty() {
            open(&mut w, "developers")?;
            for dev in &self.developers {
                open(&mut w, "developer")?;
                opt_text(&mut w, "id", dev.id.as_deref())?;
                opt_text(&mut w, "name", dev.name.as_deref())?;
                opt_text(&mut w, "email", dev.email.as_deref())?;
                opt_text(&mut w, "organization", dev.organization.as_deref())?;
                opt_text(&mut w, "organizationUrl", dev.organization_url.as_deref())?;
                close(&mut w, "developer")?;
            }
            close(&mut w, "developers")?;
        }

        if let Some(scm) = &self.scm {
            open(&mut w, "scm")?;
            text(&mut w, "connection", &scm.connection)?;
            text(&mut w, "developerConnection", &scm.developer_connection)?;
            text(&mut w, "url", &scm.url)?;
            close(&mut w, "scm")?;
        }

        close(&mut w, "project")?;

        String::from_utf8(w.into_inner()).map_err(|e| HoistError::Generic {
            message: format!("POM XML is not valid UTF-8: {e}"),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn emit(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), HoistError> {
    w.write_event(event).map_err(|e| HoistError::Generic {
        message: format!("Failed to write POM XML: {e}"),
    })
}

fn open(w: &mut Writer<Vec<u8>>, tag: &str) -> Result<(), HoistError> {
    emit(w, Event::Start(BytesStart::new(tag)))
}

fn close(w: &mut Writer<Vec<u8>>, tag: &str) -> Result<(), HoistError> {
    emit(w, Event::End(BytesEnd::new(tag)))
}

fn text(w: &mut Writer<Vec<u8>>, tag: &str, value: &str) -> Result<(), HoistError> {
    open(w, tag)?;
    emit(w, Event::Text(BytesText::new(value)))?;
    close(w, tag)
}

fn opt_text(w: &mut Writer<Vec<u8>>, tag: &str, value: Option<&str>) -> Result<(), HoistError> {
    match value {
        Some(v) => text(w, tag, v),
        None => Ok(()),
    }
}
