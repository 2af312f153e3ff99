use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_PROJECTS: &str = include_str!("../content/projects.json");

thread_local! {
    static EMBEDDED_STORE: Result<Rc<ContentStore>, ContentError> =
        ContentStore::from_json(EMBEDDED_PROJECTS).map(Rc::new);
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("failed to parse project content: {0}")]
    Parse(String),
    #[error("project at position {position} has an empty id")]
    EmptyId { position: usize },
    #[error("duplicate project id `{id}`")]
    DuplicateId { id: String },
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RoiMetric {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Roi {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub metrics: Option<Vec<RoiMetric>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Roi {
    pub fn metrics(&self) -> &[RoiMetric] {
        self.metrics.as_deref().unwrap_or_default()
    }
}

/// One case study. Loaded once and never mutated afterwards.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    pub id: String,
    /// Ordinal label shown on cards ("01"). Not used for ordering.
    #[serde(rename = "number")]
    pub display_number: String,
    pub title: String,
    pub tagline: String,
    pub problem: String,
    #[serde(default)]
    pub solution: Vec<String>,
    pub impact: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub screenshots: Option<Vec<String>>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub roi: Option<Roi>,
}

impl ProjectRecord {
    /// Gallery in navigation order, empty when the project has none.
    pub fn screenshots(&self) -> &[String] {
        self.screenshots.as_deref().unwrap_or_default()
    }

    pub fn has_gallery(&self) -> bool {
        !self.screenshots().is_empty()
    }
}

/// Ordered, validated set of projects.
#[derive(Debug, PartialEq)]
pub struct ContentStore {
    projects: Vec<Rc<ProjectRecord>>,
}

impl ContentStore {
    /// The store compiled into the binary. Parsed on first access.
    pub fn embedded() -> Result<Rc<ContentStore>, ContentError> {
        EMBEDDED_STORE.with(|store| store.clone())
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    /// Rejects blank or repeated ids. Empty galleries become absent.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut projects = Vec::with_capacity(records.len());

        for (position, mut record) in records.into_iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(ContentError::EmptyId { position });
            }
            if !seen.insert(record.id.clone()) {
                return Err(ContentError::DuplicateId { id: record.id });
            }
            if record.screenshots.as_ref().map_or(false, |shots| shots.is_empty()) {
                record.screenshots = None;
            }
            projects.push(Rc::new(record));
        }

        Ok(Self { projects })
    }

    pub fn all(&self) -> &[Rc<ProjectRecord>] {
        &self.projects
    }

    pub fn by_id(&self, id: &str) -> Option<Rc<ProjectRecord>> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample_project(id: &str, screenshots: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        display_number: "01".to_string(),
        title: format!("Project {}", id),
        tagline: "tagline".to_string(),
        problem: "problem".to_string(),
        solution: vec!["step one".to_string()],
        impact: "impact".to_string(),
        tags: vec!["Rust".to_string()],
        screenshots: if screenshots.is_empty() {
            None
        } else {
            Some(screenshots.iter().map(|s| s.to_string()).collect())
        },
        link: None,
        roi: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads_with_unique_ids() {
        let store = ContentStore::embedded().expect("embedded content is valid");
        assert_eq!(store.len(), 6);

        let ids: HashSet<&str> = store.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn embedded_content_keeps_authoring_order() {
        let store = ContentStore::embedded().unwrap();
        let numbers: Vec<&str> = store.all().iter().map(|p| p.display_number.as_str()).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn optional_sections_are_absent_when_missing() {
        let store = ContentStore::embedded().unwrap();

        let prompt = store.by_id("prompt-architect").unwrap();
        assert!(!prompt.has_gallery());
        assert!(prompt.roi.is_none());
        assert!(prompt.link.is_none());

        let builder = store.by_id("automated-provisioning-engine").unwrap();
        assert_eq!(builder.screenshots(), ["/DCO1.png", "/DCO2.png", "/DCO3.png"]);
        assert!(builder.link.is_some());
        let roi = builder.roi.as_ref().unwrap();
        assert!(roi.title.is_none());
        assert!(roi.metrics().is_empty());
    }

    #[test]
    fn lookup_of_unknown_id_is_none() {
        let store = ContentStore::embedded().unwrap();
        assert!(store.by_id("does-not-exist").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let records = vec![
            sample_project("alpha", &[]),
            sample_project("beta", &[]),
            sample_project("alpha", &["x.png"]),
        ];
        assert_eq!(
            ContentStore::from_records(records),
            Err(ContentError::DuplicateId { id: "alpha".to_string() })
        );
    }

    #[test]
    fn blank_ids_are_rejected() {
        let records = vec![sample_project("alpha", &[]), sample_project("  ", &[])];
        assert_eq!(
            ContentStore::from_records(records),
            Err(ContentError::EmptyId { position: 1 })
        );
    }

    #[test]
    fn empty_gallery_is_normalised_to_absent() {
        let mut record = sample_project("alpha", &[]);
        record.screenshots = Some(Vec::new());

        let store = ContentStore::from_records(vec![record]).unwrap();
        assert_eq!(store.all()[0].screenshots, None);
        assert!(!store.all()[0].has_gallery());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ContentStore::from_json("[{\"id\": 3}]").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn json_field_names_map_onto_record() {
        let raw = r#"[{
            "id": "solo",
            "number": "07",
            "title": "Solo",
            "tagline": "t",
            "problem": "p",
            "solution": ["s"],
            "impact": "i",
            "tags": ["a", "a"],
            "roi": { "metrics": [{ "label": "hours saved", "value": "5" }] }
        }]"#;
        let store = ContentStore::from_json(raw).unwrap();
        let solo = store.by_id("solo").unwrap();
        assert_eq!(solo.display_number, "07");
        assert_eq!(solo.tags, vec!["a", "a"]);
        assert_eq!(solo.roi.as_ref().unwrap().metrics()[0].value, "5");
    }
}
