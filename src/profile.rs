//! Profile content for the About card and its resolution into display rows.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::duration::{self, plural};

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub handle: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub details: Vec<Row>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub contact: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Row {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct Experience {
    pub label: String,
    pub since: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub rows: Vec<Row>,
}

/// Everything the renderer needs, already formatted.
#[derive(Debug, PartialEq, Eq)]
pub struct AboutCard {
    pub handle: String,
    pub sections: Vec<Section>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse profile {}", path.display()))?;
        debug!(
            handle = %profile.handle,
            experience = profile.experience.len(),
            "loaded profile"
        );
        Ok(profile)
    }

    /// Computes age and experience as of `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<AboutCard> {
        let mut main_rows = Vec::new();

        if let Some(birth) = &self.birth_date {
            let age = duration::age_since(birth, today).context("birth_date")?;
            if age < 0 {
                bail!("birth_date {birth} is after {today}");
            }
            main_rows.push(row("Age", format!("{age} year{}", plural(age as i64))));
        }
        main_rows.extend(self.details.iter().cloned());

        let mut experience_rows = Vec::with_capacity(self.experience.len());
        for entry in &self.experience {
            let elapsed = duration::experience_since(&entry.since, today)
                .with_context(|| format!("experience {:?}", entry.label))?;
            // Month precision, so a start later in the current month still counts as 0
            if elapsed.years < 0 {
                bail!(
                    "experience {:?} starts {}, after {today}",
                    entry.label,
                    entry.since
                );
            }
            experience_rows.push(row(&format!("Experience.{}", entry.label), elapsed.to_string()));
        }

        let mut sections = vec![Section {
            title: None,
            rows: main_rows,
        }];
        if !experience_rows.is_empty() {
            sections.push(Section {
                title: Some("Experience".to_string()),
                rows: experience_rows,
            });
        }
        if !self.contact.is_empty() {
            sections.push(Section {
                title: Some("Contact".to_string()),
                rows: self.contact.clone(),
            });
        }

        Ok(AboutCard {
            handle: self.handle.clone(),
            sections,
        })
    }
}

fn row(key: &str, value: String) -> Row {
    Row {
        key: key.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "handle": "jane@doe",
        "birth_date": "2000-03-15",
        "details": [{"key": "Role", "value": "Developer"}],
        "experience": [
            {"label": "Rust", "since": "2020-08-01"},
            {"label": "Go", "since": "2023-01-20"}
        ],
        "contact": [{"key": "Email", "value": "jane@example.com"}]
    }"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.handle, "jane@doe");
        assert_eq!(profile.experience.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Profile::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read profile"));
    }

    #[test]
    fn test_resolve_rows() {
        let profile: Profile = serde_json::from_str(SAMPLE).unwrap();
        let card = profile.resolve(today()).unwrap();

        assert_eq!(card.handle, "jane@doe");
        assert_eq!(card.sections.len(), 3);
        assert_eq!(card.sections[0].rows[0], row("Age", "23 years".to_string()));
        assert_eq!(card.sections[0].rows[1], row("Role", "Developer".to_string()));
        assert_eq!(card.sections[1].title.as_deref(), Some("Experience"));
        assert_eq!(
            card.sections[1].rows,
            vec![
                row("Experience.Rust", "2 years, 10 months".to_string()),
                row("Experience.Go", "5 months".to_string()),
            ]
        );
        assert_eq!(card.sections[2].title.as_deref(), Some("Contact"));
    }

    #[test]
    fn test_minimal_profile() {
        let profile: Profile = serde_json::from_str(r#"{"handle": "x"}"#).unwrap();
        let card = profile.resolve(today()).unwrap();
        assert_eq!(card.sections.len(), 1);
        assert!(card.sections[0].rows.is_empty());
    }

    #[test]
    fn test_invalid_date_names_the_field() {
        let profile: Profile = serde_json::from_str(
            r#"{"handle": "x", "experience": [{"label": "Rust", "since": "2020-02-30"}]}"#,
        )
        .unwrap();
        let err = profile.resolve(today()).unwrap_err();
        assert!(format!("{err:#}").contains("\"Rust\""));
    }

    #[test]
    fn test_invalid_birth_date_names_the_field() {
        let profile: Profile =
            serde_json::from_str(r#"{"handle": "x", "birth_date": "1992-14-01"}"#).unwrap();
        let err = profile.resolve(today()).unwrap_err();
        assert!(format!("{err:#}").contains("birth_date"));

        let profile: Profile =
            serde_json::from_str(r#"{"handle": "x", "birth_date": "2023-06-02"}"#).unwrap();
        let err = profile.resolve(today()).unwrap_err();
        assert!(format!("{err:#}").contains("birth_date"));
    }

    #[test]
    fn test_age_of_one_is_singular() {
        let profile: Profile =
            serde_json::from_str(r#"{"handle": "x", "birth_date": "2022-06-01"}"#).unwrap();
        let card = profile.resolve(today()).unwrap();
        assert_eq!(card.sections[0].rows[0], row("Age", "1 year".to_string()));
    }

    #[test]
    fn test_start_later_this_month_counts_as_zero() {
        let profile: Profile = serde_json::from_str(
            r#"{"handle": "x", "experience": [{"label": "Zig", "since": "2023-06-20"}]}"#,
        )
        .unwrap();
        let card = profile.resolve(today()).unwrap();
        assert_eq!(
            card.sections[1].rows,
            vec![row("Experience.Zig", "0 months".to_string())]
        );
    }

    #[test]
    fn test_future_dates_rejected() {
        let profile: Profile =
            serde_json::from_str(r#"{"handle": "x", "birth_date": "2030-01-01"}"#).unwrap();
        assert!(profile.resolve(today()).is_err());

        let profile: Profile = serde_json::from_str(
            r#"{"handle": "x", "experience": [{"label": "Zig", "since": "2023-07-01"}]}"#,
        )
        .unwrap();
        assert!(profile.resolve(today()).is_err());
    }
}
