use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::validate::WaitlistSubmission;

/// One backed-up submission: the validated fields plus the server-side
/// receipt timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    #[serde(flatten)]
    pub submission: WaitlistSubmission,
    pub submission_time: String,
}

/// Temporary reference assigned before any database confirmation, e.g.
/// `local-20250414-9f3b2c1a`.
pub fn generate_submission_id() -> String {
    format!(
        "local-{}-{}",
        Utc::now().format("%Y%m%d"),
        &Uuid::new_v4().to_string()[..8]
    )
}

pub fn ensure_backup_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

pub fn sanitize_restaurant_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Writes the submission to `<dir>/<YYYY-MM-DD>-<sanitized name>.json`.
/// This runs before every other sink; the file is the least-common-denominator
/// record of a signup when the database or email service is down.
pub fn save_submission_to_file(
    dir: &Path,
    submission: &WaitlistSubmission,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let filename = format!(
        "{}-{}.json",
        Utc::now().format("%Y-%m-%d"),
        sanitize_restaurant_name(&submission.restaurant_name)
    );
    let path = dir.join(filename);

    let record = BackupRecord {
        submission: submission.clone(),
        submission_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    std::fs::write(&path, serde_json::to_string_pretty(&record)?)?;

    Ok(path)
}

/// A missing backup directory means zero records, not an error.
pub fn load_all_submissions(dir: &Path) -> std::io::Result<Vec<BackupRecord>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let content = std::fs::read_to_string(&path)?;
            records.push(serde_json::from_str(&content)?);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> WaitlistSubmission {
        WaitlistSubmission {
            restaurant_name: "Cafe X".to_string(),
            owner_name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "555-123-4567".to_string(),
            restaurant_type: "cafe".to_string(),
            location: "NYC".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn temporary_id_embeds_date_and_prefix() {
        let id = generate_submission_id();
        let expected_prefix = format!("local-{}-", Utc::now().format("%Y%m%d"));
        assert!(id.starts_with(&expected_prefix), "unexpected id {id}");
        assert_eq!(id.len(), expected_prefix.len() + 8);
    }

    #[test]
    fn sanitizes_unsafe_path_characters() {
        assert_eq!(sanitize_restaurant_name("Cafe X"), "cafe-x");
        assert_eq!(sanitize_restaurant_name("Chez Rémy / 2"), "chez-r-my---2");
        assert_eq!(sanitize_restaurant_name("../etc"), "----etc");
    }

    #[test]
    fn written_record_is_reconstructible() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_submission_to_file(dir.path(), &submission()).unwrap();
        assert!(path.exists());

        let records = load_all_submissions(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].submission, submission());
        assert!(!records[0].submission_time.is_empty());
    }

    #[test]
    fn filename_is_namespaced_by_date_and_restaurant() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_submission_to_file(dir.path(), &submission()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        let expected = format!("{}-cafe-x.json", Utc::now().format("%Y-%m-%d"));
        assert_eq!(name, expected);
    }

    #[test]
    fn creates_backup_dir_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("waitlist-data");
        save_submission_to_file(&nested, &submission()).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn missing_dir_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_all_submissions(&dir.path().join("absent")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a record").unwrap();
        save_submission_to_file(dir.path(), &submission()).unwrap();
        let records = load_all_submissions(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
    }
}
