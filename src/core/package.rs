use crate::core::skill::{self, SkillMetadata};
use crate::utils::error::{Result, SkillError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::{FileOptions, ZipWriter};
use zip::ZipArchive;

pub const SKILL_MEDIA_TYPE: &str = "application/vnd.claude.skill.v1+zip";

/// Archive entry holding the skill labels. Starts with a dot so that
/// re-packing an unpacked skill skips it along with other hidden files.
pub const CONFIG_ENTRY_NAME: &str = ".claude-skill-config.json";

const LABEL_SKILL_NAME: &str = "com.claude.skill.name";
const LABEL_SKILL_DESCRIPTION: &str = "com.claude.skill.description";

/// Artifact config stored inside the archive, mirroring OCI image labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(rename = "mediaType")]
    pub media_type: String,
    pub labels: HashMap<String, String>,
}

impl ArtifactConfig {
    pub fn from_metadata(metadata: &SkillMetadata) -> Self {
        let mut labels = HashMap::new();
        labels.insert(
            "org.opencontainers.image.title".to_string(),
            metadata.name.clone(),
        );
        labels.insert(
            "org.opencontainers.image.description".to_string(),
            metadata.description.clone(),
        );
        labels.insert("com.claude.skill.version".to_string(), "v1".to_string());
        labels.insert(LABEL_SKILL_NAME.to_string(), metadata.name.clone());
        labels.insert(
            LABEL_SKILL_DESCRIPTION.to_string(),
            metadata.description.clone(),
        );

        Self {
            media_type: SKILL_MEDIA_TYPE.to_string(),
            labels,
        }
    }

    pub fn skill_name(&self) -> Option<&str> {
        self.labels.get(LABEL_SKILL_NAME).map(String::as_str)
    }

    pub fn skill_description(&self) -> Option<&str> {
        self.labels.get(LABEL_SKILL_DESCRIPTION).map(String::as_str)
    }
}

/// Packages a skill directory into an archive at `archive_path`.
///
/// The directory is validated first; hidden files and directories (like
/// `.git`) are skipped, matching what gets shared when a skill is published.
pub fn pack_skill(skill_path: &Path, archive_path: &Path) -> Result<SkillMetadata> {
    let metadata = skill::validate_skill_directory(skill_path)?;

    let archive_data = {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let config = ArtifactConfig::from_metadata(&metadata);
        zip.start_file::<_, ()>(CONFIG_ENTRY_NAME, FileOptions::default())?;
        zip.write_all(serde_json::to_string_pretty(&config)?.as_bytes())?;

        add_directory(&mut zip, skill_path, skill_path)?;

        let cursor = zip.finish()?;
        cursor.into_inner()
    };

    if let Some(parent) = archive_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(archive_path, archive_data)?;

    Ok(metadata)
}

fn add_directory(zip: &mut ZipWriter<Cursor<Vec<u8>>>, root: &Path, dir: &Path) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    // deterministic entry order across runs
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            add_directory(zip, root, &path)?;
        } else if file_type.is_file() {
            let relative = path.strip_prefix(root).map_err(|_| SkillError::PackageError {
                message: format!("file is outside the skill directory: {}", path.display()),
            })?;

            zip.start_file::<_, ()>(
                relative.to_string_lossy().into_owned(),
                FileOptions::default(),
            )?;
            let mut file = fs::File::open(&path)?;
            std::io::copy(&mut file, zip)?;
        }
    }

    Ok(())
}

/// Extracts a skill archive into a directory and validates the result.
///
/// When `dest` is `None` the skill is extracted to
/// `~/.claude/skills/<skill-name>`, taking the name from the archive labels.
/// The destination must not already exist.
pub fn unpack_skill(archive_path: &Path, dest: Option<&Path>) -> Result<PathBuf> {
    let data = fs::read(archive_path)?;
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    let config = read_config(&mut archive)?;

    let dest_path = match dest {
        Some(path) => path.to_path_buf(),
        None => {
            let name = config.skill_name().ok_or_else(|| SkillError::PackageError {
                message: "cannot determine skill name from archive metadata".to_string(),
            })?;
            personal_skills_dir()?.join(name)
        }
    };

    if dest_path.exists() {
        return Err(SkillError::PackageError {
            message: format!("destination path already exists: {}", dest_path.display()),
        });
    }
    fs::create_dir_all(&dest_path)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.name() == CONFIG_ENTRY_NAME {
            continue;
        }

        // enclosed_name rejects paths escaping the destination
        let relative = entry
            .enclosed_name()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| SkillError::PackageError {
                message: format!("illegal file path: {}", entry.name()),
            })?;
        let target = dest_path.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut output = fs::File::create(&target)?;
        std::io::copy(&mut entry, &mut output)?;
    }

    skill::validate_skill_directory(&dest_path)?;

    Ok(dest_path)
}

/// Reads the artifact config from an archive without extracting it.
pub fn read_archive_config(archive_path: &Path) -> Result<ArtifactConfig> {
    let data = fs::read(archive_path)?;
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    read_config(&mut archive)
}

fn read_config<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<ArtifactConfig> {
    let mut entry =
        archive
            .by_name(CONFIG_ENTRY_NAME)
            .map_err(|_| SkillError::PackageError {
                message: "archive is missing the skill config entry".to_string(),
            })?;

    let mut contents = String::new();
    entry.read_to_string(&mut contents)?;

    Ok(serde_json::from_str(&contents)?)
}

fn personal_skills_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| SkillError::PackageError {
        message: "failed to get home directory".to_string(),
    })?;
    Ok(PathBuf::from(home).join(".claude").join("skills"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_skill_labels() {
        let metadata = SkillMetadata {
            name: "pdf-analyzer".to_string(),
            description: "Analyzes PDF files".to_string(),
        };
        let config = ArtifactConfig::from_metadata(&metadata);

        assert_eq!(config.media_type, SKILL_MEDIA_TYPE);
        assert_eq!(config.skill_name(), Some("pdf-analyzer"));
        assert_eq!(config.skill_description(), Some("Analyzes PDF files"));
        assert_eq!(
            config.labels.get("com.claude.skill.version"),
            Some(&"v1".to_string())
        );
    }

    #[test]
    fn config_round_trips_through_json() {
        let metadata = SkillMetadata {
            name: "my-skill".to_string(),
            description: "desc".to_string(),
        };
        let config = ArtifactConfig::from_metadata(&metadata);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ArtifactConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.skill_name(), Some("my-skill"));
    }
}
