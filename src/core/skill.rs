use crate::utils::error::{Result, SkillError};
use regex::Regex;
use std::fs;
use std::path::Path;

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
pub const SKILL_FILE_NAME: &str = "SKILL.md";

const RESERVED_WORDS: [&str; 2] = ["anthropic", "claude"];
const NAME_PATTERN: &str = r"^[a-z0-9-]+$";
const XML_TAG_PATTERN: &str = r"<[^>]*>";

/// Skill identity parsed from the YAML frontmatter of SKILL.md.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
}

/// Checks that a directory is a valid Claude skill: it exists, contains a
/// SKILL.md, and the frontmatter passes all metadata rules.
pub fn validate_skill_directory(path: &Path) -> Result<SkillMetadata> {
    let info = fs::metadata(path).map_err(|e| SkillError::ValidationError {
        message: format!("skill path error: {}", e),
    })?;
    if !info.is_dir() {
        return Err(SkillError::ValidationError {
            message: "skill path must be a directory".to_string(),
        });
    }

    let skill_file = path.join(SKILL_FILE_NAME);
    if !skill_file.exists() {
        return Err(SkillError::ValidationError {
            message: format!("missing required file: {}", SKILL_FILE_NAME),
        });
    }

    let metadata = parse_skill_metadata(&skill_file)?;
    validate_metadata(&metadata)?;

    Ok(metadata)
}

/// Extracts name and description from the YAML frontmatter of a SKILL.md file.
pub fn parse_skill_metadata(skill_file: &Path) -> Result<SkillMetadata> {
    let contents = fs::read_to_string(skill_file)?;
    parse_frontmatter(&contents)
}

/// Parses the frontmatter block between the opening and closing `---` lines.
/// Lines without a `:` are skipped; unknown keys are ignored; values may be
/// quoted.
pub fn parse_frontmatter(contents: &str) -> Result<SkillMetadata> {
    let mut lines = contents.lines();

    match lines.next() {
        Some(first) if first.trim() == "---" => {}
        _ => {
            return Err(SkillError::MetadataError {
                message: "missing YAML frontmatter opening delimiter (---)".to_string(),
            })
        }
    }

    let mut metadata = SkillMetadata::default();
    let mut found_closing = false;

    for line in lines {
        if line.trim() == "---" {
            found_closing = true;
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim();
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');

        match key {
            "name" => metadata.name = value.to_string(),
            "description" => metadata.description = value.to_string(),
            _ => {}
        }
    }

    if !found_closing {
        return Err(SkillError::MetadataError {
            message: "missing YAML frontmatter closing delimiter (---)".to_string(),
        });
    }

    Ok(metadata)
}

/// Validates skill metadata against Claude's requirements.
pub fn validate_metadata(metadata: &SkillMetadata) -> Result<()> {
    let name_pattern = Regex::new(NAME_PATTERN).unwrap();
    let xml_tag_pattern = Regex::new(XML_TAG_PATTERN).unwrap();

    if metadata.name.is_empty() {
        return Err(validation_error("name is required"));
    }

    if metadata.name.len() > MAX_NAME_LENGTH {
        return Err(validation_error(&format!(
            "name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }

    if !name_pattern.is_match(&metadata.name) {
        return Err(validation_error(
            "name must contain only lowercase letters, numbers, and hyphens",
        ));
    }

    for reserved in RESERVED_WORDS {
        if metadata.name.to_lowercase().contains(reserved) {
            return Err(validation_error(&format!(
                "name cannot contain reserved word: {}",
                reserved
            )));
        }
    }

    if xml_tag_pattern.is_match(&metadata.name) {
        return Err(validation_error("name cannot contain XML tags"));
    }

    if metadata.description.is_empty() {
        return Err(validation_error("description is required"));
    }

    if metadata.description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(validation_error(&format!(
            "description exceeds maximum length of {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }

    if xml_tag_pattern.is_match(&metadata.description) {
        return Err(validation_error("description cannot contain XML tags"));
    }

    Ok(())
}

fn validation_error(message: &str) -> SkillError {
    SkillError::ValidationError {
        message: message.to_string(),
    }
}
