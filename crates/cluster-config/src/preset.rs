//! Named presets derived from single-value attribute files
//!
//! A preset is never stored as a whole. It is assembled on demand from up to
//! two files in the config directory, `<preset>.mastercount` and
//! `<preset>.workercount`, each holding one base-10 integer. A missing file
//! means the attribute is inherited; anything else in the directory is
//! ignored.

use crate::{Error, Result};
use cluster_fs::{NormalizedPath, io, validate_path_identifier};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;

/// Preset whose files replace the built-in default tier
pub const DEFAULT_PRESET: &str = "default";

const PARSE_DETAIL: &str = "expected integer";

/// A single configurable attribute of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    MasterCount,
    WorkerCount,
}

impl Attribute {
    pub const ALL: [Attribute; 2] = [Attribute::MasterCount, Attribute::WorkerCount];

    /// File extension holding this attribute
    pub fn extension(&self) -> &'static str {
        match self {
            Self::MasterCount => "mastercount",
            Self::WorkerCount => "workercount",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.extension() == extension)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Path of the file holding `attribute` for `preset` inside `dir`
pub fn attribute_path(dir: &NormalizedPath, preset: &str, attribute: Attribute) -> NormalizedPath {
    dir.join(&format!("{preset}.{}", attribute.extension()))
}

/// Check that a preset name is usable as a file-name component
pub fn validate_preset_name(name: &str) -> Result<()> {
    validate_path_identifier(name, "Preset name").map_err(|reason| Error::InvalidPresetName {
        name: name.to_string(),
        reason,
    })
}

/// Read one attribute file.
///
/// Returns `None` when `path` is not a regular file, including when it is
/// removed between the check and the read. Surrounding whitespace is
/// tolerated; any other non-integer content is an error.
pub fn read_attribute(path: &NormalizedPath) -> Result<Option<i64>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(cluster_fs::Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!(%path, "attribute file disappeared before it was read");
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::ErrorWhileProcessing {
                path: path.clone(),
                detail: match e {
                    cluster_fs::Error::Io { source, .. } => source.to_string(),
                    other => other.to_string(),
                },
            });
        }
    };

    parse_count(&content)
        .map(Some)
        .ok_or_else(|| Error::ErrorWhileProcessing {
            path: path.clone(),
            detail: PARSE_DETAIL.to_string(),
        })
}

fn parse_count(content: &str) -> Option<i64> {
    content.trim().parse::<i64>().ok()
}

/// Attribute values found on disk for one preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetFiles {
    pub master_count: Option<i64>,
    pub worker_count: Option<i64>,
}

impl PresetFiles {
    /// Load both attribute files of `preset` from `dir`.
    ///
    /// Stops at the first file that fails to parse.
    pub fn load(dir: &NormalizedPath, preset: &str) -> Result<Self> {
        let master_path = attribute_path(dir, preset, Attribute::MasterCount);
        let master_count = read_attribute(&master_path)?;
        let worker_path = attribute_path(dir, preset, Attribute::WorkerCount);
        let worker_count = read_attribute(&worker_path)?;

        tracing::trace!(
            %preset,
            ?master_count,
            ?worker_count,
            "loaded preset attribute files"
        );
        Ok(Self {
            master_count,
            worker_count,
        })
    }

    /// True when neither attribute file exists
    pub fn is_empty(&self) -> bool {
        self.master_count.is_none() && self.worker_count.is_none()
    }

    pub fn get(&self, attribute: Attribute) -> Option<i64> {
        match attribute {
            Attribute::MasterCount => self.master_count,
            Attribute::WorkerCount => self.worker_count,
        }
    }
}

/// A preset found in the config directory, with the raw values it defines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_count: Option<i64>,
}

/// Collect every preset with at least one attribute file in `dir`.
///
/// Files with other extensions or with stems that are not valid preset
/// names are skipped. A preset with an unreadable or unparsable attribute
/// file cannot be resolved, so it is left out with a warning while the rest
/// are still listed. A missing directory has no presets.
pub fn scan_presets(dir: &NormalizedPath) -> Result<Vec<PresetSummary>> {
    let mut found: BTreeMap<String, PresetFiles> = BTreeMap::new();
    let mut broken: BTreeSet<String> = BTreeSet::new();

    for file in io::list_files(dir)? {
        let Some(attribute) = file.extension().and_then(Attribute::from_extension) else {
            continue;
        };
        let Some(stem) = file.file_stem() else {
            continue;
        };
        if validate_path_identifier(stem, "Preset name").is_err() {
            tracing::debug!(path = %file, "skipping attribute file with unusable preset name");
            continue;
        }

        let value = match read_attribute(&file) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(preset = %stem, error = %e, "skipping preset with unusable attribute file");
                broken.insert(stem.to_string());
                continue;
            }
        };
        let entry = found.entry(stem.to_string()).or_default();
        match attribute {
            Attribute::MasterCount => entry.master_count = value,
            Attribute::WorkerCount => entry.worker_count = value,
        }
    }

    Ok(found
        .into_iter()
        .filter(|(name, files)| !broken.contains(name) && !files.is_empty())
        .map(|(name, files)| PresetSummary {
            name,
            master_count: files.master_count,
            worker_count: files.worker_count,
        })
        .collect())
}

/// Write the supplied attributes of `preset` into `dir`.
///
/// Values are not validated here; validation belongs to resolution so that
/// operators can stage presets before they are used.
pub fn write_preset(
    dir: &NormalizedPath,
    preset: &str,
    master_count: Option<i64>,
    worker_count: Option<i64>,
) -> Result<()> {
    validate_preset_name(preset)?;

    let values = [
        (Attribute::MasterCount, master_count),
        (Attribute::WorkerCount, worker_count),
    ];
    for (attribute, value) in values {
        if let Some(value) = value {
            let path = attribute_path(dir, preset, attribute);
            io::write_text(&path, &value.to_string())?;
            tracing::debug!(%path, value, "wrote preset attribute");
        }
    }
    Ok(())
}
