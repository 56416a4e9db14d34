//! Data file loading: format detection, file discovery, deserialization, and
//! roster import.
//!
//! Alliance settings and roster exports may be written as RON, JSON, or
//! TOML. The format is picked from the file extension; a directory may hold
//! only one format per base name.

use gun1_roster::{PlayerId, PlayerRecord};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Base name of the roster file inside a data directory.
pub const ROSTER_FILE: &str = "roster";

/// TOML key holding the player array in a roster file.
pub const ROSTER_TOML_KEY: &str = "players";

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// `roster.*` (or another mandatory file) is absent from the data directory.
    #[error("no '{file}' data file in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// Extension is not one of `ron`, `toml`, `json`.
    #[error("{file} is not a .ron, .toml, or .json file")]
    UnsupportedFormat { file: PathBuf },

    #[error("both {a} and {b} exist; keep only one")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    #[error("could not read {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// Parsed fine, but a setting or record is unusable.
    #[error("{file}: {detail}")]
    Invalid { file: PathBuf, detail: String },

    #[error("player '{id}' appears twice in {file}")]
    DuplicatePlayer { file: PathBuf, id: PlayerId },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Formats and discovery
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

impl Format {
    /// Extensions in lookup order.
    const EXTENSIONS: [&'static str; 3] = ["ron", "toml", "json"];
}

/// Pick the format from a path's extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// The single `{base_name}.{ron,toml,json}` in `dir`, if there is one.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut present = Format::EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{base_name}.{ext}")))
        .filter(|path| path.exists());

    match (present.next(), present.next()) {
        (Some(a), Some(b)) => Err(DataLoadError::ConflictingFormats { a, b }),
        (found, _) => Ok(found),
    }
}

/// [`find_data_file`] for files the caller cannot do without.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, detail: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

fn read(path: &Path) -> Result<(Format, String), DataLoadError> {
    let format = detect_format(path)?;
    Ok((format, std::fs::read_to_string(path)?))
}

fn parse<T: DeserializeOwned>(path: &Path, format: Format, text: &str) -> Result<T, DataLoadError> {
    match format {
        Format::Ron => ron::from_str(text).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(text).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(text).map_err(|e| parse_error(path, e)),
    }
}

/// Parse a whole settings document.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let (format, text) = read(path)?;
    parse(path, format, &text)
}

/// Parse a list document. RON and JSON files hold a bare list; TOML has no
/// top-level arrays, so the list sits under `toml_key`.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    let (format, text) = read(path)?;
    if format != Format::Toml {
        return parse(path, format, &text);
    }

    let mut table: toml::Table = parse(path, format, &text)?;
    let Some(list) = table.remove(toml_key) else {
        return Err(parse_error(path, format!("no '{toml_key}' array")));
    };
    list.try_into()
        .map_err(|e: toml::de::Error| parse_error(path, e))
}

// ===========================================================================
// Roster import
// ===========================================================================

/// Load a roster export: a list of player records.
///
/// Levels and power figures are read leniently, so spreadsheet exports with
/// blanks or stray text still load. Records with a blank id or name are
/// rejected as [`DataLoadError::Invalid`], and repeated ids as
/// [`DataLoadError::DuplicatePlayer`].
pub fn load_roster(path: &Path) -> Result<Vec<PlayerRecord>, DataLoadError> {
    let players: Vec<PlayerRecord> = deserialize_list(path, ROSTER_TOML_KEY)?;

    let mut seen: HashSet<&PlayerId> = HashSet::with_capacity(players.len());
    for player in &players {
        player.validate().map_err(|e| DataLoadError::Invalid {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        if !seen.insert(&player.id) {
            return Err(DataLoadError::DuplicatePlayer {
                file: path.to_path_buf(),
                id: player.id.clone(),
            });
        }
    }

    log::debug!("Loaded {} players from {:?}", players.len(), path);
    Ok(players)
}

/// Load `roster.{ron,toml,json}` from `dir`. The file must exist.
pub fn load_roster_from_dir(dir: &Path) -> Result<Vec<PlayerRecord>, DataLoadError> {
    let path = require_data_file(dir, ROSTER_FILE)?;
    load_roster(&path)
}

// ===========================================================================
// Tests
// ===========================================================================
