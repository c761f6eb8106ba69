use liga_core::LeagueSnapshot;
use liga_ports::{LeagueStore, StoreError, StoreResult};
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const LEAGUE_FILE: &str = "league.json";

/// League state as one JSON document under a data directory
///
/// Every save writes a temporary file next to the target and renames it
/// over the previous one, so readers see either the old or the new state.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use `data_dir/league.json`, creating the directory if needed
    pub fn open(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: dir.join(LEAGUE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeagueStore for JsonFileStore {
    fn load(&self) -> StoreResult<LeagueSnapshot> {
        match read_json(&self.path)? {
            Some(snapshot) => Ok(snapshot),
            None => {
                info!("No league file at {}, starting empty", self.path.display());
                Ok(LeagueSnapshot::default())
            }
        }
    }

    fn save(&self, snapshot: &LeagueSnapshot) -> StoreResult<()> {
        write_json_atomic(&self.path, snapshot)
    }
}

/// Read a JSON document; `None` when the file does not exist
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(Some(serde_json::from_str(&content)?))
}

/// Serialize to a sibling temp file, flush it and rename it over `path`
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = serde_json::to_vec_pretty(value)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|err| StoreError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
