//! # File I/O Module
//!
//! Persists history and settings with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Serialize concurrent writers (two terminals, one history)
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Each file is pretty JSON wrapped in a versioned envelope:
//!
//! ```json
//! { "version": "0.1.0", "data": { ... } }
//! ```
//!
//! Files live in a per-user data directory:
//!
//! 1. an explicit path given by the caller (`--data-dir`)
//! 2. the `LAND_CALC_HOME` environment variable
//! 3. the platform data directory (e.g. `~/.local/share/jagga`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use land_core::file_io::Store;
//! use land_core::history::ConversionRecord;
//! use land_core::conversions::ConversionInput;
//! use land_core::units::AreaUnit;
//!
//! let store = Store::resolve(None)?;
//! let input = ConversionInput { value: 1.0, from: AreaUnit::Ropani, to: AreaUnit::Aana };
//!
//! // Load, modify and save under one lock
//! store.update_history(|history| history.push(ConversionRecord::new(&input, "16.0000 Aana")))?;
//! # Ok::<(), land_core::errors::LandError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fs2::FileExt;
use semver::Version;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{LandError, LandResult};
use crate::history::History;
use crate::settings::Settings;

/// Current schema version for saved files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LAND_CALC_HOME";

const HISTORY_FILE: &str = "history.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: &'a str,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    version: String,
    data: T,
}

/// Exclusive lock on a data file, released when dropped.
///
/// The OS lock (via fs2) is held on a sibling `.lock` file so the data file
/// itself can be replaced by rename while the lock is held.
pub struct FileLock {
    path: PathBuf,
    _lock_file: File,
}

impl FileLock {
    /// Acquire an exclusive lock on `path`, waiting for any other holder to
    /// release it.
    pub fn acquire(path: &Path) -> LandResult<Self> {
        let lock_file = open_lock_file(path)?;

        lock_file.lock_exclusive().map_err(|e| {
            LandError::file_error("lock", lock_path_for(path).display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            path: path.to_path_buf(),
            _lock_file: lock_file,
        })
    }

    /// Acquire an exclusive lock on `path` without blocking.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(LandError::FileLocked)` - Another process holds the lock
    pub fn try_acquire(path: &Path) -> LandResult<Self> {
        let lock_file = open_lock_file(path)?;

        lock_file.try_lock_exclusive().map_err(|_| {
            tracing::warn!(path = %path.display(), "data file is locked by another process");
            LandError::file_locked(path.display().to_string())
        })?;

        Ok(FileLock {
            path: path.to_path_buf(),
            _lock_file: lock_file,
        })
    }

    /// Path of the data file this lock guards
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_lock_file(path: &Path) -> LandResult<File> {
    let lock_path = lock_path_for(path);
    OpenOptions::new()
        .write(true)
        .read(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| LandError::file_error("create lock", lock_path.display().to_string(), e.to_string()))
}

/// Get the lock file path for a data file
fn lock_path_for(path: &Path) -> PathBuf {
    let mut lock_path = path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// Save a value to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the value inside a versioned envelope
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename over the target (atomic on most filesystems)
///
/// Callers that read-modify-write should hold a [`FileLock`] around the
/// whole sequence.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> LandResult<()> {
    let json = serde_json::to_string_pretty(&EnvelopeRef {
        version: SCHEMA_VERSION,
        data: value,
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        LandError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        LandError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        LandError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        LandError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "saved");
    Ok(())
}

/// Load a value saved by [`save_json`].
///
/// # Returns
///
/// * `Ok(T::default())` - The file does not exist yet
/// * `Ok(T)` - Successfully loaded
/// * `Err(LandError::VersionMismatch)` - File version is incompatible
/// * `Err(LandError::SerializationError)` - Invalid JSON
/// * `Err(LandError::FileError)` - I/O error
pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> LandResult<T> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved file, using defaults");
            return Ok(T::default());
        }
        Err(e) => return Err(LandError::file_error("open", path.display().to_string(), e.to_string())),
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| LandError::file_error("read", path.display().to_string(), e.to_string()))?;

    let envelope: Envelope<T> = serde_json::from_str(&contents).map_err(|e| LandError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&envelope.version)?;

    tracing::debug!(path = %path.display(), version = %envelope.version, "loaded");
    Ok(envelope.data)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> LandResult<()> {
    let mismatch = || LandError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file = Version::parse(file_version).map_err(|_| mismatch())?;
    let current = Version::parse(SCHEMA_VERSION).map_err(|_| mismatch())?;

    // Major version must match
    if file.major != current.major {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current.major == 0 && file.minor > current.minor {
        return Err(mismatch());
    }

    Ok(())
}

/// Handle on the data directory holding history and settings.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> LandResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| LandError::file_error("create directory", dir.display().to_string(), e.to_string()))?;
        Ok(Store { dir })
    }

    /// Open the store at the explicit path, `LAND_CALC_HOME`, or the
    /// platform data directory, in that order.
    pub fn resolve(explicit: Option<&Path>) -> LandResult<Self> {
        let dir = match explicit {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(path) if !path.is_empty() => PathBuf::from(path),
                _ => default_data_dir()?,
            },
        };
        tracing::debug!(dir = %dir.display(), "using data directory");
        Store::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn load_history(&self) -> LandResult<History> {
        let mut history: History = load_json(&self.history_path())?;
        history.enforce_limit();
        Ok(history)
    }

    /// Load, modify and save the history while holding its lock.
    ///
    /// Waits for a concurrent writer to finish rather than dropping the
    /// update.
    ///
    /// Returns the history as saved.
    pub fn update_history<F>(&self, update: F) -> LandResult<History>
    where
        F: FnOnce(&mut History),
    {
        let path = self.history_path();
        let _lock = FileLock::acquire(&path)?;

        let mut history = self.load_history()?;
        update(&mut history);
        save_json(&history, &path)?;
        Ok(history)
    }

    pub fn load_settings(&self) -> LandResult<Settings> {
        load_json(&self.settings_path())
    }

    pub fn save_settings(&self, settings: &Settings) -> LandResult<()> {
        let path = self.settings_path();
        let _lock = FileLock::acquire(&path)?;
        save_json(settings, &path)
    }
}

fn default_data_dir() -> LandResult<PathBuf> {
    ProjectDirs::from("np", "Jagga", "jagga")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LandError::Internal {
            message: format!("could not determine a home directory; set {}", DATA_DIR_ENV),
        })
}
