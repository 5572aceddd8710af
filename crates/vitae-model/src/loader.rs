//! Profile loader
//!
//! Reads a profile from a JSON file. `load_profile` never fails: a missing or
//! malformed source degrades to the empty profile after logging why, and
//! callers branch on `Profile::is_empty`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{LoadError, Result};
use crate::profile::Profile;

/// Read and parse a profile, reporting the reason on failure
pub fn try_load_profile(path: impl AsRef<Path>) -> Result<Profile> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(display.clone()),
        _ => LoadError::Io {
            path: display.clone(),
            source,
        },
    })?;

    let profile = Profile::from_json_str(&content).map_err(|source| LoadError::Parse {
        path: display.clone(),
        source,
    })?;

    debug!(path = %path.display(), "profile loaded");
    Ok(profile)
}

/// Read a profile, substituting the empty profile on any failure
pub fn load_profile(path: impl AsRef<Path>) -> Profile {
    match try_load_profile(path) {
        Ok(profile) => profile,
        Err(err) => {
            warn!("Error: {}", err);
            Profile::default()
        }
    }
}
