//! vitae-model - Resume profile record
//!
//! This crate provides the typed `Profile` record that every other vitae
//! crate consumes, together with the loader that reads it from a JSON file.
//!
//! # Example
//!
//! ```
//! use vitae_model::Profile;
//!
//! let profile = Profile::from_json_str(r#"{"name": "Jane Doe"}"#).unwrap();
//! assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
//! assert!(!profile.is_empty());
//! ```

pub mod error;
pub mod loader;
pub mod profile;

pub use error::{LoadError, Result};
pub use loader::{load_profile, try_load_profile};
pub use profile::{Contact, Education, Experience, Profile, Project, Skills};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
