pub mod prefs;

pub use prefs::PrefsStorage;

use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .expect("Could not find config directory")
        .join("tada")
}
