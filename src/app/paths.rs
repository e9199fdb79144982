// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! `settings.toml` lives in the first directory that resolves, checking
//! an explicit override, then the `--config-dir` flag, then the
//! `VITRINE_CONFIG_DIR` environment variable, then the platform config
//! directory (`~/.config/Vitrine/` on Linux).

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "Vitrine";

/// Environment variable pointing at an alternative config directory.
pub const ENV_CONFIG_DIR: &str = "VITRINE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag for the rest of the process.
///
/// # Panics
///
/// Panics when called a second time.
pub fn set_cli_config_dir(flag: Option<String>) {
    CLI_CONFIG_DIR
        .set(flag.map(PathBuf::from))
        .expect("CLI config dir already set");
}

/// Resolves the config directory, preferring `explicit` when given.
///
/// Returns `None` only when every source is absent, including the
/// platform default from the `dirs` crate.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    if let Some(flag) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(flag);
    }

    match std::env::var(ENV_CONFIG_DIR) {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::config_dir().map(|base| base.join(APP_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes env-var manipulation across tests.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_default_is_namespaced_and_absolute() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        // A headless host may have no config dir at all; nothing to
        // assert in that case.
        if let Some(dir) = config_dir(None) {
            assert!(dir.is_absolute());
            assert!(dir.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn env_var_replaces_the_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/srv/vitrine-settings");

        assert_eq!(
            config_dir(None),
            Some(PathBuf::from("/srv/vitrine-settings"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_counts_as_unset() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(dir) = config_dir(None) {
            assert!(dir.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn explicit_path_wins_over_everything() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/environment");

        let explicit = PathBuf::from("/from/caller");
        assert_eq!(config_dir(Some(explicit.clone())), Some(explicit));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
