use crate::paths;

const CONFIG_FILE: &str = "blip.toml";

/// Load config file content from CWD first, then the user config directory
///
/// Searches for:
/// 1. `./blip.toml`
/// 2. `~/.config/blip/config.toml` (platform equivalent)
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    match paths::app_config_path() {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        },
        Err(e) => {
            log::debug!("No config directory available: {}", e);
            None
        }
    }
}
