//! Path helpers for the Zellij sandbox, where the host filesystem is mounted
//! under `/host`.

use std::path::PathBuf;

/// Returns the directory holding zshelf's trace export.
///
/// Located at `/host/.local/share/zellij/zshelf`. `/host` is the cwd of the
/// last focused terminal (or Zellij's start directory), which is normally the
/// user's home.
///
/// # Examples
///
/// ```
/// use zshelf::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zshelf"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zshelf")
}

/// Maps `~` and `~/...` onto the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use zshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zshelf.toml"), "/etc/zshelf.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_inside_path_is_untouched() {
        assert_eq!(expand_tilde("themes/~old.toml"), "themes/~old.toml");
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
    }
}
