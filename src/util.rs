use std::path::{Path, PathBuf};

/// Catalog files carry this extension; the stem is the locale code.
pub const CATALOG_EXTENSION: &str = "po";

/// Locale code of a catalog path, e.g. `po/en_GB.po` -> `en_GB`.
pub fn locale_from_path(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let stem = name.strip_suffix(CATALOG_EXTENSION)?.strip_suffix('.')?;
    (!stem.is_empty()).then_some(stem)
}

pub fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_is_the_file_stem() {
        assert_eq!(locale_from_path("po/de.po"), Some("de"));
        assert_eq!(locale_from_path("po/en_GB.po"), Some("en_GB"));
        assert_eq!(locale_from_path("zh_TW.po"), Some("zh_TW"));
    }

    #[test]
    fn non_catalog_paths_have_no_locale() {
        assert_eq!(locale_from_path("po/bleachbit.pot"), None);
        assert_eq!(locale_from_path("po/Makefile"), None);
        assert_eq!(locale_from_path("po/.po"), None);
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }

    #[test]
    fn plain_paths_are_not_expanded() {
        assert_eq!(expand_home(Path::new("/srv/repo")), PathBuf::from("/srv/repo"));
    }
}
