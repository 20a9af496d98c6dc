//! Native display names for locale codes and links to the translation portal.
//!
//! The name table is loaded once per process and shared read-only after
//! that; unknown codes render as the code itself.

use crate::error::{PoError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

pub const DEFAULT_PORTAL_URL: &str = "https://hosted.weblate.org/projects/bleachbit/main/{locale}/";

/// Placeholder in the portal URL template replaced by the locale code.
pub const LOCALE_PLACEHOLDER: &str = "{locale}";

static LOCALE_NAMES: OnceLock<LocaleNames> = OnceLock::new();

const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "العربية"),
    ("ast", "Asturianu"),
    ("be", "Беларуская мова"),
    ("bg", "български език"),
    ("bn", "বাংলা"),
    ("bs", "bosanski jezik"),
    ("ca", "català"),
    ("cs", "česky"),
    ("da", "dansk"),
    ("de", "Deutsch"),
    ("el", "Ελληνικά"),
    ("en", "English"),
    ("en_AU", "Australian English"),
    ("en_CA", "Canadian English"),
    ("en_GB", "British English"),
    ("eo", "Esperanto"),
    ("es", "Español"),
    ("et", "eesti"),
    ("eu", "euskara"),
    ("fa", "فارسی"),
    ("fi", "suomen kieli"),
    ("fo", "føroyskt"),
    ("fr", "Français"),
    ("gl", "galego"),
    ("he", "עברית"),
    ("hi", "हिन्दी"),
    ("hr", "Hrvatski"),
    ("hu", "Magyar"),
    ("hy", "Հայերեն"),
    ("ia", "Interlingua"),
    ("id", "Indonesian"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("ku", "Kurdî"),
    ("ky", "Кыргызча"),
    ("lt", "lietuvių kalba"),
    ("lv", "latviešu valoda"),
    ("ms", "بهاس ملايو"),
    ("my", "ဗမာစာ"),
    ("nb", "Norsk bokmål"),
    ("nds", "Plattdüütsch"),
    ("nl", "Nederlands"),
    ("nn", "Norsk nynorsk"),
    ("pl", "polski"),
    ("pt", "Português"),
    ("pt_BR", "Português do Brasil"),
    ("ro", "română"),
    ("ru", "Pусский"),
    ("si", "සිංහල"),
    ("sk", "slovenčina"),
    ("sl", "slovenski jezik"),
    ("sq", "Shqip"),
    ("sr", "српски језик"),
    ("sv", "svenska"),
    ("ta", "தமிழ்"),
    ("th", "ไทย"),
    ("tr", "Türkçe"),
    ("ug", "Uyƣurqə"),
    ("uk", "Українська"),
    ("uz", "Oʻzbek"),
    ("vi", "Tiếng Việt"),
    ("zh_CN", "中文"),
    ("zh_TW", "中文 (台灣)"),
];

#[derive(Debug, Clone, Default)]
pub struct LocaleNames {
    names: HashMap<String, String>,
}

impl LocaleNames {
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// The built-in table extended by a JSON object of `code -> name`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PoError::Configuration(format!("Cannot read locale names {}: {e}", path.display()))
        })?;
        let overrides: HashMap<String, String> = serde_json::from_str(&text).map_err(|e| {
            PoError::Configuration(format!("Invalid locale names {}: {e}", path.display()))
        })?;
        debug!(count = overrides.len(), path = %path.display(), "loaded locale names");
        Ok(Self::builtin().with_overrides(overrides))
    }

    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.names.extend(overrides);
        self
    }

    pub fn name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }
}

/// Process-wide name table, built on first use. Later calls return the
/// table from the first call regardless of `overrides`.
pub fn names(overrides: Option<&Path>) -> Result<&'static LocaleNames> {
    if let Some(names) = LOCALE_NAMES.get() {
        return Ok(names);
    }
    let loaded = match overrides {
        Some(path) => LocaleNames::from_json_file(path)?,
        None => LocaleNames::builtin(),
    };
    Ok(LOCALE_NAMES.get_or_init(|| loaded))
}

/// Renders locale codes as portal links labelled with their display name.
#[derive(Debug, Clone, Copy)]
pub struct LocaleLinker<'a> {
    names: &'a LocaleNames,
    portal_url: &'a str,
}

impl<'a> LocaleLinker<'a> {
    pub fn new(names: &'a LocaleNames, portal_url: &'a str) -> Self {
        Self { names, portal_url }
    }

    pub fn name<'b>(&'b self, code: &'b str) -> &'b str {
        self.names.name(code)
    }

    pub fn url(&self, code: &str) -> String {
        self.portal_url.replace(LOCALE_PLACEHOLDER, code)
    }

    pub fn link(&self, code: &str) -> String {
        format!("<a href=\"{}\">{}</a>", self.url(code), self.name(code))
    }
}
