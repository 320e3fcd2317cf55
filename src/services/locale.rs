use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::app::Error;

/// Translation table keyed by source text
#[derive(Debug, Clone, Default)]
pub struct Locale {
    translations: HashMap<String, String>,
}

impl Locale {
    pub fn from_map(translations: HashMap<String, String>) -> Self {
        Self { translations }
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let translations: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { translations })
    }

    /// Load a translation file; unlike forum config, a named file must exist
    pub async fn load(path: &Path) -> Result<Self, Error> {
        if !tokio::fs::try_exists(path).await? {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let contents = tokio::fs::read_to_string(path).await?;
        let locale = Self::from_json_str(&contents)?;
        debug!(
            "Loaded {} translations from {}",
            locale.translations.len(),
            path.display()
        );
        Ok(locale)
    }

    /// Translated text for `code`, or `code` itself when no translation exists
    pub fn translate<'a>(&'a self, code: &'a str) -> &'a str {
        self.translations
            .get(code)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_falls_back_to_source() {
        let locale = Locale::from_json_str(r#"{"Hello": "Bonjour", "Blank": ""}"#).unwrap();
        assert_eq!(locale.translate("Hello"), "Bonjour");
        assert_eq!(locale.translate("Goodbye"), "Goodbye");
        assert_eq!(locale.translate("Blank"), "Blank");
        assert_eq!(Locale::default().translate("Hello"), "Hello");
    }

    #[test]
    fn test_missing_translation_file() {
        let result = tokio_test::block_on(Locale::load(Path::new("/nonexistent/locale.json")));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_rejects_non_string_values() {
        assert!(matches!(
            Locale::from_json_str(r#"{"Hello": 1}"#),
            Err(Error::Json(_))
        ));
    }
}
