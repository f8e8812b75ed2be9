//! Locale resource bundles: key lookup with named-placeholder
//! interpolation and default-language fallback.

use std::collections::HashMap;

/// Per-language key -> template maps with a designated default language.
///
/// Lookup order: requested language, then the default language, then the
/// key itself (so a missing translation is visible rather than blank).
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    default_lang: String,
    resources: HashMap<String, HashMap<String, String>>,
}

impl LocaleBundle {
    /// Create an empty bundle falling back to `default_lang`.
    pub fn new(default_lang: impl Into<String>) -> Self {
        Self {
            default_lang: default_lang.into(),
            resources: HashMap::new(),
        }
    }

    /// Register one template under `lang` / `key`. Templates may contain
    /// `{{name}}` placeholders.
    pub fn insert(&mut self, lang: &str, key: &str, template: &str) {
        self.resources
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
    }

    /// Whether any keys are registered for `lang`.
    pub fn has_language(&self, lang: &str) -> bool {
        self.resources.contains_key(lang)
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.resources.get(lang)?.get(key).map(String::as_str)
    }

    /// Resolve `key` in `lang`, interpolating `{{name}}` placeholders from
    /// `args`. Falls back to the default language when the language or key
    /// is missing; returns the key itself when no language has it.
    pub fn translate(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        let template = self
            .lookup(lang, key)
            .or_else(|| self.lookup(&self.default_lang, key));
        match template {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }

    /// The bundle shipped with the application: English plus Shona (`sn`)
    /// and Ndebele (`nd`), English as the fallback.
    pub fn finance_plus() -> Self {
        let mut bundle = Self::new("en");
        let en = [
            ("appTitle", "Finance Plus ERP"),
            ("welcome", "Welcome back, {{name}}"),
            ("dashboard", "Dashboard"),
            ("settings", "Settings"),
            ("users", "Users"),
            ("currencySettings", "Currency Settings"),
            ("mobileMoney", "Mobile Money"),
            ("zimraCompliance", "ZIMRA Compliance"),
        ];
        let sn = [
            ("appTitle", "Finance Plus ERP"),
            ("welcome", "Mauya zvakare, {{name}}"),
            ("dashboard", "Dheshibhodhi"),
            ("settings", "Zvirongwa"),
            ("users", "Vashandisi"),
            ("currencySettings", "Marongero eMari"),
            ("mobileMoney", "Mobile Money"),
            ("zimraCompliance", "Kutevedza ZIMRA"),
        ];
        let nd = [
            ("appTitle", "Finance Plus ERP"),
            ("welcome", "Siyakwamukela futhi, {{name}}"),
            ("dashboard", "Ibhodi"),
            ("settings", "Izilungiselelo"),
            ("users", "Abasebenzisi"),
            ("currencySettings", "Izilungiselelo Zemali"),
            ("mobileMoney", "Mobile Money"),
            ("zimraCompliance", "Ukulandela ZIMRA"),
        ];
        for (key, template) in en {
            bundle.insert("en", key, template);
        }
        for (key, template) in sn {
            bundle.insert("sn", key, template);
        }
        for (key, template) in nd {
            bundle.insert("nd", key, template);
        }
        bundle
    }
}

/// Replace each `{{name}}` token with its value from `args`. Unmatched
/// placeholders stay in the output verbatim.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}
