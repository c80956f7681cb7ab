//! Localised strings for medisuggester
//!
//! The string table is compiled in. Lookups fall back to English when a key
//! is missing for the requested locale, and to the key itself when English
//! has no entry either, so rendering never fails on a bad key.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Hi]
    }

    /// Language tag ("en", "hi")
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    /// String-table key of this language's button label
    pub fn label_key(&self) -> &'static str {
        match self {
            Locale::En => "english",
            Locale::Hi => "hindi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Locale::En),
            "hi" => Ok(Locale::Hi),
            other => bail!("Unsupported locale '{}' (expected 'en' or 'hi')", other),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("app_name", "MediSuggester"),
    ("welcome_title", "Welcome"),
    ("symptom_checker", "Symptom Checker"),
    ("medicines", "Medicines"),
    ("lab_analyzer", "Lab Report Analyzer"),
    ("reminders", "Reminders"),
    ("records", "Health Records"),
    ("settings", "Settings"),
    (
        "disclaimer",
        "This app does not provide medical advice. Always consult a qualified doctor.",
    ),
    ("coming_soon", "Coming soon"),
    ("language", "Language"),
    ("english", "English"),
    ("hindi", "हिन्दी"),
    ("hint.home", "[j/k] Navigate  [Enter] Open  [1-6] Jump  [q] Quit"),
    ("hint.placeholder", "[Esc] Back  [q] Quit"),
    ("hint.settings", "[h/l] Choose  [Enter] Apply  [Esc] Back  [q] Quit"),
    ("flash.locale_saved", "Language saved"),
    ("flash.save_failed", "Could not save settings"),
];

const HI: &[(&str, &str)] = &[
    ("app_name", "मेडीसजेस्टर"),
    ("welcome_title", "स्वागत है"),
    ("symptom_checker", "लक्षण जाँच"),
    ("medicines", "दवाइयाँ"),
    ("lab_analyzer", "लैब रिपोर्ट विश्लेषक"),
    ("reminders", "अनुस्मारक"),
    ("records", "स्वास्थ्य रिकॉर्ड"),
    ("settings", "सेटिंग्स"),
    (
        "disclaimer",
        "यह ऐप चिकित्सा सलाह नहीं देता। हमेशा किसी योग्य डॉक्टर से परामर्श करें।",
    ),
    ("coming_soon", "जल्द आ रहा है"),
    ("language", "भाषा"),
    ("hint.home", "[j/k] चुनें  [Enter] खोलें  [1-6] सीधे जाएँ  [q] बाहर"),
    ("hint.placeholder", "[Esc] वापस  [q] बाहर"),
    ("hint.settings", "[h/l] चुनें  [Enter] लागू करें  [Esc] वापस  [q] बाहर"),
    ("flash.locale_saved", "भाषा सहेजी गई"),
    ("flash.save_failed", "सेटिंग्स सहेजी नहीं जा सकीं"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Hi => HI,
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Translate `key` into `locale`
pub fn t(key: &str, locale: Locale) -> &str {
    lookup(locale, key)
        .or_else(|| lookup(Locale::En, key))
        .unwrap_or(key)
}
