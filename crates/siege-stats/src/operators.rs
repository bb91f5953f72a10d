//! Operator name canonicalization and image lookup
//!
//! Free-form operator names are folded into a canonical key (lowercase ASCII
//! alphanumerics, diacritics stripped) and looked up in a fixed table of
//! known operators. Unknown names resolve to nothing; no URL is ever guessed.

use once_cell::sync::Lazy;
use siege_common::OperatorPick;
use siege_config::{OperatorsConfig, DEFAULT_OPERATOR_IMAGE_BASE_URL};
use std::collections::HashMap;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Attacker asset stems.
const ATTACKERS: &[&str] = &[
    "sledge", "thatcher", "ash", "thermite", "twitch", "montagne", "glaz", "fuze", "blitz",
    "iq", "buck", "blackbeard", "capitao", "hibana", "jackal", "ying", "zofia", "dokkaebi",
    "lion", "finka", "maverick", "nomad", "gridlock", "nokk", "amaru", "kali", "iana", "ace",
    "zero", "flores", "osa", "sens", "grim", "brava", "ram", "deimos", "striker", "rauora",
];

/// Defender asset stems.
const DEFENDERS: &[&str] = &[
    "smoke", "mute", "castle", "pulse", "doc", "rook", "kapkan", "tachanka", "jager", "bandit",
    "frost", "valkyrie", "caveira", "echo", "mira", "lesion", "ela", "vigil", "maestro",
    "alibi", "clash", "kaid", "mozzie", "warden", "goyo", "wamai", "oryx", "melusi", "aruni",
    "thunderbird", "thorn", "azami", "solis", "fenrir", "tubarao", "sentry", "skopos",
];

/// Alternate spellings, keyed by their canonical form.
const ALIASES: &[(&str, &str)] = &[
    ("jaeger", "jager"),
    // `ø` has no decomposition and is dropped by canonicalization.
    ("nkk", "nokk"),
    ("noekk", "nokk"),
    ("lordtachanka", "tachanka"),
    ("monty", "montagne"),
];

static OPERATOR_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    ATTACKERS
        .iter()
        .chain(DEFENDERS)
        .map(|stem| (*stem, *stem))
        .chain(ALIASES.iter().copied())
        .collect()
});

/// Fold a raw operator name into its canonical key.
///
/// Trims, lowercases, strips diacritics, expands `ß` to `ss` and drops every
/// character outside `[a-z0-9]`. `"Jäger"` and `"JAGER"` both become `"jager"`.
pub fn canonical_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for c in raw.trim().to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'ß' => key.push_str("ss"),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() => key.push(c),
            _ => {}
        }
    }
    key
}

/// Asset stem for a raw operator name, if it names a known operator.
pub fn asset_stem(raw: &str) -> Option<&'static str> {
    let key = canonical_key(raw);
    if key.is_empty() {
        return None;
    }
    OPERATOR_TABLE.get(key.as_str()).copied()
}

/// Resolves operator names to image URLs under a configurable base.
#[derive(Debug, Clone)]
pub struct OperatorCatalog {
    base_url: String,
}

impl Default for OperatorCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATOR_IMAGE_BASE_URL)
    }
}

impl OperatorCatalog {
    /// Create a catalog serving images from `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a catalog from the operators configuration section.
    pub fn from_config(config: &OperatorsConfig) -> Self {
        Self::new(config.image_base_url.as_str())
    }

    /// Image URL for a raw operator name; `None` for unknown or empty names.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        asset_stem(raw).map(|stem| format!("{}/{stem}.png", self.base_url))
    }

    /// Like [`resolve`](Self::resolve) for an optional name.
    pub fn resolve_opt(&self, raw: Option<&str>) -> Option<String> {
        raw.and_then(|name| self.resolve(name))
    }

    /// Image URL for an operator pick from a stats record.
    pub fn image_for(&self, pick: Option<&OperatorPick>) -> Option<String> {
        self.resolve_opt(pick.map(|p| p.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: &str = "https://raw.githubusercontent.com/kmart93-creator/r6-operator-images/main";

    #[test]
    fn test_canonical_key_folds_diacritics_and_case() {
        assert_eq!(canonical_key("Jäger"), "jager");
        assert_eq!(canonical_key("  JÄGER  "), "jager");
        assert_eq!(canonical_key("Capitão"), "capitao");
        assert_eq!(canonical_key("Tubarão"), "tubarao");
        assert_eq!(canonical_key("Nøkk"), "nkk");
        assert_eq!(canonical_key("Straße"), "strasse");
        assert_eq!(canonical_key("Lord Tachanka!"), "lordtachanka");
    }

    #[test]
    fn test_resolve_known_operators() {
        let catalog = OperatorCatalog::default();
        assert_eq!(catalog.resolve("Ash").as_deref(), Some(format!("{BASE}/ash.png").as_str()));
        assert_eq!(catalog.resolve("Jäger"), catalog.resolve("jaeger"));
        assert_eq!(catalog.resolve("Nøkk").as_deref(), Some(format!("{BASE}/nokk.png").as_str()));
        assert_eq!(catalog.resolve("Capitão"), catalog.resolve("capitao"));
    }

    #[test]
    fn test_unknown_and_empty_resolve_to_none() {
        let catalog = OperatorCatalog::default();
        assert!(catalog.resolve("").is_none());
        assert!(catalog.resolve("   ").is_none());
        assert!(catalog.resolve("xyz-not-an-operator").is_none());
        assert!(catalog.resolve_opt(None).is_none());
        assert!(catalog.image_for(None).is_none());
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let catalog = OperatorCatalog::new("http://cdn.local/ops/");
        assert_eq!(catalog.resolve("Thermite").as_deref(), Some("http://cdn.local/ops/thermite.png"));
    }

    #[test]
    fn test_image_for_pick_uses_name_not_line() {
        let catalog = OperatorCatalog::default();
        let pick = OperatorPick::with_line("Ash", "Ash — Top 12%");
        assert_eq!(catalog.image_for(Some(&pick)), catalog.resolve("Ash"));
    }

    #[test]
    fn test_every_table_entry_points_at_a_stem() {
        for (key, stem) in OPERATOR_TABLE.iter() {
            assert_eq!(canonical_key(key), *key);
            assert!(ATTACKERS.contains(stem) || DEFENDERS.contains(stem), "{key} -> {stem}");
        }
    }

    proptest! {
        #[test]
        fn prop_canonical_key_is_ascii_alphanumeric(raw in ".*") {
            let key = canonical_key(&raw);
            prop_assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }

        #[test]
        fn prop_canonical_key_is_idempotent(raw in ".*") {
            let key = canonical_key(&raw);
            prop_assert_eq!(canonical_key(&key), key);
        }

        #[test]
        fn prop_resolve_ignores_case(index in 0..ATTACKERS.len()) {
            let catalog = OperatorCatalog::default();
            let name = ATTACKERS[index];
            prop_assert!(catalog.resolve(name).is_some());
            prop_assert_eq!(catalog.resolve(&name.to_uppercase()), catalog.resolve(name));
        }
    }
}
