//! Static dictionary of supported market types.
//!
//! - [`SpecifierKind`] - Which numeric parameter a market carries
//! - [`MarketTypeDefinition`] - One supported market category
//! - [`MarketTypeRegistry`] - Alias index over every definition
//!
//! The table is built once from constant seed data and never mutated. Lookups
//! are exact string comparisons after normalization, never fuzzy.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use super::normalize::{clean_outcome_label, normalize_basic};

/// Numeric parameter required by a market type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierKind {
    /// No specifier (1x2, both teams to score).
    None,
    /// Total line, stored under `"total"`.
    Total,
    /// Handicap line, stored under `"hcp"`.
    Handicap,
}

impl SpecifierKind {
    /// Key used in the canonical specifiers map, if any.
    #[must_use]
    pub const fn key(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Total => Some("total"),
            Self::Handicap => Some("hcp"),
        }
    }
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Total => "total",
            Self::Handicap => "handicap",
        };
        f.write_str(name)
    }
}

struct Seed {
    slug: &'static str,
    type_code: &'static str,
    kind: SpecifierKind,
    outcomes: &'static [(&'static str, u32)],
    aliases: &'static [&'static str],
}

const TOTAL_OUTCOMES: &[(&str, u32)] = &[("over", 12), ("under", 13)];
const HANDICAP_OUTCOMES: &[(&str, u32)] = &[("team a", 1714), ("team b", 1715)];

const SEEDS: &[Seed] = &[
    Seed {
        slug: "one_x_two",
        type_code: "1",
        kind: SpecifierKind::None,
        outcomes: &[("team a", 1), ("draw", 2), ("team b", 3)],
        aliases: &["1x2"],
    },
    Seed {
        slug: "total",
        type_code: "18",
        kind: SpecifierKind::Total,
        outcomes: TOTAL_OUTCOMES,
        aliases: &["total"],
    },
    Seed {
        slug: "first_half_total",
        type_code: "68",
        kind: SpecifierKind::Total,
        outcomes: TOTAL_OUTCOMES,
        aliases: &["1st half - total"],
    },
    Seed {
        slug: "handicap",
        type_code: "16",
        kind: SpecifierKind::Handicap,
        outcomes: HANDICAP_OUTCOMES,
        aliases: &["handicap"],
    },
    Seed {
        slug: "first_half_handicap",
        type_code: "66",
        kind: SpecifierKind::Handicap,
        outcomes: HANDICAP_OUTCOMES,
        aliases: &["1st half - handicap"],
    },
    Seed {
        slug: "second_half_handicap",
        type_code: "88",
        kind: SpecifierKind::Handicap,
        outcomes: HANDICAP_OUTCOMES,
        aliases: &["2nd half - handicap"],
    },
    Seed {
        slug: "both_teams_to_score",
        type_code: "50",
        kind: SpecifierKind::None,
        outcomes: &[("yes", 10), ("no", 11)],
        aliases: &["both teams to score"],
    },
];

/// Short outcome forms accepted wherever the long form exists.
const SHORT_FORMS: &[(&str, &str)] = &[("o", "over"), ("u", "under")];

/// One supported market category.
///
/// Outcome keys are lowercase and trimmed. When `"over"`/`"under"` are present
/// the short forms `"o"`/`"u"` map to the same codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketTypeDefinition {
    slug: &'static str,
    type_code: &'static str,
    specifier_kind: SpecifierKind,
    outcome_codes: BTreeMap<String, u32>,
    name_aliases: BTreeSet<String>,
}

impl MarketTypeDefinition {
    fn from_seed(seed: &Seed) -> Self {
        let mut outcome_codes: BTreeMap<String, u32> = seed
            .outcomes
            .iter()
            .map(|(name, code)| (normalize_basic(Some(*name)), *code))
            .collect();
        for (short, long) in SHORT_FORMS {
            if let Some(code) = outcome_codes.get(*long).copied() {
                outcome_codes.entry((*short).to_string()).or_insert(code);
            }
        }

        let name_aliases = seed
            .aliases
            .iter()
            .map(|alias| normalize_basic(Some(*alias)))
            .collect();

        Self {
            slug: seed.slug,
            type_code: seed.type_code,
            specifier_kind: seed.kind,
            outcome_codes,
            name_aliases,
        }
    }

    /// Stable identifier used in logs and error messages.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        self.slug
    }

    /// Canonical market type code (e.g. `"18"` for Total).
    #[must_use]
    pub const fn type_code(&self) -> &'static str {
        self.type_code
    }

    /// Specifier this market type expects.
    #[must_use]
    pub const fn specifier_kind(&self) -> SpecifierKind {
        self.specifier_kind
    }

    /// Normalized outcome key to outcome code.
    #[must_use]
    pub fn outcome_codes(&self) -> &BTreeMap<String, u32> {
        &self.outcome_codes
    }

    /// Normalized market names that resolve to this definition.
    #[must_use]
    pub fn name_aliases(&self) -> &BTreeSet<String> {
        &self.name_aliases
    }

    /// Resolve a raw outcome label to its outcome code.
    ///
    /// The label is cleaned of numbers, normalized, and short forms are
    /// remapped to their long keys before lookup.
    #[must_use]
    pub fn resolve_outcome_code(&self, raw_label: &str) -> Option<u32> {
        self.outcome_codes.get(&outcome_key(raw_label)).copied()
    }
}

/// Lookup key for a raw outcome label: cleaned, normalized, short forms expanded.
#[must_use]
pub fn outcome_key(raw_label: &str) -> String {
    let key = normalize_basic(Some(clean_outcome_label(raw_label).as_str()));
    SHORT_FORMS
        .iter()
        .find(|(short, _)| *short == key)
        .map_or(key, |(_, long)| (*long).to_string())
}

/// Alias index over the market type definitions.
#[derive(Debug)]
pub struct MarketTypeRegistry {
    definitions: Vec<MarketTypeDefinition>,
    by_alias: HashMap<String, usize>,
}

static BUILTIN: LazyLock<MarketTypeRegistry> = LazyLock::new(|| {
    let definitions = SEEDS.iter().map(MarketTypeDefinition::from_seed).collect();
    MarketTypeRegistry::from_definitions(definitions)
});

impl MarketTypeRegistry {
    fn from_definitions(definitions: Vec<MarketTypeDefinition>) -> Self {
        let mut by_alias = HashMap::new();
        for (index, definition) in definitions.iter().enumerate() {
            for alias in &definition.name_aliases {
                by_alias.entry(alias.clone()).or_insert(index);
            }
        }
        Self {
            definitions,
            by_alias,
        }
    }

    /// The process-wide registry of supported market types.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Resolve a raw market name to its definition.
    #[must_use]
    pub fn resolve_market_type(&self, name: &str) -> Option<&MarketTypeDefinition> {
        self.by_alias
            .get(&normalize_basic(Some(name)))
            .map(|&index| &self.definitions[index])
    }

    /// Look up a definition by its type code.
    #[must_use]
    pub fn by_type_code(&self, type_code: &str) -> Option<&MarketTypeDefinition> {
        self.definitions.iter().find(|d| d.type_code == type_code)
    }

    /// All definitions in table order.
    #[must_use]
    pub fn definitions(&self) -> &[MarketTypeDefinition] {
        &self.definitions
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if the registry holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Resolve a raw market name against the builtin registry.
#[must_use]
pub fn resolve_market_type(name: &str) -> Option<&'static MarketTypeDefinition> {
    MarketTypeRegistry::builtin().resolve_market_type(name)
}

/// Resolve a raw outcome label within a definition.
#[must_use]
pub fn resolve_outcome_code(definition: &MarketTypeDefinition, raw_label: &str) -> Option<u32> {
    definition.resolve_outcome_code(raw_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIAS_TABLE: &[(&str, &str, SpecifierKind)] = &[
        ("1x2", "1", SpecifierKind::None),
        ("total", "18", SpecifierKind::Total),
        ("1st half - total", "68", SpecifierKind::Total),
        ("handicap", "16", SpecifierKind::Handicap),
        ("1st half - handicap", "66", SpecifierKind::Handicap),
        ("2nd half - handicap", "88", SpecifierKind::Handicap),
        ("both teams to score", "50", SpecifierKind::None),
    ];

    #[test]
    fn every_alias_resolves_to_its_definition() {
        for (alias, code, kind) in ALIAS_TABLE {
            let def = resolve_market_type(alias).unwrap();
            assert_eq!(def.type_code(), *code, "alias {alias}");
            assert_eq!(def.specifier_kind(), *kind, "alias {alias}");
        }
    }

    #[test]
    fn resolution_normalizes_case_and_whitespace() {
        assert_eq!(resolve_market_type("  Total ").unwrap().type_code(), "18");
        assert_eq!(
            resolve_market_type("Both Teams To Score").unwrap().type_code(),
            "50"
        );
        assert_eq!(
            resolve_market_type("1ST HALF - HANDICAP").unwrap().type_code(),
            "66"
        );
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(resolve_market_type("").is_none());
        assert!(resolve_market_type("totals").is_none());
        assert!(resolve_market_type("half - total").is_none());
        assert!(resolve_market_type("correct score").is_none());
    }

    #[test]
    fn aliases_are_disjoint_across_definitions() {
        let registry = MarketTypeRegistry::builtin();
        let total: usize = registry
            .definitions()
            .iter()
            .map(|d| d.name_aliases().len())
            .sum();
        assert_eq!(total, registry.by_alias.len());
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn short_forms_present_only_with_over_under() {
        let registry = MarketTypeRegistry::builtin();
        for def in registry.definitions() {
            let codes = def.outcome_codes();
            assert_eq!(codes.contains_key("o"), codes.contains_key("over"));
            assert_eq!(codes.contains_key("u"), codes.contains_key("under"));
            if let Some(over) = codes.get("over") {
                assert_eq!(codes.get("o"), Some(over));
            }
            assert!(codes.keys().all(|k| k == &k.trim().to_lowercase()));
        }
    }

    #[test]
    fn outcome_codes_resolve_from_raw_labels() {
        let total = resolve_market_type("total").unwrap();
        assert_eq!(resolve_outcome_code(total, "Over 2.5"), Some(12));
        assert_eq!(resolve_outcome_code(total, "under 2.5"), Some(13));
        assert_eq!(resolve_outcome_code(total, "O 2.5"), Some(12));
        assert_eq!(resolve_outcome_code(total, "u"), Some(13));
        assert_eq!(resolve_outcome_code(total, "draw"), None);

        let hcp = resolve_market_type("2nd half - handicap").unwrap();
        assert_eq!(resolve_outcome_code(hcp, "Team A +1.5"), Some(1714));
        assert_eq!(resolve_outcome_code(hcp, "Team  B -0.5"), Some(1715));

        let one_x_two = resolve_market_type("1x2").unwrap();
        assert_eq!(resolve_outcome_code(one_x_two, "Draw"), Some(2));
        assert_eq!(resolve_outcome_code(one_x_two, "o"), None);
    }

    #[test]
    fn by_type_code_finds_definition() {
        let registry = MarketTypeRegistry::builtin();
        assert_eq!(registry.by_type_code("88").unwrap().slug(), "second_half_handicap");
        assert!(registry.by_type_code("999").is_none());
    }

    #[test]
    fn specifier_keys() {
        assert_eq!(SpecifierKind::None.key(), None);
        assert_eq!(SpecifierKind::Total.key(), Some("total"));
        assert_eq!(SpecifierKind::Handicap.key(), Some("hcp"));
    }
}
