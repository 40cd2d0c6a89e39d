//! Documents shared by I/O, config and CLI tests.

/// Input batch with one market of each supported type plus one unsupported.
///
/// Converts to seven markets and one failure (`Correct Score`).
pub const SAMPLE_INPUT_JSON: &str = r#"[
  {
    "name": "1x2",
    "event_id": "123456",
    "selections": [
      { "name": "Team A", "odds": 1.65 },
      { "name": "draw", "odds": 3.2 },
      { "name": "Team B", "odds": 2.6 }
    ]
  },
  {
    "name": "Total",
    "event_id": "123456",
    "selections": [
      { "name": "over 2.5", "odds": 1.85 },
      { "name": "under 2.5", "odds": 1.95 }
    ]
  },
  {
    "name": "1st half - total",
    "event_id": "123456",
    "selections": [
      { "name": "Over 1.5", "odds": 2.1 },
      { "name": "Under 1.5", "odds": 1.7 }
    ]
  },
  {
    "name": "Handicap",
    "event_id": "123456",
    "selections": [
      { "name": "Team A +1.5", "odds": 1.8 },
      { "name": "Team B -1.5", "odds": 2.0 }
    ]
  },
  {
    "name": "1st half - handicap",
    "event_id": "123456",
    "selections": [
      { "name": "Team A -0.5", "odds": 1.9 },
      { "name": "Team B +0.5", "odds": 1.9 }
    ]
  },
  {
    "name": "2nd half - handicap",
    "event_id": "123456",
    "selections": [
      { "name": "Team A", "odds": 1.9 },
      { "name": "Team B", "odds": 1.9 }
    ]
  },
  {
    "name": "Both teams to score",
    "event_id": "123456",
    "selections": [
      { "name": "Yes", "odds": 1.7 },
      { "name": "No", "odds": 2.1 }
    ]
  },
  {
    "name": "Correct Score",
    "event_id": "123456",
    "selections": [
      { "name": "1-0", "odds": 7.0 }
    ]
  }
]
"#;

/// Market UIDs produced from [`SAMPLE_INPUT_JSON`], in order.
pub const SAMPLE_MARKET_UIDS: &[&str] = &[
    "123456_1",
    "123456_18_2.5",
    "123456_68_1.5",
    "123456_16_+1.5",
    "123456_66_-0.5",
    "123456_88_0",
    "123456_50",
];

/// Config that turns on the strict validation preset.
pub const STRICT_CONFIG_TOML: &str = r#"
[logging]
level = "warn"
format = "pretty"

[validation]
preset = "strict"
"#;
