//! # Statblock Regex Patterns
//!
//! All regex patterns used to recognize statblock lines.
//!
//! ## Pattern Naming Convention
//!
//! - `*_HEADER_RE` - A line that opens a block or a section
//! - `*_LINE_RE` - A complete single-line entry
//! - `FEATURE_*_RE` - Feature header variants, strict first then fallbacks
//!
//! ## Adding New Patterns
//!
//! 1. Add pattern to `lazy_static!` block below
//! 2. Add or extend the matching extractor in `extractors.rs`
//! 3. Wire it into the section handlers in `machine.rs`
//!
//! All patterns run against trimmed lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // =========================================================================
    // Name / Tier Patterns
    // =========================================================================

    /// Matches a tier token anywhere in a line: `T1`, `T12`, `Tier 2`
    ///
    /// Used to keep tier lines from being taken as the name.
    pub static ref TIER_TOKEN_RE: Regex = Regex::new(
        r"(?i)\bT(?:ier\s*)?\d+\b"
    ).unwrap();

    /// Matches the modern tier line: `T1 Solo`, `T2 Social - Environment`
    ///
    /// Captures:
    /// - Group 1: tier digits
    /// - Group 2: type text (may carry `- Environment`)
    pub static ref MODERN_TIER_RE: Regex = Regex::new(
        r"(?i)^T(?:ier\s*)?(\d+)\s+(.+)$"
    ).unwrap();

    /// Matches the legacy one-line form: `ACID BURROWER T1 Solo`
    ///
    /// Case-sensitive on `T`/`Tier` so prose like `found in tier 2 sewers`
    /// is not read as a name plus tier.
    ///
    /// Captures:
    /// - Group 1: name
    /// - Group 2: tier digits
    /// - Group 3: type text
    pub static ref LEGACY_TIER_RE: Regex = Regex::new(
        r"^(.+?)\s+T(?:ier\s*)?(\d+)\s+(.+)$"
    ).unwrap();

    // =========================================================================
    // Basic Stat Patterns
    // =========================================================================

    /// Matches `Difficulty: 14`, ignoring anything after the number
    /// (`Difficulty: 14 | Thresholds: 8/15`).
    pub static ref DIFFICULTY_RE: Regex = Regex::new(
        r"(?i)^Difficulty\s*:\s*(\d+)"
    ).unwrap();

    /// Matches `Attack: +3` or `ATK: -1`, optionally followed by `| <attack line>`
    ///
    /// Captures:
    /// - Group 1: sign (may be empty, `+`, `-` or a unicode minus)
    /// - Group 2: magnitude
    /// - Group 3: trailing text after the first `|`
    pub static ref ATTACK_RE: Regex = Regex::new(
        r"(?i)^(?:Attack|ATK)\s*:\s*([+\-−]?)\s*(\d+)\s*(?:\|\s*(.*))?$"
    ).unwrap();

    /// Matches the standard attack line: `Claws: Very Close | 1d12+2 phy`
    ///
    /// Captures:
    /// - Group 1: attack name
    /// - Group 2: range text
    /// - Group 3: dice notation (optional)
    /// - Group 4: bonus sign (with group 5)
    /// - Group 5: bonus magnitude
    /// - Group 6: flat damage (no dice)
    /// - Group 7: damage type `phy` or `mag`
    pub static ref ATTACK_LINE_RE: Regex = Regex::new(
        r"(?i)^([^:|]+?)\s*:\s*([^|]+?)\s*\|\s*(\d*d\d+)?\s*(?:([+\-])\s*(\d+)|(\d+))?\s*(phy|mag)\s*$"
    ).unwrap();

    /// Matches the inline experience field: `Experience: Tremor Sense +2`
    pub static ref EXPERIENCE_INLINE_RE: Regex = Regex::new(
        r"(?i)^Experiences?\s*:\s*(.+)$"
    ).unwrap();

    /// Matches a bare `Experience:` section header
    pub static ref EXPERIENCE_HEADER_RE: Regex = Regex::new(
        r"(?i)^Experiences?\s*:$"
    ).unwrap();

    /// Matches `Motives & Tactics: <text>`; group 1 is empty for the header-only form
    pub static ref MOTIVES_RE: Regex = Regex::new(
        r"(?i)^Motives\s*(?:&|and)\s*Tactics\s*:\s*(.*)$"
    ).unwrap();

    /// Matches one experience entry: `Tremor Sense +2`
    ///
    /// Captures:
    /// - Group 1: experience name
    /// - Group 2: bonus
    pub static ref EXPERIENCE_LINE_RE: Regex = Regex::new(
        r"^(.+?)\s+\+(\d+)$"
    ).unwrap();

    // =========================================================================
    // Feature Header Patterns
    // =========================================================================

    /// Strict header: `Relentless (2) - Passive`, optionally `: <text>` after the type
    ///
    /// Captures:
    /// - Group 1: name
    /// - Group 2: value (optional)
    /// - Group 3: type word
    /// - Group 4: inline description (optional)
    pub static ref FEATURE_STRICT_RE: Regex = Regex::new(
        r"(?i)^(.+?)(?:\s*\((\d+)\))?\s+[-–—]\s+(Action|Passive|Reaction)\b\s*(?::\s*(.*))?$"
    ).unwrap();

    /// Fallback: `Earth Eruption: Action` or `Relentless (2): Passive - text`
    ///
    /// Captures:
    /// - Group 1: name
    /// - Group 2: value (optional)
    /// - Group 3: type word
    /// - Group 4: remaining text
    pub static ref FEATURE_COLON_RE: Regex = Regex::new(
        r"(?i)^(.+?)(?:\s*\((\d+)\))?\s*:\s*(Action|Passive|Reaction)\b[\s.:\-–—]*(.*)$"
    ).unwrap();

    /// Fallback: bare trailing type word, `Earth Eruption Action`
    pub static ref FEATURE_TRAILING_TYPE_RE: Regex = Regex::new(
        r"(?i)^(.+?)\s+(Action|Passive|Reaction)$"
    ).unwrap();

    /// Fallback: `Relentless (2): text` or `Acid Bath (Reaction): text`
    ///
    /// Captures:
    /// - Group 1: name
    /// - Group 2: parenthesized token (number or type word)
    /// - Group 3: remaining text
    pub static ref FEATURE_PAREN_COLON_RE: Regex = Regex::new(
        r"^(.+?)\s*\(([^)]+)\)\s*:\s*(.*)$"
    ).unwrap();

    // =========================================================================
    // Section Sentinel Patterns
    // =========================================================================

    /// Bare `FEATURES` marker
    pub static ref FEATURES_MARKER_RE: Regex = Regex::new(
        r"(?i)^FEATURES$"
    ).unwrap();

    /// Bare damage threshold lines: `Minor`, `Major: 8`, `Severe threshold 15`
    pub static ref THRESHOLD_WORD_RE: Regex = Regex::new(
        r"(?i)^(?:Minor|Major|Severe)(?:\s+(?:threshold|damage))?\s*:?\s*\d*$"
    ).unwrap();

    /// Numeric-prefixed HP lines: `6 HP`, `3 Stress`, `8 Hit Points`
    pub static ref NUMERIC_HP_RE: Regex = Regex::new(
        r"(?i)^\d+\s*(?:HP|Hit\s*Points?|Stress)\b"
    ).unwrap();

    /// `HP` as a whole word, so `whips` or `worship` don't count
    pub static ref HP_WORD_RE: Regex = Regex::new(
        r"(?i)\bHP\b"
    ).unwrap();

    /// Any basic stat header: `Difficulty:`, `Attack:`, `Experience:`, `Motives & Tactics:`
    pub static ref STAT_HEADER_RE: Regex = Regex::new(
        r"(?i)^(?:Difficulty|Attack|ATK|Experiences?|Motives\s*(?:&|and)\s*Tactics)\s*:"
    ).unwrap();

    // =========================================================================
    // HP / Stress Value Patterns
    // =========================================================================

    /// `Minor: 3`, `Major threshold 8`
    ///
    /// Captures:
    /// - Group 1: threshold word
    /// - Group 2: value
    pub static ref HP_THRESHOLD_RE: Regex = Regex::new(
        r"(?i)^(Minor|Major|Severe)(?:\s+(?:threshold|damage))?\s*:?\s*(\d+)$"
    ).unwrap();

    /// `Thresholds: 8/15`
    pub static ref THRESHOLDS_PAIR_RE: Regex = Regex::new(
        r"(?i)^Thresholds?\s*:?\s*(\d+)\s*/\s*(\d+)"
    ).unwrap();

    /// `HP: 6` or `Hit Points 6`
    pub static ref HP_VALUE_RE: Regex = Regex::new(
        r"(?i)^(?:HP|Hit\s*Points?)\s*:?\s*(\d+)"
    ).unwrap();

    /// `Stress: 3`
    pub static ref STRESS_VALUE_RE: Regex = Regex::new(
        r"(?i)^Stress\s*:?\s*(\d+)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_token_re() {
        assert!(TIER_TOKEN_RE.is_match("ACID BURROWER T1 Solo"));
        assert!(TIER_TOKEN_RE.is_match("Tier 2 Bruiser"));
        assert!(!TIER_TOKEN_RE.is_match("GIANT RAT"));
        assert!(!TIER_TOKEN_RE.is_match("TT1000 Automaton"));
    }

    #[test]
    fn test_modern_tier_re() {
        let caps = MODERN_TIER_RE.captures("T2 Social - Environment").unwrap();
        assert_eq!(&caps[1], "2");
        assert_eq!(&caps[2], "Social - Environment");
    }

    #[test]
    fn test_legacy_tier_re() {
        let caps = LEGACY_TIER_RE.captures("ACID BURROWER T1 Solo").unwrap();
        assert_eq!(&caps[1], "ACID BURROWER");
        assert_eq!(&caps[2], "1");
        assert_eq!(&caps[3], "Solo");
        assert!(LEGACY_TIER_RE.is_match("Cave Ogre Tier 2 Bruiser"));
        assert!(!LEGACY_TIER_RE.is_match("Found in tier 2 sewers near towns."));
        assert!(!LEGACY_TIER_RE.is_match("Lurks in t3 ruins"));
    }

    #[test]
    fn test_difficulty_re() {
        let caps = DIFFICULTY_RE
            .captures("Difficulty: 14 | Thresholds: 8/15")
            .unwrap();
        assert_eq!(&caps[1], "14");
    }

    #[test]
    fn test_attack_re() {
        let caps = ATTACK_RE.captures("Attack: +3").unwrap();
        assert_eq!(&caps[1], "+");
        assert_eq!(&caps[2], "3");
        assert!(caps.get(3).is_none());

        let caps = ATTACK_RE
            .captures("ATK: -1 | Claws: Melee | 1d6 phy")
            .unwrap();
        assert_eq!(&caps[1], "-");
        assert_eq!(&caps[3], "Claws: Melee | 1d6 phy");
    }

    #[test]
    fn test_attack_line_re() {
        let caps = ATTACK_LINE_RE
            .captures("Claws: Very Close | 1d12+2 phy")
            .unwrap();
        assert_eq!(&caps[1], "Claws");
        assert_eq!(&caps[2], "Very Close");
        assert_eq!(&caps[3], "1d12");
        assert_eq!(&caps[4], "+");
        assert_eq!(&caps[5], "2");
        assert_eq!(&caps[7], "phy");

        let caps = ATTACK_LINE_RE.captures("Bite: Melee | 1 phy").unwrap();
        assert!(caps.get(3).is_none());
        assert_eq!(&caps[6], "1");
    }

    #[test]
    fn test_experience_patterns() {
        assert!(EXPERIENCE_HEADER_RE.is_match("Experience:"));
        assert!(!EXPERIENCE_HEADER_RE.is_match("Experience: Tremor Sense +2"));
        let caps = EXPERIENCE_INLINE_RE
            .captures("Experience: Tremor Sense +2")
            .unwrap();
        assert_eq!(&caps[1], "Tremor Sense +2");
        let caps = EXPERIENCE_LINE_RE.captures("Keen Senses +3").unwrap();
        assert_eq!(&caps[1], "Keen Senses");
        assert_eq!(&caps[2], "3");
    }

    #[test]
    fn test_motives_re() {
        let caps = MOTIVES_RE.captures("Motives & Tactics:").unwrap();
        assert_eq!(&caps[1], "");
        let caps = MOTIVES_RE
            .captures("Motives & Tactics: Burrow, Feed")
            .unwrap();
        assert_eq!(&caps[1], "Burrow, Feed");
    }

    #[test]
    fn test_feature_strict_re() {
        let caps = FEATURE_STRICT_RE
            .captures("Relentless (2) - Passive")
            .unwrap();
        assert_eq!(&caps[1], "Relentless");
        assert_eq!(&caps[2], "2");
        assert_eq!(&caps[3], "Passive");

        let caps = FEATURE_STRICT_RE
            .captures("Acid Bath – Reaction: When the Burrower takes damage")
            .unwrap();
        assert_eq!(&caps[1], "Acid Bath");
        assert!(caps.get(2).is_none());
        assert_eq!(&caps[4], "When the Burrower takes damage");

        assert!(!FEATURE_STRICT_RE.is_match("Earth Eruption: Action"));
    }

    #[test]
    fn test_feature_fallback_res() {
        let caps = FEATURE_COLON_RE.captures("Earth Eruption: Action").unwrap();
        assert_eq!(&caps[1], "Earth Eruption");
        assert_eq!(&caps[3], "Action");

        let caps = FEATURE_TRAILING_TYPE_RE
            .captures("Earth Eruption Action")
            .unwrap();
        assert_eq!(&caps[1], "Earth Eruption");

        let caps = FEATURE_PAREN_COLON_RE
            .captures("Relentless (3): Spotlight up to three times")
            .unwrap();
        assert_eq!(&caps[1], "Relentless");
        assert_eq!(&caps[2], "3");
    }

    #[test]
    fn test_sentinel_patterns() {
        assert!(FEATURES_MARKER_RE.is_match("Features"));
        assert!(THRESHOLD_WORD_RE.is_match("Major: 8"));
        assert!(THRESHOLD_WORD_RE.is_match("Severe"));
        assert!(NUMERIC_HP_RE.is_match("6 HP"));
        assert!(STAT_HEADER_RE.is_match("Motives & Tactics: Hunt"));
        assert!(!STAT_HEADER_RE.is_match("Drag the target underground"));
        assert!(HP_WORD_RE.is_match("HP & Stress"));
        assert!(!HP_WORD_RE.is_match("lashing whips & a Stress"));
    }

    #[test]
    fn test_hp_value_patterns() {
        let caps = HP_THRESHOLD_RE.captures("Major threshold 8").unwrap();
        assert_eq!(&caps[1], "Major");
        assert_eq!(&caps[2], "8");
        let caps = THRESHOLDS_PAIR_RE.captures("Thresholds: 8/15").unwrap();
        assert_eq!(&caps[2], "15");
        assert_eq!(&HP_VALUE_RE.captures("HP: 6").unwrap()[1], "6");
        assert_eq!(&STRESS_VALUE_RE.captures("Stress 3").unwrap()[1], "3");
    }
}
