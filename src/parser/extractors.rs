//! # Field Extractors
//!
//! Stateless matchers invoked by the section state machine.
//!
//! ## Method Naming Convention
//!
//! - `extract_*` - Returns `Option<T>`, `None` means "no match"
//! - `is_*` - Boolean line classification
//!
//! Extractors never mutate the record. The state machine turns their results
//! into [`RecordPatch`](super::machine::RecordPatch)es.

use super::patterns::*;
use crate::model::{AttackInfo, DamageType, Experience, Feature, FeatureType, StatblockKind};

/// Shortest name accepted by the bare trailing-type fallback
pub const MIN_FLEXIBLE_NAME_LEN: usize = 3;

// =============================================================================
// Name / Tier
// =============================================================================

/// Tier and classification from a tier line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierType {
    pub tier: u32,
    /// Lowercased type text, e.g. `solo` or `social - environment`
    pub subtype: String,
    pub kind: StatblockKind,
}

/// Result of name/type extraction on a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTypeMatch {
    /// Bare name line: `ACID BURROWER`
    Name(String),
    /// Modern tier line: `T1 Solo`
    TierType(TierType),
    /// Legacy one-line form: `ACID BURROWER T1 Solo`
    Legacy { name: String, tier_type: TierType },
}

fn tier_type(tier: &str, type_text: &str, whole_line: &str) -> Option<TierType> {
    let tier: u32 = tier.parse().ok().filter(|t| *t > 0)?;
    let kind = if whole_line.to_lowercase().contains("environment") {
        StatblockKind::Environment
    } else {
        StatblockKind::Adversary
    };
    Some(TierType {
        tier,
        subtype: type_text.trim().to_lowercase(),
        kind,
    })
}

/// Try the tier line forms, modern first.
pub fn extract_tier_type(line: &str) -> Option<NameTypeMatch> {
    if let Some(caps) = MODERN_TIER_RE.captures(line) {
        if let Some(tt) = tier_type(&caps[1], &caps[2], line) {
            return Some(NameTypeMatch::TierType(tt));
        }
    }

    if let Some(caps) = LEGACY_TIER_RE.captures(line) {
        if let Some(tt) = tier_type(&caps[2], &caps[3], line) {
            return Some(NameTypeMatch::Legacy {
                name: caps[1].trim().to_string(),
                tier_type: tt,
            });
        }
    }

    None
}

/// Name/type extraction for header lines.
///
/// A bare name is only accepted while no name is set and the line carries
/// neither a tier token nor a colon, so stat lines are never taken as names.
/// The legacy form also assigns the name, so it is rejected once one is set.
pub fn extract_name_and_type(line: &str, name_is_set: bool) -> Option<NameTypeMatch> {
    match extract_tier_type(line) {
        Some(NameTypeMatch::Legacy { .. }) if name_is_set => return None,
        Some(found) => return Some(found),
        None => {}
    }

    if !name_is_set && !line.contains(':') && !TIER_TOKEN_RE.is_match(line) {
        return Some(NameTypeMatch::Name(line.to_string()));
    }

    None
}

// =============================================================================
// Basic Stats
// =============================================================================

/// A basic stat recognized on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasicStat {
    Difficulty(i32),
    /// `Attack: +3`, with the attack line when it shares the line
    Attack {
        bonus: i32,
        info: Option<AttackInfo>,
    },
    /// Standalone `Claws: Very Close | 1d12+2 phy`
    AttackLine(AttackInfo),
    /// Inline `Experience: <text>`
    Experience(String),
    /// `Motives & Tactics: <text>`; `None` for the header-only form
    Motives(Option<String>),
}

fn signed(sign: &str, magnitude: &str) -> Option<i32> {
    let value: i32 = magnitude.parse().ok()?;
    match sign {
        "-" | "−" => Some(-value),
        _ => Some(value),
    }
}

/// Parse a standard attack line.
pub fn extract_attack_line(line: &str) -> Option<AttackInfo> {
    let caps = ATTACK_LINE_RE.captures(line)?;

    let dice = caps.get(3).map(|m| m.as_str().to_lowercase());
    let bonus = match (caps.get(4), caps.get(5), caps.get(6)) {
        (Some(sign), Some(value), _) => signed(sign.as_str(), value.as_str())?,
        (_, _, Some(flat)) => flat.as_str().parse().ok()?,
        _ => 0,
    };
    if dice.is_none() && caps.get(6).is_none() {
        return None;
    }

    Some(AttackInfo {
        name: caps[1].trim().to_string(),
        range: caps[2].trim().to_string(),
        dice,
        bonus,
        damage_type: caps[7].parse::<DamageType>().ok()?,
    })
}

/// Try every basic stat form.
pub fn extract_basic_stat(line: &str) -> Option<BasicStat> {
    if let Some(caps) = DIFFICULTY_RE.captures(line) {
        if let Ok(value) = caps[1].parse() {
            return Some(BasicStat::Difficulty(value));
        }
    }

    if let Some(caps) = ATTACK_RE.captures(line) {
        if let Some(bonus) = signed(&caps[1], &caps[2]) {
            let info = caps
                .get(3)
                .and_then(|rest| extract_attack_line(rest.as_str().trim()));
            return Some(BasicStat::Attack { bonus, info });
        }
    }

    if let Some(caps) = MOTIVES_RE.captures(line) {
        let text = caps[1].trim();
        let motives = (!text.is_empty()).then(|| text.to_string());
        return Some(BasicStat::Motives(motives));
    }

    if let Some(caps) = EXPERIENCE_INLINE_RE.captures(line) {
        return Some(BasicStat::Experience(caps[1].trim().to_string()));
    }

    extract_attack_line(line).map(BasicStat::AttackLine)
}

/// `Motives & Tactics:` header line (inline or header-only)
pub fn is_motives_header(line: &str) -> bool {
    MOTIVES_RE.is_match(line)
}

// =============================================================================
// Experiences
// =============================================================================

/// Parse one `<name> +<number>` experience entry.
pub fn extract_experience_line(line: &str) -> Option<Experience> {
    let caps = EXPERIENCE_LINE_RE.captures(line)?;
    Some(Experience {
        name: caps[1].trim().to_string(),
        value: caps[2].parse().ok()?,
    })
}

// =============================================================================
// Feature Headers
// =============================================================================

/// Which matcher recognized a feature header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStrategy {
    /// `Name (2) - Passive`
    Strict,
    /// `Name: Action`
    ColonType,
    /// `Name Action`
    TrailingType,
    /// `Name (2): text`
    ParenValueColon,
}

/// Fallback strategies in priority order
pub const FLEXIBLE_STRATEGIES: [HeaderStrategy; 3] = [
    HeaderStrategy::ColonType,
    HeaderStrategy::TrailingType,
    HeaderStrategy::ParenValueColon,
];

/// A recognized feature header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureHeader {
    pub name: String,
    pub feature_type: FeatureType,
    pub value: Option<String>,
    /// Text after the header on the same line
    pub description: Option<String>,
    pub strategy: HeaderStrategy,
}

impl FeatureHeader {
    /// Start an in-progress feature from this header
    pub fn into_feature(self) -> Feature {
        let mut feature = Feature::new(self.name, self.feature_type);
        feature.value = self.value;
        if let Some(text) = self.description {
            feature.append_description(&text);
        }
        feature
    }
}

fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| c == '-' || c == '–' || c == '—' || c == ':')
        .trim()
        .to_string()
}

fn non_empty(text: Option<regex::Match<'_>>) -> Option<String> {
    text.map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

impl HeaderStrategy {
    /// Run this strategy against a line
    pub fn apply(self, line: &str) -> Option<FeatureHeader> {
        match self {
            HeaderStrategy::Strict => {
                let caps = FEATURE_STRICT_RE.captures(line)?;
                Some(FeatureHeader {
                    name: clean_name(&caps[1]),
                    feature_type: caps[3].parse().ok()?,
                    value: caps.get(2).map(|m| m.as_str().to_string()),
                    description: non_empty(caps.get(4)),
                    strategy: self,
                })
            }
            HeaderStrategy::ColonType => {
                let caps = FEATURE_COLON_RE.captures(line)?;
                Some(FeatureHeader {
                    name: clean_name(&caps[1]),
                    feature_type: caps[3].parse().ok()?,
                    value: caps.get(2).map(|m| m.as_str().to_string()),
                    description: non_empty(caps.get(4)),
                    strategy: self,
                })
            }
            HeaderStrategy::TrailingType => {
                let caps = FEATURE_TRAILING_TYPE_RE.captures(line)?;
                let name = clean_name(&caps[1]);
                if name.chars().count() < MIN_FLEXIBLE_NAME_LEN {
                    return None;
                }
                Some(FeatureHeader {
                    name,
                    feature_type: caps[2].parse().ok()?,
                    value: None,
                    description: None,
                    strategy: self,
                })
            }
            HeaderStrategy::ParenValueColon => {
                let caps = FEATURE_PAREN_COLON_RE.captures(line)?;
                let token = caps[2].trim();
                let (feature_type, value) = if token.chars().all(|c| c.is_ascii_digit()) {
                    (FeatureType::Passive, Some(token.to_string()))
                } else {
                    (token.parse().ok()?, None)
                };
                Some(FeatureHeader {
                    name: clean_name(&caps[1]),
                    feature_type,
                    value,
                    description: non_empty(caps.get(3)),
                    strategy: self,
                })
            }
        }
    }
}

/// Strict `"<name>[ (<value>)] - <Action|Passive|Reaction>"` header.
pub fn extract_feature_header(line: &str) -> Option<FeatureHeader> {
    HeaderStrategy::Strict.apply(line)
}

/// Fallback header forms, tried in [`FLEXIBLE_STRATEGIES`] order.
pub fn extract_flexible_feature_header(line: &str) -> Option<FeatureHeader> {
    FLEXIBLE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.apply(line))
}

// =============================================================================
// Section Sentinels
// =============================================================================

/// `FEATURES` anywhere in the line with no colon
pub fn is_features_trigger(line: &str) -> bool {
    !line.contains(':') && line.to_uppercase().contains("FEATURES")
}

/// A line naming both HP and Stress joined with `&`
pub fn is_hp_stress_trigger(line: &str) -> bool {
    line.contains('&') && HP_WORD_RE.is_match(line) && line.to_uppercase().contains("STRESS")
}

/// Bare `Experience:` header
pub fn is_experience_trigger(line: &str) -> bool {
    EXPERIENCE_HEADER_RE.is_match(line)
}

/// Whether a line opens some non-feature section.
///
/// Used by the features handler to decide that free text is *not* a
/// continuation of the current feature. Lines that match a feature header
/// are never sentinels.
pub fn is_new_section(line: &str) -> bool {
    if extract_feature_header(line).is_some() || extract_flexible_feature_header(line).is_some()
    {
        return false;
    }

    is_hp_stress_trigger(line)
        || THRESHOLD_WORD_RE.is_match(line)
        || NUMERIC_HP_RE.is_match(line)
        || FEATURES_MARKER_RE.is_match(line)
        || STAT_HEADER_RE.is_match(line)
}

/// Whether a header line may be taken as the free-text description
pub fn is_description_candidate(line: &str) -> bool {
    extract_basic_stat(line).is_none()
        && extract_tier_type(line).is_none()
        && extract_experience_line(line).is_none()
        && extract_feature_header(line).is_none()
        && extract_flexible_feature_header(line).is_none()
        && !is_new_section(line)
}

// =============================================================================
// HP / Stress
// =============================================================================

/// A value from the HP & Stress section.
///
/// The state machine recognizes that section but does not call
/// [`extract_hp_stress`]; `hit_points` and `stress` stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpStressValue {
    Minor(u32),
    Major(u32),
    Severe(u32),
    Thresholds { major: u32, severe: u32 },
    HitPoints(u32),
    Stress(u32),
}

pub fn extract_hp_stress(line: &str) -> Option<HpStressValue> {
    if let Some(caps) = HP_THRESHOLD_RE.captures(line) {
        let value = caps[2].parse().ok()?;
        return match caps[1].to_lowercase().as_str() {
            "minor" => Some(HpStressValue::Minor(value)),
            "major" => Some(HpStressValue::Major(value)),
            _ => Some(HpStressValue::Severe(value)),
        };
    }
    if let Some(caps) = THRESHOLDS_PAIR_RE.captures(line) {
        return Some(HpStressValue::Thresholds {
            major: caps[1].parse().ok()?,
            severe: caps[2].parse().ok()?,
        });
    }
    if let Some(caps) = HP_VALUE_RE.captures(line) {
        return Some(HpStressValue::HitPoints(caps[1].parse().ok()?));
    }
    if let Some(caps) = STRESS_VALUE_RE.captures(line) {
        return Some(HpStressValue::Stress(caps[1].parse().ok()?));
    }
    None
}
