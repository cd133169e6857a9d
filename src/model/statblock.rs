//! Statblock data structures produced by the parser

use serde::{Deserialize, Serialize};

/// Whether the statblock describes a creature or a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatblockKind {
    #[default]
    Adversary,
    Environment,
}

impl std::fmt::Display for StatblockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatblockKind::Adversary => write!(f, "adversary"),
            StatblockKind::Environment => write!(f, "environment"),
        }
    }
}

/// Behavioral type of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Passive,
    Action,
    Reaction,
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureType::Passive => write!(f, "passive"),
            FeatureType::Action => write!(f, "action"),
            FeatureType::Reaction => write!(f, "reaction"),
        }
    }
}

impl std::str::FromStr for FeatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passive" => Ok(FeatureType::Passive),
            "action" => Ok(FeatureType::Action),
            "reaction" => Ok(FeatureType::Reaction),
            _ => Err(format!("Unknown feature type: {}", s)),
        }
    }
}

/// Damage tag on an attack line (`phy` or `mag`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    #[serde(rename = "phy")]
    Physical,
    #[serde(rename = "mag")]
    Magical,
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DamageType::Physical => write!(f, "phy"),
            DamageType::Magical => write!(f, "mag"),
        }
    }
}

impl std::str::FromStr for DamageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phy" | "physical" => Ok(DamageType::Physical),
            "mag" | "magic" | "magical" => Ok(DamageType::Magical),
            _ => Err(format!("Unknown damage type: {}", s)),
        }
    }
}

/// Structured standard attack, e.g. `Claws: Very Close | 1d12+2 phy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackInfo {
    pub name: String,
    pub range: String,
    /// Dice notation such as `1d12`; `None` for flat damage.
    pub dice: Option<String>,
    pub bonus: i32,
    pub damage_type: DamageType,
}

impl AttackInfo {
    /// Damage formula as written in the statblock (`1d12+2`, `1d8`, `3`)
    pub fn formula(&self) -> String {
        match (&self.dice, self.bonus) {
            (Some(dice), 0) => dice.clone(),
            (Some(dice), b) if b > 0 => format!("{}+{}", dice, b),
            (Some(dice), b) => format!("{}{}", dice, b),
            (None, b) => b.to_string(),
        }
    }
}

/// One entry of the multi-line experience list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub name: String,
    pub value: i32,
}

/// Damage thresholds. Not extracted yet, always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HitPoints {
    pub minor: u32,
    pub major: u32,
    pub severe: u32,
}

/// A named ability entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub value: Option<String>,
    pub description: String,
}

impl Feature {
    pub fn new(name: impl Into<String>, feature_type: FeatureType) -> Self {
        Self {
            name: name.into(),
            feature_type,
            value: None,
            description: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a continuation line, joined with a single space
    pub fn append_description(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }

    /// Name with the value re-embedded, e.g. `Relentless (2)`
    pub fn display_name(&self) -> String {
        match &self.value {
            Some(value) => format!("{} ({})", self.name, value),
            None => self.name.clone(),
        }
    }
}

/// The parsed statblock handed to the document builder
///
/// # Field Semantics
/// - `subtype`: lowercased classification from the tier line (`solo`, `social - environment`)
/// - `experience`: legacy inline `Experience: <text>` field, verbatim
/// - `experiences`: multi-line `Experience:` section entries
/// - `hit_points` / `stress`: recognized in the HP & Stress section but not extracted; zero
/// - `resistances` / `immunities` / `vulnerabilities`: reserved, always empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedStatblock {
    pub name: String,
    pub kind: StatblockKind,
    pub tier: u32,
    pub subtype: String,
    pub description: Option<String>,
    pub difficulty: i32,
    pub attack: i32,
    pub attack_info: Option<AttackInfo>,
    pub experience: Option<String>,
    pub experiences: Vec<Experience>,
    pub motives_and_tactics: Option<String>,
    pub features: Vec<Feature>,
    pub hit_points: HitPoints,
    pub stress: u32,
    pub resistances: Vec<String>,
    pub immunities: Vec<String>,
    pub vulnerabilities: Vec<String>,
}

impl ParsedStatblock {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            kind: StatblockKind::Adversary,
            tier: 1,
            subtype: String::new(),
            description: None,
            difficulty: 10,
            attack: 0,
            attack_info: None,
            experience: None,
            experiences: Vec::new(),
            motives_and_tactics: None,
            features: Vec::new(),
            hit_points: HitPoints::default(),
            stress: 0,
            resistances: Vec::new(),
            immunities: Vec::new(),
            vulnerabilities: Vec::new(),
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

impl Default for ParsedStatblock {
    fn default() -> Self {
        Self::new()
    }
}

/// A line the scanner could not attribute to any field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based index into the normalized (non-blank) lines
    pub line_number: usize,
    pub message: String,
    pub raw_line: String,
}

impl ParseWarning {
    pub fn new(
        line_number: usize,
        message: impl Into<String>,
        raw_line: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            message: message.into(),
            raw_line: raw_line.into(),
        }
    }
}

/// Parse result plus the warnings collected along the way
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub statblock: ParsedStatblock,
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    pub fn new(statblock: ParsedStatblock) -> Self {
        Self {
            statblock,
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
