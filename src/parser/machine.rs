//! Section State Machine
//!
//! The scanner is a fold of [`transition`] over the normalized lines:
//!
//! ```text
//! (ScanState, &ParsedStatblock, line) -> Step { ScanState, Vec<RecordPatch>, LineDisposition }
//! ```
//!
//! `transition` only reads the record; every change to it is expressed as a
//! [`RecordPatch`] that the caller applies. The in-progress feature lives in
//! the scan state until a boundary flushes it into a `PushFeature` patch.
//!
//! ## Sections
//!
//! | Section | Entered by | Handler |
//! |---------|------------|---------|
//! | `Header` | start, or leaving `Experience` | name/type, basic stats, description |
//! | `Experience` | bare `Experience:` | `<name> +<n>` entries |
//! | `Features` | line containing `FEATURES` (no colon) | feature headers and text |
//! | `HpStress` | line with `HP`, `Stress` and `&` | observed only |
//!
//! Transition checks run before section dispatch. Only `Experience` ever
//! returns to `Header`.

use super::extractors::*;
use crate::model::{AttackInfo, Experience, Feature, ParsedStatblock, StatblockKind};

/// Parsing phase governing which extractors apply to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Header,
    Experience,
    Features,
    HpStress,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::Experience => write!(f, "experience"),
            Section::Features => write!(f, "features"),
            Section::HpStress => write!(f, "hp_stress"),
        }
    }
}

/// Scanner state carried between lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    pub section: Section,
    /// Feature whose description is still accumulating
    pub current_feature: Option<Feature>,
    /// Previous line was an empty `Motives & Tactics:`
    pub awaiting_motives: bool,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    fn flush_feature(&mut self, patches: &mut Vec<RecordPatch>) {
        if let Some(feature) = self.current_feature.take() {
            patches.push(RecordPatch::PushFeature(feature));
        }
    }
}

/// A single change to the accumulating record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordPatch {
    SetName(String),
    SetTierType {
        tier: u32,
        subtype: String,
        kind: StatblockKind,
    },
    SetDescription(String),
    SetDifficulty(i32),
    SetAttack(i32),
    SetAttackInfo(AttackInfo),
    SetExperience(String),
    AddExperience(Experience),
    SetMotives(String),
    PushFeature(Feature),
}

impl RecordPatch {
    pub fn apply(self, record: &mut ParsedStatblock) {
        match self {
            RecordPatch::SetName(name) => record.name = name,
            RecordPatch::SetTierType {
                tier,
                subtype,
                kind,
            } => {
                record.tier = tier;
                record.subtype = subtype;
                record.kind = kind;
            }
            RecordPatch::SetDescription(text) => record.description = Some(text),
            RecordPatch::SetDifficulty(value) => record.difficulty = value,
            RecordPatch::SetAttack(value) => record.attack = value,
            RecordPatch::SetAttackInfo(info) => record.attack_info = Some(info),
            RecordPatch::SetExperience(text) => record.experience = Some(text),
            RecordPatch::AddExperience(exp) => record.experiences.push(exp),
            RecordPatch::SetMotives(text) => record.motives_and_tactics = Some(text),
            RecordPatch::PushFeature(feature) => record.features.push(feature),
        }
    }
}

/// What happened to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    SectionChange(Section),
    Name,
    TierType,
    Description,
    BasicStat,
    MotivesHeader,
    MotivesContinuation,
    ExperienceEntry,
    FeatureHeader(HeaderStrategy),
    FeatureText,
    /// Feature closed by a line that opens another section
    FeatureBoundary,
    /// Seen in the HP & Stress section, not extracted
    Observed,
    /// Unattributable, dropped
    Ignored,
}

impl LineDisposition {
    pub fn is_dropped(&self) -> bool {
        matches!(self, LineDisposition::Ignored)
    }
}

/// Output of one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: ScanState,
    pub patches: Vec<RecordPatch>,
    pub disposition: LineDisposition,
}

impl Step {
    fn new(state: ScanState, patches: Vec<RecordPatch>, disposition: LineDisposition) -> Self {
        Self {
            state,
            patches,
            disposition,
        }
    }

    fn ignored(state: ScanState) -> Self {
        Self::new(state, Vec::new(), LineDisposition::Ignored)
    }
}

/// Advance the scanner by one line.
pub fn transition(mut state: ScanState, record: &ParsedStatblock, line: &str) -> Step {
    let mut patches = Vec::new();

    // ------------------------------------------------------------------
    // Section triggers (independent of the current section)
    // ------------------------------------------------------------------
    let entered = if is_features_trigger(line) {
        Some(Section::Features)
    } else if is_hp_stress_trigger(line) {
        Some(Section::HpStress)
    } else if is_experience_trigger(line) {
        Some(Section::Experience)
    } else {
        None
    };

    if let Some(section) = entered {
        state.flush_feature(&mut patches);
        state.awaiting_motives = false;
        state.section = section;
        return Step::new(state, patches, LineDisposition::SectionChange(section));
    }

    // The header-only motives form can appear in any section that applies
    // basic stats; its text is the next line whatever the section.
    if state.awaiting_motives {
        state.awaiting_motives = false;
        return Step::new(
            state,
            vec![RecordPatch::SetMotives(line.to_string())],
            LineDisposition::MotivesContinuation,
        );
    }

    match state.section {
        Section::Header => header_step(state, record, line),
        Section::Experience => experience_step(state, record, line),
        Section::Features => features_step(state, line),
        Section::HpStress => Step::new(state, patches, LineDisposition::Observed),
    }
}

/// Flush whatever feature is still open at end of input.
pub fn finish(mut state: ScanState) -> Vec<RecordPatch> {
    let mut patches = Vec::new();
    state.flush_feature(&mut patches);
    patches
}

fn header_step(state: ScanState, record: &ParsedStatblock, line: &str) -> Step {
    match extract_name_and_type(line, record.has_name()) {
        Some(NameTypeMatch::Name(name)) => {
            return Step::new(state, vec![RecordPatch::SetName(name)], LineDisposition::Name);
        }
        Some(NameTypeMatch::TierType(tt)) => {
            return Step::new(state, vec![tier_patch(tt)], LineDisposition::TierType);
        }
        Some(NameTypeMatch::Legacy { name, tier_type }) => {
            return Step::new(
                state,
                vec![RecordPatch::SetName(name), tier_patch(tier_type)],
                LineDisposition::TierType,
            );
        }
        None => {}
    }

    if let Some(stat) = extract_basic_stat(line) {
        return stat_step(state, stat);
    }

    if record.description.is_none() && record.has_name() && is_description_candidate(line) {
        return Step::new(
            state,
            vec![RecordPatch::SetDescription(line.to_string())],
            LineDisposition::Description,
        );
    }

    Step::ignored(state)
}

fn tier_patch(tt: TierType) -> RecordPatch {
    RecordPatch::SetTierType {
        tier: tt.tier,
        subtype: tt.subtype,
        kind: tt.kind,
    }
}

fn stat_step(mut state: ScanState, stat: BasicStat) -> Step {
    let patches = match stat {
        BasicStat::Difficulty(value) => vec![RecordPatch::SetDifficulty(value)],
        BasicStat::Attack { bonus, info } => {
            let mut patches = vec![RecordPatch::SetAttack(bonus)];
            if let Some(info) = info {
                patches.push(RecordPatch::SetAttackInfo(info));
            }
            patches
        }
        BasicStat::AttackLine(info) => vec![RecordPatch::SetAttackInfo(info)],
        BasicStat::Experience(text) => vec![RecordPatch::SetExperience(text)],
        BasicStat::Motives(Some(text)) => vec![RecordPatch::SetMotives(text)],
        BasicStat::Motives(None) => {
            state.awaiting_motives = true;
            return Step::new(state, Vec::new(), LineDisposition::MotivesHeader);
        }
    };
    Step::new(state, patches, LineDisposition::BasicStat)
}

fn experience_step(mut state: ScanState, record: &ParsedStatblock, line: &str) -> Step {
    if let Some(exp) = extract_experience_line(line) {
        return Step::new(
            state,
            vec![RecordPatch::AddExperience(exp)],
            LineDisposition::ExperienceEntry,
        );
    }

    state.section = Section::Header;

    if is_motives_header(line) {
        return header_step(state, record, line);
    }

    // Not an experience after all: recover the line as a basic stat
    match extract_basic_stat(line) {
        Some(stat) => stat_step(state, stat),
        None => Step::ignored(state),
    }
}

fn features_step(mut state: ScanState, line: &str) -> Step {
    let mut patches = Vec::new();

    if let Some(header) = extract_feature_header(line) {
        state.flush_feature(&mut patches);
        let strategy = header.strategy;
        state.current_feature = Some(header.into_feature());
        return Step::new(state, patches, LineDisposition::FeatureHeader(strategy));
    }

    if state.current_feature.is_some() {
        if !is_new_section(line) {
            if let Some(feature) = state.current_feature.as_mut() {
                feature.append_description(line);
            }
            return Step::new(state, patches, LineDisposition::FeatureText);
        }

        state.flush_feature(&mut patches);
        if let Some(stat) = extract_basic_stat(line) {
            let mut step = stat_step(state, stat);
            patches.append(&mut step.patches);
            step.patches = patches;
            return step;
        }
        return Step::new(state, patches, LineDisposition::FeatureBoundary);
    }

    if let Some(header) = extract_flexible_feature_header(line) {
        let strategy = header.strategy;
        state.current_feature = Some(header.into_feature());
        return Step::new(state, patches, LineDisposition::FeatureHeader(strategy));
    }

    match extract_basic_stat(line) {
        Some(stat) => stat_step(state, stat),
        None => Step::ignored(state),
    }
}
