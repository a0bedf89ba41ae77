//! Free Leading-Tone Setting
//!
//! Decides whether two successive slices form a chromatic approach: a
//! sonority that is not a conventional chord moving by small steps into a
//! triad or seventh chord.

use log::debug;
use std::fmt::{self, Display};

use crate::chord_type::ChordFamily;
use crate::error::AnalysisError;
use crate::pitch::{pitch_class, Pitch, Slice};

/// Smallest permitted `min_distinct`.
const MIN_DISTINCT_FLOOR: usize = 3;

/// How shared tones between the two slices are detected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommonToneMode {
    /// Same pitch in the same octave.
    #[default]
    ExactPitch,
    /// Same pitch class in any octave.
    PitchClass,
}

/// An ordered pair of slices, the first resolving into the second.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    /// The moment of the potential approach.
    pub from: Slice,
    /// The resolution.
    pub to: Slice,
}

impl Progression {
    /// Pair two slices.
    pub fn new(from: Slice, to: Slice) -> Self {
        Progression { from, to }
    }

    /// Parse both slices from pitch-name strings.
    pub fn parse(from: &str, to: &str) -> Result<Self, AnalysisError> {
        Ok(Progression {
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

/// Why a progression is not a free leading-tone setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The first slice has too few distinct pitch classes.
    TooFewDistinct {
        /// Distinct pitch classes found.
        found: usize,
        /// Distinct pitch classes required.
        required: usize,
    },
    /// The first slice is already a triad or seventh chord.
    SourceIsCommon(ChordFamily),
    /// The second slice is not a chord of the first slice's family.
    DestinationNotCommon(ChordFamily),
    /// Tones held across both slices.
    CommonTones(Vec<Pitch>),
    /// A pitch of the second slice not reachable within `max_step`.
    BeyondStep {
        /// The unreachable pitch.
        pitch: Pitch,
        /// The step limit in force.
        max_step: u32,
    },
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooFewDistinct { found, required } => {
                write!(f, "{found} distinct pitch classes, {required} required")
            }
            Rejection::SourceIsCommon(family) => write!(f, "first slice is already a {family}"),
            Rejection::DestinationNotCommon(family) => write!(f, "second slice is not a {family}"),
            Rejection::CommonTones(pitches) => write!(f, "common tones: {pitches:?}"),
            Rejection::BeyondStep { pitch, max_step } => {
                write!(f, "beyond a step of {max_step} semitones: {pitch}")
            }
        }
    }
}

/// Outcome of checking a progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The progression is a free leading-tone setting.
    Approach,
    /// The progression failed the named rule.
    Rejected(Rejection),
}

impl Verdict {
    /// True for [`Verdict::Approach`].
    pub fn is_approach(&self) -> bool {
        matches!(self, Verdict::Approach)
    }
}

/// Rule set for the free leading-tone test. Each field toggles one check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LeadingToneRules {
    /// Reject progressions in which any tone is held.
    pub require_no_common_tone: bool,
    /// Reject a first slice that is already a triad or seventh.
    pub require_slice_1_not_common: bool,
    /// Require the second slice to be a triad or seventh matching the first
    /// slice's cardinality.
    pub require_slice_2_common: bool,
    /// Minimum distinct pitch classes in the first slice; at least 3.
    pub min_distinct: usize,
    /// Largest step, in semitones, from a first-slice pitch to a second-slice pitch.
    pub max_step: u32,
    /// How held tones are detected.
    pub common_tones: CommonToneMode,
}

impl Default for LeadingToneRules {
    fn default() -> Self {
        LeadingToneRules {
            require_no_common_tone: false,
            require_slice_1_not_common: true,
            require_slice_2_common: true,
            min_distinct: MIN_DISTINCT_FLOOR,
            max_step: 1,
            common_tones: CommonToneMode::ExactPitch,
        }
    }
}

/// Builder for [`LeadingToneRules`].
pub struct LeadingToneRulesBuilder {
    rules: LeadingToneRules,
}

impl LeadingToneRulesBuilder {
    /// Start from the defaults: no common-tone requirement, first slice not
    /// common, second slice common, `min_distinct = 3`, `max_step = 1`.
    pub fn new() -> Self {
        LeadingToneRulesBuilder {
            rules: LeadingToneRules::default(),
        }
    }

    /// Reject progressions with held tones.
    pub fn require_no_common_tone(mut self, value: bool) -> Self {
        self.rules.require_no_common_tone = value;
        self
    }

    /// Reject a first slice that is already a conventional chord.
    pub fn require_slice_1_not_common(mut self, value: bool) -> Self {
        self.rules.require_slice_1_not_common = value;
        self
    }

    /// Require a conventional chord as the second slice.
    pub fn require_slice_2_common(mut self, value: bool) -> Self {
        self.rules.require_slice_2_common = value;
        self
    }

    /// Set the minimum distinct pitch-class count of the first slice.
    pub fn min_distinct(mut self, n: usize) -> Self {
        self.rules.min_distinct = n;
        self
    }

    /// Set the largest permitted step in semitones.
    pub fn max_step(mut self, step: u32) -> Self {
        self.rules.max_step = step;
        self
    }

    /// Choose exact-pitch or pitch-class common-tone detection.
    pub fn common_tones(mut self, mode: CommonToneMode) -> Self {
        self.rules.common_tones = mode;
        self
    }

    /// Finalize, rejecting `min_distinct` below 3.
    pub fn build(self) -> Result<LeadingToneRules, AnalysisError> {
        self.rules.validate()?;
        Ok(self.rules)
    }
}

impl Default for LeadingToneRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadingToneRules {
    /// Start customizing with a builder.
    pub fn builder() -> LeadingToneRulesBuilder {
        LeadingToneRulesBuilder::new()
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_distinct < MIN_DISTINCT_FLOOR {
            return Err(AnalysisError::InvalidArgument {
                arg: "min_distinct",
                msg: format!("must be >= {MIN_DISTINCT_FLOOR}, got {}", self.min_distinct),
            });
        }
        Ok(())
    }

    /// Run the rules in order, stopping at the first that fails.
    pub fn check(&self, progression: &Progression) -> Result<Verdict, AnalysisError> {
        self.validate()?;
        let verdict = match self.first_rejection(progression) {
            Some(rejection) => {
                debug!("{} -> {}: {rejection}", progression.from, progression.to);
                Verdict::Rejected(rejection)
            }
            None => Verdict::Approach,
        };
        Ok(verdict)
    }

    /// Boolean form of [`LeadingToneRules::check`].
    pub fn is_match(&self, progression: &Progression) -> Result<bool, AnalysisError> {
        self.check(progression).map(|v| v.is_approach())
    }

    fn first_rejection(&self, progression: &Progression) -> Option<Rejection> {
        let from = progression.from.pitches();
        let to = progression.to.pitches();

        let distinct = progression.from.distinct_pitch_classes();
        if distinct < self.min_distinct {
            return Some(Rejection::TooFewDistinct {
                found: distinct,
                required: self.min_distinct,
            });
        }

        let family = ChordFamily::for_cardinality(distinct);

        if self.require_slice_1_not_common {
            if let Some(family) = family.filter(|f| f.matches(from)) {
                return Some(Rejection::SourceIsCommon(family));
            }
        }

        if self.require_slice_2_common {
            if let Some(family) = family.filter(|f| !f.matches(to)) {
                return Some(Rejection::DestinationNotCommon(family));
            }
        }

        if self.require_no_common_tone {
            let shared = self.shared_tones(from, to);
            if !shared.is_empty() {
                return Some(Rejection::CommonTones(shared));
            }
        }

        self.out_of_step(from, to)
            .map(|pitch| Rejection::BeyondStep {
                pitch,
                max_step: self.max_step,
            })
    }

    /// First-slice tones also present in the second slice.
    fn shared_tones(&self, from: &[Pitch], to: &[Pitch]) -> Vec<Pitch> {
        from.iter()
            .copied()
            .filter(|&p| match self.common_tones {
                CommonToneMode::ExactPitch => to.contains(&p),
                CommonToneMode::PitchClass => {
                    to.iter().any(|&q| pitch_class(q) == pitch_class(p))
                }
            })
            .collect()
    }

    /// First distinct second-slice pitch outside every `[p - max_step, p + max_step]`.
    fn out_of_step(&self, from: &[Pitch], to: &[Pitch]) -> Option<Pitch> {
        to.iter()
            .enumerate()
            .filter(|&(i, p)| !to[..i].contains(p))
            .map(|(_, &p)| p)
            .find(|&p| !from.iter().any(|&q| p.abs_diff(q) <= self.max_step))
    }
}

/// Parse two slice strings and test them with `rules`.
///
/// ```
/// use leittone::{is_free_leading_tone, LeadingToneRules};
///
/// let rules = LeadingToneRules::default();
/// assert!(is_free_leading_tone("E-6 G#5 B4 G4", "D6 A5 C5 F#4", &rules).unwrap());
/// assert!(!is_free_leading_tone("B5 G#5 D5 E#4", "C6 A5 E-5 F#4", &rules).unwrap());
/// ```
pub fn is_free_leading_tone(
    slice_1: &str,
    slice_2: &str,
    rules: &LeadingToneRules,
) -> Result<bool, AnalysisError> {
    rules.is_match(&Progression::parse(slice_1, slice_2)?)
}
