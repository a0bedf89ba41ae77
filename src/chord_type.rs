//! Chord Classifier
//!
//! Fingerprints a pitch-class set by its interval vector and matches the
//! fingerprint against a fixed registry of triad and seventh-chord vectors.

use itertools::Itertools;
use std::fmt::{self, Display};

use crate::pitch::{pitch_class, Pitch, PitchClass};

const SEMITONES: usize = 12;

/// Number of interval classes (1 through 6).
const NUM_INTERVAL_CLASSES: usize = 6;

/// Diminished, major/minor and augmented triads.
pub const TRIAD_VECTORS: [IntervalVector; 3] = [
    IntervalVector([0, 0, 2, 0, 0, 1]),
    IntervalVector([0, 0, 1, 1, 1, 0]),
    IntervalVector([0, 0, 0, 3, 0, 0]),
];

/// Major, minor and dominant/half-diminished sevenths.
pub const SEVENTH_VECTORS: [IntervalVector; 3] = [
    IntervalVector([1, 0, 1, 2, 2, 0]),
    IntervalVector([0, 1, 2, 1, 2, 0]),
    IntervalVector([0, 1, 2, 1, 1, 1]),
];

/// (vector, kind) in registry order
const CHORD_REGISTRY: [(IntervalVector, ChordKind); 6] = [
    (TRIAD_VECTORS[0], ChordKind::Diminished),
    (TRIAD_VECTORS[1], ChordKind::Triad),
    (TRIAD_VECTORS[2], ChordKind::Augmented),
    (SEVENTH_VECTORS[0], ChordKind::MajorSeventh),
    (SEVENTH_VECTORS[1], ChordKind::MinorSeventh),
    (SEVENTH_VECTORS[2], ChordKind::DominantOrHalfDiminishedSeventh),
];

/// Count of unordered pitch-class pairs per interval class, ic1 first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalVector(pub [u8; NUM_INTERVAL_CLASSES]);

impl IntervalVector {
    /// The six bucket counts.
    pub fn counts(&self) -> [u8; NUM_INTERVAL_CLASSES] {
        self.0
    }
}

impl Display for IntervalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

/// Distinct pitch classes of `pitches`, ascending.
pub(crate) fn distinct_pitch_classes(pitches: &[Pitch]) -> Vec<PitchClass> {
    let mut seen = [false; SEMITONES];
    for &p in pitches {
        seen[pitch_class(p) as usize] = true;
    }
    (0..SEMITONES as PitchClass)
        .filter(|&pc| seen[pc as usize])
        .collect()
}

/// Interval vector of the pitch-class set underlying `pitches`.
///
/// Octave, order and duplicates are all ignored.
pub fn interval_vector(pitches: &[Pitch]) -> IntervalVector {
    let mut vector = [0u8; NUM_INTERVAL_CLASSES];
    for (a, b) in distinct_pitch_classes(pitches).into_iter().tuple_combinations() {
        let interval = a.abs_diff(b) as usize;
        let ic = interval.min(SEMITONES - interval);
        vector[ic - 1] += 1;
    }
    IntervalVector(vector)
}

/// True when `pitches` hold exactly `cardinality` distinct pitch classes and
/// their interval vector is one of `accepted`.
pub fn classify(pitches: &[Pitch], cardinality: usize, accepted: &[IntervalVector]) -> bool {
    if distinct_pitch_classes(pitches).len() != cardinality {
        return false;
    }
    accepted.contains(&interval_vector(pitches))
}

/// Diminished, major, minor or augmented triad.
pub fn is_triad(pitches: &[Pitch]) -> bool {
    classify(pitches, 3, &TRIAD_VECTORS)
}

/// Major, minor, dominant or half-diminished seventh.
pub fn is_seventh(pitches: &[Pitch]) -> bool {
    classify(pitches, 4, &SEVENTH_VECTORS)
}

/// Chord qualities known to the registry.
///
/// Dominant and half-diminished sevenths share a vector and cannot be told
/// apart without a root, so they are one kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordKind {
    /// Diminished triad (e.g., C-Eb-Gb)
    Diminished,
    /// Major or minor triad (e.g., C-E-G, C-Eb-G)
    Triad,
    /// Augmented triad (e.g., C-E-G#)
    Augmented,
    /// Major seventh (e.g., C-E-G-B)
    MajorSeventh,
    /// Minor seventh (e.g., C-Eb-G-Bb)
    MinorSeventh,
    /// Dominant seventh (C-E-G-Bb) or half-diminished seventh (C-Eb-Gb-Bb)
    DominantOrHalfDiminishedSeventh,
}

impl ChordKind {
    /// Look a vector up in the registry.
    pub fn from_vector(vector: IntervalVector) -> Option<ChordKind> {
        CHORD_REGISTRY
            .iter()
            .find(|(v, _)| *v == vector)
            .map(|&(_, kind)| kind)
    }

    /// The registry's interval vector for this kind.
    pub fn vector(self) -> IntervalVector {
        CHORD_REGISTRY
            .iter()
            .find(|(_, k)| *k == self)
            .map(|&(v, _)| v)
            .unwrap_or_default()
    }

    /// Reporting label, fixed for interoperability with rendered output.
    pub fn label(self) -> &'static str {
        match self {
            ChordKind::Diminished => "diminished",
            ChordKind::Triad => "triad",
            ChordKind::Augmented => "augmented",
            ChordKind::MajorSeventh => "major 7th",
            ChordKind::MinorSeventh => "minor 7th",
            ChordKind::DominantOrHalfDiminishedSeventh => "Dom7/half-dim7",
        }
    }

    /// Triad or seventh.
    pub fn family(self) -> ChordFamily {
        match self {
            ChordKind::Diminished | ChordKind::Triad | ChordKind::Augmented => ChordFamily::Triad,
            _ => ChordFamily::Seventh,
        }
    }
}

impl Display for ChordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two conventional chord families, keyed by cardinality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChordFamily {
    /// Three distinct pitch classes.
    Triad,
    /// Four distinct pitch classes.
    Seventh,
}

impl ChordFamily {
    /// The family a sonority of `cardinality` distinct pitch classes belongs
    /// to, if any.
    pub fn for_cardinality(cardinality: usize) -> Option<ChordFamily> {
        match cardinality {
            3 => Some(ChordFamily::Triad),
            4 => Some(ChordFamily::Seventh),
            _ => None,
        }
    }

    /// Distinct pitch-class count of members.
    pub fn cardinality(self) -> usize {
        match self {
            ChordFamily::Triad => 3,
            ChordFamily::Seventh => 4,
        }
    }

    /// Whether `pitches` form a member of this family.
    pub fn matches(self, pitches: &[Pitch]) -> bool {
        match self {
            ChordFamily::Triad => is_triad(pitches),
            ChordFamily::Seventh => is_seventh(pitches),
        }
    }
}

impl Display for ChordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordFamily::Triad => f.write_str("triad"),
            ChordFamily::Seventh => f.write_str("seventh chord"),
        }
    }
}

/// Display label for a sonority: a registry kind or, failing that, the raw vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordLabel {
    /// Vector found in the registry.
    Known(ChordKind),
    /// Vector outside the registry.
    Unknown(IntervalVector),
}

impl ChordLabel {
    /// Label the pitch-class set underlying `pitches`.
    pub fn of(pitches: &[Pitch]) -> ChordLabel {
        Self::from_vector(interval_vector(pitches))
    }

    /// Label a precomputed vector.
    pub fn from_vector(vector: IntervalVector) -> ChordLabel {
        ChordKind::from_vector(vector)
            .map(ChordLabel::Known)
            .unwrap_or(ChordLabel::Unknown(vector))
    }

    /// The registry kind, if known.
    pub fn kind(&self) -> Option<ChordKind> {
        match self {
            ChordLabel::Known(kind) => Some(*kind),
            ChordLabel::Unknown(_) => None,
        }
    }
}

impl Display for ChordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordLabel::Known(kind) => Display::fmt(kind, f),
            ChordLabel::Unknown(vector) => Display::fmt(vector, f),
        }
    }
}
