//! Pitch Codec
//!
//! Converts pitch-name strings such as `"E-6"` or `"F#4"` into absolute
//! semitone numbers (C4 = 60) and back. Spelling is discarded on the way in:
//! only the integer survives.

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

const SEMITONES: i32 = 12;

/// Absolute pitch height in semitones; 60 is C4.
pub type Pitch = i32;

/// Pitch reduced modulo 12 (0 = C, 11 = B).
pub type PitchClass = u8;

/// Sharp spellings used when rendering a pitch back to a name.
const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Errors raised for malformed pitch names. No partial parse is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// The last character was missing or not a decimal octave digit.
    #[error("pitch name `{name}` must end with a single octave digit")]
    MissingOctave {
        /// The offending pitch name.
        name: String,
    },

    /// The first character was not one of the natural letters A–G.
    #[error("pitch name `{name}` must start with one of A-G, got `{letter}`")]
    UnknownLetter {
        /// The offending pitch name.
        name: String,
        /// The character found in letter position.
        letter: char,
    },

    /// A character between the letter and the octave was not `-`, `b` or `#`.
    #[error("pitch name `{name}` has `{modifier}` where a sharp or flat was expected")]
    UnknownModifier {
        /// The offending pitch name.
        name: String,
        /// The unrecognised modifier character.
        modifier: char,
    },
}

/// Pitch class of each natural letter.
fn letter_pitch_class(letter: char) -> Option<Pitch> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Semitone offset of a single accidental character.
fn modifier_delta(modifier: char) -> Option<Pitch> {
    match modifier {
        '-' | 'b' => Some(-1),
        '#' => Some(1),
        _ => None,
    }
}

/// Parse a name of the form `<A-G><modifiers><octave digit>`.
///
/// Each `-` or `b` lowers by a semitone, each `#` raises by one.
///
/// ```
/// use leittone::parse_pitch;
///
/// assert_eq!(parse_pitch("C4").unwrap(), 60);
/// assert_eq!(parse_pitch("C-4").unwrap(), 59);
/// assert_eq!(parse_pitch("C##4").unwrap(), 62);
/// ```
pub fn parse_pitch(name: &str) -> Result<Pitch, PitchError> {
    let mut chars = name.chars();

    let octave = chars
        .next_back()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| PitchError::MissingOctave {
            name: name.to_string(),
        })?;

    // A lone digit leaves nothing in letter position; report the digit itself.
    let letter = chars.next().or_else(|| name.chars().next()).unwrap_or('?');
    let base = letter_pitch_class(letter).ok_or_else(|| PitchError::UnknownLetter {
        name: name.to_string(),
        letter,
    })?;

    let mut pitch = (octave as Pitch + 1) * SEMITONES + base;
    for modifier in chars {
        pitch += modifier_delta(modifier).ok_or_else(|| PitchError::UnknownModifier {
            name: name.to_string(),
            modifier,
        })?;
    }
    Ok(pitch)
}

/// Parse a whitespace-separated list of pitch names, keeping their order.
pub fn parse_slice(names: &str) -> Result<Vec<Pitch>, PitchError> {
    names.split_whitespace().map(parse_pitch).collect()
}

/// Reduce a pitch to its pitch class.
#[inline]
pub fn pitch_class(pitch: Pitch) -> PitchClass {
    pitch.rem_euclid(SEMITONES) as PitchClass
}

/// Render a pitch with sharp spelling, e.g. `61` -> `"C#4"`.
pub fn pitch_name(pitch: Pitch) -> String {
    let octave = pitch.div_euclid(SEMITONES) - 1;
    format!("{}{}", PITCH_CLASS_NAMES[pitch_class(pitch) as usize], octave)
}

/// A vertical sonority: the pitches sounding at one moment, in supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    pitches: Vec<Pitch>,
}

impl Slice {
    /// Wrap an ordered list of pitches.
    pub fn new(pitches: Vec<Pitch>) -> Self {
        Slice { pitches }
    }

    /// The pitches in supplied order.
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Number of pitches, duplicates included.
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// True when the slice holds no pitches.
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Pitch classes in supplied order, duplicates kept.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.pitches.iter().map(|&p| pitch_class(p)).collect()
    }

    /// Count of distinct pitch classes.
    pub fn distinct_pitch_classes(&self) -> usize {
        crate::chord_type::distinct_pitch_classes(&self.pitches).len()
    }

    /// Whether the exact pitch sounds in this slice.
    pub fn contains(&self, pitch: Pitch) -> bool {
        self.pitches.contains(&pitch)
    }

    /// Interval vector of the slice's pitch-class set.
    pub fn interval_vector(&self) -> crate::chord_type::IntervalVector {
        crate::chord_type::interval_vector(&self.pitches)
    }

    /// Registry label of the slice, or its raw vector when unlabelled.
    pub fn label(&self) -> crate::chord_type::ChordLabel {
        crate::chord_type::ChordLabel::of(&self.pitches)
    }
}

impl From<Vec<Pitch>> for Slice {
    fn from(pitches: Vec<Pitch>) -> Self {
        Slice::new(pitches)
    }
}

impl FromStr for Slice {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_slice(s).map(Slice::new)
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &p) in self.pitches.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&pitch_name(p))?;
        }
        Ok(())
    }
}
