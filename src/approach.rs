//! Approach Enumerator
//!
//! The inverse of the leading-tone test: given a destination chord, generate
//! every preceding sonority whose notes lie within a step of it.

use itertools::{Either, Itertools};
use log::trace;
use std::fmt::{self, Display};

use crate::chord_type::ChordLabel;
use crate::error::AnalysisError;
use crate::pitch::{Pitch, Slice};

/// Destination sizes supported when every destination tone must be approached.
const SUPPORTED_DESTINATIONS: [usize; 2] = [3, 4];

/// One preceding chord: a group of approaching pitches per destination tone
/// (or per chosen neighbor set), flattened in that order for playback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    groups: Vec<Vec<Pitch>>,
}

impl Candidate {
    /// The approaching groups in destination order.
    pub fn groups(&self) -> &[Vec<Pitch>] {
        &self.groups
    }

    /// All approaching pitches, flattened.
    pub fn pitches(&self) -> Vec<Pitch> {
        self.groups.iter().flatten().copied().collect()
    }

    /// The candidate as a slice.
    pub fn slice(&self) -> Slice {
        Slice::new(self.pitches())
    }

    /// Registry label of the candidate chord.
    pub fn label(&self) -> ChordLabel {
        ChordLabel::of(&self.pitches())
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.slice(), self.label())
    }
}

/// Builder for an [`ApproachEnumerator`].
pub struct ApproachEnumeratorBuilder {
    max_step: u32,
    cardinality: usize,
    common_tones: bool,
    require_all_destination: bool,
}

impl ApproachEnumeratorBuilder {
    /// Start with default parameters:
    /// max_step = 1, cardinality = 3,
    /// common_tones = false, require_all_destination = true.
    pub fn new() -> Self {
        ApproachEnumeratorBuilder {
            max_step: 1,
            cardinality: 3,
            common_tones: false,
            require_all_destination: true,
        }
    }

    /// Set the largest step, in semitones, into a destination tone.
    pub fn max_step(mut self, step: u32) -> Self {
        self.max_step = step;
        self
    }

    /// Set how many neighbor sets to combine when not every destination tone
    /// must be approached. Must be at least 1 in that mode; `build` rejects 0
    /// rather than yielding a single empty candidate.
    pub fn cardinality(mut self, n: usize) -> Self {
        self.cardinality = n;
        self
    }

    /// Allow a destination tone to approach itself.
    pub fn common_tones(mut self, allow: bool) -> Self {
        self.common_tones = allow;
        self
    }

    /// Require at least one approach to every destination tone.
    pub fn require_all_destination(mut self, require: bool) -> Self {
        self.require_all_destination = require;
        self
    }

    /// Finalize and create the enumerator.
    ///
    /// Returns `Err(InvalidArgument)` if `max_step` does not fit a [`Pitch`],
    /// or if `cardinality` is 0 when not every destination tone must be approached.
    pub fn build(self) -> Result<ApproachEnumerator, AnalysisError> {
        let max_step =
            Pitch::try_from(self.max_step).map_err(|_| AnalysisError::InvalidArgument {
                arg: "max_step",
                msg: format!("must be <= {}, got {}", Pitch::MAX, self.max_step),
            })?;
        if !self.require_all_destination && self.cardinality == 0 {
            return Err(AnalysisError::InvalidArgument {
                arg: "cardinality",
                msg: "must be >= 1".to_string(),
            });
        }
        Ok(ApproachEnumerator {
            max_step,
            cardinality: self.cardinality,
            common_tones: self.common_tones,
            require_all_destination: self.require_all_destination,
        })
    }
}

impl Default for ApproachEnumeratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the preceding chords that could resolve into a destination.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ApproachEnumerator {
    max_step: Pitch,
    cardinality: usize,
    common_tones: bool,
    require_all_destination: bool,
}

impl ApproachEnumerator {
    /// Start customizing with a builder.
    pub fn builder() -> ApproachEnumeratorBuilder {
        ApproachEnumeratorBuilder::new()
    }

    /// Pitches within `max_step` of `pitch`, ascending, minus `pitch` itself
    /// unless common tones are allowed.
    pub fn neighbors(&self, pitch: Pitch) -> Vec<Pitch> {
        // Saturate so pitches near the ends of the range cannot overflow.
        (pitch.saturating_sub(self.max_step)..=pitch.saturating_add(self.max_step))
            .filter(|&p| self.common_tones || p != pitch)
            .collect()
    }

    /// Lazily enumerate every candidate approaching `destination`.
    ///
    /// Repeated destination pitches share one neighbor set.
    ///
    /// Returns `Err(InvalidArgument)` when every destination tone must be
    /// approached but the destination does not hold 3 or 4 distinct pitches.
    pub fn enumerate(
        &self,
        destination: &Slice,
    ) -> Result<impl Iterator<Item = Candidate>, AnalysisError> {
        let neighbor_sets: Vec<Vec<Pitch>> = destination
            .pitches()
            .iter()
            .unique()
            .map(|&p| self.neighbors(p))
            .collect();
        trace!("neighbor sets of {destination}: {neighbor_sets:?}");

        if !self.require_all_destination {
            let options = neighbor_sets
                .into_iter()
                .combinations(self.cardinality)
                .map(|groups| Candidate { groups });
            return Ok(Either::Right(options));
        }

        if !SUPPORTED_DESTINATIONS.contains(&neighbor_sets.len()) {
            return Err(AnalysisError::InvalidArgument {
                arg: "destination",
                msg: format!(
                    "expected 3 or 4 distinct destination pitches, got {}",
                    neighbor_sets.len()
                ),
            });
        }

        // Every non-empty subset of each neighbor set, one subset per destination tone.
        let options = neighbor_sets
            .into_iter()
            .map(|set| set.into_iter().powerset().filter(|subset| !subset.is_empty()))
            .multi_cartesian_product()
            .map(|groups| Candidate { groups });
        Ok(Either::Left(options))
    }
}

/// Enumerate approaches to a destination given as a pitch-name string.
pub fn enumerate_approaches(
    destination: &str,
    max_step: u32,
    cardinality: usize,
    allow_common_tones: bool,
    require_all_destination: bool,
) -> Result<Vec<Candidate>, AnalysisError> {
    let destination: Slice = destination.parse()?;
    let enumerator = ApproachEnumerator::builder()
        .max_step(max_step)
        .cardinality(cardinality)
        .common_tones(allow_common_tones)
        .require_all_destination(require_all_destination)
        .build()?;
    Ok(enumerator.enumerate(&destination)?.collect())
}
