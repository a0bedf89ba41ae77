//! # leittone
//!
//! Detect and enumerate the "free leading-tone setting": chromatic approach
//! motion in which the notes of a non-standard sonority slide by small steps
//! into a triad or seventh chord.
//!
//! ## Example
//! ```rust
//! use leittone::{ApproachEnumerator, LeadingToneRules, Progression, Slice};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Test a progression against the default rules
//!     let rules = LeadingToneRules::builder()
//!         .max_step(1)
//!         .build()?;
//!     let mozart = Progression::parse("E-6 G#5 B4 G4", "D6 A5 C5 F#4")?;
//!     assert!(rules.check(&mozart)?.is_approach());
//!
//!     // 2) Generate approaches to a destination chord
//!     let enumerator = ApproachEnumerator::builder()
//!         .max_step(1)
//!         .common_tones(false)
//!         .build()?;
//!     let destination: Slice = "E4 G4 B4".parse()?;
//!     for candidate in enumerator.enumerate(&destination)?.take(3) {
//!         println!("{candidate} -> {destination}");
//!     }
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `serde`: `Serialize`/`Deserialize` for rules, slices, vectors and candidates

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Pitch-name parsing and slices.
pub use pitch::{parse_pitch, parse_slice, pitch_class, pitch_name, Pitch, PitchClass, PitchError, Slice};

/// Interval vectors and chord-type registry.
pub use chord_type::{
    classify, interval_vector, is_seventh, is_triad, ChordFamily, ChordKind, ChordLabel,
    IntervalVector, SEVENTH_VECTORS, TRIAD_VECTORS,
};

/// Free leading-tone test.
pub use leading_tone::{
    is_free_leading_tone, CommonToneMode, LeadingToneRules, LeadingToneRulesBuilder, Progression,
    Rejection, Verdict,
};

/// Approach enumeration.
pub use approach::{enumerate_approaches, ApproachEnumerator, ApproachEnumeratorBuilder, Candidate};

/// Analysis errors.
pub use error::AnalysisError;

/// Pitch codec module.
pub mod pitch;

/// Chord classifier module.
pub mod chord_type;

/// Voice-leading predicate module.
pub mod leading_tone;

/// Approach enumerator module.
pub mod approach;

/// Error module.
pub mod error;
