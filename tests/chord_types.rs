//! Integration tests for interval vectors and chord-type classification.

use itertools::Itertools;
use lazy_static::lazy_static;
use leittone::{
    classify, interval_vector, is_seventh, is_triad, ChordFamily, ChordKind, ChordLabel,
    IntervalVector, Pitch, TRIAD_VECTORS,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::sync::Mutex;

/// (pitch classes, expected kind, expected label)
struct Fixture {
    pitches: &'static [Pitch],
    kind: ChordKind,
    label: &'static str,
}

lazy_static! {
    static ref REGISTRY_FIXTURES: Vec<Fixture> = vec![
        Fixture { pitches: &[0, 3, 6], kind: ChordKind::Diminished, label: "diminished" },
        Fixture { pitches: &[0, 4, 7], kind: ChordKind::Triad, label: "triad" },
        Fixture { pitches: &[0, 3, 7], kind: ChordKind::Triad, label: "triad" },
        Fixture { pitches: &[0, 4, 8], kind: ChordKind::Augmented, label: "augmented" },
        Fixture { pitches: &[0, 4, 7, 11], kind: ChordKind::MajorSeventh, label: "major 7th" },
        Fixture { pitches: &[0, 3, 7, 10], kind: ChordKind::MinorSeventh, label: "minor 7th" },
        Fixture {
            pitches: &[0, 4, 7, 10],
            kind: ChordKind::DominantOrHalfDiminishedSeventh,
            label: "Dom7/half-dim7",
        },
        Fixture {
            pitches: &[0, 3, 6, 10],
            kind: ChordKind::DominantOrHalfDiminishedSeventh,
            label: "Dom7/half-dim7",
        },
    ];
}

#[test]
fn test_interval_vectors() {
    assert_eq!(interval_vector(&[0, 3, 7, 10]), IntervalVector([0, 1, 2, 1, 2, 0]));
    assert_eq!(interval_vector(&[0, 4, 7, 10]), IntervalVector([0, 1, 2, 1, 1, 1]));
    assert_eq!(interval_vector(&[0, 4, 7, 11]), IntervalVector([1, 0, 1, 2, 2, 0]));
    assert_eq!(interval_vector(&[0, 3, 6, 9]), IntervalVector([0, 0, 4, 0, 0, 2]));
    assert_eq!(
        interval_vector(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]).counts(),
        [12, 12, 12, 12, 12, 6]
    );
    assert_eq!(interval_vector(&[]), IntervalVector::default());
    assert_eq!(interval_vector(&[60]), IntervalVector::default());
}

#[test]
fn test_interval_vector_ignores_order_octave_and_duplicates() {
    let reference = interval_vector(&[60, 64, 67]);
    assert_eq!(interval_vector(&[67, 60, 64]), reference);
    assert_eq!(interval_vector(&[48, 64, 67, 76, 60]), reference);
    assert_eq!(interval_vector(&[0, 4, 7]), reference);
}

#[test]
fn test_registry_fixtures() {
    for f in REGISTRY_FIXTURES.iter() {
        let label = ChordLabel::of(f.pitches);
        assert_eq!(label, ChordLabel::Known(f.kind), "{:?}", f.pitches);
        assert_eq!(label.to_string(), f.label);
        assert_eq!(ChordKind::from_vector(f.kind.vector()), Some(f.kind));

        let family = f.kind.family();
        assert_eq!(family.cardinality(), f.pitches.len());
        assert!(family.matches(f.pitches));
        assert_eq!(is_triad(f.pitches), family == ChordFamily::Triad);
        assert_eq!(is_seventh(f.pitches), family == ChordFamily::Seventh);
    }
}

#[test]
fn test_unknown_vector_labels_as_raw_vector() {
    let dim7 = ChordLabel::of(&[0, 3, 6, 9]);
    assert_eq!(dim7.kind(), None);
    assert_eq!(dim7.to_string(), "(0, 0, 4, 0, 0, 2)");
    assert!(!is_seventh(&[0, 3, 6, 9]));
}

#[test]
fn test_classify_counts_distinct_pitch_classes() {
    // Doubled root still makes a three-note chord.
    assert!(is_triad(&[60, 64, 67, 72]));
    assert!(!is_seventh(&[60, 64, 67, 72]));
    // Incomplete sevenths are not triads unless their vector says so.
    assert!(!is_triad(&[0, 4, 10]));
    assert!(!classify(&[0, 4, 7], 4, &TRIAD_VECTORS));
    assert!(!classify(&[0, 1, 2], 3, &TRIAD_VECTORS));
}

#[test]
fn test_triad_and_seventh_are_exclusive() {
    let failures = Mutex::new(Vec::<Vec<Pitch>>::new());
    let triads = Mutex::new(0usize);
    let sevenths = Mutex::new(0usize);

    let sets: Vec<Vec<Pitch>> = (3..=4)
        .flat_map(|k| (0..12).combinations(k))
        .collect();

    sets.into_par_iter().for_each(|set| {
        let triad = is_triad(&set);
        let seventh = is_seventh(&set);
        if triad && seventh {
            failures.lock().unwrap().push(set.clone());
        }
        if triad {
            *triads.lock().unwrap() += 1;
        }
        if seventh {
            *sevenths.lock().unwrap() += 1;
        }
    });

    let failures = failures.into_inner().unwrap();
    assert!(failures.is_empty(), "both triad and seventh: {failures:?}");
    // 12 major + 12 minor + 12 diminished + 4 augmented
    assert_eq!(triads.into_inner().unwrap(), 40);
    // 12 each of major, minor, dominant and half-diminished sevenths
    assert_eq!(sevenths.into_inner().unwrap(), 48);
}
