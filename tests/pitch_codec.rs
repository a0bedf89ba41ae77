//! Integration tests for pitch-name parsing and rendering.

use leittone::{
    parse_pitch, parse_slice, pitch_class, pitch_name, ChordKind, ChordLabel, IntervalVector,
    PitchError, Slice,
};

#[test]
fn test_parse_naturals_and_accidentals() {
    let cases = [
        ("C1", 24),
        ("C4", 60),
        ("C-4", 59),
        ("Cb4", 59),
        ("C#4", 61),
        ("C##4", 62),
        ("B#3", 60),
        ("E-6", 87),
        ("A0", 21),
        ("C-0", 11),
        ("Bb--2", 44),
    ];
    for (name, expected) in cases {
        assert_eq!(parse_pitch(name), Ok(expected), "parsing {name}");
    }
}

#[test]
fn test_modifier_order_does_not_matter() {
    assert_eq!(parse_pitch("C#-4"), parse_pitch("C-#4"));
    assert_eq!(parse_pitch("C#-4"), Ok(60));
    assert_eq!(parse_pitch("Fb#b5"), parse_pitch("F#bb5"));
    assert_eq!(parse_pitch("G-b5"), parse_pitch("Gb-5"));
}

#[test]
fn test_malformed_names() {
    assert!(matches!(parse_pitch(""), Err(PitchError::MissingOctave { .. })));
    assert!(matches!(parse_pitch("C"), Err(PitchError::MissingOctave { .. })));
    assert!(matches!(parse_pitch("C#"), Err(PitchError::MissingOctave { .. })));
    assert_eq!(
        parse_pitch("H4"),
        Err(PitchError::UnknownLetter {
            name: "H4".to_string(),
            letter: 'H'
        })
    );
    assert!(matches!(
        parse_pitch("c4"),
        Err(PitchError::UnknownLetter { letter: 'c', .. })
    ));
    assert!(matches!(
        parse_pitch("4"),
        Err(PitchError::UnknownLetter { letter: '4', .. })
    ));
    assert_eq!(
        parse_pitch("Cx4"),
        Err(PitchError::UnknownModifier {
            name: "Cx4".to_string(),
            modifier: 'x'
        })
    );
    // Octaves are a single digit.
    assert!(matches!(
        parse_pitch("C10"),
        Err(PitchError::UnknownModifier { modifier: '1', .. })
    ));
}

#[test]
fn test_error_messages_name_the_input() {
    let err = parse_pitch("Q4").unwrap_err();
    assert!(err.to_string().contains("Q4"), "{err}");
}

#[test]
fn test_parse_slice_keeps_order() {
    assert_eq!(parse_slice("E-6 G#5 B4 G4"), Ok(vec![87, 80, 71, 67]));
    assert_eq!(parse_slice("D6 A5 C5 F#4"), Ok(vec![86, 81, 72, 66]));
    assert_eq!(parse_slice("  C4\tE4  G4 "), Ok(vec![60, 64, 67]));
    assert_eq!(parse_slice(""), Ok(vec![]));
    assert!(matches!(
        parse_slice("C4 X4 G4"),
        Err(PitchError::UnknownLetter { letter: 'X', .. })
    ));
}

#[test]
fn test_pitch_name_round_trips_through_parse() {
    for p in 12..=131 {
        let name = pitch_name(p);
        assert_eq!(parse_pitch(&name), Ok(p), "round trip of {name}");
    }
    assert_eq!(pitch_name(60), "C4");
    assert_eq!(pitch_name(61), "C#4");
    assert_eq!(pitch_name(87), "D#6");
}

#[test]
fn test_pitch_class_wraps_negative_pitches() {
    assert_eq!(pitch_class(60), 0);
    assert_eq!(pitch_class(71), 11);
    assert_eq!(pitch_class(-1), 11);
}

#[test]
fn test_slice_accessors() {
    let slice: Slice = "E-6 G#5 B4 G4".parse().unwrap();
    assert_eq!(slice.pitches(), &[87, 80, 71, 67]);
    assert_eq!(slice.pitch_classes(), vec![3, 8, 11, 7]);
    assert_eq!(slice.distinct_pitch_classes(), 4);
    assert_eq!(slice.to_string(), "D#6 G#5 B4 G4");
    assert!(slice.contains(71));
    assert!(!slice.contains(59));

    let doubled: Slice = "C4 C5 E4 G4".parse().unwrap();
    assert_eq!(doubled.len(), 4);
    assert_eq!(doubled.distinct_pitch_classes(), 3);
    assert_eq!(doubled.interval_vector(), IntervalVector([0, 0, 1, 1, 1, 0]));
    assert_eq!(doubled.label(), ChordLabel::Known(ChordKind::Triad));

    assert_eq!(slice.interval_vector(), IntervalVector([1, 0, 1, 3, 1, 0]));
    assert_eq!(slice.label().kind(), None);
    assert_eq!(slice.label().to_string(), "(1, 0, 1, 3, 1, 0)");

    let empty: Slice = "".parse().unwrap();
    assert!(empty.is_empty());
}
