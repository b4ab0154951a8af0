use spectretile::TilingError;
use spectretile::analysis::{LabelCounts, recurrence_counts, substitution_counts};
use spectretile::grammar::Label;

#[test]
fn test_counts_start_empty() -> spectretile::Result<()> {
    let counts = LabelCounts::<u64>::new();
    assert_eq!(counts.total()?, 0);
    assert_eq!(counts.get(Label::Delta), Some(0));
    assert_eq!(counts.get(Label::Gamma), None);
    Ok(())
}

#[test]
fn test_recording_accumulates() -> spectretile::Result<()> {
    let mut counts = LabelCounts::<u64>::new();
    counts.record(Label::Psi, 3)?;
    counts.record(Label::Psi, 4)?;
    counts.record(Label::Gamma1, 1)?;
    assert_eq!(counts.get(Label::Psi), Some(7));
    assert_eq!(counts.total()?, 8);
    assert_eq!(counts.as_pairs().len(), 10);
    Ok(())
}

#[test]
fn test_recording_the_gamma_supertile_is_an_error() {
    let mut counts = LabelCounts::<u64>::new();
    assert!(matches!(
        counts.record(Label::Gamma, 1),
        Err(TilingError::InvalidArgument { .. })
    ));
}

#[test]
fn test_overflow_is_reported_not_wrapped() -> spectretile::Result<()> {
    let mut counts = LabelCounts::<u8>::new();
    counts.record(Label::Xi, 250)?;
    assert!(counts.record(Label::Xi, 10).is_err());
    Ok(())
}

#[test]
fn test_generation_zero_is_a_single_delta() -> spectretile::Result<()> {
    let counts = substitution_counts::<i64>(0)?;
    assert_eq!(counts.total()?, 1);
    assert_eq!(counts.get(Label::Delta), Some(1));
    assert_eq!(counts.get(Label::Gamma1), Some(0));
    Ok(())
}

#[test]
fn test_generation_one_census() -> spectretile::Result<()> {
    let counts = substitution_counts::<i64>(1)?;
    let expected = [
        (Label::Gamma1, 1),
        (Label::Gamma2, 1),
        (Label::Delta, 1),
        (Label::Sigma, 1),
        (Label::Theta, 0),
        (Label::Lambda, 0),
        (Label::Pi, 1),
        (Label::Xi, 2),
        (Label::Phi, 2),
        (Label::Psi, 0),
    ];
    for (label, count) in expected {
        assert_eq!(counts.get(label), Some(count), "{label}");
    }
    assert_eq!(counts.total()?, 9);
    Ok(())
}

#[test]
fn test_generation_two_census() -> spectretile::Result<()> {
    let counts = substitution_counts::<i64>(2)?;
    assert_eq!(counts.get(Label::Theta), Some(1));
    assert_eq!(counts.get(Label::Lambda), Some(1));
    assert_eq!(counts.get(Label::Phi), Some(14));
    assert_eq!(counts.get(Label::Psi), Some(10));
    assert_eq!(counts.total()?, 71);
    Ok(())
}

#[test]
fn test_deep_census_against_known_values() -> spectretile::Result<()> {
    let counts = substitution_counts::<i64>(14)?;
    assert_eq!(counts.total()?, 4_026_657_584_951);
    assert_eq!(counts.get(Label::Gamma1), Some(453_811_015_736));
    assert_eq!(counts.get(Label::Gamma2), counts.get(Label::Gamma1));
    assert_eq!(counts.get(Label::Delta), Some(453_811_015_736));
    assert_eq!(counts.get(Label::Theta), Some(57_641_556_673));
    assert_eq!(counts.get(Label::Lambda), Some(57_641_556_673));
    assert_eq!(counts.get(Label::Xi), Some(338_527_902_390));
    assert_eq!(counts.get(Label::Pi), Some(338_527_902_391));
    assert_eq!(counts.get(Label::Sigma), Some(453_811_015_736));
    assert_eq!(counts.get(Label::Phi), Some(792_338_918_126));
    assert_eq!(counts.get(Label::Psi), Some(626_735_685_754));
    Ok(())
}

#[test]
fn test_both_methods_agree() -> spectretile::Result<()> {
    for generation in 0..=14 {
        assert_eq!(
            substitution_counts::<i64>(generation)?,
            recurrence_counts::<i64>(generation)?,
            "generation {generation}"
        );
    }
    Ok(())
}

#[test]
fn test_wider_integers_reach_deeper() -> spectretile::Result<()> {
    let narrow = substitution_counts::<i64>(14)?;
    let wide = substitution_counts::<i128>(14)?;
    assert_eq!(i128::from(narrow.total()?), wide.total()?);
    Ok(())
}

#[test]
fn test_narrow_integers_overflow_loudly() {
    assert!(substitution_counts::<i8>(4).is_err());
}

#[test]
fn test_recurrence_overflow_is_reported_not_wrapped() {
    assert!(matches!(
        recurrence_counts::<i8>(4),
        Err(TilingError::InvalidArgument { .. })
    ));
}
