use spectretile::TilingError;
use spectretile::geometry::{ExactStrategy, FloatStrategy, GeometryStrategy, OUTLINE_POINTS};

const EDGE_A: f64 = 10.0;
const EDGE_B: f64 = 6.0;
const TOLERANCE: f64 = 1e-9;

fn strategies() -> spectretile::Result<(FloatStrategy, ExactStrategy)> {
    Ok((
        FloatStrategy::new(EDGE_A, EDGE_B)?,
        ExactStrategy::new(EDGE_A, EDGE_B)?,
    ))
}

#[test]
fn test_rejects_bad_edge_lengths() {
    assert!(matches!(
        FloatStrategy::new(1.0, -2.0),
        Err(TilingError::InvalidArgument { .. })
    ));
}

#[test]
fn test_outline_matches_exact_projection() -> spectretile::Result<()> {
    let (float, exact) = strategies()?;
    let float_points = float.base_points()?;
    let exact_points = exact.base_points()?;
    assert_eq!(float_points.len(), OUTLINE_POINTS);
    for (f, e) in float_points.iter().zip(exact_points.iter()) {
        let (fx, fy) = float.to_xy(f);
        let (ex, ey) = exact.to_xy(e);
        assert!((fx - ex).abs() < TOLERANCE && (fy - ey).abs() < TOLERANCE);
    }
    Ok(())
}

#[test]
fn test_mystic_outline_matches_exact_projection() -> spectretile::Result<()> {
    let (float, exact) = strategies()?;
    let float_mystic = float.mystic_points(&float.base_points()?);
    let exact_mystic = exact.mystic_points(&exact.base_points()?);
    for (f, e) in float_mystic.iter().zip(exact_mystic.iter()) {
        let (fx, fy) = float.to_xy(f);
        let (ex, ey) = exact.to_xy(e);
        assert!((fx - ex).abs() < TOLERANCE && (fy - ey).abs() < TOLERANCE);
    }
    Ok(())
}

#[test]
fn test_rotations_agree_with_exact_backend() -> spectretile::Result<()> {
    let (float, exact) = strategies()?;
    let float_points = float.base_points()?;
    let exact_points = exact.base_points()?;
    for degrees in (0..360).step_by(30) {
        let float_rotation = float.rotation(degrees)?;
        let exact_rotation = exact.rotation(degrees)?;
        for (f, e) in float_points.iter().zip(exact_points.iter()) {
            let (fx, fy) = float.to_xy(&float.apply(&float_rotation, f)?);
            let (ex, ey) = exact.to_xy(&exact.apply(&exact_rotation, e)?);
            assert!(
                (fx - ex).abs() < TOLERANCE && (fy - ey).abs() < TOLERANCE,
                "rotation by {degrees}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_reflection_agrees_with_exact_backend() -> spectretile::Result<()> {
    let (float, exact) = strategies()?;
    let float_rotation = float.reflect(&float.rotation(150)?);
    let exact_rotation = exact.reflect(&exact.rotation(150)?);
    for (f, e) in float
        .base_points()?
        .iter()
        .zip(exact.base_points()?.iter())
    {
        let (fx, fy) = float.to_xy(&float.apply(&float_rotation, f)?);
        let (ex, ey) = exact.to_xy(&exact.apply(&exact_rotation, e)?);
        assert!((fx - ex).abs() < TOLERANCE && (fy - ey).abs() < TOLERANCE);
    }
    Ok(())
}

#[test]
fn test_angle_recovery_for_all_classes_and_signs() -> spectretile::Result<()> {
    let (float, _) = strategies()?;
    for degrees in (0..360).step_by(30) {
        let rotation = float.rotation(degrees)?;
        assert_eq!(float.angle_of(&rotation), (degrees, 1));
        assert_eq!(float.angle_of(&float.reflect(&rotation)), (degrees, -1));
    }
    Ok(())
}

#[test]
fn test_compose_matches_sequential_application() -> spectretile::Result<()> {
    let (float, _) = strategies()?;
    let outer = float.placement(120, spectretile::geometry::FloatPoint::new(3.0, -1.5), false)?;
    let inner = float.reflect(&float.placement(
        60,
        spectretile::geometry::FloatPoint::new(-2.0, 4.0),
        false,
    )?);
    let composed = float.compose(&outer, &inner)?;
    let p = spectretile::geometry::FloatPoint::new(1.25, -0.5);
    let direct = float.apply(&composed, &p)?;
    let chained = float.apply(&outer, &float.apply(&inner, &p)?)?;
    assert!((direct.x - chained.x).abs() < TOLERANCE);
    assert!((direct.y - chained.y).abs() < TOLERANCE);
    Ok(())
}

#[test]
fn test_unsupported_angles_are_rejected() -> spectretile::Result<()> {
    let (float, _) = strategies()?;
    assert!(matches!(
        float.rotation(100),
        Err(TilingError::UnsupportedAngle { degrees: 100 })
    ));
    Ok(())
}
