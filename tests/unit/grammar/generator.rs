use spectretile::geometry::{CountingStrategy, ExactStrategy, GeometryStrategy};
use spectretile::grammar::{Label, SUPERTILES, TilingGenerator};

const EDGE_A: f64 = 10.0;
const EDGE_B: f64 = 6.0;

fn exact_generator() -> spectretile::Result<TilingGenerator<ExactStrategy>> {
    TilingGenerator::new(ExactStrategy::new(EDGE_A, EDGE_B)?)
}

#[test]
fn test_base_generation_has_a_node_per_symbol() -> spectretile::Result<()> {
    let generator = exact_generator()?;
    let base = generator.generate(0)?;
    for symbol in SUPERTILES {
        assert!(base.tile(symbol).is_some(), "missing {symbol}");
    }
    assert!(base.tile(Label::Gamma1).is_none());
    assert!(base.root().is_some_and(|node| node.label() == Label::Delta));
    Ok(())
}

#[test]
fn test_base_gamma_expands_into_both_leaves() -> spectretile::Result<()> {
    let generator = exact_generator()?;
    let base = generator.generate(0)?;
    let gamma = base
        .tile(Label::Gamma)
        .ok_or_else(|| spectretile::error::invalid_argument("test", "a Gamma node", &"missing"))?;
    let mut visits = Vec::new();
    gamma.for_each_tile(generator.strategy(), &mut |transform, label, lineage| {
        visits.push((*transform, label, lineage.to_vec()));
    })?;
    assert_eq!(visits.len(), 2);

    let (first, first_label, first_lineage) = visits
        .first()
        .ok_or_else(|| spectretile::error::invalid_argument("test", "a first leaf", &"missing"))?;
    assert_eq!(*first_label, Label::Gamma1);
    assert!(first_lineage.is_empty());
    assert_eq!(generator.strategy().angle_of(first), (0, 1));

    // The second leaf turns 30 degrees about outline vertex 8.
    let (second, second_label, _) = visits
        .get(1)
        .ok_or_else(|| spectretile::error::invalid_argument("test", "a second leaf", &"missing"))?;
    assert_eq!(*second_label, Label::Gamma2);
    assert_eq!(generator.strategy().angle_of(second), (30, 1));
    let anchor = generator
        .base_points()
        .get(8)
        .copied()
        .ok_or_else(|| spectretile::error::invalid_argument("test", "vertex 8", &"missing"))?;
    assert_eq!(generator.strategy().translation_of(second), anchor);
    Ok(())
}

#[test]
fn test_base_non_gamma_symbols_are_single_leaves() -> spectretile::Result<()> {
    let generator = exact_generator()?;
    let base = generator.generate(0)?;
    for symbol in SUPERTILES {
        if symbol == Label::Gamma {
            continue;
        }
        let node = base
            .tile(symbol)
            .ok_or_else(|| spectretile::error::invalid_argument("test", "a node", &symbol))?;
        let mut labels = Vec::new();
        node.for_each_tile(generator.strategy(), &mut |_, label, _| {
            labels.push(label);
        })?;
        assert_eq!(labels, vec![symbol]);
    }
    Ok(())
}

#[test]
fn test_first_generation_has_nine_leaves() -> spectretile::Result<()> {
    let generator = exact_generator()?;
    let first = generator.generate(1)?;
    let mut labels = Vec::new();
    generator.for_each_tile(&first, &mut |_, label, _| labels.push(label))?;
    assert_eq!(labels.len(), 9);
    // Delta's rule row in slot order, with Gamma expanded into its leaves.
    assert_eq!(
        labels,
        vec![
            Label::Xi,
            Label::Delta,
            Label::Xi,
            Label::Phi,
            Label::Sigma,
            Label::Pi,
            Label::Phi,
            Label::Gamma1,
            Label::Gamma2,
        ]
    );
    Ok(())
}

#[test]
fn test_second_generation_leaf_count() -> spectretile::Result<()> {
    let generator = TilingGenerator::new(CountingStrategy::new())?;
    let second = generator.generate(2)?;
    let mut count = 0_u64;
    generator.for_each_tile(&second, &mut |_, _, _| count += 1)?;
    assert_eq!(count, 71);
    Ok(())
}

#[test]
fn test_lineage_depth_tracks_generations() -> spectretile::Result<()> {
    let generator = TilingGenerator::new(CountingStrategy::new())?;
    let third = generator.generate(3)?;
    let mut max_depth = 0_usize;
    generator.for_each_tile(&third, &mut |_, _, lineage| {
        max_depth = max_depth.max(lineage.len());
    })?;
    // Three cluster levels, minus the Gamma clusters absorbed into leaves.
    assert_eq!(max_depth, 3);
    Ok(())
}

#[test]
fn test_anchor_quad_moves_every_generation() -> spectretile::Result<()> {
    let generator = exact_generator()?;
    let base = generator.generate(0)?;
    let stepped = generator.build_supertiles(&base)?;
    let base_quad = base
        .root()
        .ok_or_else(|| spectretile::error::invalid_argument("test", "a root", &"missing"))?
        .quad()
        .clone();
    let stepped_quad = stepped
        .root()
        .ok_or_else(|| spectretile::error::invalid_argument("test", "a root", &"missing"))?
        .quad()
        .clone();
    assert_ne!(base_quad, stepped_quad);
    Ok(())
}
