//! Generation construction and stepping

use std::rc::Rc;

use crate::error::{Result, invalid_argument};
use crate::geometry::{GeometryStrategy, OUTLINE_POINTS};
use crate::grammar::label::{Label, SUBSTITUTION_RULES, SUPERTILES};
use crate::grammar::tile::{MetaTile, Tile, TileNode};

/// Outline vertices used as the anchor quad of every tile
const QUAD_INDICES: [usize; 4] = [3, 5, 7, 11];

/// Outline vertex the second Gamma leaf rotates about
const GAMMA2_ANCHOR: usize = 8;

/// The seven placement steps that assemble a supertile
///
/// Each step is `(angle delta, source corner, target corner)`: the running
/// angle advances by the delta, and the new copy is shifted so the source
/// corner of the previously placed copy meets the target corner of the
/// freshly rotated quad.
const PLACEMENT_STEPS: [(i32, usize, usize); 7] = [
    (60, 3, 1),
    (0, 2, 0),
    (60, 3, 1),
    (60, 3, 1),
    (0, 2, 0),
    (60, 3, 1),
    (-120, 3, 3),
];

/// Where the next generation's anchor quad is read from, as
/// `(placement slot, corner)` pairs
const SUPER_QUAD_SOURCES: [(usize, usize); 4] = [(6, 2), (5, 1), (3, 2), (0, 1)];

/// One layer of the substitution DAG: a node per supertile symbol
pub struct Generation<S: GeometryStrategy> {
    tiles: Vec<Rc<TileNode<S>>>,
}

impl<S: GeometryStrategy> Generation<S> {
    const fn new(tiles: Vec<Rc<TileNode<S>>>) -> Self {
        Self { tiles }
    }

    /// Node for a supertile symbol, `None` for the two concrete leaves
    pub fn tile(&self, label: Label) -> Option<&Rc<TileNode<S>>> {
        label
            .supertile_index()
            .and_then(|index| self.tiles.get(index))
    }

    /// The generation root, its Delta node
    pub fn root(&self) -> Option<&Rc<TileNode<S>>> {
        self.tile(Label::Delta)
    }
}

/// Builds tilings by iterated substitution over a geometry backend
pub struct TilingGenerator<S: GeometryStrategy> {
    strategy: S,
    base_points: Vec<S::Point>,
    base_quad: [S::Point; 4],
}

impl<S: GeometryStrategy> TilingGenerator<S> {
    /// Build a generator for a strategy
    ///
    /// # Errors
    ///
    /// Fails when the strategy does not produce the 14-vertex outline.
    pub fn new(strategy: S) -> Result<Self> {
        let base_points = strategy.base_points()?;
        if base_points.len() != OUTLINE_POINTS {
            return Err(invalid_argument(
                "TilingGenerator::new",
                "a 14 vertex outline",
                &base_points.len(),
            ));
        }
        let base_quad = select_quad(&base_points, &QUAD_INDICES)?;
        Ok(Self {
            strategy,
            base_points,
            base_quad,
        })
    }

    /// Geometry backend this generator runs on
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The 14 outline vertices
    pub fn base_points(&self) -> &[S::Point] {
        &self.base_points
    }

    /// Run `generations` substitution steps from the base layer
    ///
    /// # Errors
    ///
    /// Propagates the first placement arithmetic failure.
    pub fn generate(&self, generations: usize) -> Result<Generation<S>> {
        let mut current = self.build_base()?;
        for _ in 0..generations {
            current = self.build_supertiles(&current)?;
        }
        Ok(current)
    }

    /// Generation zero: one node per supertile symbol
    ///
    /// Every symbol except Gamma is a single leaf; Gamma is a cluster of
    /// its two concrete leaves, the second rotated 30 degrees about outline
    /// vertex 8.
    ///
    /// # Errors
    ///
    /// Fails when the Gamma leaf placement cannot be constructed.
    pub fn build_base(&self) -> Result<Generation<S>> {
        let mut tiles = Vec::with_capacity(SUPERTILES.len());
        for symbol in SUPERTILES {
            let node = if symbol == Label::Gamma {
                let anchor = self
                    .base_points
                    .get(GAMMA2_ANCHOR)
                    .cloned()
                    .ok_or_else(|| {
                        invalid_argument("build_base", "outline vertex 8", &GAMMA2_ANCHOR)
                    })?;
                let children = vec![
                    (
                        Rc::new(TileNode::Leaf(Tile::new(
                            Label::Gamma1,
                            self.base_quad.clone(),
                        ))),
                        self.strategy.identity(),
                    ),
                    (
                        Rc::new(TileNode::Leaf(Tile::new(
                            Label::Gamma2,
                            self.base_quad.clone(),
                        ))),
                        self.strategy.placement(30, anchor, false)?,
                    ),
                ];
                TileNode::Cluster(MetaTile::new(symbol, children, self.base_quad.clone()))
            } else {
                TileNode::Leaf(Tile::new(symbol, self.base_quad.clone()))
            };
            tiles.push(Rc::new(node));
        }
        Ok(Generation::new(tiles))
    }

    /// One substitution step: assemble the next layer over `previous`
    ///
    /// # Errors
    ///
    /// Propagates placement arithmetic failures, including frame conflicts
    /// in exact geometry.
    pub fn build_supertiles(&self, previous: &Generation<S>) -> Result<Generation<S>> {
        let quad = previous
            .root()
            .ok_or_else(|| invalid_argument("build_supertiles", "a Delta node", &"missing"))?
            .quad()
            .clone();

        // Chain the eight placements: each new copy is rotated by the
        // running angle and shifted so its target corner meets the source
        // corner of the copy placed before it.
        let mut total_angle = 0_i32;
        let mut latest = self.strategy.rotation(0)?;
        let mut placements = Vec::with_capacity(PLACEMENT_STEPS.len() + 1);
        placements.push(latest.clone());
        let mut rotated_quad = quad.clone();
        for &(delta, source, target) in &PLACEMENT_STEPS {
            if delta != 0 {
                total_angle += delta;
                let rotation = self.strategy.rotation(total_angle)?;
                rotated_quad = apply_to_quad(&self.strategy, &rotation, &quad)?;
            }
            let source_point = select_point(&quad, source)?;
            let anchored = self.strategy.apply(&latest, source_point)?;
            let target_point = select_point(&rotated_quad, target)?;
            let shift = self.strategy.difference(&anchored, target_point)?;
            latest = self.strategy.placement(total_angle, shift, false)?;
            placements.push(latest.clone());
        }
        let placements: Vec<S::Transform> = placements
            .iter()
            .map(|placement| self.strategy.reflect(placement))
            .collect();

        let super_quad = self.read_super_quad(&placements, &quad)?;

        let mut tiles = Vec::with_capacity(SUPERTILES.len());
        for (symbol, row) in SUBSTITUTION_RULES {
            let mut children = Vec::with_capacity(row.len());
            for (slot, placement) in row.iter().zip(placements.iter()) {
                if let Some(child) = slot {
                    let node = previous.tile(*child).ok_or_else(|| {
                        invalid_argument("build_supertiles", "a supertile child", &child)
                    })?;
                    children.push((Rc::clone(node), placement.clone()));
                }
            }
            tiles.push(Rc::new(TileNode::Cluster(MetaTile::new(
                symbol,
                children,
                super_quad.clone(),
            ))));
        }
        Ok(Generation::new(tiles))
    }

    /// Visit every leaf of a generation from its Delta root
    ///
    /// # Errors
    ///
    /// Fails when the generation has no Delta node or a transform
    /// composition fails during the walk.
    pub fn for_each_tile<F>(&self, generation: &Generation<S>, visitor: &mut F) -> Result<()>
    where
        F: FnMut(&S::Transform, Label, &[Label]),
    {
        generation
            .root()
            .ok_or_else(|| invalid_argument("for_each_tile", "a Delta node", &"missing"))?
            .for_each_tile(&self.strategy, visitor)
    }

    fn read_super_quad(
        &self,
        placements: &[S::Transform],
        quad: &[S::Point; 4],
    ) -> Result<[S::Point; 4]> {
        let read = |slot: usize, corner: usize| -> Result<S::Point> {
            let placement = placements
                .get(slot)
                .ok_or_else(|| invalid_argument("read_super_quad", "a placement slot", &slot))?;
            self.strategy.apply(placement, select_point(quad, corner)?)
        };
        let [(s0, c0), (s1, c1), (s2, c2), (s3, c3)] = SUPER_QUAD_SOURCES;
        Ok([
            read(s0, c0)?,
            read(s1, c1)?,
            read(s2, c2)?,
            read(s3, c3)?,
        ])
    }
}

fn select_quad<P: Clone>(points: &[P], indices: &[usize; 4]) -> Result<[P; 4]> {
    let pick = |index: usize| -> Result<P> {
        points
            .get(index)
            .cloned()
            .ok_or_else(|| invalid_argument("select_quad", "an outline vertex index", &index))
    };
    let [i0, i1, i2, i3] = *indices;
    Ok([pick(i0)?, pick(i1)?, pick(i2)?, pick(i3)?])
}

fn select_point<P>(quad: &[P; 4], corner: usize) -> Result<&P> {
    quad.get(corner)
        .ok_or_else(|| invalid_argument("select_point", "a quad corner index", &corner))
}

fn apply_to_quad<S: GeometryStrategy>(
    strategy: &S,
    transform: &S::Transform,
    quad: &[S::Point; 4],
) -> Result<[S::Point; 4]> {
    let [q0, q1, q2, q3] = quad;
    Ok([
        strategy.apply(transform, q0)?,
        strategy.apply(transform, q1)?,
        strategy.apply(transform, q2)?,
        strategy.apply(transform, q3)?,
    ])
}
