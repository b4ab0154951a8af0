//! Leaf tiles, clusters and the depth-first traversal

use std::rc::Rc;

use crate::error::Result;
use crate::geometry::GeometryStrategy;
use crate::grammar::label::Label;

/// A concrete leaf tile: a label and the four anchor points of its outline
pub struct Tile<S: GeometryStrategy> {
    label: Label,
    quad: [S::Point; 4],
}

impl<S: GeometryStrategy> Tile<S> {
    /// Build a leaf tile
    pub const fn new(label: Label, quad: [S::Point; 4]) -> Self {
        Self { label, quad }
    }

    /// Label of this tile
    pub const fn label(&self) -> Label {
        self.label
    }

    /// Anchor quad of this tile
    pub const fn quad(&self) -> &[S::Point; 4] {
        &self.quad
    }
}

/// A supertile cluster: placed children plus its own anchor quad
///
/// Children are shared handles into the previous generation; a cluster
/// never owns its children exclusively.
pub struct MetaTile<S: GeometryStrategy> {
    label: Label,
    children: Vec<(Rc<TileNode<S>>, S::Transform)>,
    quad: [S::Point; 4],
}

impl<S: GeometryStrategy> MetaTile<S> {
    /// Build a cluster from placed children
    pub const fn new(
        label: Label,
        children: Vec<(Rc<TileNode<S>>, S::Transform)>,
        quad: [S::Point; 4],
    ) -> Self {
        Self {
            label,
            children,
            quad,
        }
    }

    /// Label of this cluster
    pub const fn label(&self) -> Label {
        self.label
    }

    /// Placed children in slot order
    pub fn children(&self) -> &[(Rc<TileNode<S>>, S::Transform)] {
        &self.children
    }

    /// Anchor quad of this cluster
    pub const fn quad(&self) -> &[S::Point; 4] {
        &self.quad
    }

    /// Whether this is a Gamma cluster standing in for a single tile
    ///
    /// The two concrete Gamma leaves replace one logical tile, so such a
    /// cluster contributes no lineage entry of its own.
    fn absorbs_gamma_leaves(&self) -> bool {
        self.label == Label::Gamma
            && matches!(
                self.children.first().map(|(node, _)| node.as_ref()),
                Some(TileNode::Leaf(tile)) if tile.label() == Label::Gamma1
            )
    }
}

/// A node in the generation DAG
pub enum TileNode<S: GeometryStrategy> {
    /// Concrete tile
    Leaf(Tile<S>),
    /// Supertile cluster
    Cluster(MetaTile<S>),
}

impl<S: GeometryStrategy> TileNode<S> {
    /// Label of this node
    pub const fn label(&self) -> Label {
        match self {
            Self::Leaf(tile) => tile.label(),
            Self::Cluster(cluster) => cluster.label(),
        }
    }

    /// Anchor quad of this node
    pub const fn quad(&self) -> &[S::Point; 4] {
        match self {
            Self::Leaf(tile) => tile.quad(),
            Self::Cluster(cluster) => cluster.quad(),
        }
    }

    /// Visit every leaf under this node in deterministic depth-first order
    ///
    /// The visitor receives the fully composed transform, the leaf label,
    /// and the lineage of cluster labels from this node down to the leaf's
    /// parent (Gamma clusters that expand straight into their two concrete
    /// leaves are skipped).
    ///
    /// # Errors
    ///
    /// Propagates the first transform composition failure.
    pub fn for_each_tile<F>(&self, strategy: &S, visitor: &mut F) -> Result<()>
    where
        F: FnMut(&S::Transform, Label, &[Label]),
    {
        let identity = strategy.identity();
        let mut lineage = Vec::new();
        self.walk(strategy, &identity, &mut lineage, visitor)
    }

    fn walk<F>(
        &self,
        strategy: &S,
        accumulated: &S::Transform,
        lineage: &mut Vec<Label>,
        visitor: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&S::Transform, Label, &[Label]),
    {
        match self {
            Self::Leaf(tile) => {
                visitor(accumulated, tile.label(), lineage);
                Ok(())
            }
            Self::Cluster(cluster) => {
                let absorbed = cluster.absorbs_gamma_leaves();
                if !absorbed {
                    lineage.push(cluster.label());
                }
                for (child, placement) in cluster.children() {
                    let combined = strategy.compose(accumulated, placement)?;
                    child.walk(strategy, &combined, lineage, visitor)?;
                }
                if !absorbed {
                    lineage.pop();
                }
                Ok(())
            }
        }
    }
}
