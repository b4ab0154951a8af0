//! Tile labels and the substitution rule table

use std::fmt;

/// Label of a supertile or leaf tile
///
/// The nine supertile symbols drive substitution; `Gamma1` and `Gamma2`
/// only ever appear as the two concrete leaves inside a Gamma cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Supertile that expands into the two concrete leaves
    Gamma,
    /// First concrete Gamma leaf, placed with the identity
    Gamma1,
    /// Second concrete Gamma leaf, rotated 30 degrees about outline vertex 8
    Gamma2,
    /// The generation root symbol
    Delta,
    /// Theta supertile
    Theta,
    /// Lambda supertile
    Lambda,
    /// Xi supertile
    Xi,
    /// Pi supertile
    Pi,
    /// Sigma supertile
    Sigma,
    /// Phi supertile
    Phi,
    /// Psi supertile
    Psi,
}

/// The nine supertile symbols, in rule-table order
pub const SUPERTILES: [Label; 9] = [
    Label::Gamma,
    Label::Delta,
    Label::Theta,
    Label::Lambda,
    Label::Xi,
    Label::Pi,
    Label::Sigma,
    Label::Phi,
    Label::Psi,
];

/// The ten labels that can appear on leaves of a fully expanded tiling
pub const LEAF_LABELS: [Label; 10] = [
    Label::Gamma1,
    Label::Gamma2,
    Label::Delta,
    Label::Sigma,
    Label::Theta,
    Label::Lambda,
    Label::Pi,
    Label::Xi,
    Label::Phi,
    Label::Psi,
];

/// Child placement slots per supertile
pub const CHILD_SLOTS: usize = 8;

/// Substitution rules: each supertile's children by placement slot
///
/// Only Gamma leaves a slot empty (index 2); every child is itself one of
/// the nine supertile symbols, resolved against the previous generation.
pub const SUBSTITUTION_RULES: [(Label, [Option<Label>; CHILD_SLOTS]); 9] = [
    (
        Label::Gamma,
        [
            Some(Label::Pi),
            Some(Label::Delta),
            None,
            Some(Label::Theta),
            Some(Label::Sigma),
            Some(Label::Xi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Delta,
        [
            Some(Label::Xi),
            Some(Label::Delta),
            Some(Label::Xi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Pi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Theta,
        [
            Some(Label::Psi),
            Some(Label::Delta),
            Some(Label::Pi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Pi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Lambda,
        [
            Some(Label::Psi),
            Some(Label::Delta),
            Some(Label::Xi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Pi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Xi,
        [
            Some(Label::Psi),
            Some(Label::Delta),
            Some(Label::Pi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Psi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Pi,
        [
            Some(Label::Psi),
            Some(Label::Delta),
            Some(Label::Xi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Psi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Sigma,
        [
            Some(Label::Xi),
            Some(Label::Delta),
            Some(Label::Xi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Pi),
            Some(Label::Lambda),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Phi,
        [
            Some(Label::Psi),
            Some(Label::Delta),
            Some(Label::Psi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Pi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
    (
        Label::Psi,
        [
            Some(Label::Psi),
            Some(Label::Delta),
            Some(Label::Psi),
            Some(Label::Phi),
            Some(Label::Sigma),
            Some(Label::Psi),
            Some(Label::Phi),
            Some(Label::Gamma),
        ],
    ),
];

impl Label {
    /// Human readable symbol name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gamma => "Gamma",
            Self::Gamma1 => "Gamma1",
            Self::Gamma2 => "Gamma2",
            Self::Delta => "Delta",
            Self::Theta => "Theta",
            Self::Lambda => "Lambda",
            Self::Xi => "Xi",
            Self::Pi => "Pi",
            Self::Sigma => "Sigma",
            Self::Phi => "Phi",
            Self::Psi => "Psi",
        }
    }

    /// Position in [`SUPERTILES`], or `None` for the two concrete leaves
    pub const fn supertile_index(self) -> Option<usize> {
        match self {
            Self::Gamma => Some(0),
            Self::Delta => Some(1),
            Self::Theta => Some(2),
            Self::Lambda => Some(3),
            Self::Xi => Some(4),
            Self::Pi => Some(5),
            Self::Sigma => Some(6),
            Self::Phi => Some(7),
            Self::Psi => Some(8),
            Self::Gamma1 | Self::Gamma2 => None,
        }
    }

    /// Position in [`LEAF_LABELS`], or `None` for the Gamma supertile
    pub const fn leaf_index(self) -> Option<usize> {
        match self {
            Self::Gamma1 => Some(0),
            Self::Gamma2 => Some(1),
            Self::Delta => Some(2),
            Self::Sigma => Some(3),
            Self::Theta => Some(4),
            Self::Lambda => Some(5),
            Self::Pi => Some(6),
            Self::Xi => Some(7),
            Self::Phi => Some(8),
            Self::Psi => Some(9),
            Self::Gamma => None,
        }
    }

    /// Child slots of this supertile, or `None` for the concrete leaves
    pub fn substitution_row(self) -> Option<&'static [Option<Self>; CHILD_SLOTS]> {
        SUBSTITUTION_RULES
            .iter()
            .find(|(parent, _)| *parent == self)
            .map(|(_, row)| row)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
