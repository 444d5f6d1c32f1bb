use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidKind {
    Prism,
    Pyramid,
}

/// A regular prism or pyramid, identified by strings such as
/// `"hexagonal-prism"` or `"triangular-pyramid"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Solid {
    kind: SolidKind,
    sides: usize,
}

const SIDE_NAMES: [(&str, usize); 4] = [
    ("triangular", 3),
    ("square", 4),
    ("pentagonal", 5),
    ("hexagonal", 6),
];

impl Solid {
    pub const HEXAGONAL_PRISM: Solid = Solid {
        kind: SolidKind::Prism,
        sides: 6,
    };

    /// Builds a solid directly; only 3 to 6 sides are supported.
    pub fn new(kind: SolidKind, sides: usize) -> Result<Self, ProjectionError> {
        if !(3..=6).contains(&sides) {
            return Err(ProjectionError::UnknownSolid(format!("{sides}-sided {kind:?}")));
        }
        Ok(Solid { kind, sides })
    }

    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn is_prism(&self) -> bool {
        self.kind == SolidKind::Prism
    }

    pub fn is_pyramid(&self) -> bool {
        self.kind == SolidKind::Pyramid
    }

    /// Every identifier the parser accepts in canonical form.
    pub fn all() -> impl Iterator<Item = Solid> {
        [SolidKind::Prism, SolidKind::Pyramid]
            .into_iter()
            .flat_map(|kind| SIDE_NAMES.iter().map(move |&(_, sides)| Solid { kind, sides }))
    }

    /// Radius of the circle through the base corners.
    pub fn circumradius(&self, base_edge: f64) -> f64 {
        base_edge / (2.0 * (std::f64::consts::PI / self.sides as f64).sin())
    }
}

impl FromStr for Solid {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let sides = SIDE_NAMES
            .iter()
            .find(|(name, _)| lower.contains(name))
            .map(|&(_, sides)| sides)
            .ok_or_else(|| ProjectionError::UnknownSolid(s.to_string()))?;
        let kind = if lower.contains("prism") {
            SolidKind::Prism
        } else if lower.contains("pyramid") {
            SolidKind::Pyramid
        } else {
            return Err(ProjectionError::UnknownSolid(s.to_string()));
        };
        Ok(Solid { kind, sides })
    }
}

impl TryFrom<String> for Solid {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Solid> for String {
    fn from(solid: Solid) -> Self {
        solid.to_string()
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = SIDE_NAMES
            .iter()
            .find(|(_, sides)| *sides == self.sides)
            .map(|(name, _)| *name)
            .unwrap_or("regular");
        let kind = match self.kind {
            SolidKind::Prism => "prism",
            SolidKind::Pyramid => "pyramid",
        };
        write!(f, "{name}-{kind}")
    }
}

/// Orientation of the solid's axis relative to the two reference planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CaseKind {
    /// Axis perpendicular to the horizontal plane.
    A,
    /// Axis perpendicular to the vertical plane.
    B,
    /// Axis inclined to the horizontal plane.
    C,
    /// Axis inclined to both planes.
    D,
}

impl CaseKind {
    pub fn total_steps(&self) -> usize {
        match self {
            CaseKind::A | CaseKind::B => 5,
            CaseKind::C => 8,
            CaseKind::D => 11,
        }
    }

    pub fn is_inclined(&self) -> bool {
        matches!(self, CaseKind::C | CaseKind::D)
    }
}

impl FromStr for CaseKind {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(CaseKind::A),
            "B" => Ok(CaseKind::B),
            "C" => Ok(CaseKind::C),
            "D" => Ok(CaseKind::D),
            _ => Err(ProjectionError::UnknownCase(s.to_string())),
        }
    }
}

impl TryFrom<String> for CaseKind {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaseKind> for String {
    fn from(case: CaseKind) -> Self {
        case.to_string()
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseKind::A => "A",
            CaseKind::B => "B",
            CaseKind::C => "C",
            CaseKind::D => "D",
        };
        f.write_str(s)
    }
}

/// How the base touches the horizontal plane before the axis is tilted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RestingOn {
    #[default]
    BaseEdge,
    BaseCorner,
}

impl FromStr for RestingOn {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base-edge" => Ok(RestingOn::BaseEdge),
            "base-corner" => Ok(RestingOn::BaseCorner),
            _ => Err(ProjectionError::UnknownRestingCondition(s.to_string())),
        }
    }
}

impl TryFrom<String> for RestingOn {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RestingOn> for String {
    fn from(resting: RestingOn) -> Self {
        resting.to_string()
    }
}

impl fmt::Display for RestingOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestingOn::BaseEdge => f.write_str("base-edge"),
            RestingOn::BaseCorner => f.write_str("base-corner"),
        }
    }
}
