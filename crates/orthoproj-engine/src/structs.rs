use orthoproj_core::geom::{BBox2, Vec2};

/// A labelled corner of one view.
///
/// `depth` is the companion coordinate carried over from another view:
/// the position along the viewing direction that decides visibility, or
/// the coordinate a later locus line will pick up.
#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    pub at: Vec2,
    pub label: String,
    pub depth: f64,
}

/// How corners of one view are named: `1`, `a` and `o` followed by a view
/// suffix such as `'` or `₁`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelScheme {
    pub suffix: &'static str,
}

impl LabelScheme {
    pub const fn new(suffix: &'static str) -> Self {
        Self { suffix }
    }

    pub fn base(&self, index: usize) -> String {
        format!("{}{}", index + 1, self.suffix)
    }

    pub fn top(&self, index: usize) -> String {
        format!("{}{}", corner_letter(index), self.suffix)
    }

    pub fn apex(&self) -> String {
        format!("o{}", self.suffix)
    }
}

pub fn corner_letter(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}

/// Corners of a single view of the solid.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCorners {
    Prism { base: Vec<Corner>, top: Vec<Corner> },
    Pyramid { base: Vec<Corner>, apex: Corner },
}

/// Which edge of a view a segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Base edge from corner `i` to corner `i + 1`.
    Base(usize),
    /// Top edge from corner `i` to corner `i + 1` (prisms only).
    Top(usize),
    /// Lateral edge of a prism or slant edge of a pyramid at corner `i`.
    Side(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEdge {
    pub kind: EdgeKind,
    pub a: Vec2,
    pub b: Vec2,
}

impl ViewCorners {
    pub fn base(&self) -> &[Corner] {
        match self {
            ViewCorners::Prism { base, .. } | ViewCorners::Pyramid { base, .. } => base,
        }
    }

    pub fn top(&self) -> Option<&[Corner]> {
        match self {
            ViewCorners::Prism { top, .. } => Some(top),
            ViewCorners::Pyramid { .. } => None,
        }
    }

    pub fn apex(&self) -> Option<&Corner> {
        match self {
            ViewCorners::Prism { .. } => None,
            ViewCorners::Pyramid { apex, .. } => Some(apex),
        }
    }

    pub fn sides(&self) -> usize {
        self.base().len()
    }

    /// Every corner: base first, then top or apex.
    pub fn corners(&self) -> impl Iterator<Item = &Corner> + '_ {
        let far: &[Corner] = match self {
            ViewCorners::Prism { top, .. } => top,
            ViewCorners::Pyramid { apex, .. } => std::slice::from_ref(apex),
        };
        self.base().iter().chain(far.iter())
    }

    pub fn points(&self) -> Vec<Vec2> {
        self.corners().map(|c| c.at).collect()
    }

    pub fn bbox(&self) -> BBox2 {
        BBox2::from_points(self.corners().map(|c| c.at))
    }

    /// Extents of the base and top corners only; a pyramid's apex is left
    /// out.
    pub fn rim_bbox(&self) -> BBox2 {
        let top = self.top().unwrap_or(&[]);
        BBox2::from_points(self.base().iter().chain(top).map(|c| c.at))
    }

    /// Base corner with the largest x, ties broken by the largest y.
    pub fn pivot(&self) -> Option<Vec2> {
        self.base()
            .iter()
            .map(|c| c.at)
            .reduce(|best, p| {
                if p.x > best.x || (p.x == best.x && p.y > best.y) {
                    p
                } else {
                    best
                }
            })
    }

    /// Centre of the base to centre of the top, or to the apex.
    pub fn axis(&self) -> Option<(Vec2, Vec2)> {
        let base = Vec2::mean(self.base().iter().map(|c| c.at))?;
        let far = match self {
            ViewCorners::Prism { top, .. } => Vec2::mean(top.iter().map(|c| c.at))?,
            ViewCorners::Pyramid { apex, .. } => apex.at,
        };
        Some((base, far))
    }

    /// Base edges, then top edges, then lateral or slant edges.
    pub fn edges(&self) -> Vec<ViewEdge> {
        let base = self.base();
        let n = base.len();
        let mut edges = Vec::with_capacity(3 * n);
        for i in 0..n {
            edges.push(ViewEdge {
                kind: EdgeKind::Base(i),
                a: base[i].at,
                b: base[(i + 1) % n].at,
            });
        }
        match self {
            ViewCorners::Prism { top, .. } => {
                for i in 0..n {
                    edges.push(ViewEdge {
                        kind: EdgeKind::Top(i),
                        a: top[i].at,
                        b: top[(i + 1) % n].at,
                    });
                }
                for i in 0..n {
                    edges.push(ViewEdge {
                        kind: EdgeKind::Side(i),
                        a: base[i].at,
                        b: top[i].at,
                    });
                }
            }
            ViewCorners::Pyramid { apex, .. } => {
                for (i, corner) in base.iter().enumerate() {
                    edges.push(ViewEdge {
                        kind: EdgeKind::Side(i),
                        a: corner.at,
                        b: apex.at,
                    });
                }
            }
        }
        edges
    }

    /// Builds a new view corner by corner. `place` returns the new position
    /// and the depth the new corner carries forward.
    pub fn derive<F>(&self, labels: LabelScheme, mut place: F) -> ViewCorners
    where
        F: FnMut(&Corner) -> (Vec2, f64),
    {
        let mut make = |corner: &Corner, label: String| {
            let (at, depth) = place(corner);
            Corner { at, label, depth }
        };
        let base: Vec<Corner> = self
            .base()
            .iter()
            .enumerate()
            .map(|(i, c)| make(c, labels.base(i)))
            .collect();
        match self {
            ViewCorners::Prism { top, .. } => ViewCorners::Prism {
                base,
                top: top
                    .iter()
                    .enumerate()
                    .map(|(i, c)| make(c, labels.top(i)))
                    .collect(),
            },
            ViewCorners::Pyramid { apex, .. } => ViewCorners::Pyramid {
                base,
                apex: make(apex, labels.apex()),
            },
        }
    }
}
