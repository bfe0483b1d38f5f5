//! Axis-aligned bounding boxes and the collision helpers built on them.
//!
//! Coordinates grow rightwards and downwards; one world unit is one
//! terminal cell.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap: rects that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment, `left <= px < right` and `top <= py < bottom`.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Pair every rect in `a` with the first not-yet-matched rect in `b` that
/// overlaps it.  Each index shows up in at most one pair, so one bullet
/// never takes out two aliens in the same tick.
pub fn matched_pairs(a: &[Rect], b: &[Rect]) -> Vec<(usize, usize)> {
    let mut taken = vec![false; b.len()];
    let mut pairs = Vec::new();

    for (ai, ra) in a.iter().enumerate() {
        let hit = b
            .iter()
            .enumerate()
            .find(|(bi, rb)| !taken[*bi] && ra.overlaps(rb))
            .map(|(bi, _)| bi);
        if let Some(bi) = hit {
            taken[bi] = true;
            pairs.push((ai, bi));
        }
    }

    pairs
}
