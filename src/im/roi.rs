#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ROI {
    pub l: usize,
    pub t: usize,
    /// Exclusive right bound.
    pub r: usize,
    /// Exclusive bottom bound.
    pub b: usize,
}

impl ROI {
    /// Width of the ROI.
    pub fn w(&self) -> usize {
        self.r.saturating_sub(self.l)
    }

    /// Height of the ROI.
    pub fn h(&self) -> usize {
        self.b.saturating_sub(self.t)
    }

    pub fn is_empty(&self) -> bool {
        self.w() == 0 || self.h() == 0
    }

    /// The region of a `w` x `h` image that lies at least `inset` pixels away from every edge.
    /// Empty when the image is too small to have one.
    pub fn inset(w: usize, h: usize, inset: usize) -> ROI {
        let l = inset.min(w);
        let t = inset.min(h);
        let r = w.saturating_sub(inset).max(l);
        let b = h.saturating_sub(inset).max(t);
        ROI { l, t, r, b }
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.l && x < self.r && y >= self.t && y < self.b
    }
}
