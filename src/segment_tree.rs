use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{Result, SegmentTreeError};
use crate::groups::{CommutativeMonoid, Operation};

/// Range-query / point-update segment tree.
///
/// Nodes live in a flat vector: node `i` has children `2i + 1` and `2i + 2`,
/// the root covers `[0, len - 1]` and a node `[tl, tr]` splits at
/// `mid = (tl + tr) / 2`. The vector holds `4 * len` slots, every one of which
/// starts out as the group identity.
#[derive(Clone, Debug)]
pub struct SegmentTree<G: CommutativeMonoid> {
    group: G,
    len: usize,
    data: Vec<G::Elem>,
}

impl<G: CommutativeMonoid> SegmentTree<G> {
    /// A tree over `len` identity values.
    ///
    /// O(n)
    #[inline]
    pub fn new(group: G, len: usize) -> Self {
        let mut data = Vec::new();
        data.resize_with(4 * len, || group.id());
        Self { group, len, data }
    }

    /// O(n)
    pub fn from_slice(group: G, values: &[G::Elem]) -> Self {
        let mut tree = Self::new(group, values.len());
        if !values.is_empty() {
            tree.build_at(0, 0, values.len() - 1, values);
        }
        debug!(len = tree.len, slots = tree.data.len(), "built segment tree");
        tree
    }

    /// Replaces every value. Values past `len` are ignored and missing ones
    /// become the identity.
    ///
    /// O(n)
    pub fn build<Iter: IntoIterator<Item = G::Elem>>(&mut self, iter: Iter) {
        let mut values: Vec<_> = iter.into_iter().take(self.len).collect();
        let group = &self.group;
        values.resize_with(self.len, || group.id());

        for slot in self.data.iter_mut() {
            *slot = self.group.id();
        }
        if !values.is_empty() {
            self.build_at(0, 0, self.len - 1, &values);
        }
        debug!(len = self.len, "rebuilt segment tree");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn operation(&self) -> &G {
        &self.group
    }

    /// Combined value over the whole sequence.
    ///
    /// O(1)
    pub fn all(&self) -> G::Elem {
        match self.data.first() {
            Some(root) if !self.is_empty() => root.clone(),
            _ => self.group.id(),
        }
    }

    /// O(log n)
    pub fn get(&self, index: usize) -> Result<G::Elem> {
        if index >= self.len {
            return Err(SegmentTreeError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.query_pruned(0, 0, self.len - 1, index, index))
    }

    /// Combined value over `[l, r]`, inclusive. Only subtrees overlapping the
    /// query are visited.
    ///
    /// O(log n)
    pub fn query(&self, l: usize, r: usize) -> Result<G::Elem> {
        self.check_range(l, r)?;
        Ok(self.query_pruned(0, 0, self.len - 1, l, r))
    }

    /// Same result as [`query`](Self::query), but always descends into both
    /// children and lets out-of-range halves answer with the identity.
    ///
    /// O(log n)
    pub fn query_uniform(&self, l: usize, r: usize) -> Result<G::Elem> {
        self.check_range(l, r)?;
        Ok(self.query_uniform_at(0, 0, self.len - 1, l, r))
    }

    /// Half-open form of [`query`](Self::query). An empty range yields the
    /// identity.
    ///
    /// A rejected range is reported with inclusive bounds, so `0..6` on a
    /// tree of length 5 fails as `InvalidRange { l: 0, r: 5, len: 5 }`.
    ///
    /// O(log n)
    pub fn query_range(&self, range: Range<usize>) -> Result<G::Elem> {
        if range.start == range.end && range.end <= self.len {
            return Ok(self.group.id());
        }
        self.query(range.start, range.end.saturating_sub(1))
    }

    /// Sets the value at `index` and recomputes its ancestors.
    ///
    /// O(log n)
    pub fn update(&mut self, index: usize, x: G::Elem) -> Result<()> {
        if index >= self.len {
            return Err(SegmentTreeError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        trace!(index, "point update");
        self.update_at(0, 0, self.len - 1, index, x);
        Ok(())
    }

    fn check_range(&self, l: usize, r: usize) -> Result<()> {
        if l > r || r >= self.len {
            Err(SegmentTreeError::InvalidRange { l, r, len: self.len })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn pull(&mut self, i: usize) {
        let l = 2 * i + 1;
        let r = l + 1;
        self.data[i] = self.group.add(self.data[l].clone(), self.data[r].clone());
    }

    fn build_at(&mut self, i: usize, tl: usize, tr: usize, values: &[G::Elem]) {
        if tl == tr {
            self.data[i] = values[tl].clone();
            return;
        }
        let mid = (tl + tr) / 2;
        self.build_at(2 * i + 1, tl, mid, values);
        self.build_at(2 * i + 2, mid + 1, tr, values);
        self.pull(i);
    }

    fn query_uniform_at(&self, i: usize, tl: usize, tr: usize, l: usize, r: usize) -> G::Elem {
        if l > r {
            return self.group.id();
        }
        if tl == l && tr == r {
            return self.data[i].clone();
        }
        let mid = (tl + tr) / 2;
        self.group.add(
            self.query_uniform_at(2 * i + 1, tl, mid, l, r.min(mid)),
            self.query_uniform_at(2 * i + 2, mid + 1, tr, l.max(mid + 1), r),
        )
    }

    fn query_pruned(&self, i: usize, tl: usize, tr: usize, l: usize, r: usize) -> G::Elem {
        if tl == l && tr == r {
            return self.data[i].clone();
        }
        let mid = (tl + tr) / 2;
        let overlaps_left = l <= mid;
        let overlaps_right = r > mid;
        match (overlaps_left, overlaps_right) {
            (true, true) => self.group.add(
                self.query_pruned(2 * i + 1, tl, mid, l, r.min(mid)),
                self.query_pruned(2 * i + 2, mid + 1, tr, l.max(mid + 1), r),
            ),
            (true, false) => self.query_pruned(2 * i + 1, tl, mid, l, r.min(mid)),
            (false, _) => self.query_pruned(2 * i + 2, mid + 1, tr, l.max(mid + 1), r),
        }
    }

    fn update_at(&mut self, i: usize, tl: usize, tr: usize, pos: usize, x: G::Elem) {
        if tl == tr {
            self.data[i] = x;
            return;
        }
        let mid = (tl + tr) / 2;
        if pos <= mid {
            self.update_at(2 * i + 1, tl, mid, pos, x);
        } else {
            self.update_at(2 * i + 2, mid + 1, tr, pos, x);
        }
        self.pull(i);
    }
}

impl SegmentTree<Operation> {
    /// Builds an `i64` tree whose operation is picked at runtime.
    pub fn with_operation(values: &[i64], op: Operation) -> Self {
        debug!(operation = %op, "selected segment operation");
        Self::from_slice(op, values)
    }
}
