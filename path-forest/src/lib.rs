mod components;
mod lifting;

use components::Components;
use lifting::Lifting;
use std::ops::Add;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("node index {index} is out of range for a forest of {len} nodes")]
    OutOfRange { index: usize, len: usize },
    #[error("nodes {u} and {v} are already connected")]
    AlreadyConnected { u: usize, v: usize },
}

/// 辺の追加で成長する森。2頂点間のパス上の辺重みの総和を答えられる。
///
/// 辺は異なる木に属する2頂点の間にしか張れない(閉路はできない)。
/// 木の併合はメンバー数の小さい側を吸収するので、辺をすべて張っても
/// 表の作り直しは全体でO(n log^2 n)に収まる。
pub struct PathForest<W> {
    components: Components,
    lifting: Lifting<W>,
    component_count: usize,
}

impl<W> PathForest<W> {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 現在の木の個数。
    pub fn components(&self) -> usize {
        self.component_count
    }

    /// `u`の属する木の頂点数。
    pub fn size(&self, u: usize) -> usize {
        self.components.size(u)
    }

    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.components.find_rc(u) == self.components.find_rc(v)
    }

    fn check_index(&self, index: usize) -> Result<(), ContractViolation> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ContractViolation::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

impl<W: Copy + Default> PathForest<W> {
    pub fn new(len: usize) -> Self {
        Self {
            components: Components::new(len),
            lifting: Lifting::new(len),
            component_count: len,
        }
    }
}

impl<W: Copy + Default + Add<Output = W>> PathForest<W> {
    /// `u`と`v`を重み`weight`の辺で結ぶ。
    ///
    /// `u`と`v`が既に同じ木に属する場合(`u == v`を含む)は森を変更せずに
    /// エラーを返す。
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<(), ContractViolation> {
        self.check_index(u)?;
        self.check_index(v)?;
        let merge = self
            .components
            .unite(u, v)
            .ok_or(ContractViolation::AlreadyConnected { u, v })?;
        let moved = &self.components.members(merge.keep_root)[merge.absorbed_from..];
        self.lifting.attach(merge.keep, merge.absorbed, weight, moved);
        self.component_count -= 1;
        Ok(())
    }

    /// `u`から`v`へのパス上の辺重みの総和。
    ///
    /// 異なる木に属する場合は`None`。`u == v`なら`Some(W::default())`。
    pub fn path_sum(&mut self, u: usize, v: usize) -> Option<W> {
        let len = self.len();
        assert!(u < len, "node index {u} is out of range for a forest of {len} nodes");
        assert!(v < len, "node index {v} is out of range for a forest of {len} nodes");
        if self.components.find_rc(u) != self.components.find_rc(v) {
            return None;
        }
        Some(self.lifting.path_sum(u, v))
    }
}
