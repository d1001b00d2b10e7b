use std::mem;

pub(crate) struct Components {
    uf: Vec<usize>,
    members: Vec<Vec<usize>>,
}

/// `unite`の結果。`keep`/`absorbed`は入れ替え後の呼び出し引数で、
/// `absorbed`側の頂点は`members(keep_root)[absorbed_from..]`に並ぶ。
pub(crate) struct Merge {
    pub keep: usize,
    pub absorbed: usize,
    pub keep_root: usize,
    pub absorbed_from: usize,
}

impl Components {
    pub fn new(len: usize) -> Self {
        Self {
            uf: (0..len).collect(),
            members: (0..len).map(|i| vec![i]).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.uf.len()
    }

    pub fn find(&self, mut i: usize) -> usize {
        let mut p = self.uf[i];
        while p != i {
            i = p;
            p = self.uf[i];
        }
        p
    }

    pub fn find_rc(&mut self, mut i: usize) -> usize {
        let root = self.find(i);
        while self.uf[i] != root {
            i = mem::replace(&mut self.uf[i], root);
        }
        root
    }

    /// 小さい方のメンバーリストを大きい方へ吸収する。同じ木なら`None`。
    pub fn unite(&mut self, u: usize, v: usize) -> Option<Merge> {
        let root_u = self.find_rc(u);
        let root_v = self.find_rc(v);
        if root_u == root_v {
            return None;
        }
        let (mut keep, mut absorbed) = (u, v);
        let (mut keep_root, mut absorbed_root) = (root_u, root_v);
        if self.members[keep_root].len() < self.members[absorbed_root].len() {
            mem::swap(&mut keep, &mut absorbed);
            mem::swap(&mut keep_root, &mut absorbed_root);
        }
        self.uf[absorbed_root] = keep_root;
        let moved = mem::take(&mut self.members[absorbed_root]);
        let absorbed_from = self.members[keep_root].len();
        self.members[keep_root].extend(moved);
        Some(Merge {
            keep,
            absorbed,
            keep_root,
            absorbed_from,
        })
    }

    pub fn members(&self, root: usize) -> &[usize] {
        &self.members[root]
    }

    pub fn size(&self, i: usize) -> usize {
        self.members[self.find(i)].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_test() {
        let mut c = Components::new(10);
        assert!(c.unite(0, 1).is_some());
        assert!(c.unite(2, 3).is_some());
        assert!(c.unite(3, 4).is_some());
        assert!(c.unite(0, 1).is_none());
        assert!(c.unite(4, 2).is_none());
        assert_eq!(c.find_rc(0), c.find_rc(1));
        assert_ne!(c.find_rc(0), c.find_rc(2));
        assert_eq!(c.find_rc(2), c.find_rc(4));
        let root = c.find(3);
        assert_eq!(c.find(3), root);
        assert_eq!(c.find_rc(3), root);
        assert_eq!(c.find(3), root);
    }

    #[test]
    fn small_to_large_test() {
        let mut c = Components::new(6);
        let m = c.unite(0, 1).unwrap();
        assert_eq!((m.keep, m.absorbed), (0, 1));
        let m = c.unite(2, 0).unwrap();
        assert_eq!((m.keep, m.absorbed), (0, 2));
        assert_eq!(m.absorbed_from, 2);
        assert_eq!(c.members(m.keep_root), &[0, 1, 2]);
        assert_eq!(c.size(2), 3);
        assert_eq!(c.size(4), 1);
    }
}
