use crate::model::*;

// 刻子
#[inline]
pub fn is_triplet(t1: Tile, t2: Tile, t3: Tile) -> bool {
    t1 == t2 && t2 == t3
}

// 順子 (9から1へは繋がらない)
pub fn is_run(t1: Tile, t2: Tile, t3: Tile) -> bool {
    if t1.0 != t2.0 || t2.0 != t3.0 {
        return false;
    }
    let mut ns = [t1.1, t2.1, t3.1];
    ns.sort_unstable();
    ns[0] + 1 == ns[1] && ns[1] + 1 == ns[2]
}

#[test]
fn test_is_triplet() {
    let t = Tile(Suit::W, 3);
    assert!(is_triplet(t, t, t));
    assert!(!is_triplet(t, t, Tile(Suit::T, 3)));
    assert!(!is_triplet(t, t, Tile(Suit::W, 4)));
}

#[test]
fn test_is_run() {
    let b = |n| Tile(Suit::B, n);
    assert!(is_run(b(3), b(4), b(5)));
    assert!(is_run(b(5), b(3), b(4)));
    assert!(is_run(b(7), b(8), b(9)));
    assert!(!is_run(b(8), b(9), b(1)));
    assert!(!is_run(b(3), b(3), b(4)));
    assert!(!is_run(b(3), b(5), b(7)));
    assert!(!is_run(b(3), Tile(Suit::T, 4), b(5)));
}
