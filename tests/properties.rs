use quickcheck::{Arbitrary, Gen};

/// A single mutation to apply to a set under test.
#[derive(Clone, Copy, Debug)]
pub enum Op<K> {
    Insert(K),
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// `log2(n + 1)`, rounded up.
pub fn ceil_log2(n: usize) -> usize {
    let mut bits = 0;
    while (1usize << bits) < n + 1 {
        bits += 1;
    }
    bits
}

macro_rules! bst_set_properties {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use ordered_trees::$module_name::$type_name;
                use ordered_trees::Order;
                use quickcheck_macros::quickcheck;
                use std::collections::{BTreeSet, HashSet};
                use super::{ceil_log2, Op};

                #[quickcheck]
                fn matches_btreeset(ops: Vec<Op<i8>>) -> bool {
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();
                    for op in &ops {
                        let agrees = match op {
                            Op::Insert(key) => set.insert(*key) == expected.insert(*key),
                            Op::Remove(key) => {
                                set.remove(key).is_some() == expected.remove(key)
                            },
                        };
                        if !agrees || set.validate().is_err() {
                            return false;
                        }
                    }
                    set.len() == expected.len() && set.iter().eq(expected.iter())
                }

                #[quickcheck]
                fn contains_inserted(xs: Vec<i16>) -> bool {
                    let set: $type_name<i16> = xs.iter().cloned().collect();
                    xs.iter().all(|x| set.contains(x))
                }

                #[quickcheck]
                fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                    let set: $type_name<i8> = xs.iter().cloned().collect();
                    let added: HashSet<_> = xs.into_iter().collect();
                    let nots: HashSet<_> = nots.into_iter().collect();
                    let mut absent = nots.difference(&added);
                    absent.all(|x| !set.contains(x))
                }

                #[quickcheck]
                fn insert_then_remove_is_identity(xs: Vec<i16>, key: i16) -> bool {
                    let mut set: $type_name<i16> = xs.iter().cloned().collect();
                    if set.contains(&key) {
                        return true;
                    }
                    let before: Vec<i16> = set.iter().cloned().collect();
                    set.insert(key);
                    set.remove(&key);
                    let after: Vec<i16> = set.iter().cloned().collect();
                    before == after && set.validate().is_ok()
                }

                #[quickcheck]
                fn traversals_are_permutations(xs: Vec<u16>) -> bool {
                    let set: $type_name<u16> = xs.iter().cloned().collect();
                    let in_order: Vec<&u16> = set.traverse(Order::In).collect();
                    let sorted = in_order.windows(2).all(|pair| pair[0] < pair[1]);

                    let mut pre: Vec<&u16> = set.traverse(Order::Pre).collect();
                    let mut post: Vec<&u16> = set.traverse(Order::Post).collect();
                    pre.sort();
                    post.sort();
                    sorted && pre == in_order && post == in_order
                }

                #[quickcheck]
                fn height_is_at_least_minimal(xs: Vec<u16>) -> bool {
                    let set: $type_name<u16> = xs.iter().cloned().collect();
                    set.height() >= ceil_log2(set.len()) && set.height() <= set.len()
                }
            }
        )*
    }
}

bst_set_properties!(
    binary_tree: BinarySet,
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);

mod balanced {
    use ordered_trees::avl_tree::AvlSet;
    use ordered_trees::red_black_tree::RedBlackSet;
    use quickcheck_macros::quickcheck;
    use super::{ceil_log2, Op};

    #[quickcheck]
    fn avl_height_bound(ops: Vec<Op<u16>>) -> bool {
        let mut set = AvlSet::new();
        for op in ops {
            match op {
                Op::Insert(key) => set.insert(key),
                Op::Remove(key) => set.remove(&key).is_some(),
            };
        }
        // 1.44 * log2(n + 2), with a little slack for small trees
        let bound = (1.45 * ((set.len() + 2) as f64).log2()).ceil() as usize;
        set.height() <= bound.max(1) && set.validate().is_ok()
    }

    #[quickcheck]
    fn red_black_height_bound(ops: Vec<Op<u16>>) -> bool {
        let mut set = RedBlackSet::new();
        for op in ops {
            match op {
                Op::Insert(key) => set.insert(key),
                Op::Remove(key) => set.remove(&key).is_some(),
            };
        }
        set.is_root_black()
            && set.height() <= 2 * ceil_log2(set.len())
            && set.validate().is_ok()
    }
}
