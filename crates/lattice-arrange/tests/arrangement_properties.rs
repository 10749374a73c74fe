//! Properties of arranged items under mixed incremental and full updates.

use std::sync::Arc;

use lattice_arrange::model::{natural_order, ArrangementEngine, ArrayController, FilterFn};
use lattice_arrange::ContentList;

/// Small deterministic generator so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

fn expected(content: &[i32], keep: impl Fn(&i32) -> bool) -> Vec<i32> {
    let mut items: Vec<i32> = content.iter().copied().filter(|n| keep(n)).collect();
    items.sort();
    items
}

#[test]
fn test_incremental_changes_match_rebuild() {
    let content = Arc::new(ContentList::new(Vec::new()));
    let keep = |n: &i32| n % 3 != 0;
    let controller = ArrayController::builder()
        .content(content.clone())
        .compare_fn(natural_order())
        .filter(keep)
        .build();
    let mut rng = Lcg(7);

    for _ in 0..500 {
        let len = content.len();
        let value = rng.below(50) as i32;
        match rng.below(4) {
            0 | 1 => content.insert(rng.below(len + 1), value),
            2 if len > 0 => {
                content.remove(rng.below(len));
            }
            3 if len > 0 => {
                content.replace(rng.below(len), value);
            }
            _ => content.push(value),
        }

        assert_eq!(controller.arranged(), expected(&content.items(), keep));
    }

    let incremental = controller.arranged();
    controller.rearrange();
    assert_eq!(controller.arranged(), incremental);
}

#[test]
fn test_rebuild_satisfies_filter_and_order() {
    let mut rng = Lcg(42);
    let content: Vec<i32> = (0..200).map(|_| rng.below(1000) as i32).collect();
    let odd: FilterFn<i32> = Arc::new(|n: &i32| n % 2 == 1);
    let mut engine = ArrangementEngine::new()
        .with_filter(Some(odd))
        .with_compare(Some(natural_order()));

    engine.rebuild(&content);

    let arranged = engine.arranged().to_vec();
    assert!(arranged.iter().all(|n| n % 2 == 1));
    assert!(arranged.windows(2).all(|pair| pair[0] <= pair[1]));

    engine.rebuild(&content);
    assert_eq!(engine.arranged(), arranged.as_slice());
}

#[test]
fn test_absent_removals_leave_state() {
    let content = Arc::new(ContentList::new(vec![1, 2, 3]));
    let controller = ArrayController::builder()
        .content(content.clone())
        .filter(|n: &i32| *n < 3)
        .build();
    controller.select_item(1);

    content.remove(2);
    controller.unselect_item(&42);

    assert_eq!(controller.arranged(), vec![1, 2]);
    assert_eq!(controller.selection(), vec![1]);
    assert_eq!(controller.selection_indexes(), vec![0]);
}
