use tracing::debug;

use lb_core::heap::{make_max_heap, pop_max};
use lb_core::{top_count, Player, RankingResult};
use lb_runtime::Stopwatch;

use crate::OfflineRanking;

/// Heapsort that stops after `k` extractions.
///
/// Builds a max-heap over `items` in place and pops the maximum `k` times,
/// each pop parking it just past the shrinking live heap. Returns the index
/// where the extracted suffix starts. O(n + k log n) time, O(1) extra space.
pub fn select_top_by_heap<T: Ord>(items: &mut [T], k: usize) -> usize {
    let n = items.len();
    let k = k.min(n);
    if k == 0 {
        return n;
    }

    make_max_heap(items);
    for popped in 0..k {
        pop_max(&mut items[..n - popped]);
    }
    n - k
}

/// Ranks the top decile by early-stopping heapsort.
pub fn heap_rank(mut players: Vec<Player>) -> OfflineRanking {
    let population = players.len();
    let k = top_count(population);

    let watch = Stopwatch::start();
    let split = select_top_by_heap(&mut players, k);
    let mut top = players.split_off(split);
    top.sort_unstable();
    let elapsed = watch.elapsed();

    debug!(population, top = top.len(), ?elapsed, "heap rank complete");
    OfflineRanking {
        result: RankingResult::offline(top, elapsed),
        remainder: players,
    }
}
