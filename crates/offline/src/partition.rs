use std::cmp::Ordering;

use rand::Rng;
use tracing::debug;

use lb_core::{top_count, Player, RankingResult};
use lb_runtime::Stopwatch;

use crate::{OfflineConfig, OfflineRanking};

/// Three-way partition around `s[pivot]`.
///
/// Returns `(lt, gt)` such that `s[..lt] < p`, `s[lt..gt] == p` and `s[gt..] > p`.
fn partition3<T: Ord>(s: &mut [T], pivot: usize) -> (usize, usize) {
    s.swap(0, pivot);
    let (mut lt, mut i, mut gt) = (0, 1, s.len());
    while i < gt {
        match s[i].cmp(&s[lt]) {
            Ordering::Less => {
                s.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                s.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

/// Moves the `k` largest items to the end of `items` using randomized
/// quickselect and returns the index where that suffix starts.
///
/// Expected O(n) time. The loop only ever narrows into one side, so no stack
/// grows with `n`. Neither the suffix nor the prefix is sorted.
pub fn select_top_by_partition<T, R>(items: &mut [T], k: usize, rng: &mut R) -> usize
where
    T: Ord,
    R: Rng,
{
    let n = items.len();
    let k = k.min(n);
    if k == 0 {
        return n;
    }

    let target = n - k;
    let (mut lo, mut hi) = (0, n);
    while hi - lo > 1 {
        let pivot = rng.gen_range(0..hi - lo);
        let (lt, gt) = partition3(&mut items[lo..hi], pivot);
        let (lt, gt) = (lo + lt, lo + gt);
        if target < lt {
            hi = lt;
        } else if target >= gt {
            lo = gt;
        } else {
            break;
        }
    }
    target
}

/// Ranks the top decile with quickselect, seeding pivots from the OS.
pub fn partition_rank(players: Vec<Player>) -> OfflineRanking {
    partition_rank_with(players, &OfflineConfig::default())
}

pub fn partition_rank_with(mut players: Vec<Player>, cfg: &OfflineConfig) -> OfflineRanking {
    let mut rng = cfg.pivot_rng();
    let population = players.len();
    let k = top_count(population);

    let watch = Stopwatch::start();
    let split = select_top_by_partition(&mut players, k, &mut rng);
    let mut top = players.split_off(split);
    top.sort_unstable();
    let elapsed = watch.elapsed();

    debug!(population, top = top.len(), ?elapsed, "partition rank complete");
    OfflineRanking {
        result: RankingResult::offline(top, elapsed),
        remainder: players,
    }
}
