use tracing::trace;

use lb_core::heap::{make_min_heap, replace_min};
use lb_core::{Cutoffs, Player, RankError};

/// Push-driven leaderboard of fixed capacity.
///
/// The first `interval` players fill an unordered buffer, which is then
/// heapified into a min-heap. From there a newcomer only enters by beating
/// the root, which it replaces. Every `interval` players the root level is
/// recorded as a cutoff.
#[derive(Debug)]
pub struct StreamingTopKTracker {
    interval: usize,
    leaders: Vec<Player>,
    cutoffs: Cutoffs,
    consumed: usize,
    replacements: u64,
    filled: bool,
}

impl StreamingTopKTracker {
    pub fn new(interval: usize) -> Result<Self, RankError> {
        if interval == 0 {
            return Err(RankError::ZeroInterval);
        }
        Ok(Self {
            interval,
            leaders: Vec::new(),
            cutoffs: Cutoffs::new(),
            consumed: 0,
            replacements: 0,
            filled: false,
        })
    }

    pub fn observe(&mut self, player: Player) {
        self.consumed += 1;

        if !self.filled {
            self.leaders.push(player);
            if self.leaders.len() == self.interval {
                make_min_heap(&mut self.leaders);
                self.filled = true;
            }
        } else if self.leaders.first().is_some_and(|root| player > *root) {
            replace_min(&mut self.leaders, player);
            self.replacements += 1;
        }

        if self.consumed % self.interval == 0 {
            self.record_cutoff();
        }
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn replacements(&self) -> u64 {
        self.replacements
    }

    /// Records the end-of-stream cutoff if the stream stopped mid-interval and
    /// returns the leaders in ascending order.
    pub fn finish(mut self) -> (Vec<Player>, Cutoffs) {
        if !self.filled {
            make_min_heap(&mut self.leaders);
        }
        if self.consumed % self.interval != 0 {
            self.record_cutoff();
        }
        self.leaders.sort_unstable();
        (self.leaders, self.cutoffs)
    }

    fn record_cutoff(&mut self) {
        if let Some(root) = self.leaders.first() {
            trace!(milestone = self.consumed, level = root.level, "cutoff");
            self.cutoffs.insert(self.consumed, root.level);
        }
    }
}
