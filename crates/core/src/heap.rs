//! Array-backed binary heap primitives.
//!
//! Heaps live in a plain slice: the children of index `i` are `2i + 1` and
//! `2i + 2`. Only the operations the rankers need are exposed: building a
//! heap, popping the maximum to the live boundary and replacing the minimum.

use std::cmp::Ordering;
use std::mem;

/// Restores heap order below `index`, assuming both subtrees are heaps.
///
/// `wins(a, b)` is true when `a` must sit above `b`.
fn sift_down<T, F>(heap: &mut [T], mut index: usize, wins: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = heap.len();
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut best = index;

        if left < len && wins(&heap[left], &heap[best]) {
            best = left;
        }
        if right < len && wins(&heap[right], &heap[best]) {
            best = right;
        }
        if best == index {
            break;
        }

        heap.swap(index, best);
        index = best;
    }
}

fn make_heap<T, F>(heap: &mut [T], wins: F)
where
    F: Fn(&T, &T) -> bool,
{
    for index in (0..heap.len() / 2).rev() {
        sift_down(heap, index, &wins);
    }
}

fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a.cmp(b) == Ordering::Greater
}

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a.cmp(b) == Ordering::Less
}

/// Arranges `items` into a max-heap in O(n).
pub fn make_max_heap<T: Ord>(items: &mut [T]) {
    make_heap(items, greater::<T>);
}

/// Arranges `items` into a min-heap in O(n).
pub fn make_min_heap<T: Ord>(items: &mut [T]) {
    make_heap(items, less::<T>);
}

/// Moves the maximum of a max-heap to the last slot and re-heapifies the
/// remaining `len - 1` elements. The caller shrinks the live range by one.
pub fn pop_max<T: Ord>(heap: &mut [T]) {
    let len = heap.len();
    if len < 2 {
        return;
    }
    heap.swap(0, len - 1);
    sift_down(&mut heap[..len - 1], 0, &greater::<T>);
}

/// Overwrites the root of a min-heap with `value` and sifts it down to its
/// place, returning the displaced root.
///
/// `heap` must already satisfy the min-heap property; otherwise the result is
/// not heap ordered. On an empty slice this is a no-op and `value` is dropped.
pub fn replace_min<T: Ord>(heap: &mut [T], value: T) -> Option<T> {
    let root = heap.first_mut()?;
    let displaced = mem::replace(root, value);
    sift_down(heap, 0, &less::<T>);
    Some(displaced)
}

pub fn is_min_heap<T: Ord>(heap: &[T]) -> bool {
    (1..heap.len()).all(|i| heap[(i - 1) / 2] <= heap[i])
}

pub fn is_max_heap<T: Ord>(heap: &[T]) -> bool {
    (1..heap.len()).all(|i| heap[(i - 1) / 2] >= heap[i])
}
