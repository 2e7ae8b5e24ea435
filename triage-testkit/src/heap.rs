use std::fmt::Debug;

use triage::OrderedPriorityQueue;

/// True if `keys`, read as a binary-heap layout, satisfies the min-heap
/// property.
pub fn is_min_heap<K: Ord>(keys: &[K]) -> bool {
    (1..keys.len()).all(|i| keys[i] >= keys[(i - 1) / 2])
}

/// Panic unless the queue's backing sequence satisfies the min-heap
/// property.
pub fn assert_min_heap<K: Ord + Debug>(queue: &OrderedPriorityQueue<K>) {
    let keys: Vec<&K> = queue.iter().collect();
    for i in 1..keys.len() {
        let parent = (i - 1) / 2;
        assert!(
            keys[i] >= keys[parent],
            "heap property violated at index {i}: {:?} < parent {:?}",
            keys[i],
            keys[parent],
        );
    }
}
