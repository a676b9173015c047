#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use taxi_heap::Distance;

pub(crate) fn build_std_heap(distances: &[Distance]) -> BinaryHeap<Reverse<Distance>> {
    distances.iter().copied().map(Reverse).collect()
}

pub(crate) fn drain_std_heap(mut heap: BinaryHeap<Reverse<Distance>>) -> usize {
    let mut count = 0;
    while heap.pop().is_some() {
        count += 1;
    }
    count
}
