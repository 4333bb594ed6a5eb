use graph_paths::data_structures::MinPriorityQueue;
use ordered_float::OrderedFloat;

#[test]
fn test_pops_lowest_priority_first() {
    let mut queue = MinPriorityQueue::new();
    queue.push(3usize, OrderedFloat(5.0));
    queue.push(1, OrderedFloat(7.0));
    queue.push(2, OrderedFloat(1.5));

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop(), Some((2, OrderedFloat(1.5))));
    assert_eq!(queue.pop(), Some((3, OrderedFloat(5.0))));
    assert_eq!(queue.pop(), Some((1, OrderedFloat(7.0))));
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_equal_priorities_pop_smallest_item() {
    let mut queue: MinPriorityQueue<usize, OrderedFloat<f64>> = MinPriorityQueue::default();
    queue.push(9, OrderedFloat(2.0));
    queue.push(4, OrderedFloat(2.0));
    queue.push(6, OrderedFloat(2.0));

    let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
    assert_eq!(order, vec![4, 6, 9]);
}
