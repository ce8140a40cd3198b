//! Tests for `RandomPool` insertion and uniform random removal

#[cfg(test)]
mod tests {
    use markov_painting::algorithm::pool::RandomPool;
    use rand::{SeedableRng, rngs::StdRng};

    // Tests an empty pool signals emptiness instead of panicking
    // Verified by sampling an index before the emptiness check
    #[test]
    fn test_remove_from_empty_pool() {
        let mut pool: RandomPool<u32> = RandomPool::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.is_empty());
        assert_eq!(pool.remove_random(&mut rng), None);
    }

    // Tests draining returns every inserted element exactly once
    // Verified by removing without shrinking the pool
    #[test]
    fn test_drain_is_permutation() {
        let mut pool = RandomPool::with_capacity(4);
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..100 {
            pool.insert(i);
        }
        assert_eq!(pool.len(), 100);

        let mut drained = Vec::new();
        while let Some(item) = pool.remove_random(&mut rng) {
            drained.push(item);
        }

        assert!(pool.is_empty());
        let mut sorted = drained.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
        assert_ne!(drained, sorted, "drain order should not be insertion order");
    }

    // Tests removal order depends only on the random source
    // Verified by seeding from the system clock
    #[test]
    fn test_same_seed_same_order() {
        let drain = |seed| {
            let mut pool = RandomPool::new();
            pool.extend(0..50);
            let mut rng = StdRng::seed_from_u64(seed);
            std::iter::from_fn(|| pool.remove_random(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(drain(3), drain(3));
        assert_ne!(drain(3), drain(4));
    }

    // Tests each position is chosen roughly uniformly as the first removal
    // Verified by always removing the last element
    #[test]
    fn test_first_removal_is_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let mut pool = RandomPool::new();
            pool.extend(0..4usize);
            if let Some(first) = pool.remove_random(&mut rng) {
                if let Some(count) = counts.get_mut(first) {
                    *count += 1;
                }
            }
        }
        for count in counts {
            assert!((800..1200).contains(&count), "counts: {counts:?}");
        }
    }

    // Tests interleaved inserts and removals keep the length consistent
    // Verified by not decrementing the length on removal
    #[test]
    fn test_interleaved_operations() {
        let mut pool = RandomPool::default();
        let mut rng = StdRng::seed_from_u64(5);
        pool.insert('a');
        pool.insert('b');
        assert!(pool.remove_random(&mut rng).is_some());
        pool.insert('c');
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.iter().count(), 2);
        pool.clear();
        assert!(pool.is_empty());
    }
}
