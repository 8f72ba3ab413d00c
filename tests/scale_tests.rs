use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seqops::prelude::*;
use std::collections::LinkedList;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    sort(&mut input).unwrap();
    println!("Sorted 1M elements in {:?}", start.elapsed());

    assert_eq!(input.len(), count);
    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_linked_list_100k() {
    let count = 100_000u64;
    let mut rng = StdRng::seed_from_u64(5);
    let mut list: LinkedList<u64> = (0..count).collect();

    let start = Instant::now();
    shuffle_with(&mut list, &mut rng).unwrap();
    sort(&mut list).unwrap();
    println!("Shuffled and sorted 100k linked elements in {:?}", start.elapsed());
    assert!(list.iter().copied().eq(0..count));

    // Sampled probes through the cursor search.
    for _ in 0..50 {
        let key = rng.random_range(0..count * 2);
        let expected = if key < count {
            Ok(key as usize)
        } else {
            Err(count as usize)
        };
        assert_eq!(binary_search(&list, &key), expected);
    }

    reverse(&mut list).unwrap();
    assert!(list.iter().copied().eq((0..count).rev()));

    rotate(&mut list, -(count as isize) - 3).unwrap();
    assert_eq!(list.front(), Some(&(count - 4)));
    assert_eq!(list.len(), count as usize);
}

#[test]
fn test_default_shuffle_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                let mut data: Vec<u32> = (0..1_000).map(|i| i * 8 + t).collect();
                let expected = data.clone();
                for _ in 0..20 {
                    shuffle(&mut data).unwrap();
                }
                data.sort();
                assert_eq!(data, expected);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("shuffling thread panicked");
    }
}
