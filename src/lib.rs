pub mod error;
pub mod groups;

mod segment_tree;

pub use error::{Result, SegmentTreeError};
pub use groups::{Max, Min, Operation, Sum};
pub use ordered_float::OrderedFloat;
pub use segment_tree::SegmentTree;

use rand::prelude::*;

#[allow(dead_code)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

/// Times the overlap-pruned query against the uniform one on the same trees.
#[allow(dead_code)]
fn bench_range_query_segtree() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 16;
    const Q: usize = 1 << 16;

    let values: Vec<i64> = (0..N).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();
    let queries: Vec<(usize, usize)> = (0..Q)
        .map(|_| {
            let l = rng.gen_range(0..N);
            (l, rng.gen_range(l..N))
        })
        .collect();

    for op in Operation::ALL {
        let mut st = SegmentTree::with_operation(&[], op);
        bench(&format!("SegmentTree::from_slice({})", op), 1, || {
            st = SegmentTree::with_operation(&values, op);
        });

        let mut pruned = Vec::with_capacity(Q);
        let mut uniform = Vec::with_capacity(Q);
        bench(&format!("SegmentTree::query({})", op), 2, || {
            for &(l, r) in queries.iter() {
                pruned.push(st.query(l, r));
            }
        });
        bench(&format!("SegmentTree::query_uniform({})", op), 1, || {
            for &(l, r) in queries.iter() {
                uniform.push(st.query_uniform(l, r));
            }
        });
        assert_eq!(pruned, uniform);

        bench(&format!("SegmentTree::update({})", op), 2, || {
            for (i, &x) in values.iter().enumerate().rev() {
                assert!(st.update(i, x / 2).is_ok());
            }
        });
        assert_eq!(st.get(N / 2), Ok(values[N / 2] / 2));
        println!();
    }
}

#[test]
#[ignore]
pub fn main() {
    bench_range_query_segtree();
}
