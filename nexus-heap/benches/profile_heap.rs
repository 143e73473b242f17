// benches/profile_heap.rs
//! Cycle-level latency profile for nexus-heap.
//!
//! Measures uncontended lock + sift cost per operation. For stable numbers,
//! disable turbo boost and pin to a core:
//!   echo 1 | sudo tee /sys/devices/system/cpu/intel_pstate/no_turbo
//!   sudo taskset -c 2 ./target/release/deps/profile_heap-*

use hdrhistogram::Histogram;
use nexus_heap::{Heap, Polarity};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const HEAP_SIZE: usize = 1024;
const WARMUP: usize = 10_000;
const SAMPLES: usize = 100_000;

#[cfg(target_arch = "x86_64")]
#[inline]
fn rdtscp() -> u64 {
    unsafe {
        let mut aux: u32 = 0;
        core::arch::x86_64::__rdtscp(&mut aux)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn rdtscp() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

fn print_histogram(name: &str, hist: &Histogram<u64>) {
    println!(
        "{:16} p50: {:5} cycles | p99: {:5} cycles | p999: {:6} cycles | min: {:4} | max: {:7}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.min(),
        hist.max(),
    );
}

fn filled(polarity: Polarity, rng: &mut SmallRng) -> Heap<u64> {
    let initial: Vec<u64> = (0..HEAP_SIZE)
        .map(|_| rng.random_range(0..1_000_000))
        .collect();
    Heap::from_vec(polarity, initial)
}

/// add followed by deleting the last slot keeps the heap at a steady size.
fn profile_add(rng: &mut SmallRng) -> Histogram<u64> {
    let heap = filled(Polarity::Min, rng);
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..WARMUP + SAMPLES {
        let value = rng.random_range(0..1_000_000);
        let start = rdtscp();
        heap.add(std::hint::black_box(value));
        let end = rdtscp();
        heap.delete(heap.len() - 1).unwrap();

        if i >= WARMUP {
            hist.record(end.wrapping_sub(start)).unwrap();
        }
    }

    hist
}

fn profile_insert_value(rng: &mut SmallRng) -> Histogram<u64> {
    let heap = filled(Polarity::Max, rng);
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..WARMUP + SAMPLES {
        let value = rng.random_range(0..1_000_000);
        let start = rdtscp();
        std::hint::black_box(heap.insert_value(value));
        let end = rdtscp();

        if i >= WARMUP {
            hist.record(end.wrapping_sub(start)).unwrap();
        }
    }

    hist
}

fn profile_find_bottom(rng: &mut SmallRng) -> Histogram<u64> {
    let heap = filled(Polarity::Max, rng);
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..WARMUP + SAMPLES {
        let start = rdtscp();
        std::hint::black_box(heap.find_bottom().unwrap());
        let end = rdtscp();

        if i >= WARMUP {
            hist.record(end.wrapping_sub(start)).unwrap();
        }
    }

    hist
}

fn main() {
    let mut rng = SmallRng::seed_from_u64(12345);

    println!("\nHeap<u64> ({} samples, heap size {})", SAMPLES, HEAP_SIZE);
    println!("----------------------------------------------------------------------------------------");
    print_histogram("add", &profile_add(&mut rng));
    print_histogram("insert_value", &profile_insert_value(&mut rng));
    print_histogram("find_bottom", &profile_find_bottom(&mut rng));
    println!();
}
