use bounded_heap::{BinaryHeap, Compare, MaxOrder, MinOrder};
use clap::Parser;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "heap-benchmark")]
#[command(about = "A bounded heap performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, default_value = "max")]
    order: String,

    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    println!(
        "Running with {} order and {} element count",
        args.order, args.size
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut numbers: Vec<usize> = (0..args.size).collect();
    numbers.shuffle(&mut rng);

    match args.order.as_str() {
        "max" => run(&numbers, MaxOrder),
        "min" => run(&numbers, MinOrder),
        _ => panic!("Unexpected value for order: {}", args.order),
    }
}

fn run<C: Compare<usize>>(numbers: &[usize], order: C) {
    let size = numbers.len();
    let start = Instant::now();
    let mut heap = BinaryHeap::new(numbers.to_vec(), size * 2, order);
    let built = Instant::now();
    for (i, &number) in numbers.iter().enumerate() {
        assert_eq!(heap.len(), size + i);
        heap.insert(number).expect("heap has spare capacity");
    }
    let inserted = Instant::now();
    while !heap.is_empty() {
        heap.extract().expect("heap is non-empty");
    }
    let end = Instant::now();

    println!(
        "Heapify took {} seconds",
        built.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(built).as_secs_f32()
    );
    println!(
        "Extracts took {} seconds",
        end.saturating_duration_since(inserted).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
