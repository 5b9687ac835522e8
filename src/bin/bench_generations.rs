use std::time::Instant;

use gol::{Board, Pattern};

const ROUNDS: u32 = 50;

fn seeded() -> Board {
    let mut board = Board::new();
    board.clear();
    board.place(&Pattern::glider(), board.center());
    board
}

fn bench(generations: i64) -> f64 {
    let start = Instant::now();
    for _ in 0..ROUNDS {
        let mut board = seeded();
        std::hint::black_box(board.compute_n_generations(generations));
        std::hint::black_box(board.population());
    }
    start.elapsed().as_secs_f64() * 1000.0 / ROUNDS as f64
}

fn main() {
    println!(
        "{:<12} {:>12} {:>14}",
        "Generations", "Run(ms)", "Per gen(us)"
    );
    println!("{}", "-".repeat(40));

    for generations in [10, 100, 1000] {
        let run_ms = bench(generations);
        let per_gen_us = run_ms * 1000.0 / generations as f64;
        println!("{generations:<12} {run_ms:>12.3} {per_gen_us:>14.3}");
    }
}
