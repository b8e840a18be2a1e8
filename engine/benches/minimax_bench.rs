use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::heuristic::{self, HeuristicLevel};
use tictactoe_engine::{Board, Mark, MoveOracle, SessionRng, Side};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    let moves = [(4, Mark::X), (0, Mark::O), (2, Mark::X)];
    for (position, mark) in moves {
        board.place(position, mark).expect("scripted move is legal");
    }
    board
}

fn bench_self_play(oracle: &mut MoveOracle) {
    let mut board = Board::new();
    while !board.outcome().expect("legal play").is_terminal() {
        let side = board.side_to_move();
        let position = oracle.best_move(&board, side).expect("game not over");
        board.place(position, side.mark()).expect("oracle move is legal");
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("empty_board_uncached", |b| {
        b.iter(|| MoveOracle::without_cache().best_move(black_box(&Board::new()), Side::X))
    });

    group.bench_function("empty_board_cold_cache", |b| {
        b.iter(|| MoveOracle::new().best_move(black_box(&Board::new()), Side::X))
    });

    let mut warm = MoveOracle::new();
    group.bench_function("self_play_warm_cache", |b| b.iter(|| bench_self_play(&mut warm)));

    let board = mid_game_board();
    group.bench_function("mid_game_uncached", |b| {
        b.iter(|| MoveOracle::without_cache().best_move(black_box(&board), Side::O))
    });

    group.finish();
}

fn heuristic_bench(c: &mut Criterion) {
    let board = mid_game_board();
    let mut rng = SessionRng::new(42);
    c.bench_function("heuristic_very_good_mid_game", |b| {
        b.iter(|| {
            heuristic::choose_move(
                black_box(&board),
                Side::O,
                HeuristicLevel::VeryGood,
                &mut rng,
            )
        })
    });
}

criterion_group!(benches, minimax_bench, heuristic_bench);
criterion_main!(benches);
