use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::tictactoe::{
    Board, Mark, MinimaxSearch, SearchSettings, TicTacToeGameState, compute_move,
};

fn bench_self_play_game() {
    let mut state = TicTacToeGameState::new(Mark::X);
    while !state.status().is_terminal() {
        let mark = state.current_mark();
        let mut board = state.board().clone();
        let Some(opponent) = mark.opponent() else {
            break;
        };
        let Ok(pos) = compute_move(&mut board, mark, opponent) else {
            break;
        };
        if state.place_mark(mark, pos).is_err() {
            break;
        }
    }
}

fn bench_single_move(board: &Board, mark: Mark, settings: SearchSettings) {
    let mut board = board.clone();
    if let Some(opponent) = mark.opponent()
        && let Ok(mut search) = MinimaxSearch::new(settings, mark, opponent)
    {
        let _ = black_box(search.search(&mut board));
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let empty = Board::new();
    let mid_game: Board = "X.O .X. ..."
        .parse()
        .unwrap_or_default();

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.bench_function("single_move_empty", |b| {
        b.iter(|| bench_single_move(&empty, Mark::X, SearchSettings::default()))
    });

    group.bench_function("single_move_empty_exhaustive", |b| {
        b.iter(|| bench_single_move(&empty, Mark::X, SearchSettings::default().exhaustive()))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_single_move(&mid_game, Mark::O, SearchSettings::default()))
    });

    let full_depth = SearchSettings {
        depth: 9,
        endgame_empty_cells: 0,
        alpha_beta: true,
    };
    group.bench_function("full_depth_empty", |b| {
        b.iter(|| bench_single_move(&empty, Mark::X, full_depth))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
