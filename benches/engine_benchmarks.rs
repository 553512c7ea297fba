use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ripple::{
    board::Board,
    evaluation::{Evaluator, MaterialEvaluator},
    movegen::generate_moves,
    moves::MoveList,
    perft::perft,
};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

fn bench_movegen(c: &mut Criterion) {
    let startpos = Board::default();
    let kiwipete: Board = KIWIPETE.parse().expect("valid FEN");

    c.bench_function("generate_moves startpos", |b| {
        b.iter(|| {
            let mut moves = MoveList::new();
            generate_moves(black_box(&startpos), &mut moves);
            black_box(moves.len())
        });
    });

    c.bench_function("generate_moves kiwipete", |b| {
        b.iter(|| {
            let mut moves = MoveList::new();
            generate_moves(black_box(&kiwipete), &mut moves);
            black_box(moves.len())
        });
    });
}

fn bench_make_move(c: &mut Criterion) {
    let board = Board::default();
    let mut moves = MoveList::new();
    generate_moves(&board, &mut moves);
    let mv = moves[0];

    c.bench_function("make_move startpos", |b| {
        b.iter(|| {
            let mut copy = board;
            copy.make_move(black_box(mv));
            black_box(copy)
        });
    });
}

fn bench_eval(c: &mut Criterion) {
    let kiwipete: Board = KIWIPETE.parse().expect("valid FEN");
    c.bench_function("eval kiwipete", |b| {
        b.iter(|| black_box(MaterialEvaluator.eval(black_box(&kiwipete))));
    });
}

fn bench_perft(c: &mut Criterion) {
    let startpos = Board::default();
    c.bench_function("perft startpos depth 4", |b| {
        b.iter(|| black_box(perft(black_box(&startpos), 4)));
    });
}

criterion_group!(benches, bench_movegen, bench_make_move, bench_eval, bench_perft);
criterion_main!(benches);
