use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use tetris3d::core::{collision::DOWN, ghost_position, GameSnapshot, GameState, Grid, Piece};
use tetris3d::engine::Engine;
use tetris3d::types::{Axis, GameAction, GameStatus, PieceKind, Rgb, RotationDirection, TICK_MS};

fn bench_engine_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    engine.apply(GameAction::Start);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(TICK_MS));
            if engine.game().status() == GameStatus::GameOver {
                engine.apply(GameAction::Start);
            }
        })
    });
}

fn bench_layer_clear(c: &mut Criterion) {
    let color = Rgb::new(0, 255, 255);
    c.bench_function("clear_4_layers", |b| {
        b.iter(|| {
            let mut grid = Grid::default();
            for y in 0..4 {
                for z in 0..10 {
                    for x in 0..10 {
                        grid.set(x, y, z, Some(color));
                    }
                }
            }
            black_box(grid.check_and_clear_completed_layers());
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let grid = Grid::default();
    let piece = Piece::new(PieceKind::T, Vec3::new(4.0, 17.0, 4.0));

    c.bench_function("ghost_position", |b| {
        b.iter(|| black_box(ghost_position(&grid, Some(black_box(&piece)))))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            state.move_piece(black_box(Vec3::X));
            state.move_piece(black_box(Vec3::NEG_X));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();
    state.move_piece(DOWN);
    state.move_piece(DOWN);

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            state.rotate_piece(black_box(Axis::Y), RotationDirection::Positive);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_engine_tick,
    bench_layer_clear,
    bench_ghost,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
