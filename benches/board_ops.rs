use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_terrain::core::{Board, ChunkSpec, EditOperation, SpawnQuery};
use tui_terrain::term::FrameBuffer;
use tui_terrain::types::{Direction, Entity, Graphics, Position, Rectangle, Rgb, TileType};

const FLOOR: Graphics = Graphics::glyph('.', Rgb::GREY);
const WALL: Graphics = Graphics::glyph('#', Rgb::WHITE);

fn field(size: i32) -> Board<FrameBuffer> {
    let area = Rectangle::new(Position::ZERO, size, size);
    let chunk =
        ChunkSpec::new(area, FLOOR, TileType::WALKABLE).with_border(WALL, TileType::empty());
    let mut board = Board::from_chunk(area, &chunk, FrameBuffer::new(size as u16, size as u16));
    board
        .set_replacement_tile(Some(Entity::tile(FLOOR, Position::ZERO, TileType::WALKABLE)))
        .expect("floor is a tile");
    board
}

fn bench_full_draw(c: &mut Criterion) {
    let mut board = field(64);

    c.bench_function("draw_64x64", |b| {
        b.iter(|| {
            black_box(board.draw());
        })
    });
}

fn bench_move_back_and_forth(c: &mut Criterion) {
    let mut board = field(32);
    let mut hero = Entity::drawable(Graphics::glyph('@', Rgb::WHITE), Position::new(10, 10));
    board.edit_entities(&hero, EditOperation::UpdateOrCreate);

    c.bench_function("move_entity_pair", |b| {
        b.iter(|| {
            black_box(board.move_entity(&mut hero, Direction::Right, 1));
            black_box(board.move_entity(&mut hero, Direction::Left, 1));
        })
    });
}

fn bench_spawn_search(c: &mut Criterion) {
    let board = field(64);
    let query = SpawnQuery::default();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("spawn_search_64x64", |b| {
        b.iter(|| {
            black_box(board.spawn_search(black_box(&query), &mut rng));
        })
    });
}

criterion_group!(
    benches,
    bench_full_draw,
    bench_move_back_and_forth,
    bench_spawn_search
);
criterion_main!(benches);
