use criterion::{black_box, criterion_group, criterion_main, Criterion};
use place_quadtree::shapes::Rectangle;
use place_quadtree::{Config, Place, ServiceMask, ServiceType, SpatialPartition};
use rand::prelude::*;

const MAP_SIZE: u32 = 1_000_000;

fn random_place<R: Rng>(rng: &mut R, bounds: &Rectangle) -> Place {
    let (x, y) = bounds.random_point_inside(rng).unwrap_or((0, 0));
    let service = ServiceType::ALL[rng.gen_range(0..ServiceType::ALL.len())];
    Place::with_services(x, y, ServiceMask::of(service))
}

fn populated_tree<R: Rng>(rng: &mut R, count: usize) -> SpatialPartition {
    let bounds = Rectangle::new(0, 0, MAP_SIZE, MAP_SIZE);
    let mut tree = SpatialPartition::new_with_config(
        bounds,
        Config {
            max_depth: 6,
            ..Config::default()
        },
    )
    .unwrap();
    for _ in 0..count {
        tree.insert(random_place(rng, &bounds)).unwrap();
    }
    tree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut tree = populated_tree(&mut rng, 0);
    let bounds = tree.bounds();

    c.bench_function("partition_insert", |b| {
        b.iter(|| {
            let place = random_place(&mut rng, &bounds);
            tree.insert(black_box(place)).unwrap();
        })
    });
}

fn delete_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut tree = populated_tree(&mut rng, 100_000);
    let bounds = tree.bounds();

    c.bench_function("partition_delete_reinsert", |b| {
        b.iter(|| {
            let place = random_place(&mut rng, &bounds);
            tree.insert(place).unwrap();
            black_box(tree.delete(place.x(), place.y()));
        })
    });
}

fn range_query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let tree = populated_tree(&mut rng, 100_000);
    let range = Rectangle::new(200_000, 200_000, 100_000, 100_000);

    c.bench_function("partition_range_query", |b| {
        b.iter(|| black_box(tree.range_query(black_box(&range), ServiceType::Cafe)))
    });
}

fn nearest_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let tree = populated_tree(&mut rng, 100_000);

    c.bench_function("partition_nearest_by_service", |b| {
        b.iter(|| {
            black_box(tree.find_nearest_by_service(
                black_box(500_000),
                black_box(500_000),
                ServiceType::Atm,
                25_000.0,
                10,
            ))
        })
    });
}

criterion_group!(
    partition_benchmarks,
    insert_benchmark,
    delete_benchmark,
    range_query_benchmark,
    nearest_benchmark
);
criterion_main!(partition_benchmarks);
