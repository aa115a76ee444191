//! Benchmarks for the search and cycle engines on the sample inputs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reflector::beam::Contraption;
use reflector::crucible::{CrucibleRules, HeatMap};
use reflector::garden::{Garden, Tiling};
use reflector::platform::{Platform, SPIN_CYCLES};

const HEAT_MAP: &[&str] = &[
    "2413432311323",
    "3215453535623",
    "3255245654254",
    "3446585845452",
    "4546657867536",
    "1438598798454",
    "4457876987766",
    "3637877979653",
    "4654967986887",
    "4564679986453",
    "1224686865563",
    "2546548887735",
    "4322674655533",
];

const CONTRAPTION: &[&str] = &[
    r".|...\....",
    r"|.-.\.....",
    r".....|-...",
    r"........|.",
    r"..........",
    r".........\",
    r"..../.\\..",
    r".-.-/..|..",
    r".|....-|.\",
    r"..//.|....",
];

const PLATFORM: &[&str] = &[
    "O....#....",
    "O.OO#....#",
    ".....##...",
    "OO.#O....O",
    ".O.....O#.",
    "O.#..O.#.#",
    "..O..#O..O",
    ".......O..",
    "#....###..",
    "#OO..#....",
];

const GARDEN: &[&str] = &[
    "...........",
    ".....###.#.",
    ".###.##..#.",
    "..#.#...#..",
    "....#.#....",
    ".##..S####.",
    ".##..#...#.",
    ".......##..",
    ".##.#.####.",
    ".##..##.##.",
    "...........",
];

/// Benchmark heat-loss routing for both crucible classes.
fn bench_crucible(c: &mut Criterion) {
    let heat_map = HeatMap::parse(HEAT_MAP).unwrap();

    let mut group = c.benchmark_group("crucible");
    group.bench_function("ordinary", |b| {
        b.iter(|| black_box(&heat_map).minimal_heat_loss(CrucibleRules::ORDINARY))
    });
    group.bench_function("ultra", |b| {
        b.iter(|| black_box(&heat_map).minimal_heat_loss(CrucibleRules::ULTRA))
    });
    group.finish();
}

/// Benchmark the best edge entry over every beam start.
fn bench_beam(c: &mut Criterion) {
    let contraption = Contraption::parse(CONTRAPTION).unwrap();

    c.bench_function("beam_best_energized", |b| {
        b.iter(|| black_box(&contraption).best_energized())
    });
}

/// Benchmark cycle detection and projection on the tilt platform.
fn bench_spin_projection(c: &mut Criterion) {
    let (platform, rocks) = Platform::parse(PLATFORM).unwrap();

    c.bench_function("spin_projection", |b| {
        b.iter(|| platform.after_spins(black_box(&rocks), SPIN_CYCLES))
    });
}

/// Benchmark reachability on the infinite garden.
fn bench_garden(c: &mut Criterion) {
    let garden = Garden::parse(GARDEN).unwrap();

    let mut group = c.benchmark_group("garden");
    group.sample_size(10);
    group.bench_function("infinite_100", |b| {
        b.iter(|| black_box(&garden).reachable_plots(100, Tiling::Infinite))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_crucible,
    bench_beam,
    bench_spin_projection,
    bench_garden
);
criterion_main!(benches);
