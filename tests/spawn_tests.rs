//! Tile spawner and grid initializer tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::{init_grid, spawn_tile, spawn_tile_from, Candidates, CoreError, ErrorKind, Grid, SimpleRng};
use tui_2048::types::{DEFAULT_CANDIDATES, EMPTY};

#[test]
fn test_spawn_fills_the_only_empty_cell() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let mut grid = Grid::from_rows(vec![vec![2, 4, 8], vec![16, 32, 0], vec![64, 128, 256]]).unwrap();
        let pos = spawn_tile_from(&mut grid, &[2, 4], &mut rng).unwrap();
        assert_eq!(pos, (1, 2));
        assert!(matches!(grid.get(1, 2), Some(2) | Some(4)));
        assert!(grid.is_full());
    }
}

#[test]
fn test_spawn_only_touches_one_empty_cell() {
    let mut rng = SimpleRng::new(9);
    let mut grid = Grid::from_rows(vec![vec![2, 0, 0], vec![0, 8, 0]]).unwrap();
    let before = grid.clone();
    let (r, c) = spawn_tile(&mut grid, &Candidates::default(), &mut rng).unwrap();

    assert_eq!(before.get(r, c), Some(EMPTY));
    assert_eq!(grid.count_tiles(), before.count_tiles() + 1);
    for row in 0..2 {
        for col in 0..3 {
            if (row, col) != (r, c) {
                assert_eq!(grid.get(row, col), before.get(row, col));
            }
        }
    }
}

#[test]
fn test_spawn_on_full_grid_is_precondition_error() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
    let before = grid.clone();

    let err = spawn_tile(&mut grid, &Candidates::default(), &mut rng).unwrap_err();
    assert_eq!(err, CoreError::GridFull);
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    assert_eq!(grid, before);
}

#[test]
fn test_empty_candidates_use_defaults() {
    let mut rng = StdRng::seed_from_u64(3);
    let candidates = Candidates::new(&[]).unwrap();
    assert_eq!(candidates.values(), &DEFAULT_CANDIDATES);

    for _ in 0..50 {
        let mut grid = Grid::new(2, 2).unwrap();
        let (r, c) = spawn_tile_from(&mut grid, &[], &mut rng).unwrap();
        assert!(DEFAULT_CANDIDATES.contains(&grid.get(r, c).unwrap()));
    }
}

#[test]
fn test_zero_candidate_rejected() {
    let err = Candidates::new(&[2, 0]).unwrap_err();
    assert_eq!(err, CoreError::InvalidCandidate(0));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_spawn_covers_every_empty_cell_eventually() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = [[false; 3]; 3];
    for _ in 0..500 {
        let mut grid = Grid::new(3, 3).unwrap();
        let (r, c) = spawn_tile_from(&mut grid, &[2], &mut rng).unwrap();
        seen[r][c] = true;
    }
    assert!(seen.iter().flatten().all(|&s| s));
}

#[test]
fn test_init_grid_places_exact_tile_count() {
    let mut rng = StdRng::seed_from_u64(2024);
    let candidates = Candidates::new(&[2, 4]).unwrap();
    for _ in 0..20 {
        let grid = init_grid(4, 4, 3, &candidates, &mut rng).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (4, 4));
        assert_eq!(grid.count_tiles(), 3);
        assert_eq!(grid.count_empty(), 13);
        assert!(grid.cells().iter().all(|&v| v == EMPTY || v == 2 || v == 4));
    }
}

#[test]
fn test_init_grid_clamps_spawn_count_to_capacity() {
    let mut rng = StdRng::seed_from_u64(5);
    let grid = init_grid(2, 2, 10, &Candidates::default(), &mut rng).unwrap();
    assert!(grid.is_full());
}

#[test]
fn test_init_grid_rejects_bad_arguments() {
    let mut rng = StdRng::seed_from_u64(5);
    let c = Candidates::default();
    assert!(matches!(
        init_grid(0, 4, 2, &c, &mut rng),
        Err(CoreError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        init_grid(4, 0, 2, &c, &mut rng),
        Err(CoreError::InvalidDimensions { .. })
    ));
    assert_eq!(init_grid(4, 4, 0, &c, &mut rng).unwrap_err(), CoreError::InvalidSpawnCount);
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let c = Candidates::default();
    let a = init_grid(4, 4, 3, &c, &mut SimpleRng::new(77)).unwrap();
    let b = init_grid(4, 4, 3, &c, &mut SimpleRng::new(77)).unwrap();
    assert_eq!(a, b);
}
