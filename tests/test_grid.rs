use game_of_life::Grid;

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

/// Builds a grid from rows of '.' (dead) and 'o' (live) characters.
fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows[0].len();
    let mut grid = Grid::blank(width, height).unwrap();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width);
        for (x, ch) in row.chars().enumerate() {
            grid.set_cell(x, y, ch == 'o');
        }
    }
    grid
}

#[test]
fn step_does_not_mutate_input() {
    let grid = Grid::random(32, 24, FILL_RATE, Some(SEED)).unwrap();
    let saved = grid.clone();
    let _ = grid.step();
    assert_eq!(grid, saved);
}

#[test]
fn dead_field_stays_dead() {
    for (w, h) in [(1, 1), (2, 3), (7, 5), (40, 30)] {
        let grid = Grid::blank(w, h).unwrap();
        assert_eq!(grid.step().population(), 0);
    }
}

#[test]
fn lone_cell_dies() {
    let mut grid = Grid::blank(5, 5).unwrap();
    grid.set_cell(2, 2, true);
    assert_eq!(grid.step().population(), 0);
}

#[test]
fn neighbors_wrap_across_the_seam() {
    // Three corners of the field are mutually adjacent on the torus, so
    // the fourth corner is born and the quad then behaves as a block.
    let grid = grid_from_rows(&[
        "o...o", //
        ".....",
        ".....",
        ".....",
        "o....",
    ]);
    let expected = grid_from_rows(&[
        "o...o", //
        ".....",
        ".....",
        ".....",
        "o...o",
    ]);
    let next = grid.step();
    assert_eq!(next, expected);
    assert_eq!(next.step(), expected);
}

#[test]
fn blinker_oscillates_with_period_2() {
    let horizontal = grid_from_rows(&[
        ".....", //
        ".....",
        ".ooo.",
        ".....",
        ".....",
    ]);
    let vertical = grid_from_rows(&[
        ".....", //
        "..o..",
        "..o..",
        "..o..",
        ".....",
    ]);
    assert_eq!(horizontal.step(), vertical);
    assert_eq!(vertical.step(), horizontal);
}

#[test]
fn block_is_stable() {
    let block = grid_from_rows(&[
        "....", //
        ".oo.",
        ".oo.",
        "....",
    ]);
    assert_eq!(block.step(), block);
}

#[test]
fn glider_wraps_around_the_field() {
    // A glider translates by (1, 1) every 4 generations, so on a 6x6
    // torus it crosses both seams and returns home after 24.
    let glider = grid_from_rows(&[
        ".o....", //
        "..o...",
        "ooo...",
        "......",
        "......",
        "......",
    ]);
    let shifted = grid_from_rows(&[
        "......", //
        "..o...",
        "...o..",
        ".ooo..",
        "......",
        "......",
    ]);

    let mut grid = glider.clone();
    grid.advance(4);
    assert_eq!(grid, shifted);

    grid.advance(20);
    assert_eq!(grid, glider);
}

#[test]
fn step_is_deterministic() {
    let a = Grid::random(32, 24, FILL_RATE, Some(SEED)).unwrap();
    let b = a.clone();
    assert_eq!(a.step().cells(), b.step().cells());
}

#[test]
fn advance_equals_repeated_step() {
    let start = Grid::random(16, 16, FILL_RATE, Some(SEED)).unwrap();

    let mut advanced = start.clone();
    advanced.advance(8);

    let mut stepped = start;
    for _ in 0..8 {
        stepped = stepped.step();
    }
    assert_eq!(advanced, stepped);
}

#[test]
fn extreme_probabilities_have_no_variance() {
    // Seedless on purpose: the bounds must not depend on the rng.
    for _ in 0..4 {
        assert_eq!(Grid::random(8, 8, 0.0, None).unwrap().population(), 0);
        assert_eq!(Grid::random(8, 8, 1.0, None).unwrap().population(), 64);
    }
}
