use super::GridError;

/// Toroidal field of Conway's Game of Life.
///
/// Cells are stored row-major; dimensions are fixed at construction.
/// [`Grid::step`] writes the next generation into a fresh field, so
/// neighbor counts always reflect the previous generation only.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a field filled with dead cells.
    pub fn blank(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Creates a field where every cell is independently live with
    /// probability `live_probability`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// Probabilities outside `[0, 1]` are rejected rather than clamped.
    /// `0.0` and `1.0` are exact: they produce the all-dead and all-live
    /// field with no randomness involved.
    pub fn random(
        width: usize,
        height: usize,
        live_probability: f64,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        use rand::{Rng, SeedableRng};

        if !(0.0..=1.0).contains(&live_probability) {
            return Err(GridError::ProbabilityOutOfRange(live_probability));
        }
        let mut grid = Self::blank(width, height)?;
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(live_probability);
        }
        Ok(grid)
    }

    /// `(width, height)` of the field.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell state at `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[x + y * self.width]
    }

    /// Overwrites the cell at `(x, y)` in the current generation.
    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[x + y * self.width] = state;
    }

    /// Row-major view of the cells, for rendering.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        // modular wrap, correct even for fields narrower than 3 cells
        let mut count = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as i64 + dx).rem_euclid(self.width as i64) as usize;
                let ny = (y as i64 + dy).rem_euclid(self.height as i64) as usize;
                count += self.get_cell(nx, ny) as usize;
            }
        }
        count
    }

    /// Computes the next generation.
    ///
    /// A dead cell with exactly 3 live neighbors is born, a live cell with
    /// 2 or 3 survives, everything else is dead. Neighbors wrap around the
    /// field edges. The result is a freshly allocated field of the same
    /// dimensions; `self` is never mutated.
    pub fn step(&self) -> Self {
        let mut cells = vec![false; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                cells[x + y * self.width] = if self.get_cell(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Replaces the field with its successor `generations` times.
    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            *self = self.step();
        }
    }
}
