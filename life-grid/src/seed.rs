use crate::grid::{CellState, LifeGrid, Loc};
use crate::random::Random;

/// Number of live cells per column in the initial band, rounded half away
/// from zero.
pub fn band_height(height: u32, live_ratio: f64) -> u32 {
    assert!(
        live_ratio > 0.0 && live_ratio < 1.0,
        "live ratio {live_ratio} is not between 0 and 1"
    );
    (height as f64 * live_ratio).round() as u32
}

/// A fresh board with the top `band_height` rows of every column alive.
pub fn initialize_board(width: u32, height: u32, live_ratio: f64) -> LifeGrid {
    let mut grid = LifeGrid::new(width, height);
    reseed(&mut grid, live_ratio);
    grid
}

/// Clears `grid` and lays down the initial band again.
pub fn reseed(grid: &mut LifeGrid, live_ratio: f64) {
    grid.clear();
    let band = band_height(grid.height(), live_ratio);
    for x in 1..=grid.width() {
        for y in 1..=band {
            grid.set(x, y, CellState::Alive);
        }
    }
}

/// Permutes each column's interior cells with a Fisher-Yates pass, so every
/// column keeps its live count and the border is never touched.
pub fn shuffle(grid: &mut LifeGrid, rand: &mut Random) {
    for x in 1..=grid.width() {
        for j in (2..=grid.height()).rev() {
            let r = rand.next_in_range(1..=j);
            grid.swap(Loc::new(x, j), Loc::new(x, r));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_height_rounds_half_away_from_zero() {
        assert_eq!(band_height(160, 0.35), 56);
        assert_eq!(band_height(10, 0.25), 3);
        assert_eq!(band_height(10, 0.75), 8);
        assert_eq!(band_height(20, 0.35), 7);
        assert_eq!(band_height(3, 0.1), 0);
    }

    #[test]
    #[should_panic(expected = "not between 0 and 1")]
    fn ratio_of_one_panics() {
        band_height(10, 1.0);
    }

    #[test]
    #[should_panic(expected = "not between 0 and 1")]
    fn ratio_of_zero_panics() {
        initialize_board(4, 4, 0.0);
    }

    #[test]
    fn initial_band_fills_top_rows() {
        let grid = initialize_board(4, 10, 0.25);
        for x in 1..=4 {
            assert_eq!(grid.column_live_count(x), 3);
            for y in 1..=3 {
                assert_eq!(grid.get(x, y), CellState::Alive);
            }
        }
        assert_eq!(grid.row_live_count(4), 0);
        assert!(grid.border_is_dead());
    }

    #[test]
    fn reseed_replaces_previous_contents() {
        let mut grid = LifeGrid::new(5, 5);
        grid.set(3, 5, CellState::Alive);
        reseed(&mut grid, 0.4);
        assert_eq!(grid, initialize_board(5, 5, 0.4));
    }

    #[test]
    fn shuffle_preserves_column_counts() {
        let mut grid = initialize_board(40, 20, 0.35);
        let before: Vec<usize> = (1..=40).map(|x| grid.column_live_count(x)).collect();
        shuffle(&mut grid, &mut Random::from_seed(3));
        let after: Vec<usize> = (1..=40).map(|x| grid.column_live_count(x)).collect();
        assert_eq!(before, after);
        assert!(after.iter().all(|&count| count == 7));
        assert!(grid.border_is_dead());
    }

    #[test]
    fn shuffle_preserves_counts_of_arbitrary_columns() {
        let mut grid = LifeGrid::new(3, 8);
        grid.set(1, 8, CellState::Alive);
        grid.set(2, 2, CellState::Alive);
        grid.set(2, 7, CellState::Alive);
        let mut rand = Random::from_seed(5);
        for _ in 0..50 {
            shuffle(&mut grid, &mut rand);
            assert_eq!(grid.column_live_count(1), 1);
            assert_eq!(grid.column_live_count(2), 2);
            assert_eq!(grid.column_live_count(3), 0);
            assert!(grid.border_is_dead());
        }
    }

    #[test]
    fn shuffle_breaks_up_the_band() {
        let mut grid = initialize_board(40, 20, 0.35);
        shuffle(&mut grid, &mut Random::from_seed(9));
        let below_band: usize = (8..=20).map(|y| grid.row_live_count(y)).sum();
        assert!(below_band > 0);
    }

    #[test]
    fn same_seed_same_shuffle() {
        let mut first = initialize_board(20, 20, 0.35);
        let mut second = first.clone();
        shuffle(&mut first, &mut Random::from_seed(42));
        shuffle(&mut second, &mut Random::from_seed(42));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_of_single_row_board_is_noop() {
        let mut grid = LifeGrid::new(4, 1);
        grid.set(2, 1, CellState::Alive);
        let before = grid.clone();
        shuffle(&mut grid, &mut Random::from_seed(1));
        assert_eq!(grid, before);
    }
}
