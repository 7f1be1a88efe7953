use grid_of_life::{Error as GridError, Grid};
use std::error::Error;

fn grid_from(rows: &[&str]) -> Result<Grid, Box<dyn Error>> {
    let mut grid = Grid::new(rows.len(), rows[0].len())?;
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            grid.set(r, c, ch == 'o')?;
        }
    }
    Ok(grid)
}

fn render(grid: &Grid) -> Vec<String> {
    (0..grid.rows())
        .map(|r| {
            (0..grid.columns())
                .map(|c| if grid.get(r, c).unwrap() { 'o' } else { '.' })
                .collect()
        })
        .collect()
}

/// Counts live neighbours by scanning a plain copy of the board.
fn naive_count(board: &[Vec<bool>], r: usize, c: usize) -> u8 {
    let mut count = 0;
    for nr in r.saturating_sub(1)..=(r + 1).min(board.len() - 1) {
        for nc in c.saturating_sub(1)..=(c + 1).min(board[0].len() - 1) {
            if (nr, nc) != (r, c) && board[nr][nc] {
                count += 1;
            }
        }
    }
    count
}

fn board_of(grid: &Grid) -> Vec<Vec<bool>> {
    (0..grid.rows())
        .map(|r| (0..grid.columns()).map(|c| grid.get(r, c).unwrap()).collect())
        .collect()
}

#[test]
fn neighbour_counts_use_previous_generation() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(5, 7)?;
    for r in 0..5 {
        for c in 0..7 {
            grid.set(r, c, (r * 3 + c * 5) % 4 == 0)?;
        }
    }
    let before = board_of(&grid);
    grid.advance_generation();
    for r in 0..5 {
        for c in 0..7 {
            let cell = grid.cell(r, c)?;
            assert_eq!(cell.neighbor_count(), naive_count(&before, r, c));
            assert_eq!(cell.prev_alive(), before[r][c]);
            assert_eq!(cell.is_alive(), grid.get(r, c)?);
        }
    }
    Ok(())
}

#[test]
fn every_three_by_three_board() -> Result<(), Box<dyn Error>> {
    for mask in 0u32..512 {
        let mut grid = Grid::new(3, 3)?;
        for bit in 0..9 {
            grid.set(bit / 3, bit % 3, mask & (1 << bit) != 0)?;
        }
        let before = board_of(&grid);
        grid.advance_generation();
        for r in 0..3 {
            for c in 0..3 {
                let n = naive_count(&before, r, c);
                let expected = if before[r][c] { n == 2 || n == 3 } else { n == 3 };
                assert_eq!(grid.get(r, c)?, expected, "mask {mask:#011b} at ({r}, {c})");
            }
        }
    }
    Ok(())
}

#[test]
fn hand_computed_five_by_five() -> Result<(), Box<dyn Error>> {
    let mut grid = grid_from(&[
        "oo...",
        "o....",
        ".....",
        "...oo",
        "...oo",
    ])?;
    grid.advance_generation();
    assert_eq!(
        render(&grid),
        ["oo...", "oo...", ".....", "...oo", "...oo"]
    );

    let mut grid = grid_from(&[
        "o...o",
        ".....",
        "..o..",
        ".....",
        "o...o",
    ])?;
    grid.advance_generation();
    assert_eq!(grid.population(), 0);
    Ok(())
}

#[test]
fn block_is_still() -> Result<(), Box<dyn Error>> {
    let mut grid = grid_from(&[
        "......",
        "......",
        "..oo..",
        "..oo..",
        "......",
        "......",
    ])?;
    let start = render(&grid);
    for _ in 0..10 {
        grid.advance_generation();
        assert_eq!(render(&grid), start);
    }
    Ok(())
}

#[test]
fn blinker_has_period_two() -> Result<(), Box<dyn Error>> {
    let mut grid = grid_from(&[
        ".....",
        ".....",
        ".ooo.",
        ".....",
        ".....",
    ])?;
    let horizontal = render(&grid);
    grid.advance_generation();
    assert_eq!(
        render(&grid),
        [".....", "..o..", "..o..", "..o..", "....."]
    );
    grid.advance_generation();
    assert_eq!(render(&grid), horizontal);
    Ok(())
}

#[test]
fn blinker_on_the_edge_is_clipped() -> Result<(), Box<dyn Error>> {
    // Without wraparound the vertical phase loses its top cell.
    let mut grid = grid_from(&[".ooo.", ".....", "....."])?;
    grid.advance_generation();
    assert_eq!(render(&grid), ["..o..", "..o..", "....."]);
    Ok(())
}

#[test]
fn toggle_twice_restores_cell() -> Result<(), Box<dyn Error>> {
    let mut grid = grid_from(&["o.", ".o"])?;
    for r in 0..2 {
        for c in 0..2 {
            let before = grid.get(r, c)?;
            grid.toggle(r, c)?;
            assert_eq!(grid.get(r, c)?, !before);
            grid.toggle(r, c)?;
            assert_eq!(grid.get(r, c)?, before);
        }
    }
    Ok(())
}

#[test]
fn out_of_range_access_fails() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(4, 6)?;
    let expected = GridError::IndexOutOfRange {
        row: 4,
        col: 0,
        rows: 4,
        columns: 6,
    };
    assert_eq!(grid.get(4, 0), Err(expected));
    assert_eq!(grid.toggle(4, 0), Err(expected));
    assert!(grid.get(0, 6).is_err());
    assert!(grid.neighbor_count(10, 10).is_err());
    assert!(expected.to_string().contains("(4, 0)"));
    Ok(())
}
