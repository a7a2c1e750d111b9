use core::fmt::Write;
use nsweeper_core::{BoardSnapshot, CellView, Coord2};

const CELL_WIDTH: usize = 3;

fn glyph(snapshot: &BoardSnapshot, coords: Coord2) -> char {
    match snapshot.view_at(coords) {
        CellView::Hidden => '.',
        CellView::Revealed(0) => ' ',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Flag if snapshot.is_finished() && !snapshot.is_flag_correct(coords) => 'x',
        CellView::Flag => 'F',
        CellView::Mine if snapshot.triggered_mine == Some(coords) => '@',
        CellView::Mine => '*',
    }
}

/// Draws the grid with column and row indices, followed by a status line.
pub fn render(snapshot: &BoardSnapshot) -> String {
    let (width, height) = snapshot.size;
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = write!(out, "{:>w$}", "", w = CELL_WIDTH);
    for x in 0..width {
        let _ = write!(out, "{:>w$}", x, w = CELL_WIDTH);
    }
    out.push('\n');

    for y in 0..height {
        let _ = write!(out, "{:>w$}", y, w = CELL_WIDTH);
        for x in 0..width {
            let _ = write!(out, "{:>w$}", glyph(snapshot, (x, y)), w = CELL_WIDTH);
        }
        out.push('\n');
    }

    out.push_str(&status_line(snapshot));
    out.push('\n');
    out
}

pub fn status_line(snapshot: &BoardSnapshot) -> String {
    let counters = format!(
        "Flags left: {}  Mines: {}",
        snapshot.remaining_flags, snapshot.total_mines
    );
    if snapshot.lost {
        format!("{counters}  Boom! You lost.")
    } else if snapshot.won {
        format!("{counters}  All mines found, you won!")
    } else {
        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsweeper_core::{Board, MineLayout};

    fn board(mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords((10, 10), mines).unwrap())
    }

    fn row(rendered: &str, y: usize) -> &str {
        rendered.lines().nth(y + 1).unwrap()
    }

    #[test]
    fn renders_header_and_hidden_grid() {
        let rendered = render(&BoardSnapshot::from_board(&board(&[(0, 0)])));
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "     0  1  2  3  4  5  6  7  8  9");
        assert_eq!(lines[1], "  0  .  .  .  .  .  .  .  .  .  .");
        assert_eq!(lines[11], "Flags left: 1  Mines: 1");
    }

    #[test]
    fn renders_counts_and_flags() {
        let mut board = board(&[(1, 0), (9, 9)]);
        board.on_click(0, 0);
        board.interact_flag(1, 0);

        let rendered = render(&BoardSnapshot::from_board(&board));
        assert_eq!(row(&rendered, 0), "  0  1  F  .  .  .  .  .  .  .  .");
    }

    #[test]
    fn renders_mines_and_wrong_flags_after_loss() {
        let mut board = board(&[(1, 0), (9, 9)]);
        board.interact_flag(1, 0);
        board.interact_flag(2, 0);
        board.on_click(9, 9);

        let rendered = render(&BoardSnapshot::from_board(&board));
        assert_eq!(row(&rendered, 0), "  0  .  F  x  .  .  .  .  .  .  .");
        assert!(row(&rendered, 9).ends_with('@'));
        assert!(rendered.ends_with("Flags left: 0  Mines: 2  Boom! You lost.\n"));
    }

    #[test]
    fn status_line_reports_win() {
        let mut board = board(&[(4, 4)]);
        board.interact_flag(4, 4);

        let snapshot = BoardSnapshot::from_board(&board);
        assert_eq!(
            status_line(&snapshot),
            "Flags left: 0  Mines: 1  All mines found, you won!"
        );
    }
}
