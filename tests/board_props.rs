use proptest::prelude::*;
use tictactoe::{Board, Cell, FlatRecord, Mark, Winner, BOARD_SIZE, LINES};

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))]
}

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell()).prop_map(|c| {
        Board::from_rows([[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]])
    })
}

fn uniform_line(board: &Board) -> Option<Mark> {
    let rows = board.rows();
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(r, c)| rows[r][c]);
        match a {
            Some(m) if b == Some(m) && c == Some(m) => Some(m),
            _ => None,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn move_on_empty_cell_sets_only_that_cell(
        board in any_board(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        m in mark(),
    ) {
        prop_assume!(board.get(row, col).unwrap().is_none());
        let res = board.make_move(row, col, m).unwrap();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let expected = if (r, c) == (row, col) { Some(m) } else { board.get(r, c).unwrap() };
                prop_assert_eq!(res.board.get(r, c).unwrap(), expected);
            }
        }
        prop_assert_eq!(res.winner, res.board.winner());
    }

    #[test]
    fn make_move_never_changes_input(
        board in any_board(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        m in mark(),
    ) {
        let snapshot = board;
        let _ = board.make_move(row, col, m).unwrap();
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn move_on_filled_cell_is_noop(
        board in any_board(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        m in mark(),
    ) {
        prop_assume!(board.get(row, col).unwrap().is_some());
        let res = board.make_move(row, col, m).unwrap();
        prop_assert_eq!(res.board, board);
        prop_assert_eq!(res.winner, board.winner());
    }

    #[test]
    fn record_roundtrip(board in any_board()) {
        let record = FlatRecord::from(&board);
        prop_assert_eq!(record.len(), 9);
        prop_assert_eq!(Board::try_from(&record).unwrap(), board);
    }

    #[test]
    fn winner_matches_lines(board in any_board()) {
        match (board.winner(), uniform_line(&board)) {
            (Some(Winner::Mark(m)), Some(first)) => prop_assert_eq!(m, first),
            (Some(Winner::Draw), None) => prop_assert!(board.is_full()),
            (None, None) => prop_assert!(!board.is_full()),
            (got, line) => prop_assert!(false, "winner {:?} but first line {:?}", got, line),
        }
    }

    #[test]
    fn board_text_roundtrip(board in any_board()) {
        prop_assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }
}
