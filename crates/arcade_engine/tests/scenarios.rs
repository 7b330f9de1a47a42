//! End-to-end games against the built-in opponents.

use std::time::Duration;

use arcade_core::{Board, Cell, Color, Grid, Mark, Move, Position};
use arcade_engine::config::PacingConfig;
use arcade_engine::scoring::{chess_completion, ChessStats, RoundResult};
use arcade_engine::session::{ChessStatus, RoundStatus, Side};
use arcade_engine::tictactoe_ai::choose_cell;
use arcade_engine::{
    ChessAI, ChessOutcome, ChessSession, GameCompletion, GameHost, GameModal, MiniGame, TicTacToeSession,
};
use arcade_engine::config::game_rng;

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn cell(row: u8, col: u8) -> Cell {
    Cell { row, col }
}

#[derive(Default)]
struct RecordingHost {
    completions: Vec<(u32, u32)>,
    closed: bool,
}

impl GameHost for RecordingHost {
    fn on_game_complete(&mut self, score: u32, xp_earned: u32) {
        self.completions.push((score, xp_earned));
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}

/// Corner, opposite corner, then fork. The opponent's only random choice
/// is which free corner it takes, so both branches are handled.
fn play_forced_win(session: &mut TicTacToeSession) {
    session.player_move(cell(0, 0)).unwrap();
    assert_eq!(session.ai_move().unwrap(), Some(Cell::CENTER));
    session.player_move(cell(2, 2)).unwrap();

    let corner = session.ai_move().unwrap().unwrap();
    let (block, finisher) = if corner == cell(0, 2) {
        (cell(2, 0), cell(1, 0))
    } else {
        assert_eq!(corner, cell(2, 0));
        (cell(0, 2), cell(1, 2))
    };

    session.player_move(block).unwrap();
    session.ai_move().unwrap();
    session.player_move(finisher).unwrap();
    assert_eq!(session.round_status(), RoundStatus::Finished(RoundResult::PlayerWin));
}

fn play_draw(session: &mut TicTacToeSession) {
    let script = [
        (cell(0, 0), Cell::CENTER),
        (cell(0, 1), cell(0, 2)),
        (cell(2, 0), cell(1, 0)),
        (cell(1, 2), cell(2, 2)),
    ];
    for (player, expected) in script {
        session.player_move(player).unwrap();
        assert_eq!(session.ai_move().unwrap(), Some(expected));
    }
    session.player_move(cell(2, 1)).unwrap();
    assert_eq!(session.round_status(), RoundStatus::Finished(RoundResult::Draw));
}

#[test]
fn scenario_a_blocks_the_top_row() {
    let grid = Grid::from_rows(["XX.", "...", "..."]);
    for seed in 0..10 {
        assert_eq!(choose_cell(&grid, Mark::O, &mut game_rng(Some(seed))), Some(cell(0, 2)));
    }
}

#[test]
fn scenario_b_queen_takes_hanging_rook() {
    let board = Board::from_rows(
        [
            "...qk...",
            "........",
            "........",
            "........",
            "...R....",
            "........",
            "........",
            ".......K",
        ],
        Color::Black,
    )
    .unwrap();
    let best = ChessAI::new(Color::Black).choose_move(&board).unwrap();
    assert_eq!(best.chess_move, Move::new(pos("d8"), pos("d4")));
    // 90 material after the trade, 100 capture bonus, 5 for the center
    assert_eq!(best.score, 195);
}

#[test]
fn scenario_c_par_win() {
    let stats = ChessStats { total_moves: 80, player_captures: 0, elapsed_secs: 0 };
    assert_eq!(chess_completion(ChessOutcome::Won, stats), GameCompletion { score: 1000, xp: 125 });
}

#[test]
fn scenario_d_two_wins_and_a_draw() {
    let mut modal = GameModal::open(TicTacToeSession::new(Some(11)), RecordingHost::default(), PacingConfig::instant());

    play_forced_win(modal.game_mut());
    modal.game_mut().next_round().unwrap();
    play_forced_win(modal.game_mut());
    modal.game_mut().next_round().unwrap();
    play_draw(modal.game_mut());

    assert_eq!(modal.game().score(), 230);
    let completion = modal.game_mut().finish();
    assert_eq!(completion, GameCompletion { score: 330, xp: 33 });

    assert_eq!(modal.report_completion(), Some(completion));
    assert_eq!(modal.report_completion(), None);
    let host = modal.close();
    assert_eq!(host.completions, vec![(330, 33)]);
    assert!(host.closed);
}

#[test]
fn forced_win_works_for_many_seeds() {
    for seed in 0..32 {
        let mut session = TicTacToeSession::new(Some(seed));
        play_forced_win(&mut session);
        assert_eq!(session.wins(), 1);
    }
}

#[test]
fn chess_restart_resets_counters() {
    let board = Board::from_rows(
        ["....k...", "........", "........", "...r....", "........", "........", "........", "...QK..."],
        Color::White,
    )
    .unwrap();
    let mut session = ChessSession::from_board(board.clone(), Some(3)).unwrap();
    session.advance_clock(Duration::from_secs(42));
    session.player_move(pos("d1"), pos("d5")).unwrap();
    session.ai_move().unwrap();
    assert!(session.total_moves() > 0);
    assert_eq!(session.player_captures(), 1);

    let epoch = session.epoch();
    session.restart();
    assert_eq!(session.epoch(), epoch + 1);
    assert_eq!(session.total_moves(), 0);
    assert_eq!(session.player_captures(), 0);
    assert_eq!(session.ai_captures(), 0);
    assert_eq!(session.elapsed(), Duration::ZERO);
    assert_eq!(session.status(), ChessStatus::Playing);
    assert_eq!(session.turn(), Side::Player);
    let mut expected = board;
    expected.set_current_turn(Color::White);
    assert_eq!(session.board(), &expected);
}

#[test]
fn tictactoe_restart_resets_counters_after_finish() {
    let mut session = TicTacToeSession::new(Some(4));
    play_forced_win(&mut session);
    session.finish();
    assert!(session.is_over());

    session.restart();
    assert!(!session.is_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.wins(), 0);
    assert_eq!(session.rounds_played(), 0);
    assert_eq!(session.grid(), &Grid::new());
    assert_eq!(session.completion(), None);
    assert_eq!(session.finish(), GameCompletion { score: 0, xp: 0 });
}

#[test]
fn chess_game_against_itself_terminates() {
    let mut session = ChessSession::new(Some(8));
    let player = ChessAI::new(Color::White);
    let pacing = PacingConfig::instant();

    for _ in 0..400 {
        if session.is_over() {
            break;
        }
        let mv = player.get_move(session.board()).unwrap();
        session.player_move(mv.from, mv.to).unwrap();
        if let Some(pending) = session.schedule_ai_reply(&pacing) {
            session.resolve_ai_reply(pending).unwrap();
        }
    }

    if let Some(completion) = session.completion() {
        assert!(completion.score >= 50);
    }
}

#[test]
fn modal_reports_chess_win_once() {
    let board = Board::from_rows(
        ["....k...", "....R...", "........", "........", "........", "........", "........", "....K..."],
        Color::White,
    )
    .unwrap();
    let mut modal = GameModal::open(ChessSession::from_board(board, Some(1)).unwrap(), RecordingHost::default(), PacingConfig::instant());
    assert_eq!(modal.report_completion(), None);
    modal.game_mut().player_move(pos("e7"), pos("e8")).unwrap();
    assert!(modal.completion_pending());
    let completion = modal.report_completion().unwrap();
    assert_eq!(completion, GameCompletion { score: 1805, xp: 225 });
    assert_eq!(modal.report_completion(), None);
    assert_eq!(modal.host().completions, vec![(1805, 225)]);
}
