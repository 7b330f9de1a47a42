//! Line-oriented host for the mini-games.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use anyhow::Result;
use arcade_core::{Cell, Position};
use arcade_engine::progress::MemoryProfileStore;
use arcade_engine::scoring::RoundResult;
use arcade_engine::session::{ChessStatus, RoundStatus, Side};
use arcade_engine::{ChessOutcome, ChessSession, GameHost, GameModal, MiniGame, TicTacToeSession, XpLedger};

/// Credits finished games to the player's profile.
pub struct TerminalHost {
    ledger: XpLedger,
    store: MemoryProfileStore,
}

impl TerminalHost {
    pub fn new(ledger: XpLedger, store: MemoryProfileStore) -> Self {
        Self { ledger, store }
    }

    pub fn print_summary(&self) {
        let profile = self.ledger.profile();
        println!(
            "{}: {} xp, level {}, {} games played",
            self.ledger.user(),
            profile.xp,
            profile.level(),
            profile.games_played
        );
    }
}

impl GameHost for TerminalHost {
    fn on_game_complete(&mut self, score: u32, xp_earned: u32) {
        println!("Final score {}, +{} xp", score, xp_earned);
        if let Err(err) = self.ledger.award(&mut self.store, xp_earned) {
            println!("Could not save your progress: {}", err);
        }
    }

    fn on_close(&mut self) {
        println!("Bye!");
    }
}

enum Input {
    Line(String),
    Eof,
}

fn prompt(text: &str) -> Result<Input> {
    print!("{} ", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(Input::Eof);
    }
    Ok(Input::Line(line.trim().to_lowercase()))
}

fn deliver_completion<G: MiniGame>(modal: &mut GameModal<G, TerminalHost>) {
    if modal.completion_pending() {
        thread::sleep(modal.completion_delay());
        modal.report_completion();
    }
}

fn parse_cell(input: &str) -> Option<Cell> {
    let digits: Vec<u8> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match digits.as_slice() {
        [row, col] => Cell::new(*row, *col).ok(),
        _ => None,
    }
}

fn tictactoe_intro(session: &TicTacToeSession) -> String {
    format!(
        "You are {}. Enter moves as `row col` (0-2). `f` finishes the session, `q` quits.",
        session.player_mark()
    )
}

fn chess_intro(session: &ChessSession) -> String {
    format!(
        "You are {:?}. Enter moves like `e2e4`, a square like `g1` to list its moves, `q` to quit.",
        session.player_color()
    )
}

pub fn play_tictactoe(mut modal: GameModal<TicTacToeSession, TerminalHost>) -> Result<TerminalHost> {
    println!("{}", tictactoe_intro(modal.game()));

    loop {
        if modal.game().is_over() {
            deliver_completion(&mut modal);
            match prompt("[r]estart or [q]uit?")? {
                Input::Line(cmd) if cmd == "r" => {
                    modal.restart();
                    continue;
                }
                _ => break,
            }
        }

        let session = modal.game();
        match (session.round_status(), session.turn()) {
            (RoundStatus::Playing, Side::Computer) => {
                let pacing = modal.pacing().clone();
                if let Some(pending) = modal.game_mut().schedule_ai_reply(&pacing) {
                    thread::sleep(pending.delay);
                    if let Err(err) = modal.game_mut().resolve_ai_reply(pending) {
                        log::debug!("computer reply dropped: {}", err);
                    }
                }
            }
            (RoundStatus::Playing, Side::Player) => {
                println!("{}", session.grid());
                match prompt("Your move:")? {
                    Input::Eof => break,
                    Input::Line(cmd) if cmd == "q" => break,
                    Input::Line(cmd) if cmd == "f" => {
                        modal.game_mut().finish();
                    }
                    Input::Line(cmd) => match parse_cell(&cmd) {
                        Some(cell) => {
                            if let Err(err) = modal.game_mut().player_move(cell) {
                                log::debug!("move ignored: {}", err);
                            }
                        }
                        None => println!("Enter a row and a column, e.g. `1 1`."),
                    },
                }
            }
            (RoundStatus::Finished(result), _) => {
                println!("{}", session.grid());
                let verdict = match result {
                    RoundResult::PlayerWin => "You win the round!",
                    RoundResult::Draw => "Draw.",
                    RoundResult::ComputerWin => "The computer wins the round.",
                };
                println!(
                    "{} Score {} ({} wins, {} draws, {} losses)",
                    verdict,
                    session.score(),
                    session.wins(),
                    session.draws(),
                    session.losses()
                );
                match prompt("[n]ext round, [f]inish or [q]uit?")? {
                    Input::Line(cmd) if cmd == "n" => modal.game_mut().next_round()?,
                    Input::Line(cmd) if cmd == "f" => {
                        modal.game_mut().finish();
                    }
                    _ => break,
                }
            }
        }
    }

    Ok(modal.close())
}

fn parse_move(input: &str) -> Option<(Position, Position)> {
    if input.len() != 4 || !input.is_ascii() {
        return None;
    }
    let from = Position::from_algebraic(&input[..2])?;
    let to = Position::from_algebraic(&input[2..])?;
    Some((from, to))
}

pub fn play_chess(mut modal: GameModal<ChessSession, TerminalHost>) -> Result<TerminalHost> {
    println!("{}", chess_intro(modal.game()));
    let mut clock = Instant::now();

    loop {
        let now = Instant::now();
        modal.game_mut().advance_clock(now - clock);
        clock = now;

        if let ChessStatus::Over(outcome) = modal.game().status() {
            println!("{}", modal.game().board());
            let verdict = match outcome {
                ChessOutcome::Won => "You captured the king!",
                ChessOutcome::Lost => "Your king has fallen.",
                ChessOutcome::Drawn => "No moves left, the game is drawn.",
            };
            println!("{}", verdict);
            deliver_completion(&mut modal);
            match prompt("[r]estart or [q]uit?")? {
                Input::Line(cmd) if cmd == "r" => {
                    modal.restart();
                    clock = Instant::now();
                    continue;
                }
                _ => break,
            }
        }

        if modal.game().turn() == Side::Computer {
            let pacing = modal.pacing().clone();
            if let Some(pending) = modal.game_mut().schedule_ai_reply(&pacing) {
                thread::sleep(pending.delay);
                match modal.game_mut().resolve_ai_reply(pending) {
                    Ok(Some(mv)) => println!("Computer plays {}", mv),
                    Ok(None) => {}
                    Err(err) => log::debug!("computer reply dropped: {}", err),
                }
            }
            continue;
        }

        let session = modal.game();
        println!("{}", session.board());
        println!(
            "Moves {}  captures {}/{}  time {}s",
            session.total_moves(),
            session.player_captures(),
            session.ai_captures(),
            session.elapsed().as_secs()
        );

        match prompt("Your move:")? {
            Input::Eof => break,
            Input::Line(cmd) if cmd == "q" => break,
            Input::Line(cmd) => {
                if let Some(square) = Position::from_algebraic(&cmd) {
                    let targets: Vec<String> = modal
                        .game()
                        .selectable_destinations(square)
                        .iter()
                        .map(|p| p.to_string())
                        .collect();
                    println!("{}: {}", square, if targets.is_empty() { "-".to_string() } else { targets.join(" ") });
                } else if let Some((from, to)) = parse_move(&cmd) {
                    if let Err(err) = modal.game_mut().player_move(from, to) {
                        log::debug!("move ignored: {}", err);
                    }
                } else {
                    println!("Enter a move like `e2e4`.");
                }
            }
        }
    }

    Ok(modal.close())
}
