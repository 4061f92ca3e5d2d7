//! Console front end: play Isolation against the engine.
//!
//! The terminal reads moves as `row col` (also `row,col` or `(row, col)`).
//! `-1 -1` or `resign` gives the game up.
//!
//! ## Example
//!
//! ```ignore
//! use isolation::game::GameConfig;
//! use isolation::terminal::Terminal;
//! Terminal::stdio().run(GameConfig::default(), None)?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::Player;
use crate::game::{Game, GameConfig};
use crate::position::{Position, parse_coord, str_coord};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Move(Position),
    Surrender,
}

/// Parse a move or a resignation; `None` if the line is neither.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("resign") {
        return Some(Input::Surrender);
    }
    let compact: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | ','))
        .collect();
    if compact == "-1-1" {
        return Some(Input::Surrender);
    }
    parse_coord(line).map(Input::Move)
}

/// Interactive session over any line-based input and output.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play games until the user declines a rematch or input ends.
    ///
    /// With `human_first` unset the user is asked before every game.
    pub fn run(&mut self, config: GameConfig, human_first: Option<bool>) -> Result<()> {
        let mut game = Game::new(config);

        loop {
            self.print_start_game()?;

            let human_first = match human_first {
                Some(answer) => answer,
                None => match self.ask_yes_no("You go first (Y/N)? ")? {
                    Some(answer) => answer,
                    None => break,
                },
            };
            let human = if human_first { Player::First } else { Player::Second };

            if !self.play_game(&mut game, human)? {
                break;
            }
            if let Some(winner) = game.winner() {
                let name = if winner == human { "YOU" } else { "COMPUTER" };
                writeln!(self.output, "The winner is {name}!\n")?;
            }

            game.reset();
            if self.ask_yes_no("\nPlay again (Y/N)? ")? != Some(true) {
                break;
            }
        }

        writeln!(self.output, "\n===================== GOOD GAME! BYE! =====================\n")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns `false` if input ended before the game did.
    fn play_game(&mut self, game: &mut Game, human: Player) -> Result<bool> {
        let size = game.config().size;
        writeln!(
            self.output,
            "You play {human} on a {size}x{size} board; the computer plays {}.\n",
            human.opponent()
        )?;
        writeln!(self.output, "{}", game.board())?;

        while !game.is_over() {
            if game.to_move() == human {
                if game.declare_if_stuck() {
                    writeln!(self.output, "You have no moves left.")?;
                    break;
                }
                if !self.human_turn(game)? {
                    return Ok(false);
                }
            } else {
                writeln!(self.output, "Computer is thinking (depth {})...", game.search_depth())?;
                match game.play_engine() {
                    Some(mv) => writeln!(self.output, "Computer moves to {}", str_coord(mv))?,
                    None => writeln!(self.output, "Computer gives up.")?,
                }
            }
            if !game.is_over() {
                writeln!(self.output, "{}", game.board())?;
            }
        }
        Ok(true)
    }

    /// Prompt until a legal move or a resignation is entered.
    fn human_turn(&mut self, game: &mut Game) -> Result<bool> {
        loop {
            write!(self.output, "Enter your move here: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match parse_input(&line) {
                None => writeln!(self.output, "Invalid move format: (row, col)")?,
                Some(Input::Surrender) => {
                    game.surrender();
                    return Ok(true);
                }
                Some(Input::Move(mv)) => match game.play(mv) {
                    Ok(()) => return Ok(true),
                    Err(e) => writeln!(self.output, "Illegitimate move! {e}")?,
                },
            }
        }
    }

    fn print_start_game(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "***********************************************************")?;
        writeln!(self.output, "*                 GAME ISOLATION STARTS                   *")?;
        writeln!(self.output, "***********************************************************")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// `None` at end of input.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|answer| {
            let answer = answer.trim().to_lowercase();
            answer == "y" || answer == "yes"
        }))
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(config: GameConfig, human_first: Option<bool>, script: &str) -> String {
        let mut term = Terminal::new(script.as_bytes(), Vec::new());
        term.run(config, human_first).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    fn small() -> GameConfig {
        GameConfig {
            size: 4,
            max_depth: Some(2),
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("2 3"), Some(Input::Move(Position::new(2, 3))));
        assert_eq!(parse_input("(2, 3)"), Some(Input::Move(Position::new(2, 3))));
        assert_eq!(parse_input("-1 -1"), Some(Input::Surrender));
        assert_eq!(parse_input("(-1, -1)"), Some(Input::Surrender));
        assert_eq!(parse_input("RESIGN"), Some(Input::Surrender));
        assert_eq!(parse_input("north"), None);
        assert_eq!(parse_input("-1 2"), None);
    }

    #[test]
    fn test_surrender_hands_engine_the_win() {
        let out = session(small(), None, "y\n-1 -1\nn\n");
        assert!(out.contains("GAME ISOLATION STARTS"));
        assert!(out.contains("You go first (Y/N)?"));
        assert!(out.contains("You play first player (x) on a 4x4 board"));
        assert!(out.contains("The winner is COMPUTER!"));
        assert!(out.contains("GOOD GAME! BYE!"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        // The engine opens; (0, 0) is its start corner and never legal.
        let out = session(small(), Some(false), "hello\n0 0\n");
        assert!(out.contains("Computer moves to ("));
        assert!(out.contains("Invalid move format: (row, col)"));
        assert!(out.contains("Illegitimate move! (0, 0) has already been visited"));
        // Input ran out mid-game; the session still closes cleanly.
        assert!(out.contains("GOOD GAME! BYE!"));
        assert!(!out.contains("The winner is"));
    }

    #[test]
    fn test_rematch_asks_again() {
        let out = session(small(), None, "y\nresign\ny\ny\nresign\nn\n");
        assert_eq!(out.matches("GAME ISOLATION STARTS").count(), 2);
        assert_eq!(out.matches("The winner is COMPUTER!").count(), 2);
    }
}
