//! Interactive play on a line-oriented stream.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use chess_rules::{Move, PieceKind, Position, parse_coordinate_move};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::config::PlayConfig;
use crate::render::{render_board, render_history, render_moves};

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(multicall = true, rename_all = "lower")]
pub enum PlayCommand {
    /// Take back the last ply.
    #[command(alias = "u")]
    Undo,

    /// List the legal moves in coordinate form.
    #[command(alias = "m")]
    Moves,

    /// Draw the board.
    #[command(alias = "d")]
    Board,

    /// Show the moves played so far.
    History,

    /// Start a new game.
    New,

    /// Leave the session.
    #[command(aliases = ["exit", "q"])]
    Quit,

    /// A move in coordinate form, e.g. `e2e4` or `e7e8n`.
    #[command(skip)]
    Move { text: String },
}

impl FromStr for PlayCommand {
    type Err = clap::Error;

    /// A single word clap does not recognise as a command is taken to be a move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::try_parse_from(s.split_ascii_whitespace()) {
            Ok(cmd) => Ok(cmd),
            Err(e) if is_unknown_word(&e, s) => Ok(Self::Move {
                text: s.trim().to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

fn is_unknown_word(e: &clap::Error, s: &str) -> bool {
    let help = matches!(
        e.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion
    );
    !help && s.split_ascii_whitespace().count() == 1
}

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game in progress plus the settings it is drawn with.
pub struct Session {
    pos: Position,
    legal: Vec<Move>,
    config: PlayConfig,
    promotion: PieceKind,
}

impl Session {
    pub fn new(config: PlayConfig) -> anyhow::Result<Self> {
        let promotion = config.promotion_kind()?;
        let mut pos = Position::startpos();
        let legal = pos.legal_moves();
        Ok(Self {
            pos,
            legal,
            config,
            promotion,
        })
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    fn refresh(&mut self) {
        self.legal = self.pos.legal_moves();
    }

    /// Board, side to move and status, as printed after every change.
    fn write_state<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", render_board(&self.pos, &self.config.display))?;
        let status = self.pos.status();
        match status.result() {
            Some(result) => writeln!(out, "{status} ({result})")?,
            None => writeln!(out, "{} to move, {status}", self.pos.side_to_move())?,
        }
        if self.config.display.show_legal_moves && !self.legal.is_empty() {
            writeln!(out, "legal: {}", render_moves(&self.legal))?;
        }
        Ok(())
    }

    /// Execute one command, writing its output to `out`.
    pub fn handle<W: Write>(&mut self, cmd: PlayCommand, out: &mut W) -> anyhow::Result<Flow> {
        debug!(?cmd, "command");
        match cmd {
            PlayCommand::Quit => return Ok(Flow::Quit),
            PlayCommand::Board => self.write_state(out)?,
            PlayCommand::Moves => writeln!(out, "{}", render_moves(&self.legal))?,
            PlayCommand::History => {
                if self.pos.move_log().is_empty() {
                    writeln!(out, "no moves yet")?;
                } else {
                    write!(out, "{}", render_history(self.pos.move_log()))?;
                }
            }
            PlayCommand::New => {
                self.pos = Position::startpos();
                self.refresh();
                self.write_state(out)?;
            }
            PlayCommand::Undo => match self.pos.undo() {
                Some(mv) => {
                    self.refresh();
                    writeln!(out, "took back {mv}")?;
                    self.write_state(out)?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            PlayCommand::Move { text } => {
                if self.pos.status().is_over() {
                    writeln!(out, "game is over; try undo or new")?;
                    return Ok(Flow::Continue);
                }
                match parse_coordinate_move(&text, &self.legal) {
                    Ok((mv, promotion)) => {
                        let promotion = mv.is_promotion.then(|| promotion.unwrap_or(self.promotion));
                        self.pos.apply(mv, promotion);
                        self.refresh();
                        if let Some(played) = self.pos.move_log().last() {
                            writeln!(out, "{played}")?;
                        }
                        self.write_state(out)?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
        }
        Ok(Flow::Continue)
    }
}

/// Read commands from `input` until `quit` or end of input.
///
/// Returns the final position so callers can inspect the finished game.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: PlayConfig,
) -> anyhow::Result<Position> {
    let mut session = Session::new(config)?;
    session.write_state(out)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<PlayCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "{}", e.render())?;
                continue;
            }
        };
        if session.handle(cmd, out)? == Flow::Quit {
            break;
        }
    }
    Ok(session.pos)
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
