#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    logic::{Mark, Winner},
    player::{Command, Player},
    session::{GameSession, GameState, MoveStatus},
    store::GameStore,
    ui::print_game,
};

/// Drives a [`GameSession`] with the players sitting at this terminal.
///
/// Turns belonging to a mark without a local player are waited out by
/// listening for store snapshots, so two nodes sharing one store play
/// against each other.
pub struct PlayerNode<S: GameStore> {
    session: GameSession<S>,
    players: Vec<(Mark, Box<dyn Player>)>,
    display: bool,
    moves: usize,
}

impl<S: GameStore> PlayerNode<S> {
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            session,
            players: Vec::new(),
            display: false,
            moves: 0,
        }
    }

    /// Seat `player` for `mark`, replacing anyone already there.
    pub fn with_player(mut self, mark: Mark, player: Box<dyn Player>) -> Self {
        self.players.retain(|(m, _)| *m != mark);
        self.players.push((mark, player));
        self
    }

    /// Print the board and status after every change.
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<S> {
        &mut self.session
    }

    /// Moves this node wrote since the last reset.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Play until a player quits or the game is decided and nobody asks for
    /// another round. Returns the last outcome seen.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Option<Winner>> {
        let mut shown: Option<GameState> = None;
        loop {
            self.session.sync()?;
            let state = self.session.state();
            let local = self.players.iter().any(|(m, _)| *m == state.turn);
            if self.display && shown != Some(state) {
                print_game(&state);
                if !local && !state.is_over() {
                    std::println!("Waiting for {}...", state.turn);
                }
                shown = Some(state);
            }

            if let Some(winner) = state.winner {
                if self.rematch()? {
                    self.session.reset().await?;
                    self.moves = 0;
                    continue;
                }
                return Ok(Some(winner));
            }

            if !local {
                self.session.next_change().await?;
                continue;
            }

            let command = match self.players.iter_mut().find(|(m, _)| *m == state.turn) {
                Some((_, player)) => player.select_command(rng, &state.board, state.turn)?,
                None => continue,
            };
            match command {
                Command::Move(r, c) => match self.session.handle_click(r, c).await? {
                    MoveStatus::Applied => self.moves += 1,
                    MoveStatus::Ignored => log::debug!("move ({}, {}) ignored", r, c),
                    MoveStatus::Conflict => {
                        if self.display {
                            std::println!("The other player moved first.");
                        }
                    }
                },
                Command::Reset => {
                    self.session.reset().await?;
                    self.moves = 0;
                }
                Command::Quit => return Ok(state.winner),
            }
        }
    }

    /// The first seated player decides whether another game starts.
    fn rematch(&mut self) -> anyhow::Result<bool> {
        match self.players.first_mut() {
            Some((_, player)) => Ok(player.after_game()? == Command::Reset),
            None => Ok(false),
        }
    }
}
