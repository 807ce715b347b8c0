#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod logic;
pub mod player;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod document;
#[cfg(feature = "std")]
pub mod logging;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod ui;

pub use logic::*;
pub use player::{AiPlayer, Command, Player};
#[cfg(feature = "std")]
pub use document::{GameDocument, GameUpdate, Players};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{CliPlayer, PlayerNode};
#[cfg(feature = "std")]
pub use session::{GameSession, GameState, MoveStatus};
#[cfg(feature = "std")]
pub use store::{
    file::JsonFileStore, in_memory::InMemoryStore, GameStore, StoreError, Subscription,
};
#[cfg(feature = "std")]
pub use ui::{print_game, render_board, status_text};
