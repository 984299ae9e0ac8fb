//! Core of a desktop clicker game.
//!
//! Score accumulates from manual clicks and from an automatic timer whose
//! per-tick income and period both swing with a random fluctuation factor;
//! one purchasable upgrade trades score for a permanently higher automatic
//! income at a doubling cost. The score survives restarts through a
//! plain-text save file, and an optional stats collaborator receives
//! best-effort score and achievement reports.
//!
//! The library holds everything the terminal front end in `main.rs` and the
//! integration tests share: state and rules ([`game`]), the self-adjusting
//! tick scheduler ([`time`]) and the stats capability ([`stats`]).

pub mod game;
pub mod stats;
pub mod time;
pub mod tui;
