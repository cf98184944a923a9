//! Conway's Game of Life on a bounded board.
//!
//! A [`Grid`] is one generation. [`Grid::step`] and [`Grid::advance`] derive
//! later generations without touching the input, and [`find_final_state`]
//! runs a board until it reaches a fixed point or a cycle.

pub mod config;
mod error;
pub mod grid;
pub mod logging;
pub mod rule;
pub mod search;
pub mod snapshot;


pub use crate::{
    error::{Error, Result},
    grid::Grid,
    search::{FinalState, find_final_state, settle},
    snapshot::{BoardState, Snapshot},
};
