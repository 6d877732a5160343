//! Integration test suite
//!
//! Each module exercises one seam of the game through its public API.

mod game_flow;
mod practice;
