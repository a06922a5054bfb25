//! Text rendering for the interactive loop

pub mod display;
