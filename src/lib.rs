//! Wellsim - Turn-Based Wellbeing Simulator

pub mod core;
pub mod simulation;
pub mod ui;
