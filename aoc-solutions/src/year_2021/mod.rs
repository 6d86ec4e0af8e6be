//! Advent of Code 2021

pub mod day_6;
pub mod day_9;
pub mod day_11;
pub mod day_12;
pub mod day_15;
