//! Advent of Code 2015

pub mod day_4;
pub mod day_9;
