pub mod ask;
pub mod check;
pub mod input;
pub mod matching;
pub mod templates;
pub mod trace;

#[cfg(test)]
mod ask_tests;
