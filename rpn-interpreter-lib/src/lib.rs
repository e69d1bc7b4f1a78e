//! Parsing and evaluation of Reverse Polish Notation arithmetic,
//! one line at a time.

pub mod driver;
pub mod interpreter;
pub mod recognizer;
