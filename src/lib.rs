//! Indexes C function declarations and ranks them against signature queries
//! by edit distance.

pub mod ast;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod query;
pub mod serialize;
pub mod token;
