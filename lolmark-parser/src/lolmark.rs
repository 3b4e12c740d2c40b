//! Main module for lolmark library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod resolution;
pub mod testing;
pub mod token;
