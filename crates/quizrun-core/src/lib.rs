//! quizrun-core: question bank model, answer checking, and session scoring.
//!
//! This crate defines the data model, the bank parser, and the session logic
//! that the quizrun binary drives interactively.

pub mod answer;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod selection;
pub mod session;
