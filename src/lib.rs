//! Translate English text into every language of a language family by fanning
//! out one request per language to a machine-translation API.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod fanout;
pub mod provider;
pub mod translation;
