//! Typology content and data loaders.
//!
//! This crate provides the built-in quiz question banks and the loaders that
//! read custom banks, selections, edits, answers and configuration from disk.
//!
//! # Modules
//!
//! - [`banks`]: built-in quick and deep question banks
//! - [`loaders`]: RON/TOML file loaders (requires `loaders` feature)

pub mod banks;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use banks::{deep_bank, quick_bank, standard_bank};

#[cfg(feature = "loaders")]
pub use loaders::{
    AnswersLoader, ConfigLoader, ContentConfig, ContentFactory, EditsLoader, LoadResult,
    QuizBankLoader, SelectionLoader,
};
