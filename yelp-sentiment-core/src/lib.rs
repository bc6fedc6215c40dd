pub mod aggregator;
pub mod config;
pub mod lexicon;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod progress;
pub mod tokenizer;
