pub mod analyzers;
pub mod config;
pub mod fetch;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod resolver;
pub mod store;
