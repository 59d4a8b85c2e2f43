// What integration tests (and anyone embedding the engine) can reach.
// App, Cli, and the ratatui widget stay in the binary.
pub mod config;
pub mod engine;
pub mod input;
pub mod runtime;
pub mod words;
