//! End-to-end tests driving the `pt` binary

mod cli_basic;
mod config_cli;
