//! pagetabs - A draggable page-tab strip for the terminal
//!
//! This crate provides the page list controller of a form builder's page
//! navigation, with a mouse-driven TUI on top: select, insert, duplicate,
//! delete, inline rename, drag-to-reorder and a per-page context menu.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod logging;
pub mod render;
