//! Dioxus web front-end for the folio portfolio site.
//!
//! Domain rules live in `folio-core`; this crate wires them to the browser:
//! routing, theme context, the canvas and SVG effects, and the GitHub
//! gallery fetch.

pub mod app;
pub mod browser;
pub mod components;
pub mod fetch;
pub mod pages;
pub mod routes;
pub mod site;
pub mod storage;
pub mod theme;

pub use app::App;
