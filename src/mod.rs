extern crate pest;
#[macro_use]
extern crate pest_derive;

mod app;
pub mod commands;
pub mod config;
mod error;
pub mod models;
pub mod parser;

pub use app::{date_parser, run_app, CommonOpts};
pub use error::{Error, FileKind};
