//! Test suite modules

mod history;
mod library;
mod quiz_flow;
mod scoring;
