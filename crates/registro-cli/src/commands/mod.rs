//! Command handlers for the Registro CLI

pub mod category;
pub mod config;
pub mod document;
pub mod status;
