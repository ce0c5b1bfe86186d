//! Request handlers

pub mod weather;
