#![allow(dead_code)]

pub mod config;
pub mod engine;
pub mod remote;
pub mod server;
