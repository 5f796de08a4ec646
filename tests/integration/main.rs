mod common;

mod command;
mod config;
mod views;
