#![allow(warnings)]
//! Event Checklist Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod commands;
mod checklist;
mod controller;
mod explore;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
