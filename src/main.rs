#![allow(warnings)]
//! Tracker Dashboard Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod forms;
mod logger;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = logger::init(log::Level::Debug);
    mount_to_body(App);
}
