#![allow(warnings)]
//! JOLUV Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod pages;
mod records;
mod sample;
mod session;
mod store;
mod tracks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
