//! Fieldstone Admin, a Dioxus fullstack dashboard.
//!
//! Covers the SaaS discovery review workflow plus the surrounding admin
//! pages (clients, leads, categories, contracts). All data comes from the
//! existing GraphQL API; this app holds no database of its own.
//!
//! Run with `dx serve --features web,server` during development, build with
//! `dx build --release --features web,server`.

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod graphql;
mod pages;
mod routes;
mod state;
mod types;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dioxus::launch(app::App);
}
