//! Terminal-style portfolio (Rust + Yew + WASM).

mod app;
mod components;
mod config;
mod fetch;
mod github;
mod resume;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
