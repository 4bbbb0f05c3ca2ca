mod app;
mod charts;
mod components;
mod controller;
mod render;
mod services;
mod state;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
