use crate::app::App;

mod app;
mod components;
mod config;

fn main() {
    yew::Renderer::<App>::new().render();
}
