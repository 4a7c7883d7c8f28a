mod components;
mod config;
mod controller;
mod dom;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
