pub mod app;
pub mod floating_window;

pub use app::App;
