mod headless;
mod loop_handler;

pub use headless::{run_headless, HeadlessReport};
pub use loop_handler::run;
