mod display;
mod report;
mod run;

pub use display::display;
pub use report::report;
pub use run::{fetch, run};
