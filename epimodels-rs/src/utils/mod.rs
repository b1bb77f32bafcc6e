mod ascii_plot;
mod cases;
pub use ascii_plot::*;
pub use cases::*;
