mod compartmental;
mod model;
pub use compartmental::*;
pub use model::*;
