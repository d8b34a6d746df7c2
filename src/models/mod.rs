pub mod marker;
pub mod poem;
pub mod sync;

pub use marker::*;
pub use poem::*;
pub use sync::*;
