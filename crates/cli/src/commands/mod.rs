pub mod catalog;
pub mod current;
pub mod lookup;

pub use catalog::*;
pub use current::*;
pub use lookup::*;
