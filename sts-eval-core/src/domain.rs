pub mod pair;
pub mod dataset;
pub mod scores;

pub use pair::*;
pub use dataset::*;
pub use scores::*;
