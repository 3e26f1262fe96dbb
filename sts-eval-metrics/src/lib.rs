pub mod text;
pub mod calculators;
pub mod vectorizer;
pub mod aggregators;
pub mod statistical;

pub use calculators::*;
pub use vectorizer::*;
pub use aggregators::*;
pub use statistical::*;
