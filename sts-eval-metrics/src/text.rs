//! Text normalisation shared by the token-level metrics and the TF-IDF
//! preprocessing variant.

pub mod tokenizer;
pub mod porter;
pub mod stopwords;
pub mod preprocess;

pub use tokenizer::*;
pub use porter::*;
pub use stopwords::*;
pub use preprocess::*;
