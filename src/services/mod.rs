pub mod droid;
pub mod extractor;
pub mod navigator;

pub use droid::*;
pub use extractor::*;
pub use navigator::*;
