pub mod answer;
pub mod health;

pub use answer::*;
pub use health::*;
