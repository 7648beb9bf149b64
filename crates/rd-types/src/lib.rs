pub mod config;
pub mod errors;
pub mod instrument;
pub mod market;
pub mod risk;

pub use config::*;
pub use errors::*;
pub use instrument::*;
pub use market::*;
pub use risk::*;
