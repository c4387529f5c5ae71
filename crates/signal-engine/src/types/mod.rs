pub mod indicator;
pub mod market_data;
pub mod signal;

pub use indicator::*;
pub use market_data::*;
pub use signal::*;
