pub mod csv;
pub mod rate_limiter;
pub mod utils;

pub use rate_limiter::*;
pub use utils::*;
