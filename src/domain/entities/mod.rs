mod analytics;
mod appointment;
mod availability;
mod content;
mod quote;
mod session;
mod setting;

pub use analytics::*;
pub use appointment::*;
pub use availability::*;
pub use content::*;
pub use quote::*;
pub use session::*;
pub use setting::*;
