pub mod appointment_lifecycle;
pub mod availability_calculator;
pub mod reference_number;

pub use appointment_lifecycle::*;
pub use availability_calculator::*;
pub use reference_number::*;
