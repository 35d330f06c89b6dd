pub mod clock;
pub mod log;
pub mod string;
