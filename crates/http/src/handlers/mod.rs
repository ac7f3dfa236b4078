pub mod logs;
pub mod pills;
