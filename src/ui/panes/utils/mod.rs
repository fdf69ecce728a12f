pub mod formatting;
pub mod rendering;

pub(crate) use formatting::*;
pub(crate) use rendering::*;
