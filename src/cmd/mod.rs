//! Command module structure for the gradebook CLI

pub mod record;
pub mod subjects;
pub mod util;
