pub mod error;
pub mod result;
pub mod snapshot;
pub mod visitor;

pub use error::*;
pub use result::*;
pub use snapshot::{read_state, write_state};
pub use visitor::*;
