pub mod error;
pub mod geom;
pub mod layout;
pub mod model;
pub mod report;
pub mod request;
pub mod solid;

pub use error::{ProjectionError, Result};
