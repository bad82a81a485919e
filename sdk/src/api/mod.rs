//! Request options and wire payloads for the decision API.

mod parameters;
pub mod payload;

pub use parameters::{Mode, RequestParameters, RequestParametersBuilder, UnknownModeError};
