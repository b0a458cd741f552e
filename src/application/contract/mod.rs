//! Contract resolution: class lookup and per-call contract handles.

mod handle;
mod resolver;

pub use handle::{ContractHandle, ALLOWANCE, GET_APPROVED};
pub use resolver::ContractResolver;
