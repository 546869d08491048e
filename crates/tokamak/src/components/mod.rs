//! Built-in components
//!
//! Registered under [`BUILTIN_NAMESPACE`](crate::BUILTIN_NAMESPACE) and
//! resolvable by their short names (`"Head"`, `"Stylesheets"`, `"Scripts"`).

mod assets;
mod head;

pub use assets::{Scripts, Stylesheets};
pub use head::Head;
