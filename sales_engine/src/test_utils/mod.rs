pub mod prepare_env;
mod static_source;

pub use static_source::{OrderRequest, StaticOrderSource};
