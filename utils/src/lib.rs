pub mod query;
pub mod surf_logging;
