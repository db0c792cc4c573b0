//! Record module for flattening launch actions into directives

pub mod generator;
pub mod types;

pub use generator::CommandGenerator;
pub use types::{DirectiveKind, DirectiveRecord, LaunchRecord};
