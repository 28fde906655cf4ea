//! Request handlers, one module per resource.

pub mod chat;
pub mod court;
pub mod ngos;
pub mod reference;
pub mod stats;
pub mod system;
