// Domain layer: the entity model, the arena that owns it and the capability traits.

pub mod model;
pub mod organization;
pub mod ports;
pub mod report;
