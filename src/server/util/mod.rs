//! Small helpers shared by the model, data and service layers.

pub mod object_id;
pub mod validation;
