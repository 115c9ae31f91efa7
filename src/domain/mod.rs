pub mod entities;
pub mod errors;
pub mod naming;
pub mod validation;
pub mod value_objects;
