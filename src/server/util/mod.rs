pub mod code;
pub mod deadline;
