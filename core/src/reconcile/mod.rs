pub mod assemble;
pub mod field;
pub mod model;
pub mod pipeline;
pub mod reference_set;
pub mod scanner;
pub mod session;
