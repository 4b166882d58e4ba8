pub mod generate;
pub mod refine;
pub mod session;
pub mod social;
