pub mod coverage;
pub mod mutations;
pub mod position;
pub mod tmb;
