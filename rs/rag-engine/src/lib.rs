pub mod error;
pub mod run;
