pub mod stdio;
pub mod tooling;
pub mod tools;
