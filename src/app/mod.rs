// Application layer: turns parsed CLI commands into printable output.

pub mod runner;
