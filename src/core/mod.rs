pub mod age;
pub mod clock;
