/// Anything with a planar area.
pub trait Shape {
    fn calculate_area(&self) -> f64;
}

/// Source of "now" for date arithmetic.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}
