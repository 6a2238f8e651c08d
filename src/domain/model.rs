use crate::domain::ports::Shape;

/// A square with a fixed side length.
///
/// The side is not validated: a negative side still has a positive area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn calculate_area(&self) -> f64 {
        self.side * self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_area() {
        assert_eq!(Square::new(3.0).calculate_area(), 9.0);
        assert_eq!(Square::new(0.5).calculate_area(), 0.25);
    }

    #[test]
    fn test_zero_side() {
        assert_eq!(Square::new(0.0).calculate_area(), 0.0);
    }

    #[test]
    fn test_negative_side_is_not_rejected() {
        let square = Square::new(-2.0);
        assert_eq!(square.side(), -2.0);
        assert_eq!(square.calculate_area(), 4.0);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Square::new(1.0)), Box::new(Square::new(2.0))];
        let total: f64 = shapes.iter().map(|s| s.calculate_area()).sum();
        assert_eq!(total, 5.0);
    }
}
