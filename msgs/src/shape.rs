use serde::{Deserialize, Serialize};

/// Position of the shared shape, in the coordinates the clients draw with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub left: f64,
    pub top: f64,
}

impl Shape {
    pub fn new(left: f64, top: f64) -> Shape {
        Shape { left, top }
    }
}
