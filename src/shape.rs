/// Which built-in shape to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Square,
}

/// Static 2D geometry: `(x, y)` position pairs and triangle-list indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Shape {
    pub fn from_kind(kind: ShapeKind) -> Shape {
        match kind {
            ShapeKind::Triangle => Shape::triangle(),
            ShapeKind::Square => Shape::square(),
        }
    }

    pub fn triangle() -> Shape {
        Shape {
            positions: vec![
                -0.5, -0.5,
                 0.0,  0.5,
                 0.5, -0.5,
            ],
            indices: vec![0, 1, 2],
        }
    }

    pub fn square() -> Shape {
        Shape {
            positions: vec![
                -0.5, -0.5,
                 0.5, -0.5,
                 0.5,  0.5,
                -0.5,  0.5,
            ],
            indices: vec![
                0, 1, 2,
                2, 3, 0,
            ],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Byte distance between consecutive vertices.
    pub fn stride() -> usize {
        2 * ::std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(shape: &Shape) {
        assert_eq!(shape.positions.len() % 2, 0);
        assert_eq!(shape.indices.len() % 3, 0);
        for &i in &shape.indices {
            assert!((i as usize) < shape.vertex_count(), "index {} out of range", i);
        }
    }

    #[test]
    fn triangle_is_well_formed() {
        let shape = Shape::triangle();
        assert_well_formed(&shape);
        assert_eq!(shape.vertex_count(), 3);
        assert_eq!(shape.triangle_count(), 1);
    }

    #[test]
    fn square_is_two_triangles_over_four_vertices() {
        let shape = Shape::square();
        assert_well_formed(&shape);
        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.triangle_count(), 2);
    }

    #[test]
    fn square_corners_stay_in_clip_space() {
        for v in Shape::square().positions {
            assert!(v >= -1.0 && v <= 1.0);
        }
    }

    #[test]
    fn from_kind_selects_shape() {
        assert_eq!(Shape::from_kind(ShapeKind::Triangle), Shape::triangle());
        assert_eq!(Shape::from_kind(ShapeKind::Square), Shape::square());
    }

    #[test]
    fn stride_is_two_floats() {
        assert_eq!(Shape::stride(), 8);
    }
}
