//! The triangle list rendered each frame

/// Default triangle capacity of a scene
pub const MAX_TRIANGLES: usize = 10;

/// A triangle primitive: three integer vertices and a palette color index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub color: u8,
}

/// A bounded, append-only collection of triangles.
///
/// Insertion order is the draw order (later triangles paint over earlier
/// ones). Adding past capacity silently drops the triangle - saturation is
/// the policy here, not an error.
pub struct Scene {
    triangles: Vec<Triangle>,
    capacity: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRIANGLES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a triangle; a no-op once the scene is full
    pub fn add_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: u8) {
        if self.triangles.len() < self.capacity {
            self.triangles.push(Triangle {
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    /// Triangles in insertion order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
