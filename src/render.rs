use crate::sprite::Sprite;

// ==================== Geometry ====================
// top left is origin, integer pixels
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(position: Point, size: Size) -> Self {
        Rect { position, size }
    }

    /// Rect anchored at the origin covering `size`
    pub fn covering(size: Size) -> Self {
        Rect::new(Point::default(), size)
    }
}

// ==================== Surface ====================
/// Drawable layer the simulation renders into
/// - browser : `engine::CanvasSurface` over a 2d context
/// - tests   : any recorder implementing the two calls
pub trait Surface {
    fn clear(&mut self, rect: &Rect);
    fn draw_sprite(&mut self, sprite: &Sprite, position: Point);
}
