//! Retained-mode overlay surface.
//!
//! Content code describes what it wants on the overlay as [`Shape`]s. A canvas
//! keeps them in a display list until [`Canvas::delete_all`] and only puts them
//! on screen when [`Canvas::update`] is called.

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    },
    Point {
        at: Point,
        radius: f32,
        color: Rgba,
    },
    /// Closed outline through `points`.
    Polygon {
        points: Vec<Point>,
        width: f32,
        color: Rgba,
    },
    Text {
        at: Point,
        text: String,
        size: i32,
        color: Rgba,
    },
}

pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn draw(&mut self, shape: Shape);

    /// Forget every shape drawn so far. Takes effect on the next [`Canvas::update`].
    fn delete_all(&mut self);

    /// Render the display list.
    fn update(&mut self) -> Result<()>;

    /// Close the underlying window. The canvas is unusable afterwards.
    fn destroy(&mut self);
}

/// Display list without a window. Used when the `overlay` feature is off.
#[derive(Debug, Default)]
pub struct HeadlessCanvas {
    width: f32,
    height: f32,
    shapes: Vec<Shape>,
    frames: usize,
    destroyed: bool,
}

impl HeadlessCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Number of times [`Canvas::update`] was called.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Canvas for HeadlessCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    fn delete_all(&mut self) {
        self.shapes.clear();
    }

    fn update(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.shapes.clear();
    }
}
