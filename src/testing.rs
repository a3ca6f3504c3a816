//! In-memory doubles for the terminal, the line discipline and the overlay.

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use crate::canvas::{Canvas, HeadlessCanvas, Shape};
use crate::error::Result;
use crate::session::LineDiscipline;
use crate::stage::Stage;
use crate::terminal::Terminal;

#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Return everything written so far and start over.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct SharedCanvas(pub Rc<RefCell<HeadlessCanvas>>);

impl SharedCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Rc::new(RefCell::new(HeadlessCanvas::new(width, height))))
    }

    pub fn shapes(&self) -> Vec<Shape> {
        self.0.borrow().shapes().to_vec()
    }

    pub fn frames(&self) -> usize {
        self.0.borrow().frames()
    }

    pub fn is_destroyed(&self) -> bool {
        self.0.borrow().is_destroyed()
    }
}

impl Canvas for SharedCanvas {
    fn width(&self) -> f32 {
        self.0.borrow().width()
    }

    fn height(&self) -> f32 {
        self.0.borrow().height()
    }

    fn draw(&mut self, shape: Shape) {
        self.0.borrow_mut().draw(shape);
    }

    fn delete_all(&mut self) {
        self.0.borrow_mut().delete_all();
    }

    fn update(&mut self) -> Result<()> {
        self.0.borrow_mut().update()
    }

    fn destroy(&mut self) {
        self.0.borrow_mut().destroy();
    }
}

#[derive(Clone, Default)]
pub struct RecordingDiscipline {
    pub calls: Rc<RefCell<Vec<&'static str>>>,
    pub fail_restore: bool,
}

impl RecordingDiscipline {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl LineDiscipline for RecordingDiscipline {
    fn make_raw(&mut self) -> io::Result<()> {
        self.calls.borrow_mut().push("make_raw");
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.calls.borrow_mut().push("restore");
        if self.fail_restore {
            return Err(io::Error::other("tcsetattr failed"));
        }
        Ok(())
    }
}

/// A stage on an 80x24 terminal fed by `input`.
pub struct Fixture {
    pub out: SharedBuffer,
    pub canvas: SharedCanvas,
    pub stage: Stage,
}

impl Fixture {
    pub fn new(input: &[u8]) -> Self {
        let out = SharedBuffer::default();
        let canvas = SharedCanvas::new(800.0, 600.0);
        let stage = Stage::new(
            Terminal::new(Box::new(out.clone())),
            Box::new(canvas.clone()),
            Box::new(Cursor::new(input.to_vec())),
            (80, 24),
        );
        Self { out, canvas, stage }
    }
}
