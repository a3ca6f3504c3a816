use raylib::ffi;
use raylib::prelude::*;

use crate::canvas::{Canvas, Point, Rgba, Shape};
use crate::constants::*;
use crate::error::{Error, Result};

/// Transparent, borderless, always-on-top raylib window covering the monitor
/// minus the `PAD_*` margins.
pub struct OverlayCanvas {
    window: Option<(RaylibHandle, RaylibThread)>,
    width: f32,
    height: f32,
    shapes: Vec<Shape>,
}

impl OverlayCanvas {
    pub fn open() -> Result<Self> {
        // Window flags must be set before the window exists; raylib ORs them
        // with whatever the builder adds.
        unsafe {
            ffi::SetTraceLogLevel(ffi::TraceLogLevel::LOG_ERROR as i32);
            ffi::SetConfigFlags(
                ffi::ConfigFlags::FLAG_WINDOW_UNDECORATED as u32
                    | ffi::ConfigFlags::FLAG_WINDOW_TOPMOST as u32
                    | ffi::ConfigFlags::FLAG_WINDOW_TRANSPARENT as u32
                    | ffi::ConfigFlags::FLAG_WINDOW_UNFOCUSED as u32
                    | ffi::ConfigFlags::FLAG_WINDOW_MOUSE_PASSTHROUGH as u32,
            );
        }

        let (rl, thread) = raylib::init()
            .size(640, 480)
            .title("stagelight")
            .build();

        let (screen_width, screen_height) = unsafe {
            let monitor = ffi::GetCurrentMonitor();
            (ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor))
        };
        let width = screen_width - PAD_L - PAD_R;
        let height = screen_height - PAD_T - PAD_B;
        if width <= 0 || height <= 0 {
            return Err(Error::Overlay(format!(
                "monitor {}x{} is smaller than the overlay margins",
                screen_width, screen_height
            )));
        }

        unsafe {
            ffi::SetWindowSize(width, height);
            ffi::SetWindowPosition(PAD_L, PAD_T);
        }
        log::info!("overlay window {}x{} at +{}+{}", width, height, PAD_L, PAD_T);

        Ok(Self {
            window: Some((rl, thread)),
            width: width as f32,
            height: height as f32,
            shapes: Vec::new(),
        })
    }
}

fn vector(p: Point) -> Vector2 {
    Vector2::new(p.x, p.y)
}

fn color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn draw_shape(d: &mut RaylibDrawHandle, shape: &Shape) {
    match shape {
        Shape::Line { from, to, width, color: c } => {
            d.draw_line_ex(vector(*from), vector(*to), *width, color(*c));
        }
        Shape::Point { at, radius, color: c } => {
            d.draw_circle_v(vector(*at), *radius, color(*c));
        }
        Shape::Polygon { points, width, color: c } => {
            if points.len() < 2 {
                return;
            }
            // Each vertex joined to the next, last one back to the first
            for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
                d.draw_line_ex(vector(*a), vector(*b), *width, color(*c));
            }
        }
        Shape::Text { at, text, size, color: c } => {
            d.draw_text(text, at.x as i32, at.y as i32, *size, color(*c));
        }
    }
}

impl Canvas for OverlayCanvas {
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
        let Some((rl, thread)) = self.window.as_mut() else {
            return Err(Error::Overlay("window already destroyed".to_string()));
        };

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLANK);
        for shape in &self.shapes {
            draw_shape(&mut d, shape);
        }
        Ok(())
    }

    fn destroy(&mut self) {
        let Some(window) = self.window.take() else {
            return;
        };
        drop(window);
        unsafe {
            if ffi::IsWindowReady() {
                ffi::CloseWindow();
            }
        }
        self.shapes.clear();
        log::info!("overlay window closed");
    }
}
