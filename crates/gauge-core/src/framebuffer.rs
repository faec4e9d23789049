//! In-memory monochrome framebuffer with change tracking.
//!
//! Mirrors the SSD1306 graphics RAM layout: 8 pages of 128 columns, one byte
//! per column per page, least significant bit at the top. Drawing targets
//! the back buffer; [`Surface::flush`] copies the changed region into the
//! front buffer, which stands in for the panel's own memory.
//!
//! The simulator renders the front buffer and tests inspect both.

use core::convert::Infallible;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::display::Surface;
use crate::layout::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

const WIDTH: usize = DISPLAY_WIDTH_PX as usize;
const HEIGHT: usize = DISPLAY_HEIGHT_PX as usize;
const PAGES: usize = HEIGHT / 8;

/// Bytes in one full buffer (128 x 64 / 8 = 1024).
pub const BUFFER_LEN: usize = WIDTH * PAGES;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }
}

#[inline]
fn locate(x: usize, y: usize) -> (usize, u8) {
    ((y / 8) * WIDTH + x, 1 << (y % 8))
}

/// Double-buffered 128x64 monochrome surface.
pub struct FrameBuffer {
    back: [u8; BUFFER_LEN],
    front: [u8; BUFFER_LEN],
    dirty: Option<DirtyRect>,
    flushes: u32,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// A blank framebuffer with every pixel off.
    pub const fn new() -> Self {
        Self {
            back: [0; BUFFER_LEN],
            front: [0; BUFFER_LEN],
            dirty: None,
            flushes: 0,
        }
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: BinaryColor) {
        let (idx, mask) = locate(x, y);
        let byte = match color {
            BinaryColor::On => self.back[idx] | mask,
            BinaryColor::Off => self.back[idx] & !mask,
        };
        if byte != self.back[idx] {
            self.back[idx] = byte;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Color of a pixel in the back buffer. Out-of-bounds reads are `Off`.
    pub fn pixel(&self, x: i32, y: i32) -> BinaryColor {
        Self::read(&self.back, x, y)
    }

    /// Color of a pixel as last flushed to the panel.
    pub fn shown_pixel(&self, x: i32, y: i32) -> BinaryColor {
        Self::read(&self.front, x, y)
    }

    fn read(buffer: &[u8; BUFFER_LEN], x: i32, y: i32) -> BinaryColor {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return BinaryColor::Off;
        }
        let (idx, mask) = locate(x as usize, y as usize);
        BinaryColor::from(buffer[idx] & mask != 0)
    }

    /// Back buffer bytes in panel page order.
    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.back
    }

    /// Front buffer bytes, i.e. what the panel currently shows.
    pub fn shown_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.front
    }

    /// Number of flushes since creation.
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    /// Draw the front buffer onto another target, e.g. a simulator window.
    pub fn draw_shown<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let area = Rectangle::new(Point::zero(), self.size());
        let front = &self.front;
        let colors = (0..HEIGHT).flat_map(move |y| {
            (0..WIDTH).map(move |x| {
                let (idx, mask) = locate(x, y);
                BinaryColor::from(front[idx] & mask != 0)
            })
        });
        target.fill_contiguous(&area, colors)
    }
}

impl Surface for FrameBuffer {
    type FlushError = Infallible;

    /// Copy the dirty region to the front buffer. Whole pages are copied
    /// because the panel addresses memory a page at a time.
    fn flush(&mut self) -> Result<(), Infallible> {
        self.flushes += 1;

        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            rect.max_x - rect.min_x + 1,
            rect.max_y - rect.min_y + 1,
            rect.min_x,
            rect.min_y
        );

        for page in rect.min_y / 8..=rect.max_y / 8 {
            let start = page * WIDTH + rect.min_x;
            let end = page * WIDTH + rect.max_x + 1;
            self.front[start..end].copy_from_slice(&self.back[start..end]);
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout() {
        let mut fb = FrameBuffer::new();
        Pixel(Point::new(3, 9), BinaryColor::On).draw(&mut fb).ok();

        // y = 9 lives in page 1, bit 1
        assert_eq!(fb.as_bytes()[WIDTH + 3], 0b0000_0010);
        assert_eq!(fb.pixel(3, 9), BinaryColor::On);
        assert_eq!(fb.pixel(3, 8), BinaryColor::Off);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new();
        Pixel(Point::new(-1, 0), BinaryColor::On).draw(&mut fb).ok();
        Pixel(Point::new(128, 64), BinaryColor::On).draw(&mut fb).ok();

        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        assert_eq!(fb.pixel(200, 5), BinaryColor::Off);
    }

    #[test]
    fn test_nothing_shown_before_flush() {
        let mut fb = FrameBuffer::new();
        fb.clear(BinaryColor::On).ok();

        assert_eq!(fb.pixel(10, 10), BinaryColor::On);
        assert_eq!(fb.shown_pixel(10, 10), BinaryColor::Off);

        fb.flush().ok();
        assert_eq!(fb.shown_pixel(10, 10), BinaryColor::On);
        assert_eq!(fb.shown_bytes(), fb.as_bytes());
        assert_eq!(fb.flush_count(), 1);
    }

    #[test]
    fn test_flush_copies_only_dirty_region() {
        let mut fb = FrameBuffer::new();
        fb.fill_solid(
            &Rectangle::new(Point::new(10, 20), Size::new(4, 4)),
            BinaryColor::On,
        )
        .ok();
        fb.flush().ok();

        assert_eq!(fb.shown_pixel(10, 20), BinaryColor::On);
        assert_eq!(fb.shown_pixel(13, 23), BinaryColor::On);
        assert_eq!(fb.shown_pixel(14, 23), BinaryColor::Off);
        assert_eq!(fb.shown_bytes(), fb.as_bytes());
    }

    #[test]
    fn test_unchanged_redraw_is_not_dirty() {
        let mut fb = FrameBuffer::new();
        fb.clear(BinaryColor::Off).ok();
        assert!(fb.dirty.is_none());
    }

    #[test]
    fn test_fill_solid_clips_to_panel() {
        let mut fb = FrameBuffer::new();
        fb.fill_solid(
            &Rectangle::new(Point::new(120, 60), Size::new(20, 20)),
            BinaryColor::On,
        )
        .ok();

        assert_eq!(fb.pixel(127, 63), BinaryColor::On);
        assert_eq!(fb.pixel(119, 63), BinaryColor::Off);
    }
}
