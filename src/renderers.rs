use crate::cells::Edge;
use crate::pixels::{PixelBuffer, Rgb};
use crate::units::{Height, SideLength, Width};

/// Colour choices for rasterising a maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RenderOptions {
    pub ink: Rgb,
    pub background: Rgb,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            ink: Rgb::new(0, 0, 0),
            background: Rgb::new(255, 255, 255),
        }
    }
}

/// Rasterise maze edges to a `(3 * size) x (3 * size)` pixel buffer.
///
/// Every cell occupies a 3x3 pixel block with its centre pixel inked. Every
/// carved edge additionally inks the two facing pixels on the border between
/// the blocks of its cells, which visually opens the wall between them.
/// Repeated writes to a pixel are harmless and no edge from a valid maze can
/// reach outside the buffer.
pub fn rasterize(edges: &[Edge], size: SideLength, options: &RenderOptions) -> PixelBuffer {
    let SideLength(side) = size;
    let image_span = 3 * side;
    let mut buffer = PixelBuffer::new(Width(image_span), Height(image_span), options.background);

    for x in 0..side {
        for y in 0..side {
            buffer.set_pixel(3 * x + 1, 3 * y + 1, options.ink);
        }
    }

    for edge in edges {
        let (x1, y1) = (edge.from.x as usize, edge.from.y as usize);
        let (x2, y2) = (edge.to.x as usize, edge.to.y as usize);

        if x1 == x2 {
            // Vertical neighbours: open the wall along y, one pixel on each
            // side of the shared border.
            if y1 < y2 {
                buffer.set_pixel(3 * x1 + 1, 3 * y1 + 2, options.ink);
                buffer.set_pixel(3 * x2 + 1, 3 * y2, options.ink);
            } else {
                buffer.set_pixel(3 * x1 + 1, 3 * y1, options.ink);
                buffer.set_pixel(3 * x2 + 1, 3 * y2 + 2, options.ink);
            }
        } else {
            // Horizontal neighbours: open the wall along x.
            if x1 < x2 {
                buffer.set_pixel(3 * x1 + 2, 3 * y1 + 1, options.ink);
                buffer.set_pixel(3 * x2, 3 * y2 + 1, options.ink);
            } else {
                buffer.set_pixel(3 * x1, 3 * y1 + 1, options.ink);
                buffer.set_pixel(3 * x2 + 2, 3 * y2 + 1, options.ink);
            }
        }
    }

    buffer
}
