use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::errors::*;
use crate::pixels::PixelBuffer;

/// Serialise the buffer as a plain text ppm (P3) image.
///
/// Header lines `P3`, `<width> <height>` and `255`, then one line per x
/// column of the buffer swept over y, each pixel written as `R G B ` with a
/// trailing space before the newline. The column-per-line traversal order is
/// a compatibility contract with existing consumers of these files, so it must
/// not be flipped to the usual row major order.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;

    for x in 0..buffer.width() {
        for y in 0..buffer.height() {
            let colour = buffer.pixel(x, y);
            write!(out, "{} {} {} ", colour.red, colour.green, colour.blue)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write the buffer to a ppm file at `path`, flushing before returning.
///
/// Failing to open or write the file is an error carrying the path context.
/// There are no retries and a write failure part way through may leave a
/// truncated file on disk.
pub fn save_ppm<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .chain_err(|| format!("failed to create image file {}", path.display()))?;

    let mut out = BufWriter::new(file);
    write_ppm(buffer, &mut out)
        .chain_err(|| format!("failed writing image data to {}", path.display()))?;
    out.flush()
        .chain_err(|| format!("failed flushing image data to {}", path.display()))?;

    Ok(())
}
