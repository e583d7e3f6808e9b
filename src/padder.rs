use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The canvas side is this many times the source's longest edge.
const CANVAS_SCALE: u32 = 2;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Error, Debug)]
pub enum PadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("source image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("source image is too large to pad ({width}x{height})")]
    Oversized { width: u32, height: u32 },
}

/// Summary of a successful run, used for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedIcon {
    pub source_width: u32,
    pub source_height: u32,
    pub canvas_side: u32,
    pub offset: (u32, u32),
    pub output_path: PathBuf,
}

/// Side length of the square canvas: twice the longest edge of the source.
pub fn canvas_side(width: u32, height: u32) -> Result<u32, PadError> {
    if width == 0 || height == 0 {
        return Err(PadError::EmptyImage { width, height });
    }

    width
        .max(height)
        .checked_mul(CANVAS_SCALE)
        .ok_or(PadError::Oversized { width, height })
}

/// Top-left corner that centers a `width`x`height` image on a `side`x`side` canvas.
/// Odd leftovers go to the right and bottom edges.
pub fn center_offset(side: u32, width: u32, height: u32) -> (u32, u32) {
    ((side - width) / 2, (side - height) / 2)
}

/// Paste `source` centered onto a fresh transparent canvas.
///
/// The canvas beneath the pasted region is fully transparent, so masking by
/// the source alpha reduces to copying the source pixels verbatim.
pub fn pad_image(source: &DynamicImage) -> Result<RgbaImage, PadError> {
    let logo = source.to_rgba8();
    let (width, height) = logo.dimensions();
    let side = canvas_side(width, height)?;
    let (x, y) = center_offset(side, width, height);

    log::debug!("Padding {}x{} logo onto {}x{} canvas at ({}, {})", width, height, side, side, x, y);

    let mut canvas = RgbaImage::from_pixel(side, side, TRANSPARENT);
    imageops::replace(&mut canvas, &logo, i64::from(x), i64::from(y));

    Ok(canvas)
}

pub fn load_source(path: &Path) -> Result<DynamicImage, PadError> {
    image::open(path).map_err(|source| PadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Always encodes PNG, whatever the output extension says.
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<(), PadError> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| PadError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Read `input`, pad it and write the result to `output`.
///
/// Nothing is written unless the source decodes and pads cleanly.
pub fn create_padded_icon(input: &Path, output: &Path) -> Result<PaddedIcon, PadError> {
    let source = load_source(input)?;
    let (source_width, source_height) = (source.width(), source.height());
    log::info!("Loaded {} ({}x{})", input.display(), source_width, source_height);

    let canvas = pad_image(&source)?;
    let canvas_side = canvas.width();
    let offset = center_offset(canvas_side, source_width, source_height);

    save_png(&canvas, output)?;

    Ok(PaddedIcon {
        source_width,
        source_height,
        canvas_side,
        offset,
        output_path: output.to_path_buf(),
    })
}
