use crate::config::EncodeOptions;
use crate::constants::{LIBDEFLATER_LEVEL, OXIPNG_PRESET, ZOPFLI_ITERATIONS};
use crate::error::{ResizeError, Result};
use crate::formats::OutputFormat;
use crate::verbose;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageReader};
use oxipng::{Deflaters, Options, StripChunks};
use std::io::Cursor;
use std::num::NonZeroU8;
use std::path::Path;

/// Reads images off disk and turns them back into encoded bytes.
///
/// The transform unit only talks to the codec through this trait, which is
/// also where tests inject decode and encode failures.
pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage>;

    /// Encodes `img` for `format`. `target` is only used in error messages.
    fn encode(
        &self,
        img: &DynamicImage,
        target: &Path,
        format: OutputFormat,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>>;
}

/// The `image` crate for everything, plus oxipng for PNG output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCodec;

impl ImageCodec for StandardCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        // Sniff the content; extensions in the wild are not trustworthy.
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        reader
            .decode()
            .map_err(|e| ResizeError::Decode(path.to_path_buf(), e))
    }

    fn encode(
        &self,
        img: &DynamicImage,
        target: &Path,
        format: OutputFormat,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>> {
        let encode_err = |e| ResizeError::Encode(target.to_path_buf(), e);
        let mut buf = Vec::new();

        match format {
            OutputFormat::Png => return encode_png(img, target, options),
            OutputFormat::Jpeg => {
                let rgb = img.to_rgb8();
                let mut encoder = JpegEncoder::new_with_quality(&mut buf, options.quality);
                encoder
                    .encode(
                        rgb.as_raw(),
                        rgb.width(),
                        rgb.height(),
                        ExtendedColorType::Rgb8,
                    )
                    .map_err(encode_err)?;
            }
            OutputFormat::WebP => {
                let img = if img.color().has_alpha() {
                    DynamicImage::ImageRgba8(img.to_rgba8())
                } else {
                    DynamicImage::ImageRgb8(img.to_rgb8())
                };
                img.write_with_encoder(WebPEncoder::new_lossless(&mut buf))
                    .map_err(encode_err)?;
            }
            OutputFormat::Other(_) => {
                img.write_to(&mut Cursor::new(&mut buf), format.to_image_format())
                    .map_err(encode_err)?;
            }
        }

        Ok(buf)
    }
}

fn encode_png(img: &DynamicImage, target: &Path, options: &EncodeOptions) -> Result<Vec<u8>> {
    // oxipng redoes filtering and deflate, so the first pass only has to be fast.
    let mut raw = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut raw, CompressionType::Fast, PngFilterType::NoFilter);
    img.write_with_encoder(encoder)
        .map_err(|e| ResizeError::Encode(target.to_path_buf(), e))?;

    let oxipng_options = png_optimization_options(options);
    verbose!(
        "oxipng preset {} with {:?}",
        OXIPNG_PRESET,
        oxipng_options.deflate
    );

    oxipng::optimize_from_memory(&raw, &oxipng_options)
        .map_err(|e| ResizeError::PngOptimization(e.to_string()))
}

fn png_optimization_options(options: &EncodeOptions) -> Options {
    let mut oxipng_options = Options::from_preset(OXIPNG_PRESET);
    // Drop only chunks that cannot affect rendering.
    oxipng_options.strip = StripChunks::Safe;

    oxipng_options.deflate = if options.zopfli {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap_or(NonZeroU8::MIN),
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LEVEL,
        }
    };

    oxipng_options
}
