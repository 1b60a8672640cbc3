pub mod logger;

pub mod batch;
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod inspect;
pub mod processing;
pub mod utils;
pub mod validation;

pub use batch::{run_batch, run_batch_with, BatchSummary};
pub use codec::{ImageCodec, StandardCodec};
pub use config::{Dimensions, EncodeOptions, ResizeConfig};
pub use error::{ResizeError, Result};
pub use formats::{determine_output_format, is_png_file, OutputFormat};
pub use inspect::{file_size_bytes, file_size_mib, read_dimensions};
pub use processing::{fit_within, process_one, process_one_with, resize_image, ResizeOutcome};
