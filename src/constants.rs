pub const DEFAULT_IMAGE_DIR: &str = "./hue-datacenter-visualization/public/images";
pub const BACKUP_DIR_NAME: &str = "backup";

pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_MAX_HEIGHT: u32 = 1920;

pub const DEFAULT_TARGET_FILES: &[&str] = &[
    "Power.png",
    "Power_01.png",
    "Power_02.png",
    "Power_2N1.PNG",
    "Datacenter.png",
    "Connectivity_01.png",
    "Connectivity_02.png",
    "location_01.png",
    "location_02.png",
];

pub const DEFAULT_QUALITY: u8 = 95;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const OXIPNG_PRESET: u8 = 2;
pub const LIBDEFLATER_LEVEL: u8 = 12;
pub const ZOPFLI_ITERATIONS: u8 = 15;

pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

pub const SEPARATOR_WIDTH: usize = 50;
pub const PROGRESS_SPINNER_TEMPLATE: &str = "   {spinner:.green} {msg}";

// Common output message prefixes
pub const PROCESSING_PREFIX: &str = "📸";
pub const SUCCESS_PREFIX: &str = "✅";
pub const INFO_PREFIX: &str = "ℹ️ ";
pub const SAVED_PREFIX: &str = "💾";
