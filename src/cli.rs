use clap::Parser;
use std::path::PathBuf;

/// Normalizes the values of single-channel PFM float images
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image to normalize
    #[arg(value_name = "IN_IMAGE")]
    pub in_image: PathBuf,

    /// Output image path
    #[arg(value_name = "OUT_IMAGE")]
    pub out_image: PathBuf,

    /// Clamp (instead of remove) outliers
    #[arg(short, long)]
    pub clamp: bool,

    /// Fraction of extreme values to trim, in [0.0, 1.0]
    #[arg(short, long, default_value_t = 0.0)]
    pub epsilon: f32,

    /// Sample value treated as "no data"
    #[arg(
        short,
        long = "ignore",
        value_name = "VALUE",
        default_value_t = -1.0,
        allow_negative_numbers = true
    )]
    pub ignore_value: f32,

    /// Calculate the normalization from these images (comma separated).
    /// IN_IMAGE always contributes
    #[arg(long, value_name = "IMAGE,...", value_delimiter = ',')]
    pub images: Vec<PathBuf>,

    /// Specify the minimum (overrides automatic estimation)
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub minimum: Option<f32>,

    /// Specify the maximum (overrides automatic estimation)
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub maximum: Option<f32>,
}
