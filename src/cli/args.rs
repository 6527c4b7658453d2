//! Command-line argument definitions

use clap::{Args, Subcommand};

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Video URL
    pub url: String,
}

/// Time conversion commands
#[derive(Subcommand, Debug)]
pub enum TimeCommand {
    /// Seconds to MM:SS or H:MM:SS
    Format(TimeFormatArgs),
    /// MM:SS or H:MM:SS to seconds
    Parse(TimeParseArgs),
}

/// Arguments for `time format`
#[derive(Args, Debug)]
pub struct TimeFormatArgs {
    /// Seconds (negative values format as 00:00)
    #[arg(allow_negative_numbers = true)]
    pub seconds: f64,
}

/// Arguments for `time parse`
#[derive(Args, Debug)]
pub struct TimeParseArgs {
    /// Time string
    pub text: String,

    /// Fail on malformed input instead of printing 0
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Video URL
    #[arg(short, long)]
    pub url: String,

    /// Output format (mp3 or mp4)
    #[arg(short, long)]
    pub format: String,

    /// Quality (default: from configuration for the chosen format)
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Trim start (MM:SS, H:MM:SS or seconds; default: beginning)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Trim end (MM:SS, H:MM:SS or seconds; default: end of video)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Confirm you have the legal right to download this content
    #[arg(long)]
    pub agree: bool,
}
