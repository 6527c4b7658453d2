//! Command implementations

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::coordinator::READY_MESSAGE;
use crate::cli::args::{ExtractArgs, SubmitArgs, TimeCommand};
use crate::config::PanelConfig;
use crate::domain::model::{MediaFormat, TrimFields, TrimSubmission};
use crate::domain::rules::VideoRefParser;
use crate::error::PanelError;
use crate::utils::time::TimeCodec;

/// Execute the extract command
pub fn extract(args: ExtractArgs) -> Result<()> {
    let video_ref = VideoRefParser::extract(&args.url).ok_or(PanelError::InvalidUrl {
        url: args.url.clone(),
    })?;
    info!(video_ref = %video_ref, "video reference extracted");
    println!("{}", video_ref);
    Ok(())
}

/// Execute a time conversion command
pub fn time(command: TimeCommand) -> Result<()> {
    match command {
        TimeCommand::Format(args) => println!("{}", TimeCodec::format(args.seconds)),
        TimeCommand::Parse(args) => {
            let seconds = if args.strict {
                TimeCodec::parse(&args.text)
                    .with_context(|| format!("Invalid time '{}'", args.text))?
            } else {
                TimeCodec::parse_or_zero(&args.text)
            };
            println!("{}", seconds);
        }
    }
    Ok(())
}

/// Execute the submit command
pub async fn submit(args: SubmitArgs, config: PanelConfig) -> Result<()> {
    if !args.agree {
        return Err(PanelError::UserAgreementMissing.into());
    }

    let format = MediaFormat::parse(&args.format)?;
    let quality = args
        .quality
        .unwrap_or_else(|| config.default_quality(format).to_string());
    let fields = TrimFields {
        start_time: normalize_bound(args.start.as_deref()),
        end_time: normalize_bound(args.end.as_deref()),
    };

    let video_ref = VideoRefParser::extract(&args.url);
    if video_ref.is_none() {
        warn!(url = %args.url, "no video reference recognized; sending URL as typed");
    }
    let submission = TrimSubmission::new(args.url, video_ref, format, quality, fields)?;

    let container =
        DefaultAppContainer::new(config).context("Failed to set up submission adapters")?;
    println!("Processing...");

    let report = container
        .submit_interactor()
        .execute(&submission)
        .await
        .map_err(|e| anyhow::anyhow!(e.status_message()))?;

    println!("{}", READY_MESSAGE);
    println!("Saved {} ({} bytes)", report.saved_to.display(), report.size);
    Ok(())
}

/// Bare seconds become `MM:SS`; anything else is passed through for validation
fn normalize_bound(bound: Option<&str>) -> String {
    let Some(bound) = bound.map(str::trim).filter(|b| !b.is_empty()) else {
        return String::new();
    };
    match bound.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => TimeCodec::format(seconds),
        _ => bound.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bound() {
        assert_eq!(normalize_bound(None), "");
        assert_eq!(normalize_bound(Some("  ")), "");
        assert_eq!(normalize_bound(Some("90")), "01:30");
        assert_eq!(normalize_bound(Some("3725.4")), "1:02:05");
        assert_eq!(normalize_bound(Some("01:30")), "01:30");
        assert_eq!(normalize_bound(Some("abc")), "abc");
    }
}
