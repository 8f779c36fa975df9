use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use viralens_core::{
    AnalysisInput, GeminiClient, InlineMedia, Lang, Platform, Provider, Session, analyze_prompt,
    analyze_video, format_result_readable, format_script_readable, generate_script, is_owner_token,
    strings,
};

/// CLI wrapper for Platform enum (needed for clap ValueEnum)
#[derive(Clone, Copy, ValueEnum)]
enum CliPlatform {
    Youtube,
    Tiktok,
    Instagram,
    Linkedin,
}

impl From<CliPlatform> for Platform {
    fn from(cli: CliPlatform) -> Self {
        match cli {
            CliPlatform::Youtube => Platform::Youtube,
            CliPlatform::Tiktok => Platform::Tiktok,
            CliPlatform::Instagram => Platform::Instagram,
            CliPlatform::Linkedin => Platform::Linkedin,
        }
    }
}

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Flash,
    Pro,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Flash => Provider::Flash,
            CliProvider::Pro => Provider::Pro,
        }
    }
}

#[derive(Parser)]
#[command(name = "viralens")]
#[command(about = "Audit a video or content idea for virality: score, caption, and scene script")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output language code (e.g. "en", "es")
    #[arg(short, long)]
    lang: Option<String>,

    /// Model tier for generation
    #[arg(long, value_enum, default_value = "flash")]
    provider: CliProvider,

    /// Also generate the shot-by-shot scene script
    #[arg(short, long)]
    script: bool,

    /// Unlock token (disables credit accounting when valid)
    #[arg(long)]
    unlock: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Audit a free-text content idea
    Idea {
        /// The content idea to audit
        text: String,

        /// Target platform for the audit
        #[arg(short, long, value_enum)]
        platform: CliPlatform,
    },
    /// Audit a local video file
    Video {
        /// Path to the video file
        path: PathBuf,

        /// Target platform for the audit
        #[arg(short, long, value_enum)]
        platform: CliPlatform,
    },
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();
    let lang = cli
        .lang
        .as_deref()
        .and_then(Lang::from_code)
        .unwrap_or_default();
    let ui = strings(lang);

    // Validate API key early
    if let Err(e) = provider.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let owner_mode = cli.unlock.as_deref().is_some_and(is_owner_token);
    let mut session = Session::new(owner_mode);

    let (input, platform) = match &cli.command {
        Command::Idea { text, platform } => {
            (AnalysisInput::Idea(text.clone()), Platform::from(*platform))
        }
        Command::Video { path, platform } => {
            (AnalysisInput::Video(path.clone()), Platform::from(*platform))
        }
    };
    session.select_platform(platform);

    println!(
        "\n{}  {}\n",
        style("viralens").cyan().bold(),
        style(ui.tagline).dim()
    );

    if let Err(e) = session.begin(&input) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let client = GeminiClient::new(provider)?;

    // Step 1 (video only): encode the file for transport
    let media = match &input {
        AnalysisInput::Video(path) => {
            let spinner = create_spinner("Encoding video...");
            let media = match InlineMedia::from_path(path).await {
                Ok(media) => media,
                Err(e) => {
                    session.fail();
                    spinner.finish_and_clear();
                    return Err(e.into());
                }
            };
            spinner.finish_with_message(format!(
                "{} Encoded: {} ({})",
                style("✓").green().bold(),
                style(path.file_name().unwrap_or_default().to_string_lossy()).dim(),
                style(&media.mime_type).dim()
            ));
            Some(media)
        }
        AnalysisInput::Idea(_) => None,
    };

    // Step 2: run the audit
    let spinner = create_spinner(ui.analyzing);
    let outcome = match (&input, media.clone()) {
        (AnalysisInput::Idea(text), _) => analyze_prompt(&client, text, platform, lang).await,
        (AnalysisInput::Video(_), Some(media)) => {
            analyze_video(&client, media, platform, lang).await
        }
        (AnalysisInput::Video(_), None) => unreachable!("video input always encodes media"),
    };

    let result = match outcome {
        Ok(result) => {
            session.complete();
            spinner.finish_with_message(format!(
                "{} Audit complete ({})",
                style("✓").green().bold(),
                provider.name()
            ));
            result
        }
        Err(e) => {
            session.fail();
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), ui.error_generic);
            return Err(e.into());
        }
    };

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", format_result_readable(&result));

    // Step 3 (optional): scene script seeded by the creative concept
    if cli.script {
        let spinner = create_spinner(ui.script_loading);
        let scenes = generate_script(&client, &result.visual_data, lang, media).await?;
        spinner.finish_with_message(format!(
            "{} Script generated: {} scenes",
            style("✓").green().bold(),
            scenes.len()
        ));

        if scenes.is_empty() {
            println!("{}", style(ui.no_scenes).yellow());
        } else {
            println!("{}", format_script_readable(&scenes));
        }
    }

    let credits_line = if session.ledger().owner_mode() {
        ui.unlimited.to_string()
    } else {
        format!("{} {}", session.ledger().balance(), ui.credits_label)
    };
    println!(
        "{} {}",
        style("Credits remaining:").dim(),
        style(credits_line).cyan()
    );

    Ok(())
}
