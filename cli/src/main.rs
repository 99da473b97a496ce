//! CLI entrypoint for Quizify
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quizify_application::{
    AskTutorInput, AskTutorUseCase, BehaviorConfig, GenerateQuizInput, GenerateQuizUseCase,
    NoProgress, ProgressNotifier,
};
use quizify_domain::{OutputFormat, TutorQuestion};
use quizify_infrastructure::{ChatCompletionsGateway, ConfigLoader, FileConfig};
use quizify_presentation::{
    AskArgs, Cli, Command, ConsoleFormatter, HtmlQuizRenderer, OutputConfig, ProgressReporter,
    QuizArgs, QuizCheckRepl, QuizFormatter, SimpleProgress, formatter_for,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the key may already be in the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    let Some(command) = cli.command else {
        bail!("No command given. Try `quizify ask <QUESTION>` or `quizify quiz <TOPIC>`.");
    };

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
        show_progress: config.output.show_progress && !cli.quiet,
    };
    output.apply_color();

    // === Dependency Injection ===
    let gateway = Arc::new(
        ChatCompletionsGateway::from_config(&config.provider)
            .context("Failed to set up the text-generation provider")?,
    );
    let behavior = BehaviorConfig::from_timeout_seconds(config.provider.timeout_seconds);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if output.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match command {
        Command::Ask(args) => {
            run_ask(args, &config, gateway, behavior, progress.as_ref()).await
        }
        Command::Quiz(args) => {
            run_quiz(args, &config, &output, gateway, behavior, progress.as_ref()).await
        }
    }
}

/// Install the stderr subscriber, plus a daily-rolling file writer when asked.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "quizify.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    info!("Starting Quizify");
    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn run_ask(
    args: AskArgs,
    config: &FileConfig,
    gateway: Arc<ChatCompletionsGateway>,
    behavior: BehaviorConfig,
    progress: &dyn ProgressNotifier,
) -> Result<()> {
    let Some(question) = TutorQuestion::try_new(args.question) else {
        bail!("Question cannot be empty");
    };
    let profile = args.profile.apply(config.study.clone());

    let use_case = AskTutorUseCase::new(gateway)
        .with_model(config.provider.model.clone())
        .with_behavior(behavior);

    let answer = use_case
        .execute_with_progress(AskTutorInput::new(profile, question), progress)
        .await
        .map_err(|e| anyhow!("Error generating explanation: {}", e))?;

    println!("{}", ConsoleFormatter::format_answer(&answer));
    Ok(())
}

async fn run_quiz(
    args: QuizArgs,
    config: &FileConfig,
    output: &OutputConfig,
    gateway: Arc<ChatCompletionsGateway>,
    behavior: BehaviorConfig,
    progress: &dyn ProgressNotifier,
) -> Result<()> {
    let profile = args.profile.apply(config.study.clone());
    let count = args.count.unwrap_or(config.quiz.default_count);

    let mut format = args.output.map(OutputFormat::from).unwrap_or(output.format);
    if args.check && format != OutputFormat::List {
        info!(?format, "--check uses the plain list output");
        format = OutputFormat::List;
    }

    let use_case = GenerateQuizUseCase::new(gateway)
        .with_model(config.provider.model.clone())
        .with_behavior(behavior)
        .with_limits(config.quiz.limits())
        .with_extractor_config(config.quiz.extractor_config());

    let input = GenerateQuizInput::new(profile.subject, profile.level, args.topic, count);
    let quiz = use_case
        .execute_with_progress(input, progress)
        .await
        .map_err(|e| anyhow!("Error generating quiz: {}", e))?;

    if quiz.is_fallback() {
        warn!(
            reason = quiz.fallback_reason.as_deref().unwrap_or("unknown"),
            "Showing placeholder questions"
        );
    }

    let exported = match args.export {
        Some(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.quiz.export_path));
            HtmlQuizRenderer::new()
                .export(&quiz, &path)
                .with_context(|| format!("Failed to export quiz to {}", path.display()))?;
            eprintln!("Quiz exported to {}", path.display());
            true
        }
        None => false,
    };

    if args.check {
        QuizCheckRepl::new(&quiz.questions).run()?;
        return Ok(());
    }

    // The exported file already holds the page
    if format == OutputFormat::Html && exported {
        return Ok(());
    }

    println!("{}", formatter_for(format).format_quiz(&quiz));
    Ok(())
}
