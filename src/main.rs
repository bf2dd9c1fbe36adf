use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gas_rate_toolbox::app::{self, Command};
use gas_rate_toolbox::config;
use gas_rate_toolbox::i18n::{self, Translator};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Gas rate and heat input calculator", long_about = None)]
struct Cli {
    /// Path to the TOML config file (created with defaults if missing)
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// UI language code, e.g. en-gb (overrides config and system locale)
    #[arg(long)]
    lang: Option<String>,
    /// Directory holding <code>.toml locale packs (default: ./locales)
    #[arg(long)]
    locales: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 단발 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    tracing::debug!(lang = %tr.language_code(), "translator ready");

    match &cli.command {
        Some(command) => println!("{}", app::execute(command, &cfg, &tr)?),
        None => app::run(&mut cfg, &cli.config, &tr)?,
    }
    Ok(())
}
