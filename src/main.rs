use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{Parser, Subcommand};

use money_report::cli::{run_shell, Session};
use money_report::config::{MoneyReportPaths, Settings};
use money_report::display::format_category_list;
use money_report::models::{Currency, Language};
use money_report::registry::Registry;

#[derive(Parser)]
#[command(
    name = "moneyreport",
    version,
    about = "Personal expense and income ledger",
    long_about = "MoneyReport records expenses and income for the current session \
                  and exports them as a printable history report. Run without a \
                  subcommand to start the interactive shell; type 'help' there \
                  for the list of commands."
)]
struct Cli {
    /// Display language for this run (en, ru)
    #[arg(long, global = true, env = "MONEY_REPORT_LANG")]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// List categories and their labels
    Categories,

    /// Show or change configuration
    Config {
        /// Set the default display language
        #[arg(long)]
        language: Option<Language>,
        /// Set the default currency for new transactions
        #[arg(long)]
        currency: Option<Currency>,
        /// Set the report file name
        #[arg(long)]
        report_file: Option<String>,
    },
}

fn main() -> Result<()> {
    money_report::init_tracing();

    let cli = Cli::parse();

    let paths = MoneyReportPaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Categories) => {
            let language = cli.lang.unwrap_or(settings.language);
            println!("{}", format_category_list(&Registry::builtin(), language)?);
        }
        Some(Commands::Config {
            language,
            currency,
            report_file,
        }) => {
            let changed = language.is_some() || currency.is_some() || report_file.is_some();
            if let Some(language) = language {
                settings.language = language;
            }
            if let Some(currency) = currency {
                settings.default_currency = currency;
            }
            if let Some(report_file) = report_file {
                settings.report_file_name = report_file;
            }
            if changed {
                settings.save(&paths)?;
            }

            println!("MoneyReport Configuration");
            println!("=========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!();
            println!("Settings:");
            println!("  Language:         {}", settings.language);
            println!("  Default currency: {}", settings.default_currency);
            println!("  Report file:      {}", settings.report_file_name);
            if let Some(pattern) = &settings.timestamp_format {
                println!("  Timestamp format: {}", pattern);
            }
        }
        Some(Commands::Shell) | None => {
            if let Some(language) = cli.lang {
                settings.language = language;
            }
            let mut session = Session::new(paths, settings);

            let stdin = io::stdin();
            let prompt = stdin.is_terminal().then_some("moneyreport> ");
            let mut stdout = io::stdout().lock();
            run_shell(&mut session, stdin.lock(), &mut stdout, prompt)?;
        }
    }

    Ok(())
}
