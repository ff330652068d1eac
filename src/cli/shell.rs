//! Line-oriented interactive shell
//!
//! Each input line is split with `shell_words` and parsed by clap, so quoting
//! works the way it does on a real command line:
//!
//! ```text
//! expense "Morning coffee" 5,50 --category food --currency AZN
//! income Salary 1500
//! list
//! delete txn-1
//! report --print
//! ```

use std::io::{BufRead, Write};

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use super::session::{EntryInput, Session};
use crate::display::{format_category_list, format_transaction_table};
use crate::error::{MoneyReportError, MoneyResult};
use crate::models::{Language, TransactionKind};
use crate::registry::Message;

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Parser)]
#[command(
    name = "moneyreport",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Record expenses and income, then export a history report"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Record an expense
    Expense(EntryArgs),

    /// Record an income
    Income(EntryArgs),

    /// Show the transactions recorded in this session
    #[command(visible_aliases = ["ls", "history"])]
    List,

    /// Delete a transaction by ID
    #[command(visible_alias = "rm")]
    Delete {
        /// Transaction ID (e.g. txn-3)
        id: String,
    },

    /// Export the history report
    Report {
        /// Export as CSV instead of HTML
        #[arg(long, conflicts_with = "print")]
        csv: bool,
        /// Print the HTML document instead of writing a file
        #[arg(long)]
        print: bool,
    },

    /// Switch the display language
    Lang {
        /// Language code (en, ru)
        code: Language,
    },

    /// List categories and their labels
    Categories,

    /// Show recent ledger changes
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Args)]
struct EntryArgs {
    /// What the money was spent on or received for
    name: String,

    /// Amount, with '.' or ',' as decimal separator
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Category code (defaults to food / salary)
    #[arg(short, long)]
    category: Option<String>,

    /// Currency code
    #[arg(short = 'C', long)]
    currency: Option<String>,

    /// Date and time (YYYY-MM-DD or YYYY-MM-DD HH:MM)
    #[arg(short, long)]
    at: Option<String>,
}

impl From<EntryArgs> for EntryInput {
    fn from(args: EntryArgs) -> Self {
        Self {
            name: args.name,
            amount: args.amount,
            category: args.category,
            currency: args.currency,
            at: args.at,
        }
    }
}

/// Read commands from `input` until it is exhausted or `quit` is entered
///
/// Command failures are printed and the loop continues; only I/O errors on
/// the streams themselves end the shell with an error.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    prompt: Option<&str>,
) -> MoneyResult<()> {
    show_prompt(output, prompt)?;

    for line in input.lines() {
        let line = line?;
        let control = handle_line(session, &line, output)?;
        flush_notices(session, output)?;
        if control == LoopControl::Exit {
            break;
        }
        show_prompt(output, prompt)?;
    }

    output.flush()?;
    Ok(())
}

/// Execute one shell line
pub fn handle_line<W: Write>(
    session: &mut Session,
    line: &str,
    output: &mut W,
) -> MoneyResult<LoopControl> {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(LoopControl::Continue);
        }
    };

    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }

    let parsed = match ShellLine::try_parse_from(&tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Covers --help and `help` as well as usage errors
            write!(output, "{}", err)?;
            return Ok(LoopControl::Continue);
        }
    };

    debug!(command = %tokens[0], "shell command");
    match dispatch(session, parsed.command, output) {
        Ok(control) => Ok(control),
        Err(MoneyReportError::Io(msg)) => Err(MoneyReportError::Io(msg)),
        Err(err) => {
            let label = session.message(Message::Error).unwrap_or("Error");
            writeln!(output, "{}: {}", label, err)?;
            Ok(LoopControl::Continue)
        }
    }
}

fn dispatch<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    output: &mut W,
) -> MoneyResult<LoopControl> {
    match command {
        ShellCommand::Expense(args) => record(session, TransactionKind::Expense, args, output)?,
        ShellCommand::Income(args) => record(session, TransactionKind::Income, args, output)?,
        ShellCommand::List => {
            let table = format_transaction_table(
                session.ledger().list(),
                session.registry(),
                session.language(),
            )?;
            writeln!(output, "{}", table)?;
        }
        ShellCommand::Delete { id } => {
            let txn = session.delete(&id)?;
            writeln!(output, "{}  {}", txn.id(), txn)?;
        }
        ShellCommand::Report { csv, print } => {
            if print {
                writeln!(output, "{}", session.render_report()?)?;
            } else {
                let path = if csv {
                    session.export_csv()?
                } else {
                    session.export_report()?
                };
                writeln!(output, "{}", path.display())?;
            }
        }
        ShellCommand::Lang { code } => {
            session.set_language(code);
            writeln!(output, "{} ({})", code.native_name(), code.code())?;
        }
        ShellCommand::Categories => {
            writeln!(
                output,
                "{}",
                format_category_list(session.registry(), session.language())?
            )?;
        }
        ShellCommand::Log { limit } => {
            let audit = session.audit();
            for entry in audit.recent(limit) {
                writeln!(output, "{}", entry.format_human_readable())?;
            }
        }
        ShellCommand::Quit => return Ok(LoopControl::Exit),
    }

    Ok(LoopControl::Continue)
}

fn record<W: Write>(
    session: &mut Session,
    kind: TransactionKind,
    args: EntryArgs,
    output: &mut W,
) -> MoneyResult<()> {
    let txn = session.record(kind, args.into())?;
    writeln!(output, "{}  {}", txn.id(), txn)?;
    Ok(())
}

fn flush_notices<W: Write>(session: &Session, output: &mut W) -> MoneyResult<()> {
    for notice in session.take_notices() {
        writeln!(output, "{}", notice)?;
    }
    Ok(())
}

fn show_prompt<W: Write>(output: &mut W, prompt: Option<&str>) -> MoneyResult<()> {
    if let Some(prompt) = prompt {
        write!(output, "{}", prompt)?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MoneyReportPaths, Settings};
    use tempfile::TempDir;

    fn run(temp_dir: &TempDir, script: &str) -> (Session, String) {
        let settings = Settings {
            language: Language::En,
            ..Settings::default()
        };
        let mut session = Session::new(
            MoneyReportPaths::with_base_dir(temp_dir.path().to_path_buf()),
            settings,
        );
        let mut output = Vec::new();
        run_shell(&mut session, script.as_bytes(), &mut output, None).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_expense_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let (session, out) = run(
            &temp_dir,
            "expense \"Morning coffee\" 5,50 --at 2025-01-15\nlist\n",
        );

        assert_eq!(session.ledger().len(), 1);
        assert!(out.contains("txn-1  2025-01-15 00:00 Morning coffee 5.5 AZN"));
        assert!(out.contains("Expense added!"));
        assert!(out.contains("Food"));
    }

    #[test]
    fn test_invalid_entry_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let (session, out) = run(
            &temp_dir,
            "expense Rent 10 -c salary\nincome Gift -5\nexpense Tea 1 -C GBP\n",
        );

        assert!(session.ledger().is_empty());
        assert!(out.contains("Error: "));
        assert!(out.contains("Please enter name and amount"));
        assert_eq!(out.matches("Error: ").count(), 3);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let (session, out) = run(&temp_dir, "income Pay 100\ndelete txn-1\ndelete txn-1\n");

        assert!(session.ledger().is_empty());
        assert!(out.contains("Transaction deleted!"));
        assert!(out.contains("not found"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let temp_dir = TempDir::new().unwrap();
        let (session, _) = run(&temp_dir, "income Pay 100\nquit\nincome Pay 100\n");
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_lang_switch() {
        let temp_dir = TempDir::new().unwrap();
        let (session, out) = run(&temp_dir, "lang ru\nexpense Хлеб 2\nlang xx\n");

        assert_eq!(session.language(), Language::Ru);
        assert!(out.contains("Расход добавлен!"));
        assert!(out.contains("unsupported language"));
    }

    #[test]
    fn test_report_print() {
        let temp_dir = TempDir::new().unwrap();
        let (_, out) = run(&temp_dir, "report --print\n");
        assert!(out.contains("<h1>History</h1><p>No transactions to display.</p>"));
    }

    #[test]
    fn test_report_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let (_, out) = run(&temp_dir, "expense Tea 1\nreport\nreport --csv\n");

        assert!(temp_dir.path().join("reports/TransactionReport.html").exists());
        assert!(temp_dir.path().join("reports/TransactionReport.csv").exists());
        assert_eq!(out.matches("Report generated!").count(), 2);
    }

    #[test]
    fn test_log_shows_audit() {
        let temp_dir = TempDir::new().unwrap();
        let (_, out) = run(&temp_dir, "expense Tea 1\ndelete txn-1\nlog\n");
        assert!(out.contains("CREATE"));
        assert!(out.contains("DELETE"));
    }

    #[test]
    fn test_unknown_command_and_bad_quoting() {
        let temp_dir = TempDir::new().unwrap();
        let (session, out) = run(&temp_dir, "frobnicate\nexpense \"unterminated 5\n\n");
        assert!(session.ledger().is_empty());
        assert!(out.contains("frobnicate"));
    }
}
