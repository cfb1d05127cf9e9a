// src/cli.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;

use crate::config::consts::STORE_DIR;
use crate::config::options::{AppOptions, ExportFormat, PollOptions};
use crate::derive::{bunk, BunkTarget, Dashboard};
use crate::file;
use crate::inject::{navigation_script, page_script};
use crate::logging;
use crate::model::{CourseAttendanceRecord, Credentials};
use crate::progress::Progress;
use crate::runner::{self, Source};
use crate::session::Phase;
use crate::store::CredentialStore;

/// Attendance Hub: read a student portal's attendance table and work out
/// how many classes can be skipped.
#[derive(Parser)]
#[command(name = "attendance_hub", version, about, long_about = None)]
struct Cli {
    /// Directory for saved credentials and the debug log
    #[arg(long, global = true, default_value = STORE_DIR)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract attendance from a saved page, once
    Parse {
        page: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Re-read a saved page until the table appears or the timeout passes
    Watch {
        page: PathBuf,
        #[command(flatten)]
        poll: PollArgs,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Replay a folder of portal snapshots (login.html, dashboard.html,
    /// attendance.html) as a full session
    Replay {
        dir: PathBuf,
        /// Values to "type" into the login form (default: the form's own values)
        #[arg(long, requires = "password")]
        username: Option<String>,
        #[arg(long, requires = "username")]
        password: Option<String>,
        /// Portal base URL the snapshot URLs are built from
        #[arg(long)]
        base_url: Option<String>,
        #[command(flatten)]
        poll: PollArgs,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Bunk calculator for one course
    Bunk {
        #[arg(long)]
        present: u32,
        #[arg(long)]
        total: u32,
        #[arg(long, default_value_t = 75)]
        target: u32,
        #[arg(long)]
        json: bool,
    },

    /// Write the course table of a page or snapshot folder to CSV/TSV
    Export {
        source: PathBuf,
        /// Output file, or a directory ending in '/'
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[arg(long)]
        no_headers: bool,
    },

    /// Print the script a webview would inject on each page load
    Script {
        #[command(flatten)]
        poll: PollArgs,
        /// Print the one-shot redirect to this URL instead
        #[arg(long)]
        navigate: Option<String>,
    },

    /// Inspect or forget the saved login
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },
}

#[derive(Subcommand)]
enum CredentialsAction {
    Show,
    Clear,
}

#[derive(Args, Clone, Copy)]
struct PollArgs {
    #[arg(long, default_value_t = crate::config::consts::POLL_INTERVAL_MS)]
    interval_ms: u64,
    #[arg(long, default_value_t = crate::config::consts::POLL_TIMEOUT_MS)]
    timeout_ms: u64,
}

impl From<PollArgs> for PollOptions {
    fn from(a: PollArgs) -> Self {
        PollOptions::new(a.interval_ms, a.timeout_ms)
    }
}

#[derive(Args, Clone, Copy)]
struct ViewArgs {
    /// Bunk target percent for the verdict column
    #[arg(long, default_value_t = 75)]
    target: u32,
    /// Print the dashboard as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Progress lines on stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, found: bool) {
        if !found {
            eprintln!("No attendance table appeared.");
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.store).wrap_err("could not set up the log file")?;

    let mut opts = AppOptions { store_dir: cli.store.clone(), ..AppOptions::default() };

    match cli.command {
        Command::Parse { page, view } => {
            let records = runner::parse_page(&page)?;
            show(&records, view)
        }
        Command::Watch { page, poll, view } => {
            match runner::watch(&page, poll.into(), &mut StderrProgress) {
                Some(records) => show(&records, view),
                None => bail!("gave up waiting for {}", page.display()),
            }
        }
        Command::Replay { dir, username, password, base_url, poll, view } => {
            opts.poll = poll.into();
            if let Some(url) = base_url {
                opts.portal.base_url = url;
            }
            let typed = username.zip(password).map(|(u, p)| Credentials::new(u, p));
            let replay = runner::replay(&dir, &opts, typed.as_ref(), &mut StderrProgress)?;
            if replay.phase != Phase::Ready {
                bail!("session stopped in {:?} without attendance data", replay.phase);
            }
            show(&replay.records, view)
        }
        Command::Bunk { present, total, target, json } => {
            let verdict = bunk(present, total, target)?;
            if json {
                println!("{}", serde_json::to_string(&verdict)?);
            } else {
                println!("{verdict}");
            }
            Ok(())
        }
        Command::Export { source, out, format, no_headers } => {
            opts.export.format = format.into();
            opts.export.include_headers = !no_headers;
            if let Some(out) = out {
                opts.export.set_path(&out);
            }
            let records = runner::load(&Source::detect(source), &opts, &mut StderrProgress)?;
            if records.is_empty() {
                bail!("no attendance rows to export");
            }
            let path = file::write_export(&opts.export, &records)?;
            eprintln!("Wrote {} course(s) to {}", records.len(), path.display());
            Ok(())
        }
        Command::Script { poll, navigate } => {
            let script = match navigate {
                Some(url) => navigation_script(&url),
                None => page_script(&saved(&cli.store)?, &poll.into()),
            };
            println!("{script}");
            Ok(())
        }
        Command::Credentials { action } => {
            let mut store = CredentialStore::open(&cli.store)?;
            match action {
                CredentialsAction::Show => {
                    let creds = store.credentials();
                    if creds.is_empty() {
                        println!("No saved login in {}", store.path().display());
                    } else {
                        println!("username: {}", creds.username);
                        let pw = if creds.password.is_empty() { "" } else { "(saved)" };
                        println!("password: {pw}");
                    }
                }
                CredentialsAction::Clear => {
                    store.clear()?;
                    println!("Cleared saved login");
                }
            }
            Ok(())
        }
    }
}

fn saved(store: &Path) -> Result<Credentials> {
    Ok(CredentialStore::open(store)?.credentials())
}

fn show(records: &[CourseAttendanceRecord], view: ViewArgs) -> Result<()> {
    let dash = Dashboard::build(records, BunkTarget::new(view.target)?);
    let mut out = io::stdout().lock();

    if view.json {
        serde_json::to_writer_pretty(&mut out, &dash)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = dash.courses.iter().map(|c| c.course.chars().count()).max().unwrap_or(0).max(6);
    writeln!(
        out,
        "{:<width$}  {:>5}  {:>7}  {:>6}  {:>6}  {}",
        "Course", "Held", "Present", "Absent", "%", dash.target
    )?;
    for c in &dash.courses {
        writeln!(
            out,
            "{:<width$}  {:>5}  {:>7}  {:>6}  {:>6}  {}",
            c.course,
            c.held,
            c.present,
            c.absent,
            format!("{}%", c.percentage),
            c.verdict
        )?;
    }
    writeln!(
        out,
        "\nOverall {}% ({:?}): {} of {} attended, {} missed",
        dash.overall, dash.standing, dash.totals.present, dash.totals.held, dash.totals.absent
    )?;
    Ok(())
}
