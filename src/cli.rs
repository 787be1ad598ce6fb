//! Command-line front end: parses a command, dispatches it to the stores
//! and renders the resulting state as text.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};

use crate::api::{LoginRequest, NewStudent, RegisterRequest};
use crate::app::RosterApp;
use crate::config::Config;
use crate::error::Error;
use crate::guard::{Guard, Route};
use crate::store::{ListState, PaginatedCollection};

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Administrative client for the teacher/student roster service")]
pub struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override api.base_url.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log request lifecycle at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create a teacher account and log in as it.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the session.
    Logout,
    /// Show the logged-in teacher.
    Whoami,
    /// Student and teacher totals.
    Dashboard,
    #[command(subcommand)]
    Students(StudentsCommand),
    #[command(subcommand)]
    Teachers(TeachersCommand),
}

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    List(PageArgs),
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum TeachersCommand {
    List(PageArgs),
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Rows per page (default: pagination.page_size).
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl Command {
    fn route(&self) -> Route {
        match self {
            Command::Login { .. } | Command::Logout | Command::Whoami => Route::Login,
            Command::Register { .. } => Route::Register,
            Command::Dashboard => Route::Dashboard,
            Command::Students(_) => Route::Students,
            Command::Teachers(_) => Route::Teachers,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_from(&Config::config_path())?,
    };
    config.apply_env_overrides()?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Message for the user; detail stays in the logs.
pub fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(e) => e.user_message(),
        None => err.to_string(),
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let app = RosterApp::from_config(config)?;
    // An unreadable session must not lock the user out of login or logout.
    if let Err(e) = app.session().restore() {
        tracing::warn!(kind = e.kind(), error = %e, "Failed to restore saved session");
    }

    if let Guard::RedirectTo(route) = app.resolve(cli.command.route()) {
        bail!("Please log in first (see `roster {}`)", route.path().trim_start_matches('/'));
    }

    match cli.command {
        Command::Login { username, password } => {
            let session = app
                .session()
                .login(LoginRequest { username, password })
                .await?;
            println!("Logged in as {}", session.identity.username);
        }
        Command::Register {
            username,
            email,
            first_name,
            last_name,
            password,
        } => {
            let session = app
                .session()
                .register(RegisterRequest {
                    username,
                    email,
                    first_name,
                    last_name,
                    password,
                })
                .await?;
            println!("Registered and logged in as {}", session.identity.username);
        }
        Command::Logout => {
            app.session().logout();
            println!("Logged out");
        }
        Command::Whoami => match app.session().current() {
            Some(session) => {
                let who = session.identity;
                println!("{} {} <{}> ({})", who.first_name, who.last_name, who.email, who.username);
            }
            None => println!("Not logged in"),
        },
        Command::Dashboard => {
            let summary = app.dashboard().await?;
            println!("Welcome, {}!", summary.welcome_name);
            println!("My Students:    {}", summary.student_total);
            println!("Total Teachers: {}", summary.teacher_total);
        }
        Command::Students(StudentsCommand::List(args)) => {
            let size = args.page_size.unwrap_or(app.page_size());
            app.students().load(args.page, size).await?;
            render_students(&app.students().state());
        }
        Command::Students(StudentsCommand::Add {
            first_name,
            last_name,
            email,
        }) => {
            let student = app
                .students()
                .create(NewStudent {
                    first_name,
                    last_name,
                    email,
                })
                .await?;
            println!("Created student {} ({} {})", student.id, student.first_name, student.last_name);
        }
        Command::Students(StudentsCommand::Delete { id }) => {
            let id = app.students().delete(&id).await?;
            println!("Deleted student {id}");
        }
        Command::Teachers(TeachersCommand::List(args)) => {
            let size = args.page_size.unwrap_or(app.page_size());
            app.teachers().load(args.page, size).await?;
            let state = app.teachers().state();
            for t in state.items() {
                println!(
                    "{:<38} {:<16} {:<24} {:>3} students",
                    t.id,
                    t.username,
                    format!("{} {}", t.first_name, t.last_name),
                    t.student_count
                );
            }
            render_footer(&state.collection);
        }
    }

    Ok(())
}

fn render_students(state: &ListState<crate::api::Student>) {
    if state.items().is_empty() {
        println!("No students on this page");
    }
    for s in state.items() {
        println!(
            "{:<38} {:<24} {}",
            s.id,
            format!("{} {}", s.first_name, s.last_name),
            s.email
        );
    }
    render_footer(&state.collection);
}

fn render_footer<T>(collection: &PaginatedCollection<T>) {
    println!(
        "-- page {} of {} ({} total)",
        collection.current_page + 1,
        collection.total_pages.max(1),
        collection.total_count
    );
}
