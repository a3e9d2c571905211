//! Command-line front end for the todo API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_core::{ClientConfig, Summary, Todo, TodoApi};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "List, add and complete todos on the todo backend")]
struct Args {
    /// Backend base URL, including the `/api` prefix (falls back to TODO_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// User whose todos to operate on
    #[arg(short, long, global = true, env = "TODO_USERNAME")]
    username: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the user's todos, newest first
    List,
    /// Create a todo
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark a todo as completed
    Complete { id: u64 },
    /// Print total, completed and pending counts
    Summary {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Loads `.env` before clap reads `TODO_USERNAME`.
    let mut config = ClientConfig::from_env().context("invalid client configuration")?;
    let args = Args::parse();

    apply_base_url(&mut config, args.base_url);
    let username = args
        .username
        .filter(|u| !u.is_empty())
        .context("no username given; pass --username or set TODO_USERNAME")?;

    tracing::debug!(base_url = %config.base_url, %username, "starting");
    let api = TodoApi::from_config(&config);

    match args.command {
        Command::List => {
            let todos = api.list_todos(&username).context("failed to list todos")?;
            if todos.is_empty() {
                println!("no todos for {username}");
            }
            for todo in &todos {
                println!("{}", format_todo(todo));
            }
        }
        Command::Add { title } => {
            let title = title.join(" ");
            let todo = api
                .create_todo(&username, &title)
                .context("failed to create todo")?;
            println!("{}", format_todo(&todo));
        }
        Command::Complete { id } => {
            api.complete_todo(id, &username)
                .with_context(|| format!("failed to complete todo {id}"))?;
            println!("completed {id}");
        }
        Command::Summary { json } => {
            let summary = api.summary(&username).context("failed to summarize todos")?;
            if json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!("{}", format_summary(&summary));
            }
        }
    }

    Ok(())
}

/// A non-blank `--base-url` wins over the environment.
fn apply_base_url(config: &mut ClientConfig, flag: Option<String>) {
    if let Some(base_url) = flag.filter(|u| !u.trim().is_empty()) {
        config.base_url = base_url;
    }
}

fn format_todo(todo: &Todo) -> String {
    let mark = if todo.is_completed { "x" } else { " " };
    format!("[{mark}] {:>4}  {}", todo.id, todo.title)
}

fn format_summary(summary: &Summary) -> String {
    format!(
        "total: {}  completed: {}  pending: {}",
        summary.total, summary.completed, summary.pending
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(is_completed: bool) -> Todo {
        Todo {
            id: 12,
            username: "alice".to_string(),
            title: "Buy milk".to_string(),
            is_completed,
            created_at: String::new(),
            completed_at: None,
        }
    }

    #[test]
    fn formats_todo_lines() {
        assert_eq!(format_todo(&todo(false)), "[ ]   12  Buy milk");
        assert_eq!(format_todo(&todo(true)), "[x]   12  Buy milk");
    }

    #[test]
    fn formats_summary_line() {
        let summary = Summary {
            total: 2,
            completed: 1,
            pending: 1,
        };
        assert_eq!(format_summary(&summary), "total: 2  completed: 1  pending: 1");
    }

    #[test]
    fn parses_add_with_multiword_title() {
        let args = Args::try_parse_from(["todo", "-u", "alice", "add", "Buy", "oat", "milk"]).unwrap();
        assert_eq!(args.username.as_deref(), Some("alice"));
        match args.command {
            Command::Add { title } => assert_eq!(title.join(" "), "Buy oat milk"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn complete_requires_numeric_id() {
        assert!(Args::try_parse_from(["todo", "complete", "abc"]).is_err());
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let mut config = ClientConfig::default();
        apply_base_url(&mut config, Some("http://todo.internal/api".to_string()));
        assert_eq!(config.base_url, "http://todo.internal/api");
    }

    #[test]
    fn blank_base_url_flag_keeps_config() {
        let mut config = ClientConfig {
            base_url: "http://from-env/api".to_string(),
            timeout: None,
        };
        let args = Args::try_parse_from(["todo", "--base-url", "  ", "list"]).unwrap();
        apply_base_url(&mut config, args.base_url);
        assert_eq!(config.base_url, "http://from-env/api");

        apply_base_url(&mut config, Some(String::new()));
        assert_eq!(config.base_url, "http://from-env/api");
    }

    #[test]
    fn base_url_flag_has_no_env_fallback() {
        use clap::CommandFactory;
        let command = Args::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "base_url")
            .unwrap();
        assert!(arg.get_env().is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
