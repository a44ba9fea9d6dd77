mod terminal;

use std::process::ExitCode;

use api_shared::{ContentRes, UpdateContentReq};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use notebook_client::{
    ContentApi, CreateForm, HttpContentClient, ListState, ListView, RecordCache, SearchBar, Viewer,
    ViewerState,
};
use terminal::{ConsoleNotifier, SystemClipboard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A failure the console notifier has already printed.
#[derive(Debug)]
struct Reported;

impl std::fmt::Display for Reported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("already reported")
    }
}

impl std::error::Error for Reported {}

/// The text `main` still has to print for a failed run.
fn unreported(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    if err.is::<Reported>() {
        None
    } else {
        Some(err.to_string())
    }
}

#[derive(Parser)]
#[command(name = "notebook")]
#[command(about = "Notebook of code snippets and their output")]
struct Cli {
    /// Base URL of the notebook API
    #[arg(long, env = "NOTEBOOK_API_URL", default_value = "http://localhost:5000")]
    api_url: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a snippet (prompts for anything not given)
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// List snippet titles a page at a time
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Snippets per page (at most 100)
        #[arg(long, default_value_t = 10)]
        per_page: usize,
    },
    /// Titles containing a search string (case-insensitive)
    Search { query: String },
    /// Show a snippet by exact title, or the n-th of all snippets
    Show {
        title: Option<String>,
        /// 1-based position in the matched snippets
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Copy a snippet's code to the clipboard
    Copy {
        title: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Delete a snippet after confirmation
    Delete {
        title: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Change fields of a snippet by id
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
}

fn print_record(record: &ContentRes) {
    println!("# {}  ({})", record.title, record.id);
    println!("{}", record.content);
    println!("-- output --");
    println!("{}", record.output);
}

/// Opens a viewer on `title` (or everything) positioned at 1-based `page`.
/// `None` when nothing matched.
async fn open_viewer(
    api: &HttpContentClient,
    title: Option<&str>,
    page: usize,
) -> CliResult<Option<Viewer>> {
    let mut viewer = Viewer::new(RecordCache::new());
    match title {
        Some(title) => viewer.open_title(api, title, &ConsoleNotifier).await,
        None => viewer.open_all(api, &ConsoleNotifier).await,
    }
    match viewer.state() {
        ViewerState::Failed(_) => return Err(Reported.into()),
        ViewerState::Empty => {
            println!("No matching snippets.");
            return Ok(None);
        }
        _ => {}
    }
    let total = viewer.records().len();
    if !page.checked_sub(1).is_some_and(|index| viewer.go_to(index)) {
        return Err(format!("page {page} is out of range (1..={total})").into());
    }
    Ok(Some(viewer))
}

fn prompt(label: &str, given: Option<String>, allow_empty: bool) -> CliResult<String> {
    match given {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(allow_empty)
            .interact_text()?),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(message) = unreported(e.as_ref()) {
                eprintln!("Error: {message}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let api = HttpContentClient::new(&cli.api_url)?;

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            output,
        }) => {
            let mut form = CreateForm::new(RecordCache::new());
            form.title = prompt("Title", title, false)?;
            form.content = prompt("Code", content, false)?;
            form.output = prompt("Output", output, true)?;
            let record = form
                .submit(&api, &ConsoleNotifier)
                .await
                .map_err(|_| Reported)?;
            println!("ID: {}", record.id);
        }
        Some(Commands::List { page, per_page }) => {
            let mut view = ListView::new(per_page);
            view.load(&api, &ConsoleNotifier).await;
            if let ListState::Failed(_) = view.state() {
                return Err(Reported.into());
            }
            if page != view.page() {
                if !view.go_to_page(page, &api, &ConsoleNotifier).await {
                    return Err(
                        format!("page {page} is out of range (1..={})", view.total_pages()).into(),
                    );
                }
                if let ListState::Failed(_) = view.state() {
                    return Err(Reported.into());
                }
            }
            let titles = view.titles();
            if titles.is_empty() {
                println!("No snippets found.");
            } else {
                for (i, title) in titles.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, title);
                }
                println!("Page {} of {}", view.page(), view.total_pages());
            }
        }
        Some(Commands::Search { query }) => {
            let mut bar = SearchBar::new(RecordCache::new());
            bar.mount(&api, &ConsoleNotifier)
                .await
                .map_err(|_| Reported)?;
            bar.set_query(query);
            let suggestions = bar.suggestions();
            if suggestions.is_empty() {
                println!("No matching titles.");
            }
            for record in suggestions {
                println!("{}  ({})", record.title, record.id);
            }
        }
        Some(Commands::Show { title, page }) => {
            if let Some(viewer) = open_viewer(&api, title.as_deref(), page).await? {
                if let Some(record) = viewer.current() {
                    print_record(record);
                }
                println!("[{} of {}]", viewer.cursor() + 1, viewer.records().len());
            }
        }
        Some(Commands::Copy { title, page }) => {
            if let Some(viewer) = open_viewer(&api, title.as_deref(), page).await? {
                let mut clipboard = SystemClipboard::new()
                    .map_err(|e| format!("Clipboard not available: {e}"))?;
                if !viewer.copy_current(&mut clipboard, &ConsoleNotifier) {
                    return Err("failed to copy to clipboard".into());
                }
            }
        }
        Some(Commands::Delete { title, page, yes }) => {
            if let Some(mut viewer) = open_viewer(&api, title.as_deref(), page).await? {
                let Some(record) = viewer.current().cloned() else {
                    return Ok(());
                };
                viewer.request_delete();
                let confirmed = yes
                    || Confirm::new()
                        .with_prompt(format!("Delete \"{}\" ({})?", record.title, record.id))
                        .default(false)
                        .interact()?;
                if confirmed {
                    viewer
                        .confirm_delete(&api, &ConsoleNotifier)
                        .await
                        .map_err(|_| Reported)?;
                } else {
                    viewer.cancel_delete();
                    println!("Cancelled.");
                }
            }
        }
        Some(Commands::Update {
            id,
            title,
            content,
            output,
        }) => {
            let req = UpdateContentReq {
                title,
                content,
                output,
            };
            let record = api.update_content(&id, &req).await?;
            print_record(&record);
        }
        None => {
            println!("Use 'notebook --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notified_failures_are_printed_once() {
        let reported: Box<dyn std::error::Error> = Reported.into();
        assert_eq!(unreported(reported.as_ref()), None);

        let other: Box<dyn std::error::Error> = "page 4 is out of range (1..=3)".into();
        assert_eq!(
            unreported(other.as_ref()).as_deref(),
            Some("page 4 is out of range (1..=3)")
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
