//! Argument parsing, execution and rendering for the `arbor` CLI.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use arbor_core::{Kruskal, KruskalBuilder, LabelledGraph, LoadStrategy, MstError, SpanningForest};
use arbor_providers_edgelist::{EdgeListError, EdgeListOptions, EdgeListProvider};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute minimum spanning forests of labelled edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load an edge list and print its minimum spanning forest.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge list with one `source,target,weight[,target,weight...]` record
    /// per line.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// How edges are loaded into the priority queue.
    #[arg(long, value_enum, default_value_t = LoadArg::Incremental)]
    pub load: LoadArg,

    /// Stop selecting once a spanning tree is complete.
    #[arg(long)]
    pub early_exit: bool,
}

/// Load strategies exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoadArg {
    /// Insert edges one at a time.
    Incremental,
    /// Build the heap from all edges at once.
    Bulk,
}

impl From<LoadArg> for LoadStrategy {
    fn from(value: LoadArg) -> Self {
        match value {
            LoadArg::Incremental => Self::Incremental,
            LoadArg::Bulk => Self::Bulk,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed or unreadable.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Spanning forest construction failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }

    /// Returns the edge-list line that failed to parse, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::EdgeList(err) => err.line(),
            _ => None,
        }
    }

    /// Returns the heap code behind a selection failure, if any.
    #[must_use]
    pub fn heap_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(err) => err.heap_code().map(|code| code.as_str()),
            _ => None,
        }
    }
}

/// Outcome of a successful `run`.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded edge list.
    pub data_source: String,
    /// The loaded graph, kept for translating ids back to labels.
    pub graph: LabelledGraph,
    /// The computed forest.
    pub forest: SpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or computing the forest fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, LoadArg, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A,B,1,C,3\nB,C,2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///         delimiter: ',',
///         load: LoadArg::Incremental,
///         early_exit: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        load = ?command.load,
        early_exit = command.early_exit,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        name,
        delimiter,
        load,
        early_exit,
    } = command;

    let kruskal = KruskalBuilder::new()
        .with_load_strategy(load.into())
        .with_early_exit(early_exit)
        .build()?;

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_reader(&path)?;
    let options = EdgeListOptions::default().with_delimiter(delimiter);
    let provider = EdgeListProvider::try_from_reader_with_options(chosen_name, reader, options)?;

    let summary = summarise(&kruskal, provider)?;
    info!(
        data_source = summary.data_source.as_str(),
        edges = summary.forest.len(),
        total_weight = summary.forest.total_weight(),
        "command completed"
    );
    Ok(summary)
}

fn summarise(kruskal: &Kruskal, provider: EdgeListProvider) -> Result<ExecutionSummary, CliError> {
    let data_source = provider.name().to_owned();
    let graph = provider.into_graph();
    let forest = kruskal.run(graph.graph())?;
    Ok(ExecutionSummary {
        data_source,
        graph,
        forest,
    })
}

#[instrument(name = "cli.open_reader", err)]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Writes one `source - weight - target` line per accepted edge, a blank
/// line, and the total weight. Forests with several components also report
/// the component count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, render_summary};
/// # use arbor_core::{GraphBuilder, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut builder = GraphBuilder::new();
/// builder.add_edge("A", "B", 7);
/// let graph = builder.build();
/// let forest = kruskal(graph.graph())?;
/// let summary = ExecutionSummary { data_source: "demo".into(), graph, forest };
///
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "A - 7 - B\n\nTotal MST distance: 7\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for edge in summary.forest.edges() {
        writeln!(
            writer,
            "{} - {} - {}",
            endpoint(&summary.graph, edge.source()),
            edge.weight(),
            endpoint(&summary.graph, edge.target()),
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total MST distance: {}", summary.forest.total_weight())?;
    if summary.forest.component_count() > 1 {
        writeln!(writer, "Components: {}", summary.forest.component_count())?;
    }
    Ok(())
}

fn endpoint(graph: &LabelledGraph, id: usize) -> Cow<'_, str> {
    graph
        .vertices()
        .label(id)
        .map_or_else(|| Cow::Owned(id.to_string()), Cow::Borrowed)
}
