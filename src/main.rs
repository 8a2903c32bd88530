// Command-line inspector for the tree view helpers. Loads a tree from a JSON file,
// toggles the requested ids through `TreeViewState`, and prints each node with its
// aggregate selection status.

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use treeview_select::{NodeId, TreeNode, TreeViewError, TreeViewSelectionMode, TreeViewState};

#[derive(Debug)]
enum InspectError {
    Io(io::Error),
    Json(serde_json::Error),
    Tree(TreeViewError),
}

impl From<io::Error> for InspectError {
    fn from(err: io::Error) -> Self {
        InspectError::Io(err)
    }
}

impl From<serde_json::Error> for InspectError {
    fn from(err: serde_json::Error) -> Self {
        InspectError::Json(err)
    }
}

impl From<TreeViewError> for InspectError {
    fn from(err: TreeViewError) -> Self {
        InspectError::Tree(err)
    }
}

impl std::fmt::Display for InspectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectError::Io(e) => write!(f, "Could not read tree file: {e}"),
            InspectError::Json(e) => write!(f, "Invalid tree JSON: {e}"),
            InspectError::Tree(e) => write!(f, "Selection failed: {e}"),
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::Io(e) => Some(e),
            InspectError::Json(e) => Some(e),
            InspectError::Tree(e) => Some(e),
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ModeArg {
    Independent,
    Leaf,
}

impl From<ModeArg> for TreeViewSelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Independent => TreeViewSelectionMode::Independent,
            ModeArg::Leaf => TreeViewSelectionMode::Leaf,
        }
    }
}

/// Print the selection state of every node in a JSON tree
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "treeview_select", version, long_about = None)]
struct InspectConfig {
    /// Path to the tree JSON file
    tree_path: PathBuf,

    /// How a toggle relates a node to its children
    #[arg(long, value_enum, default_value_t = ModeArg::Independent)]
    mode: ModeArg,

    /// Node ids to toggle, in order (e.g. 4,2)
    #[arg(long, value_delimiter = ',')]
    select: Vec<u64>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn load_tree(path: &Path) -> Result<TreeNode, InspectError> {
    log::debug!("Inspector: Loading tree from {:?}", path);
    let content = fs::read_to_string(path)?;
    let root: TreeNode = serde_json::from_str(&content)?;
    Ok(root)
}

/*
 * One line per node, pre-order, indented two spaces per level. The marker is `[x]` for
 * a selected node, `[-]` for an indeterminate one and `[ ]` otherwise.
 */
fn report_lines<R>(view: &TreeViewState<'_, R>) -> Vec<String> {
    fn recurse<R>(
        view: &TreeViewState<'_, R>,
        node: &TreeNode,
        depth: usize,
        lines: &mut Vec<String>,
    ) {
        let marker = match view.state(node.id) {
            Some(state) if state.is_selected => "[x]",
            Some(state) if state.is_indeterminate => "[-]",
            _ => "[ ]",
        };
        lines.push(format!(
            "{}{} {} {}",
            "  ".repeat(depth),
            marker,
            node.id,
            node.name
        ));
        for child in &node.children {
            recurse(view, child, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    recurse(view, view.root(), 0, &mut lines);
    lines
}

fn run(config: &InspectConfig) -> Result<Vec<String>, InspectError> {
    let root = load_tree(&config.tree_path)?;
    let mut view: TreeViewState<'_, ()> = TreeViewState::new(&root, config.mode.into());
    for &id in &config.select {
        view.toggle_selection(NodeId(id))?;
    }
    Ok(report_lines(&view))
}

fn main() -> ExitCode {
    let config = InspectConfig::parse();

    if let Err(e) = TermLogger::init(
        config.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {e}");
    }

    match run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Inspector: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
