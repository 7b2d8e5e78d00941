use std::io::{self, BufRead, IsTerminal, Write};

use nerite::{Explorer, Phase};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

const USAGE: &str = "nerite - interactive BFS explorer

Reads commands from stdin, one per line:
  edge <u>,<v>   insert an undirected edge (endpoints created as needed)
  step           advance the traversal by one dequeue
  reset          clear the graph and the traversal
  show           print the graph, the spanning tree and its layout
  json           print a JSON snapshot of the full state
  help           print this help
  quit           exit

Malformed edge input is reported and the session continues.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => return Err(CliError::Usage("unexpected argument; try --help")),
        }
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();
    let mut explorer = Explorer::new();

    if interactive {
        writeln!(out, "nerite BFS explorer; type `help` for commands")?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(&mut explorer, line.trim(), &mut out)? {
            break;
        }
        if interactive {
            out.flush()?;
        }
    }
    Ok(())
}

/// Handles one command line. Returns `false` when the session should end.
fn dispatch(explorer: &mut Explorer, line: &str, out: &mut impl Write) -> Result<bool, CliError> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };
    match cmd {
        "" => {}
        "edge" => match explorer.add_edge(rest) {
            Ok(()) => write_status(explorer, out)?,
            Err(err) => eprintln!("{err}"),
        },
        "step" => {
            explorer.step();
            write_status(explorer, out)?;
        }
        "reset" => {
            explorer.reset();
            write_status(explorer, out)?;
        }
        "show" => write_rendering(explorer, out)?,
        "json" => {
            let json = serde_json::to_string_pretty(&explorer.snapshot())?;
            writeln!(out, "{json}")?;
        }
        "help" => writeln!(out, "{USAGE}")?,
        "quit" | "exit" => return Ok(false),
        other => eprintln!("unknown command {other:?}; try `help`"),
    }
    Ok(true)
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Running => "running",
        Phase::Exhausted => "exhausted",
    }
}

/// One-line summary after every mutating command, the textual stand-in for
/// re-rendering the plots.
fn write_status(explorer: &Explorer, out: &mut impl Write) -> io::Result<()> {
    let visited = explorer.visited().join(" ");
    let queue: Vec<&str> = explorer.queue().collect();
    writeln!(
        out,
        "[{}] {} nodes, {} edges | visited: [{}] queue: [{}]",
        phase_name(explorer.phase()),
        explorer.graph().node_count(),
        explorer.graph().edge_count(),
        visited,
        queue.join(" "),
    )
}

fn write_rendering(explorer: &Explorer, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "graph ({})", phase_name(explorer.phase()))?;
    for node in explorer.graph().nodes() {
        let mark = if explorer.is_visited(node) { "*" } else { " " };
        writeln!(out, "  {mark} {node}")?;
    }
    for edge in explorer.graph().edges() {
        writeln!(out, "    {} -- {}", edge.v, edge.w)?;
    }

    writeln!(out, "bfs tree")?;
    let positions = explorer.layout();
    for (node, p) in &positions {
        writeln!(out, "    {node} @ ({:.3}, {:.1})", p.x, p.y)?;
    }
    for edge in explorer.tree().edges() {
        writeln!(out, "    {} -> {}", edge.v, edge.w)?;
    }
    Ok(())
}
