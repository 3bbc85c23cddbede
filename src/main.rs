// scrawl: Scrawl to JavaScript compiler with a pipeline inspector

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use structopt::StructOpt;

use scrawl::harness::Harness;
use scrawl::ui::App;
use scrawl::Compilation;

#[derive(StructOpt)]
#[structopt(name = "scrawl", about = "Compile Scrawl programs to JavaScript")]
struct Opt {
    /// Scrawl source file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Write the generated JavaScript to this file
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Print the token stream
    #[structopt(long)]
    tokens: bool,

    /// Print the syntax tree outline
    #[structopt(long)]
    ast: bool,

    /// Run the generated code with Node.js
    #[structopt(short, long)]
    run: bool,

    /// Open the pipeline inspector
    #[structopt(short, long)]
    inspect: bool,

    /// Suppress progress messages
    #[structopt(short, long)]
    quiet: bool,

    /// JavaScript runtime executable
    #[structopt(long, parse(from_os_str), default_value = "node")]
    node: PathBuf,
}

macro_rules! progress {
    ($opt:expr, $($arg:tt)*) => {
        if !$opt.quiet {
            eprintln!($($arg)*);
        }
    };
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let source = fs::read_to_string(&opt.input)
        .with_context(|| format!("Failed to read '{}'", opt.input.display()))?;

    let harness = Harness::with_node(&opt.node);

    if opt.inspect {
        return inspect(source, harness);
    }

    progress!(opt, "Compiling {}...", opt.input.display());
    let compilation = match Compilation::new(source) {
        Ok(compilation) => compilation,
        Err(e) => {
            eprintln!("Compile error: {}", e);
            std::process::exit(1);
        }
    };
    progress!(
        opt,
        "Compiled {} statement(s) from {} token(s).",
        compilation.program.body.len(),
        compilation.tokens.len()
    );

    if opt.tokens {
        for token in &compilation.tokens {
            println!("{:<20} {}", token.kind.name(), token.text);
        }
    }

    if opt.ast {
        print!("{}", compilation.program);
    }

    if let Some(path) = &opt.output {
        fs::write(path, &compilation.code)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        progress!(opt, "Wrote {}", path.display());
    } else if !opt.run {
        print!("{}", compilation.code);
    }

    if opt.run {
        progress!(opt, "Running with {}...", harness.runtime().display());
        harness
            .run(&compilation.code)
            .context("Program did not complete")?;
    }

    Ok(())
}

fn inspect(source: String, harness: Harness) -> anyhow::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, harness);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Inspector failed")
}
