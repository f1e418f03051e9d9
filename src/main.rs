use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grin::{
    find_config_file, generate_init_file, load_config, merge_output_settings, open_input, run,
    CliOutputOptions, Config, GrinToml, Mode,
};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
Exit Codes:
  0  OK
  1  Failed to open file
  2  Failed to read input
  3  Failed to form statements
  4  Invalid configuration
  5  Failed to parse statements
  6  Failed to write output

Examples:
  grin /etc/config.ini
  grin config.ini | grep database
  cat config.ini | grin
  grin config.ini | grep host | grin --ungrin";

#[derive(Parser)]
#[command(name = "grin")]
#[command(
    version,
    about = "Transform INI (from a file or stdin) into discrete assignments to make it greppable",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE|-")]
    input: Option<PathBuf>,

    /// Reverse the operation (turn assignments back into INI); wins over --values
    #[arg(short, long)]
    ungrin: bool,

    /// Print just the values of provided assignments
    #[arg(short, long)]
    values: bool,

    /// Colorize output (default on tty)
    #[arg(short, long)]
    colorize: bool,

    /// Monochrome (don't colorize output)
    #[arg(short, long)]
    monochrome: bool,

    /// Don't sort output (faster)
    #[arg(long)]
    no_sort: bool,

    /// Root name of every statement
    #[arg(long, value_name = "NAME")]
    root: Option<String>,

    /// Generate a template grin.toml configuration file
    #[arg(long)]
    init: bool,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug information to stderr (GRIN_LOG takes precedence)
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle --init command
    if cli.init {
        return handle_init();
    }

    let toml_config = load_configuration(&cli.config);

    // Merge configurations: CLI > TOML > defaults
    let output = merge_output_settings(
        &build_cli_options(&cli),
        toml_config.as_ref().map(|c| &c.output),
    );
    let config = Config::new(select_mode(&cli), output);
    tracing::debug!(
        mode = ?config.mode,
        root = %config.output.root,
        sort = config.output.sort,
        "starting"
    );

    let result = open_input(cli.input.as_deref()).and_then(|input| {
        let mut stdout = BufWriter::new(io::stdout().lock());
        run(input, &mut stdout, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("grin: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("GRIN_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn select_mode(cli: &Cli) -> Mode {
    // Invoked as `ungrin` (e.g. through a symlink) implies --ungrin
    let invoked_as_ungrin = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().ends_with("ungrin")))
        .unwrap_or(false);

    if cli.ungrin || invoked_as_ungrin {
        Mode::Ungrin
    } else if cli.values {
        Mode::Values
    } else {
        Mode::Grin
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>) -> Option<GrinToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => {
            tracing::info!(path = %p.display(), "using config");
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}

fn build_cli_options(cli: &Cli) -> CliOutputOptions {
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with config file.
    CliOutputOptions {
        root: cli.root.clone(),
        no_sort: cli.no_sort.then_some(true),
        colorize: cli.colorize.then_some(true),
        monochrome: cli.monochrome.then_some(true),
    }
}
