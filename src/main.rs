//! CLI entry point for pathtree

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pathtree::{
    ConsoleFormatter, OutputConfig, TerminalSelector, TreeWalker, WalkerConfig, print_json,
    resolve_root, write_output_file,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pathtree")]
#[command(about = "Print a folder tree for a project given by path or by name")]
#[command(version)]
struct Args {
    /// Directory path OR project name to search for in the base directory
    target: Option<String>,

    /// Where to search when a project name is given
    #[arg(long = "base-dir", env = "PATHTREE_BASE_DIR", default_value_os_t = default_base_dir())]
    base_dir: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Also write the tree to this file
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Skip directories with this exact name (can be used multiple times)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    exclude_dir: Vec<String>,

    /// Hide files matching this glob (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB", value_parser = parse_glob)]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print the tree as JSON instead of text
    #[arg(long = "json")]
    json: bool,
}

/// `~/Documents/Coding_Projects`, or the current directory without a home.
fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Documents").join("Coding_Projects"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_glob(s: &str) -> Result<String, String> {
    glob::Pattern::new(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// Ask for a target on stdin. The question is only shown on a terminal, but
/// a piped line is read either way. Blank input or EOF means the current
/// directory.
fn prompt_for_target() -> String {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let cwd = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| ".".to_string());
        print!("Enter full path OR project name [{}]: ", cwd);
        let _ = io::stdout().flush();
    }

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => String::new(),
        Ok(_) => line.trim().to_string(),
    }
}

fn main() {
    let args = Args::parse();

    // Whitespace-only targets are left to the resolver, which maps them to "."
    let target = match args.target.clone() {
        Some(t) if !t.is_empty() => t,
        _ => prompt_for_target(),
    };

    let mut selector = TerminalSelector::stdio();
    let root = match resolve_root(Some(&target), &args.base_dir, &mut selector) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("pathtree: {}", e);
            process::exit(1);
        }
    };

    if !root.is_dir() {
        eprintln!("pathtree: Not a directory: {}", root.display());
        process::exit(1);
    }

    let mut walker_config = WalkerConfig {
        max_depth: args.max_depth,
        include_files: !args.dirs_only,
        ..Default::default()
    };
    walker_config.excluded_dirs.extend(args.exclude_dir.iter().cloned());
    walker_config.excluded_file_globs.extend(args.ignore.iter().cloned());

    let lines = TreeWalker::new(walker_config).walk(&root);

    let result = if args.json {
        print_json(&lines)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        ConsoleFormatter::new(output_config).print(&lines)
    };

    if let Err(e) = result {
        eprintln!("pathtree: error writing output: {}", e);
        process::exit(1);
    }

    if let Some(ref path) = args.output_file {
        if let Err(e) = write_output_file(path, &lines) {
            eprintln!(
                "pathtree: warning: could not write output file '{}': {}",
                path.display(),
                e
            );
        }
    }
}
