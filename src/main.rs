//! menutree demo
//!
//! Usage: menutree [OPTIONS]
//!
//! Opens a small sample menu tree on the controlling terminal.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use menutree::{ColorMode, Config, DisplayOptions, Menu, MenuTree};

/// Browse a sample tree of nested menus
#[derive(Parser, Debug)]
#[command(name = "menutree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/menutree/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append each render instead of redrawing in place
    #[arg(long)]
    no_redraw: bool,

    /// Skip the key guide
    #[arg(long)]
    no_welcome: bool,

    /// Color output: auto, always or never
    #[arg(long, value_parser = parse_color)]
    color: Option<ColorMode>,

    /// Verbosity level (-v, -vv, -vvv), logged to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_color(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value).ok_or_else(|| format!("expected auto, always or never, got {value}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = load_config(cli.config.as_deref())?;
    if cli.no_redraw {
        config.display.redraw = false;
    }
    if cli.no_welcome {
        config.display.welcome = false;
    }
    if let Some(color) = cli.color {
        config.display.color = color;
    }

    let mut tree = sample_tree(DisplayOptions::new(&config))?;
    tree.display().context("menu session failed")?;
    Ok(())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::from_default_env().add_directive(format!("menutree={level}").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load_or_default(None));
    };

    let (config, warnings) = Config::load_with_warnings(path)?;
    for w in &warnings {
        let line = w.line.map(|l| format!(":{l}")).unwrap_or_default();
        match &w.suggestion {
            Some(s) => eprintln!(
                "warning: unknown key `{}` in {}{} (did you mean `{}`?)",
                w.key,
                w.file.display(),
                line,
                s
            ),
            None => eprintln!("warning: unknown key `{}` in {}{}", w.key, w.file.display(), line),
        }
    }
    Ok(config.with_env_overrides())
}

/// Main{greet, count; Tools{..., open about; Deeper{...}}, About{}}
fn sample_tree(display: DisplayOptions) -> Result<MenuTree> {
    let clicks = Rc::new(Cell::new(0u32));

    let mut main = Menu::with_prompt_fn("Main", {
        let clicks = Rc::clone(&clicks);
        move || format!("Counter is at {}.\nPick an option or open a submenu.", clicks.get())
    });
    main.add_option("greet", || println!("Hello from menutree!"));
    main.add_option("count", {
        let clicks = Rc::clone(&clicks);
        move || {
            clicks.set(clicks.get() + 1);
            println!("counter -> {}", clicks.get());
        }
    });
    let mut tree = MenuTree::with_options(main, display);

    let about = tree.insert(Menu::new("About", "menutree demo. Nothing to run here."));

    let mut tools = Menu::new("Tools", "Things that print things");
    tools.add_option("list args", || {
        for (i, arg) in std::env::args().enumerate() {
            println!("{i}: {arg}");
        }
    });
    tools.add_option("current dir", || match std::env::current_dir() {
        Ok(dir) => println!("{}", dir.display()),
        Err(e) => println!("unavailable: {e}"),
    });
    tools.add_tree_option("open about", move |tree: &mut MenuTree| {
        if let Err(e) = tree.change_menu(about) {
            println!("cannot open About: {e}");
        }
    });
    let tools = tree.insert(tools);

    let mut deeper = Menu::new("Deeper", "Still going");
    deeper.add_option("echo", || println!("echo"));
    let deeper = tree.insert(deeper);

    tree.add_submenus(tree.home(), [tools, about])?;
    tree.add_submenu(tools, deeper)?;
    Ok(tree)
}
