//! mini-dom 命令行主程序
//!
//! 从文件或 stdin 读取节点描述 JSON，渲染到新文档的挂载容器，输出 HTML。

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::DocumentConfig;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mini-dom")]
#[command(version)]
#[command(about = "Render {type, props, children} node descriptions into HTML")]
struct Args {
    /// JSON file with one description or an array of them (stdin if omitted)
    input: Option<PathBuf>,

    /// Id of the mount container
    #[arg(long)]
    root_id: Option<String>,

    /// JSON document config (rootId, title, lang)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the whole document instead of <body>
    #[arg(long)]
    document: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    // RUST_LOG 优先，其次看 -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => DocumentConfig::load(path)?,
        None => DocumentConfig::default(),
    };
    if let Some(root_id) = args.root_id {
        config.root_id = root_id;
    }

    let input = read_input(args.input.as_ref())?;
    let doc = cli::render_input(&input, &config)?;

    let node = if args.document { doc.root() } else { doc.body() };
    println!("{}", doc.outer_html(node));
    Ok(())
}
