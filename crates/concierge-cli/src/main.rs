//! Terminal front-end: one conversation over stdin/stdout.
//!
//! ```bash
//! concierge --config concierge.toml
//! ```
//!
//! `/stats` prints query metrics, `/quit` exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use concierge_core::config::ConciergeConfig;
use concierge_orchestrator::ConciergeBuilder;

struct Args {
    config: Option<PathBuf>,
    session: String,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        session: "terminal".to_string(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = it.next().context("--config requires a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--session" => {
                args.session = it.next().context("--session requires an id")?;
            }
            "--help" | "-h" => {
                println!("usage: concierge [--config <file.toml>] [--session <id>]");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => ConciergeConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ConciergeConfig::default(),
    };
    concierge_observability::init_tracing(&config.observability);

    // Blocking HTTP clients are created here, outside the runtime.
    let service = ConciergeBuilder::new(config)
        .build_service()
        .context("building concierge")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;

    println!("TKRCET College Assistant. Ask a question, /stats for metrics, /quit to exit.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "/quit" | "/exit" => break,
            "/stats" => {
                let snapshot = service.orchestrator().executor().metrics().snapshot();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                let cache = service.orchestrator().executor().cache().stats();
                println!("cache hit rate: {:.1}%", cache.hit_rate() * 100.0);
                continue;
            }
            _ => {}
        }
        let answer = runtime.block_on(service.handle(&args.session, &line));
        tracing::debug!(
            tool = ?answer.tool,
            cached = answer.cached,
            stage = ?answer.stage,
            "turn answered"
        );
        println!("{}\n", answer.text);
    }

    runtime.shutdown_background();
    Ok(())
}
