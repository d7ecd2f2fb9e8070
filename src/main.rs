use std::io;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use castellan_core::{GameState, perft};
use castellan_play::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    info!("castellan starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let stdin = io::stdin();
            let mut session = Session::new(io::stdout().lock());
            session.run(stdin.lock())?;
        }
        [cmd, depth] if cmd == "perft" => {
            let depth: usize = depth
                .parse()
                .with_context(|| format!("invalid perft depth: {depth}"))?;
            let state = GameState::new();
            let mut total = 0u64;
            for (mv, nodes) in perft::divide(&state, depth) {
                println!("{mv}: {nodes}");
                total += nodes;
            }
            println!("\nnodes: {total}");
        }
        _ => bail!("usage: castellan [perft <depth>]"),
    }

    Ok(())
}
