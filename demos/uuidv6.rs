//! Simple command that prints one or '-n count' UUIDv6 strings

use std::{env, io, io::Write, process::ExitCode};

use tracing_subscriber::EnvFilter;
use uuidv6::node::NODE_MASK;

const USAGE: &str = "[-n count] [--node N | --random-node] [--compact] [--verbose]";

#[derive(Default, Debug)]
struct Options {
    count: Option<usize>,
    node: Option<u64>,
    random_node: bool,
    compact: bool,
    verbose: bool,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} {}",
                    program.as_deref().unwrap_or("uuidv6"),
                    USAGE
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let filter = if opts.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(node) = opts.node {
        uuidv6::set_node(node);
    } else if opts.random_node {
        uuidv6::always_randomize_node();
    }

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let uuid = uuidv6::uuid6();
        if opts.compact {
            writeln!(buf, "{}", uuid.encode_compact())?;
        } else {
            writeln!(buf, "{}", uuid)?;
        }
        tracing::info!(
            id = %uuid,
            time = ?uuid.time(),
            node = format_args!("{:012x}", uuid.node()),
            "generated"
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "--node" => {
                if opts.node.is_some() {
                    return Err("option 'node' given more than once".to_owned());
                }
                let Some(node_arg) = args.next() else {
                    return Err("argument to option 'node' missing".to_owned());
                };
                let Some(node) = parse_node(&node_arg) else {
                    return Err(format!("invalid argument to option 'node': '{}'", node_arg));
                };
                opts.node.replace(node);
            }
            "--random-node" => opts.random_node = true,
            "--compact" => opts.compact = true,
            "--verbose" => opts.verbose = true,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    if opts.node.is_some() && opts.random_node {
        return Err("options 'node' and 'random-node' are mutually exclusive".to_owned());
    }
    Ok(opts)
}

/// Parses a 48-bit node value given in decimal or in hexadecimal with a `0x` prefix.
fn parse_node(src: &str) -> Option<u64> {
    let node = match src.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => src.parse().ok()?,
    };
    (node <= NODE_MASK).then_some(node)
}
