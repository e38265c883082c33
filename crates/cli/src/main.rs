mod args;
mod json;
mod text;

use std::env;
use std::io;

use mpcd_core::{DetectOptions, RegionKind, TokenStore, build_report, find_clone_groups_with_stats};

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let parsed = match args::parse_args(&argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            args::print_help();
            return;
        }
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("{}", args::USAGE);
            std::process::exit(2);
        }
    };

    if parsed.version {
        println!("mpcd {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if parsed.sizes {
        print!("{}", text::format_entity_sizes());
        return;
    }

    if let Err(err) = run(&parsed) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(parsed: &args::ParsedArgs) -> io::Result<()> {
    let store = TokenStore::from_reader(io::stdin().lock())?;

    let options = DetectOptions {
        clone_tokens: parsed.clone_tokens,
        regions: if parsed.block_regions {
            RegionKind::Block
        } else {
            RegionKind::Line
        },
    };
    let outcome = find_clone_groups_with_stats(&store, &options);
    let report = build_report(&store, &outcome.result);

    if parsed.json {
        json::write_json(&json::map_report(report))?;
    } else {
        print!("{}", text::format_report(&report));
    }

    if parsed.verbose {
        eprint!("{}", text::format_detect_stats(&outcome.stats));
    }

    Ok(())
}
