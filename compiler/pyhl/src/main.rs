//! pyhl CLI
//!
//! Python source to tagged HTML.

use pyhl::commands::{run_convert, tokens_file};
use pyhl::{init_tracing, CliError, HighlightConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("", String::as_str);

    match command {
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: pyhl tokens <file.py>");
                std::process::exit(1);
            }
            if let Err(e) = tokens_file(&args[2]) {
                fail(&e);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("pyhl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            let config = match HighlightConfig::from_args(args.get(1..).unwrap_or_default()) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            };
            match run_convert(&config) {
                Ok(summary) => {
                    if config.inputs.len() > 1 {
                        println!(
                            "{} converted, {} failed, {} scan issues",
                            summary.converted, summary.failed, summary.issues
                        );
                    }
                    if summary.is_failure(config.strict) {
                        std::process::exit(1);
                    }
                }
                Err(e) => fail(&e),
            }
        }
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("pyhl: Python source to tagged HTML");
    println!();
    println!("Usage: pyhl [options] [FILE...]");
    println!("       pyhl <command> [args]");
    println!();
    println!("With no FILE, or FILE is -, read stdin and write stdout.");
    println!("With one FILE, write stdout (or the -o path).");
    println!("With several, write FILE.html next to each input.");
    println!();
    println!("Commands:");
    println!("  tokens <file.py>     Print the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  -n, --line-numbers   Add a line-number column");
    println!("  -s, --standalone     Emit a full HTML page with a stylesheet");
    println!("  -o, --output <path>  Output file (single input only)");
    println!("  --title=<text>       Page title for --standalone");
    println!("  --strict             Exit 1 if any scan issue was found");
    println!();
    println!("Examples:");
    println!("  pyhl app.py > app.html");
    println!("  pyhl -n -s app.py -o app.html");
    println!("  pyhl src/*.py                   # Writes src/*.py.html");
    println!("  cat app.py | pyhl --strict");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=pyhl=debug) to enable logging.");
}
