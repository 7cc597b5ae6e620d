use std::io::BufRead;

use tabula::{config::Config, context::Context, reports::Report};

use parse_args::parse_args;

mod parse_args;
mod render;

#[derive(Default)]
struct CliOptions {
    ascii: bool,
    atom_limit: Option<usize>,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut cli_options = CliOptions::default();

    let args: Vec<String> = std::env::args().collect();
    let sentence_arg = parse_args(&args, &mut cli_options);

    let mut config = match cli_options.ascii {
        true => Config::ascii(),
        false => Config::default(),
    };

    if let Some(limit) = cli_options.atom_limit {
        config.atom_limit = limit;
    }

    let input = match sentence_arg {
        Some(sentence) => sentence,

        // With no sentence argument, read one line from stdin.
        None => {
            let mut line = String::default();
            match std::io::stdin().lock().read_line(&mut line) {
                Ok(_) => line,
                Err(_) => {
                    eprintln!("Failed to read a sentence from stdin");
                    std::process::exit(1);
                }
            }
        }
    };

    let mut the_context = Context::from_config(config);

    match the_context.evaluate(input.trim()) {
        Ok(report) => {
            render::print_table(&the_context);

            match report {
                Report::Table => {}
                verdict => println!("{verdict}"),
            }
        }

        Err(e) => {
            eprintln!("Evaluation error: {e:?}");
            std::process::exit(1);
        }
    }
}
