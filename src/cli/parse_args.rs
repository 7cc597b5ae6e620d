use crate::CliOptions;

/// Parse CLI arguments to a [CliOptions] struct, returning the sentence argument, if any.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cli_options: &mut CliOptions) -> Option<String> {
    let mut sentence = None;

    for arg in args.iter().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--ascii") => {
                cli_options.ascii = true;
            }

            Some("--atom-limit") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        cli_options.atom_limit = Some(value);
                        continue;
                    }
                }

                println!("--atom-limit requires a value, e.g. --atom-limit=24");
                std::process::exit(1);
            }

            Some("--help") | Some("-h") => {
                println!("usage: tabula_cli [--ascii] [--atom-limit=<n>] [sentence]");
                println!();
                println!("  --ascii          read ! & | -> <> = + in place of ¬ ∧ ∨ → ↔ ≡ ⊢");
                println!("  --atom-limit=<n> cap the count of distinct atoms (default 24)");
                println!();
                println!("With no sentence argument, one line is read from stdin.");
                std::process::exit(0);
            }

            Some(flag) if flag.starts_with("--") => {
                println!("Unrecognised argument: {flag}");
                std::process::exit(1);
            }

            _ => sentence = Some(arg.to_owned()),
        }
    }

    sentence
}
