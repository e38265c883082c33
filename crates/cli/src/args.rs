use mpcd_core::DEFAULT_CLONE_TOKENS;

pub(crate) const USAGE: &str = "Usage: mpcd [-bjSvV] [-n tokens]";

const HELP_TEXT: &str = concat!(
    "mpcd (token-based clone detector)\n",
    "\n",
    "Usage:\n",
    "  mpcd [-bjSvV] [-n tokens]\n",
    "\n",
    "Options:\n",
    "  -n <tokens>  Minimum clone length in tokens (default: 15)\n",
    "  -b           Match brace-balanced block regions instead of line regions\n",
    "  -j           Output JSON\n",
    "  -v           Report per-phase counts to standard error\n",
    "  -S           Print per-entity byte sizes and exit\n",
    "  -V           Print version and exit\n",
    "  -h           Show help\n",
    "\n",
    "The tokenized input stream is read from standard input; the clone\n",
    "report is written to standard output.\n",
    "\n"
);

#[derive(Debug, Clone)]
pub(crate) struct ParsedArgs {
    pub(crate) clone_tokens: usize,
    pub(crate) block_regions: bool,
    pub(crate) json: bool,
    pub(crate) verbose: bool,
    pub(crate) version: bool,
    pub(crate) sizes: bool,
}

pub(crate) fn print_help() {
    print!("{HELP_TEXT}");
}

/// Parse getopt-style short options: flags may be clustered and `-n` takes
/// its value either inline (`-n20`) or as the next argument (`-n 20`).
/// `Ok(None)` means help was requested.
pub(crate) fn parse_args(argv: &[String]) -> Result<Option<ParsedArgs>, String> {
    let mut clone_tokens = DEFAULT_CLONE_TOKENS;
    let mut block_regions = false;
    let mut json = false;
    let mut verbose = false;
    let mut version = false;
    let mut sizes = false;

    let mut i = 0;
    while i < argv.len() {
        let arg = &argv[i];
        let Some(flags) = arg.strip_prefix('-') else {
            return Err(format!("unexpected argument: {arg}"));
        };
        if flags.is_empty() {
            return Err("unexpected argument: -".to_string());
        }

        let mut cluster = flags.char_indices();
        while let Some((at, flag)) = cluster.next() {
            match flag {
                'b' => block_regions = true,
                'j' => json = true,
                'v' => verbose = true,
                'V' => version = true,
                'S' => sizes = true,
                'h' => return Ok(None),
                'n' => {
                    let rest = &flags[at + 1..];
                    let raw = if rest.is_empty() {
                        i += 1;
                        argv.get(i).ok_or("-n requires a value")?.as_str()
                    } else {
                        rest
                    };
                    clone_tokens = raw
                        .parse::<usize>()
                        .map_err(|_| format!("invalid token number: {raw}"))?;
                    if clone_tokens == 0 {
                        return Err("invalid token number: 0".to_string());
                    }
                    break;
                }
                _ => return Err(format!("unknown option: -{flag}")),
            }
        }
        i += 1;
    }

    Ok(Some(ParsedArgs {
        clone_tokens,
        block_regions,
        json,
        verbose,
        version,
        sizes,
    }))
}
