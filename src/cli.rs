// Command-line interface for cifra.
//
// Replaces the interactive menu of classic cipher teaching tools with
// explicit subcommands and long-form options: one subcommand per cipher,
// plus `info` for a short description of both. Raw message and key text
// is normalized (accent folding + upper-casing) and validated against the
// chosen alphabet before any transform runs; invalid input is reported on
// stderr with a nonzero exit code.

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::alphabet::{Alphabet, LATIN, SPANISH};
use crate::{caesar, normalize, vigenere};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Classical substitution ciphers over pluggable alphabets.
#[derive(Parser, Debug)]
#[command(
    name = "cifra",
    version,
    about = "Caesar and Vigenère ciphers for teaching",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Caesar shift cipher.
    Caesar(CaesarArgs),
    /// Vigenère cipher.
    Vigenere(VigenereArgs),
    /// Describe both ciphers.
    Info,
}

#[derive(Args, Debug)]
struct CaesarArgs {
    /// Shift key: nonzero integer with magnitude below the alphabet length.
    #[arg(short, long, allow_hyphen_values = true)]
    key: i32,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct VigenereArgs {
    /// Key word; normalized and validated like the message.
    #[arg(short, long)]
    key: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Decode instead of encode.
    #[arg(short, long)]
    decode: bool,

    /// Alphabet to operate over.
    #[arg(short, long, value_enum, default_value = "latin")]
    alphabet: AlphabetChoice,

    /// Message text.
    message: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AlphabetChoice {
    /// 26 letters, A through Z.
    Latin,
    /// 27 letters, Ñ after N.
    Spanish,
}

impl AlphabetChoice {
    fn get(self) -> &'static Alphabet {
        match self {
            AlphabetChoice::Latin => &LATIN,
            AlphabetChoice::Spanish => &SPANISH,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Normalize and validate one piece of user text; reports to stderr and
/// returns `None` on rejection.
fn prepare(label: &str, raw: &str, alphabet: &Alphabet) -> Option<String> {
    let text = normalize::normalize(raw);
    log::debug!("normalized {label}: {text:?}");
    if let Err(e) = alphabet.check_text(&text) {
        eprintln!("cifra: invalid {label}: {e}");
        return None;
    }
    Some(text)
}

fn cmd_caesar(args: &CaesarArgs) -> i32 {
    let alphabet = args.common.alphabet.get();
    if let Err(e) = caesar::check_key(args.key, alphabet) {
        eprintln!("cifra: {e}");
        return 1;
    }
    let Some(message) = prepare("message", &args.common.message, alphabet) else {
        return 1;
    };
    let result = if args.common.decode {
        caesar::decode(&message, alphabet, args.key)
    } else {
        caesar::encode(&message, alphabet, args.key)
    };
    match result {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("cifra: {e}");
            1
        }
    }
}

fn cmd_vigenere(args: &VigenereArgs) -> i32 {
    let alphabet = args.common.alphabet.get();
    let Some(key) = prepare("key", &args.key, alphabet) else {
        return 1;
    };
    let Some(message) = prepare("message", &args.common.message, alphabet) else {
        return 1;
    };
    log::debug!(
        "reconciled key: {:?}",
        vigenere::reconcile_key(&key, message.chars().count())
    );
    let result = if args.common.decode {
        vigenere::decode(&message, alphabet, &key)
    } else {
        vigenere::encode(&message, alphabet, &key)
    };
    match result {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("cifra: {e}");
            1
        }
    }
}

fn cmd_info() -> i32 {
    println!(
        "The Caesar cipher is a substitution cipher where each letter is replaced\n\
         by another a fixed number of positions further along the alphabet. It is\n\
         named after Julius Caesar, who used it to write to his generals.\n\
         \n\
         The Vigenère cipher is a substitution cipher that applies a sequence of\n\
         Caesar shifts with different offsets, taken from the letters of a key\n\
         word, to hide letter frequencies. It was described by Blaise de Vigenère\n\
         in the 16th century.\n\
         \n\
         Both are teaching ciphers with no resistance to cryptanalysis."
    );
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Cmd::Caesar(args) => cmd_caesar(args),
        Cmd::Vigenere(args) => cmd_vigenere(args),
        Cmd::Info => cmd_info(),
    };

    process::exit(exit_code);
}
