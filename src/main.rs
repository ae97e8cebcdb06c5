use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use saltmill::{Alphabet, CRYPT, STANDARD, decode, encode, generate_salt, hash_password, verify_password};
use std::io::{self, Read, Write};
mod auth;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Table {
    /// RFC 1521 alphabet with '=' padding
    Standard,
    /// ./A-Za-z0-9 ordering, no padding
    Crypt,
}

impl Table {
    fn alphabet(self) -> &'static Alphabet {
        match self {
            Table::Standard => &STANDARD,
            Table::Crypt => &CRYPT,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "saltmill")]
#[command(
    version,
    about = "Bcrypt-style password hashing and base64 codec toolbox."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encodes bytes from the argument or stdin
    Encode {
        #[arg(long, value_enum, default_value = "standard")]
        alphabet: Table,
        data: Option<String>,
    },

    /// Decodes encoded text from the argument or stdin to raw bytes
    Decode {
        #[arg(long, value_enum, default_value = "standard")]
        alphabet: Table,
        text: Option<String>,
    },

    /// Prints a fresh salt record
    Gensalt {
        /// Cost exponent; the key schedule runs 2^cost rounds
        #[arg(long, default_value_t = 10)]
        cost: u32,
    },

    /// Hashes a password into a full record
    Hash {
        #[arg(long, default_value_t = 10)]
        cost: u32,

        /// Reuse an existing salt record instead of drawing a fresh salt
        #[arg(long, conflicts_with = "cost")]
        salt: Option<String>,
    },

    /// Checks a password against a stored record
    #[command(arg_required_else_help = true)]
    Verify { record: String },
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Commands::Encode { alphabet, data } => {
            let input = match data {
                Some(text) => text.into_bytes(),
                None => read_stdin()?,
            };
            println!("{}", encode(&input, alphabet.alphabet()));
        }
        Commands::Decode { alphabet, text } => {
            let input = match text {
                Some(text) => text.into_bytes(),
                None => read_stdin()?,
            };
            let input: Vec<u8> = input
                .into_iter()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            let bytes = decode(&input, alphabet.alphabet())?;
            io::stdout().write_all(&bytes)?;
        }
        Commands::Gensalt { cost } => {
            println!("{}", generate_salt(cost));
        }
        Commands::Hash { cost, salt } => {
            let password = auth::read_password()?;
            let salt = salt.unwrap_or_else(|| generate_salt(cost));
            let record = hash_password(password.as_bytes(), &salt)?;
            println!("{record}");
        }
        Commands::Verify { record } => {
            let password = auth::read_password()?;
            if verify_password(password.as_bytes(), &record) {
                println!("password accepted");
            } else {
                bail!("password rejected");
            }
        }
    }

    Ok(())
}
