use riscv_pte::{EncodedEntry, PteError, encode_text};

/// Fallback program name when `argv[0]` is missing.
pub const PROGRAM_NAME: &str = "riscv-pte-util";

/// Number of positional arguments: mode, address, flags.
const ARG_COUNT: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("expected 3 arguments, got {0}")]
    Usage(usize),
    #[error(transparent)]
    Pte(#[from] PteError),
}

impl CliError {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::Pte(_) => 2,
        }
    }
}

/// The three positional arguments, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub mode: String,
    pub address: String,
    pub flags: String,
}

impl Args {
    /// Takes the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match <[String; ARG_COUNT]>::try_from(args) {
            Ok([mode, address, flags]) => Ok(Self {
                mode,
                address,
                flags,
            }),
            Err(args) => Err(CliError::Usage(args.len())),
        }
    }
}

/// Two usage lines, each newline-terminated.
pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} (sv32|sv39|sv48) <pa> <DAGUXWRV>\n\
         usage: {program} sv39 0x80000000 URWV\n"
    )
}

/// Encodes the entry and renders the result line (without newline).
pub fn run(args: &Args) -> Result<String, CliError> {
    let encoded = encode_text(&args.mode, &args.address, &args.flags)?;
    Ok(format_line(&args.mode, &encoded))
}

/// `mode=<mode> pa=0x<pa> flags=0x<flags> pte_val=0x<pte>`, mode echoed verbatim.
pub fn format_line(mode: &str, encoded: &EncodedEntry) -> String {
    format!(
        "mode={mode} pa=0x{:x} flags=0x{:x} pte_val=0x{:x}",
        encoded.address, encoded.flags, encoded.entry
    )
}
