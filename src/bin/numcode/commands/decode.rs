use crate::error::{CliError, Result};
use crate::Context;
use clap::Args;

#[derive(Args)]
/// `decode` arguments.
pub struct CmdArgs {
    /// Values to decode.
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Pad with the zero symbol up to the maximum length.
    #[arg(long, overrides_with = "no_zero_fill")]
    pub zero_fill: bool,

    /// Do not pad, even when the settings file enables it.
    #[arg(long)]
    pub no_zero_fill: bool,

    /// Values are 8 hex digits of little-endian bytes.
    #[arg(long)]
    pub hex: bool,
}

impl CmdArgs {
    /// Flags first, then the settings file.
    fn zero_fill(&self, default: Option<bool>) -> bool {
        if self.zero_fill {
            true
        } else if self.no_zero_fill {
            false
        } else {
            default.unwrap_or(false)
        }
    }
}

/// Decode every value, stopping at the first failure.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let zero_fill = args.zero_fill(ctx.settings.zero_fill);
    ctx.out.info_diag(format!("zero fill: {zero_fill}"));

    for input in &args.values {
        let value = if args.hex {
            parse_hex(input)?
        } else {
            input
                .parse::<u32>()
                .map_err(|_| CliError::InvalidValue(input.clone()))?
        };
        let decoded = ctx.codec.decode(value, zero_fill)?;
        if decoded.is_empty() {
            ctx.out.warn_user(format!("{value} decodes to an empty code"));
        }
        ctx.out.info_user(decoded);
    }
    Ok(())
}

/// Parse 4 little-endian bytes written as hex.
fn parse_hex(input: &str) -> Result<u32> {
    let mut bytes = [0u8; 4];
    hex::decode_to_slice(input, &mut bytes)
        .map_err(|_| CliError::InvalidHexValue(input.to_string()))?;
    Ok(u32::from_le_bytes(bytes))
}
