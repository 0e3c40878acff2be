use crate::error::Result;
use crate::Context;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
/// `encode` arguments.
pub struct CmdArgs {
    /// Codes to encode (first character is the least significant digit).
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Print the 4 little-endian bytes as hex instead of decimal.
    #[arg(long, conflicts_with = "json")]
    pub hex: bool,

    /// Print one JSON object per code.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
/// JSON line for one encoded code.
struct Encoded<'a> {
    /// Symbolic form.
    code: &'a numcode::Code,
    /// Numeric form.
    value: u32,
}

/// Encode every code, stopping at the first failure.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    for input in &args.codes {
        let code = ctx.codec.code(input)?;
        ctx.out
            .info_diag(format!("{input:?} digits {}", code.raw_string()));

        if args.json {
            let line = serde_json::to_string(&Encoded {
                code: &code,
                value: code.to_u32(),
            })?;
            ctx.out.info_user(line);
        } else if args.hex {
            ctx.out.info_user(hex::encode(code.to_le_bytes()));
        } else {
            ctx.out.info_user(code.to_u32());
        }
    }
    Ok(())
}
