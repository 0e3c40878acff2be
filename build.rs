use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// 最小字符集长度
const MIN_BASE: u64 = 10;
/// 最大字符集长度
const MAX_BASE: u64 = 64;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = match env::var("OUT_DIR") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("OUT_DIR not set: {err}");
            std::process::exit(1);
        }
    };
    let generated_path = Path::new(&out_dir).join("power_table.rs");

    if let Err(err) = fs::write(&generated_path, render_table()) {
        eprintln!(
            "failed to write power table {}: {err}",
            generated_path.display()
        );
        std::process::exit(1);
    }
}

/// 每个 base 只保留不超过 `u32::MAX` 的幂，行长度 - 1 即 `max_chars`.
fn render_table() -> String {
    let limit = u64::from(u32::MAX);
    let rows = MAX_BASE - MIN_BASE + 1;

    let mut out = String::new();
    out.push_str("/// Smallest supported character set length.\n");
    let _ = writeln!(out, "pub const MIN_BASE: usize = {MIN_BASE};");
    out.push_str("/// Largest supported character set length.\n");
    let _ = writeln!(out, "pub const MAX_BASE: usize = {MAX_BASE};");
    out.push_str("/// `POWER_TABLE[base - MIN_BASE][i] == base.pow(i)`, bounded by `u32::MAX`.\n");
    let _ = writeln!(out, "static POWER_TABLE: [&[u32]; {rows}] = [");

    for base in MIN_BASE..=MAX_BASE {
        let mut power = 1u64;
        let mut row = Vec::new();
        while power <= limit {
            row.push(group_digits(power));
            power *= base;
        }
        let _ = writeln!(out, "    // {base}");
        let _ = writeln!(out, "    &[{}],", row.join(", "));
    }

    out.push_str("];\n");
    out
}

/// 5 位以上的整数按千位插入 `_`，如 `4_096_000_000`.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() < 5 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(c);
    }
    out
}
