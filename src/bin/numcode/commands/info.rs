use crate::Context;

/// Print the character set, base, maximum length and weights.
pub fn run(ctx: &Context) {
    let codec = &ctx.codec;
    ctx.out.info_user(format!("charset:   {:?}", codec.charset_str()));
    ctx.out.info_user(format!("base:      {}", codec.base()));
    ctx.out.info_user(format!("max chars: {}", codec.max_chars()));

    let weights = numcode::power::powers(codec.base()).unwrap_or_default();
    let weights: Vec<String> = weights.iter().map(u32::to_string).collect();
    ctx.out.info_user(format!("weights:   {}", weights.join(" ")));
}
