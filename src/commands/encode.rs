use crate::core::storage::AppCtx;

/// Print the obfuscated form of `value`.
pub fn run(ctx: &AppCtx, value: &str) -> Result<(), String> {
    println!("{}", ctx.obfuscator.encode(value));
    Ok(())
}
