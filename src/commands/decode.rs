use crate::core::obfuscation::Obfuscator;
use crate::core::storage::AppCtx;

/// Print the plain form of an obfuscated value.
pub fn run(ctx: &AppCtx, value: &str) -> Result<(), String> {
    let plain = ctx.obfuscator.decode(value);
    if plain.is_empty() && Obfuscator::is_encoded(value) {
        return Err("Invalid or corrupted value".to_string());
    }
    println!("{}", plain);
    Ok(())
}
