use crate::core::storage::AppCtx;
use crate::core::utils::mask_secret;
use console::style;
use dialoguer::Password;

/// Prompt for API keys and store them obfuscated.
pub fn set(ctx: &AppCtx, openai: bool, gemini: bool) -> Result<(), String> {
    let (openai, gemini) = if !openai && !gemini {
        (true, true)
    } else {
        (openai, gemini)
    };

    let mut keys = ctx.load_keys().map_err(|e| e.to_string())?;
    if openai {
        keys.openai = Password::new()
            .with_prompt("OpenAI API key (empty to clear)")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| format!("Input error: {}", e))?
            .trim()
            .to_string();
    }
    if gemini {
        keys.gemini = Password::new()
            .with_prompt("Google Gemini API key (empty to clear)")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| format!("Input error: {}", e))?
            .trim()
            .to_string();
    }

    ctx.save_keys(&keys).map_err(|e| e.to_string())?;
    println!("{}", style("API keys saved").green().bold());
    Ok(())
}

/// Print stored keys, masked.
pub fn show(ctx: &AppCtx) -> Result<(), String> {
    let keys = ctx.load_keys().map_err(|e| e.to_string())?;
    let base_url = ctx.load_base_url().map_err(|e| e.to_string())?;
    println!("{}: {}", style("OpenAI").cyan(), mask_secret(&keys.openai));
    println!("{}: {}", style("Gemini").cyan(), mask_secret(&keys.gemini));
    println!(
        "{}: {}",
        style("OpenAI base URL").cyan(),
        base_url.as_deref().unwrap_or("(default)")
    );
    Ok(())
}

/// Show, set or clear the OpenAI base URL override.
pub fn base_url(ctx: &AppCtx, url: Option<&str>, clear: bool) -> Result<(), String> {
    if clear {
        ctx.save_base_url(None).map_err(|e| e.to_string())?;
        println!("{}", style("OpenAI base URL cleared").green().bold());
        return Ok(());
    }
    match url {
        Some(url) => {
            ctx.save_base_url(Some(url)).map_err(|e| e.to_string())?;
            println!("{}", style("OpenAI base URL saved").green().bold());
        }
        None => {
            let current = ctx.load_base_url().map_err(|e| e.to_string())?;
            println!("{}", current.as_deref().unwrap_or("(default)"));
        }
    }
    Ok(())
}
