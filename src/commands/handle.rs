use crate::api::http::handle_generate;
use crate::core::storage::AppCtx;
use std::fs;
use std::io::Read;

/// Feed a raw request body through the generate-content contract.
pub async fn run(ctx: &AppCtx, file: Option<&str>) -> Result<(), String> {
    let body = match file {
        Some(path) => fs::read(path).map_err(|e| format!("Unable to read {}: {}", path, e))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("Unable to read stdin: {}", e))?;
            buf
        }
    };

    let orchestrator = ctx.orchestrator();
    let response = handle_generate(&orchestrator, &body).await;
    let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
