use crate::core::models::available_models;
use console::style;

/// List the selectable models grouped by provider.
pub fn run() -> Result<(), String> {
    println!("{}", style("Available Models").bold().underlined());
    for model in available_models() {
        println!(
            "  - {} {} ({})",
            style(model.id).green(),
            model.name,
            style(model.provider).yellow()
        );
    }
    Ok(())
}
