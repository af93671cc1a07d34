use super::{new_table, prompts, AppContext};
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::Cell;
use movie_catalog_config::{Config, API_KEY_ENV_VAR};
use serde_json::json;

pub async fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(output),
        ConfigCommands::Init { force } => init_config(force, output),
        ConfigCommands::ApiKey { key } => configure_api_key(key, output),
    }
}

fn show_config(output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let config_file = ctx.paths.config_file();
    let credentials = ctx.credentials()?;

    let (api_key, api_key_source) = match (std::env::var(API_KEY_ENV_VAR).ok(), credentials.get_api_key()) {
        (Some(key), _) if !key.trim().is_empty() => (mask_string(&key), API_KEY_ENV_VAR.to_string()),
        (_, Some(key)) => (mask_string(key), "credentials file".to_string()),
        _ => ("<not set>".to_string(), "-".to_string()),
    };
    let storage_path = ctx.paths.storage_dir().join(format!("{}.json", ctx.config.wishlist.storage_key));

    if !output.is_human() {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "config_file_exists": config_file.exists(),
            "catalog": {
                "base_url": ctx.config.catalog.base_url,
                "image_base_url": ctx.config.catalog.image_base_url,
                "language": ctx.config.catalog.language,
            },
            "wishlist": {
                "storage_key": ctx.config.wishlist.storage_key,
                "storage_path": storage_path.display().to_string(),
            },
            "api_key": api_key,
            "api_key_source": api_key_source,
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at {}; showing defaults. Run 'moviebrowser config init' to create it.",
            config_file.display()
        ));
    }

    let mut table = new_table(&["Setting", "Value"]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("Catalog URL"), Cell::new(&ctx.config.catalog.base_url)]);
    table.add_row(vec![Cell::new("Image URL"), Cell::new(&ctx.config.catalog.image_base_url)]);
    table.add_row(vec![
        Cell::new("Language"),
        Cell::new(ctx.config.catalog.language.as_deref().unwrap_or("<catalog default>")),
    ]);
    table.add_row(vec![Cell::new("API Key"), Cell::new(format!("{} ({})", api_key, api_key_source))]);
    table.add_row(vec![Cell::new("Wishlist Key"), Cell::new(&ctx.config.wishlist.storage_key)]);
    table.add_row(vec![Cell::new("Wishlist File"), Cell::new(storage_path.display())]);
    println!("{}", table);

    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let config_file = ctx.paths.config_file();

    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Use --force to overwrite it.",
            config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(format!("Configuration written to {}", config_file.display()));
    Ok(())
}

fn configure_api_key(key_arg: Option<String>, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;

    let key = match key_arg {
        Some(key) => key.trim().to_string(),
        None => prompts::prompt_secret("TMDB API key")?,
    };
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let mut credentials = ctx.credentials()?;
    credentials.set_api_key(key);
    credentials.save().map_err(|e| {
        eyre!(
            "Failed to save credentials to {}: {}",
            ctx.paths.credentials_file().display(),
            e
        )
    })?;

    output.success("API key saved");
    if std::env::var(API_KEY_ENV_VAR).is_ok() {
        output.warn(format!("{} is set and takes precedence over the stored key", API_KEY_ENV_VAR));
    }
    Ok(())
}

fn mask_string(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("abc"), "***");
        assert_eq!(mask_string("0123456789abcdef"), "01***ef");
    }
}
