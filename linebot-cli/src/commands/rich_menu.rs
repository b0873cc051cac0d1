//! Rich menu commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use linebot_api::ApiClient;
use linebot_core::error::{LbError, LbResult};

use super::{format_bytes, image_format_from_path, print_json};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum RichMenuAction {
    /// Upload the image of a rich menu.
    UploadImage {
        /// Rich menu ID.
        id: String,
        /// JPEG or PNG file.
        file: PathBuf,
        /// Image format (jpeg, png). Defaults to the file extension.
        #[arg(long)]
        image_format: Option<String>,
    },
    /// Download the image of a rich menu.
    DownloadImage {
        /// Rich menu ID.
        id: String,
        /// Output file.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Delete a rich menu.
    Delete {
        /// Rich menu ID.
        id: String,
    },
    /// Make a rich menu the default for all users.
    SetDefault {
        /// Rich menu ID.
        id: String,
    },
    /// Show the default rich menu ID.
    GetDefault,
    /// Clear the default rich menu.
    CancelDefault,
}

pub async fn run(api: &ApiClient, action: RichMenuAction, format: OutputFormat) -> LbResult<()> {
    match action {
        RichMenuAction::UploadImage { id, file, image_format } => {
            let image_format = image_format
                .or_else(|| image_format_from_path(&file))
                .ok_or_else(|| LbError::UnsupportedFormat(file.display().to_string()))?;
            let bytes = std::fs::read(&file)?;
            let size = bytes.len() as u64;
            api.upload_rich_menu_image(&id, bytes, &image_format).await?;
            println!(
                "{} uploaded {} ({}) to {}",
                style("✓").green(),
                file.display(),
                format_bytes(size),
                id
            );
        }
        RichMenuAction::DownloadImage { id, output } => {
            let bytes = api.download_rich_menu_image(&id).await?;
            std::fs::write(&output, &bytes)?;
            println!(
                "{} saved {} to {}",
                style("✓").green(),
                format_bytes(bytes.len() as u64),
                output.display()
            );
        }
        RichMenuAction::Delete { id } => {
            api.delete_rich_menu(&id).await?;
            println!("{} deleted {}", style("✓").green(), id);
        }
        RichMenuAction::SetDefault { id } => {
            api.set_default_rich_menu(&id).await?;
            println!("{} {} is now the default rich menu", style("✓").green(), id);
        }
        RichMenuAction::GetDefault => {
            let id = api.get_default_rich_menu_id().await?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "richMenuId": id }))?,
                OutputFormat::Text => println!("{id}"),
            }
        }
        RichMenuAction::CancelDefault => {
            api.cancel_default_rich_menu().await?;
            println!("{} default rich menu cleared", style("✓").green());
        }
    }
    Ok(())
}
