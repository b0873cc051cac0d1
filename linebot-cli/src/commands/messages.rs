//! Message commands.

use std::path::Path;

use console::style;

use linebot_api::ApiClient;
use linebot_core::error::LbResult;
use linebot_models::PushMessageRequest;

use super::{format_bytes, print_json};
use crate::OutputFormat;

pub async fn push(api: &ApiClient, to: String, texts: Vec<String>, format: OutputFormat) -> LbResult<()> {
    let request = PushMessageRequest::texts(to, texts);
    api.push_message(&request).await?;

    match format {
        OutputFormat::Json => print_json(&request)?,
        OutputFormat::Text => {
            println!(
                "{} pushed {} message(s) to {}",
                style("✓").green(),
                request.messages.len(),
                style(&request.to).bold()
            );
        }
    }
    Ok(())
}

pub async fn download_content(api: &ApiClient, message_id: &str, output: &Path) -> LbResult<()> {
    let bytes = api.get_message_content(message_id).await?;
    std::fs::write(output, &bytes)?;
    println!(
        "{} saved {} to {}",
        style("✓").green(),
        format_bytes(bytes.len() as u64),
        output.display()
    );
    Ok(())
}
