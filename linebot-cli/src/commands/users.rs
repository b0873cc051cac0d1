//! User and bot account commands.

use console::style;

use linebot_api::ApiClient;
use linebot_core::error::LbResult;

use super::print_json;
use crate::OutputFormat;

pub async fn profile(api: &ApiClient, user_id: &str, format: OutputFormat) -> LbResult<()> {
    let profile = api.get_profile(user_id).await?;
    match format {
        OutputFormat::Json => print_json(&profile)?,
        OutputFormat::Text => {
            println!("{} ({})", style(&profile.display_name).bold(), profile.user_id);
            if let Some(status) = &profile.status_message {
                println!("  status:  {status}");
            }
            if let Some(url) = &profile.picture_url {
                println!("  picture: {url}");
            }
        }
    }
    Ok(())
}

pub async fn followers(
    api: &ApiClient,
    limit: Option<u32>,
    start: Option<&str>,
    format: OutputFormat,
) -> LbResult<()> {
    let page = api.get_follower_ids(limit, start).await?;
    match format {
        OutputFormat::Json => print_json(&page)?,
        OutputFormat::Text => {
            if page.user_ids.is_empty() {
                println!("No followers found.");
            }
            for id in &page.user_ids {
                println!("{id}");
            }
            if let Some(next) = &page.next {
                println!("{} --start {}", style("more:").dim(), next);
            }
        }
    }
    Ok(())
}

pub async fn bot_info(api: &ApiClient, format: OutputFormat) -> LbResult<()> {
    let info = api.get_bot_info().await?;
    match format {
        OutputFormat::Json => print_json(&info)?,
        OutputFormat::Text => {
            println!("{} {}", style(&info.display_name).bold(), info.basic_id);
            println!("  user id:   {}", info.user_id);
            println!("  chat mode: {}", info.chat_mode.as_deref().unwrap_or("-"));
            println!("  read mode: {}", info.mark_as_read_mode.as_deref().unwrap_or("-"));
        }
    }
    Ok(())
}
