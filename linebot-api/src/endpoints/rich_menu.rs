//! Rich menu endpoints.

use linebot_core::constants::paths;
use linebot_core::error::LbResult;
use linebot_models::RichMenuIdResponse;

use crate::client::{path_segment, ApiClient};

fn content_path(rich_menu_id: &str) -> LbResult<String> {
    Ok(format!("/v2/bot/richmenu/{}/content", path_segment(rich_menu_id)?))
}

impl ApiClient {
    /// Upload the image of a rich menu. `format` is "jpeg" or "png".
    pub async fn upload_rich_menu_image(
        &self,
        rich_menu_id: &str,
        image: Vec<u8>,
        format: &str,
    ) -> LbResult<()> {
        self.post_image(&content_path(rich_menu_id)?, image, format)
            .await
    }

    /// Download the image of a rich menu.
    pub async fn download_rich_menu_image(&self, rich_menu_id: &str) -> LbResult<Vec<u8>> {
        self.get_bytes(&content_path(rich_menu_id)?).await
    }

    /// Delete a rich menu.
    pub async fn delete_rich_menu(&self, rich_menu_id: &str) -> LbResult<()> {
        let id = path_segment(rich_menu_id)?;
        self.delete(&format!("/v2/bot/richmenu/{id}")).await
    }

    /// Make a rich menu the default for all users.
    pub async fn set_default_rich_menu(&self, rich_menu_id: &str) -> LbResult<()> {
        let id = path_segment(rich_menu_id)?;
        self.post_empty(&format!("{}/{id}", paths::DEFAULT_RICH_MENU))
            .await
    }

    /// Get the ID of the default rich menu.
    pub async fn get_default_rich_menu_id(&self) -> LbResult<String> {
        let resp: RichMenuIdResponse = self.get_json(paths::DEFAULT_RICH_MENU).await?;
        Ok(resp.rich_menu_id)
    }

    /// Clear the default rich menu.
    pub async fn cancel_default_rich_menu(&self) -> LbResult<()> {
        self.delete(paths::DEFAULT_RICH_MENU).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_path() {
        assert_eq!(
            content_path("richmenu-88c0").unwrap(),
            "/v2/bot/richmenu/richmenu-88c0/content"
        );
        assert_eq!(
            content_path("a/b").unwrap(),
            "/v2/bot/richmenu/a%2Fb/content"
        );
        assert!(content_path("..").is_err());
    }
}
