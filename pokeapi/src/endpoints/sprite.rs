use crate::{error::Error, Client};

pub struct SpriteEndpoints<'a> {
    client: &'a Client,
}

impl<'a> SpriteEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Download image bytes from an absolute sprite URL.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, Error> {
        self.client.get_bytes("sprite_download", url).await
    }
}
