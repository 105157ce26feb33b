use crate::{error::Error, model::resource::ResourceList, Client};

pub struct TypeEndpoints<'a> {
    client: &'a Client,
}

impl<'a> TypeEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List every elemental type name.
    pub async fn get_types(&self) -> Result<Vec<String>, Error> {
        let endpoint = "/type";
        let url = self.client.url(endpoint);

        let list: ResourceList = self.client.get_json(endpoint, &url).await?;

        Ok(list.results.into_iter().map(|t| t.name).collect())
    }
}
