//! S3 Glacier vault operations behind a narrow client seam.
//!
//! The account id `-` addresses the account owning the credentials in use.

use aws_demos_core::requests::{CreateVaultRequest, DeleteVaultRequest, VaultCreated};

const OWN_ACCOUNT_ID: &str = "-";

pub trait VaultApi {
    fn create_vault(&self, request: &CreateVaultRequest) -> Result<VaultCreated, String>;
    fn delete_vault(&self, request: &DeleteVaultRequest) -> Result<(), String>;
}

pub struct GlacierVaultApi {
    glacier_client: aws_sdk_glacier::Client,
}

impl GlacierVaultApi {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            glacier_client: aws_sdk_glacier::Client::new(config),
        }
    }
}

impl VaultApi for GlacierVaultApi {
    fn create_vault(&self, request: &CreateVaultRequest) -> Result<VaultCreated, String> {
        let client = self.glacier_client.clone();
        let vault_name = request.vault_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .create_vault()
                    .account_id(OWN_ACCOUNT_ID)
                    .vault_name(vault_name)
                    .send()
                    .await
                    .map_err(|error| error.to_string())?;
                Ok(VaultCreated {
                    location: output.location().unwrap_or_default().to_string(),
                })
            })
        })
    }

    fn delete_vault(&self, request: &DeleteVaultRequest) -> Result<(), String> {
        let client = self.glacier_client.clone();
        let vault_name = request.vault_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_vault()
                    .account_id(OWN_ACCOUNT_ID)
                    .vault_name(vault_name)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string())
            })
        })
    }
}
