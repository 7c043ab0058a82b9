//! Command handlers for the S3 Glacier vault examples.

use serde_json::json;

use aws_demos_core::outcome::CommandOutcome;

use crate::adapters::vaults::VaultApi;
use crate::runtime::requests::{CreateVaultRequest, DeleteVaultRequest};
use crate::telemetry::{log_command_error, log_command_info};

pub fn create_vault(request: &CreateVaultRequest, api: &impl VaultApi) -> CommandOutcome {
    match api.create_vault(request) {
        Ok(created) => {
            log_command_info(
                "create_vault",
                "command_succeeded",
                json!({
                    "vault_name": request.vault_name,
                    "location": created.location,
                }),
            );
            CommandOutcome::success(format!(
                "Successfully created vault {} at {}",
                request.vault_name, created.location
            ))
        }
        Err(error) => {
            log_command_error(
                "create_vault",
                "command_failed",
                json!({ "vault_name": request.vault_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error creating vault: {error}"))
        }
    }
}

pub fn delete_vault(request: &DeleteVaultRequest, api: &impl VaultApi) -> CommandOutcome {
    match api.delete_vault(request) {
        Ok(()) => {
            log_command_info(
                "delete_vault",
                "command_succeeded",
                json!({ "vault_name": request.vault_name }),
            );
            CommandOutcome::success(format!("Successfully deleted vault {}", request.vault_name))
        }
        Err(error) => {
            log_command_error(
                "delete_vault",
                "command_failed",
                json!({ "vault_name": request.vault_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error deleting vault: {error}"))
        }
    }
}
