//! Command handlers for the Elastic File System examples.

use serde_json::json;

use aws_demos_core::outcome::CommandOutcome;
use aws_demos_core::requests::{
    CreateFileSystemRequest, DeleteFileSystemRequest, DescribeFileSystemsRequest,
};

use crate::adapters::file_systems::FileSystemApi;
use crate::telemetry::{log_command_error, log_command_info};

pub fn create_file_system(
    request: &CreateFileSystemRequest,
    api: &impl FileSystemApi,
) -> CommandOutcome {
    match api.create_file_system(request) {
        Ok(created) => {
            log_command_info(
                "create_file_system",
                "command_succeeded",
                json!({
                    "creation_token": request.creation_token,
                    "file_system_id": created.file_system_id,
                }),
            );
            CommandOutcome::success(format!(
                "Successfully created file system {}",
                created.file_system_id
            ))
        }
        Err(error) => {
            log_command_error(
                "create_file_system",
                "command_failed",
                json!({ "creation_token": request.creation_token, "error": error }),
            );
            CommandOutcome::failure(format!("Error creating file system: {error}"))
        }
    }
}

pub fn delete_file_system(
    request: &DeleteFileSystemRequest,
    api: &impl FileSystemApi,
) -> CommandOutcome {
    match api.delete_file_system(request) {
        Ok(()) => {
            log_command_info(
                "delete_file_system",
                "command_succeeded",
                json!({ "file_system_id": request.file_system_id }),
            );
            CommandOutcome::success(format!(
                "Successfully deleted file system {}",
                request.file_system_id
            ))
        }
        Err(error) => {
            log_command_error(
                "delete_file_system",
                "command_failed",
                json!({ "file_system_id": request.file_system_id, "error": error }),
            );
            CommandOutcome::failure(format!("Error deleting file system: {error}"))
        }
    }
}

pub fn describe_file_systems(
    request: &DescribeFileSystemsRequest,
    api: &impl FileSystemApi,
) -> CommandOutcome {
    match api.describe_file_systems(request) {
        Ok(summaries) => {
            log_command_info(
                "describe_file_systems",
                "command_succeeded",
                json!({ "file_system_count": summaries.len() }),
            );
            let mut message = format!("Found {} file systems", summaries.len());
            for summary in &summaries {
                message.push_str(&format!(
                    "\n  {} ({})",
                    summary.file_system_id, summary.life_cycle_state
                ));
            }
            CommandOutcome::success(message)
        }
        Err(error) => {
            log_command_error(
                "describe_file_systems",
                "command_failed",
                json!({ "error": error }),
            );
            CommandOutcome::failure(format!("Error describing file systems: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use aws_demos_core::requests::{FileSystemCreated, FileSystemSummary};

    struct StubFileSystemApi {
        create_result: Result<FileSystemCreated, String>,
        delete_result: Result<(), String>,
        describe_result: Result<Vec<FileSystemSummary>, String>,
        deleted_ids: Mutex<Vec<String>>,
    }

    impl StubFileSystemApi {
        fn new() -> Self {
            Self {
                create_result: Ok(FileSystemCreated {
                    file_system_id: "fs-123".to_string(),
                }),
                delete_result: Ok(()),
                describe_result: Ok(Vec::new()),
                deleted_ids: Mutex::new(Vec::new()),
            }
        }

        fn deleted_ids(&self) -> Vec<String> {
            self.deleted_ids.lock().expect("poisoned mutex").clone()
        }
    }

    impl FileSystemApi for StubFileSystemApi {
        fn create_file_system(
            &self,
            _request: &CreateFileSystemRequest,
        ) -> Result<FileSystemCreated, String> {
            self.create_result.clone()
        }

        fn delete_file_system(&self, request: &DeleteFileSystemRequest) -> Result<(), String> {
            self.deleted_ids
                .lock()
                .expect("poisoned mutex")
                .push(request.file_system_id.clone());
            self.delete_result.clone()
        }

        fn describe_file_systems(
            &self,
            _request: &DescribeFileSystemsRequest,
        ) -> Result<Vec<FileSystemSummary>, String> {
            self.describe_result.clone()
        }
    }

    #[test]
    fn create_file_system_success_echoes_file_system_id() {
        let api = StubFileSystemApi::new();
        let request = CreateFileSystemRequest {
            creation_token: "token-1".to_string(),
        };

        let outcome = create_file_system(&request, &api);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Successfully created file system fs-123");
    }

    #[test]
    fn delete_file_system_failure_surfaces_collaborator_error() {
        let mut api = StubFileSystemApi::new();
        api.delete_result = Err("NotFound".to_string());
        let request = DeleteFileSystemRequest {
            file_system_id: "fs-123".to_string(),
        };

        let outcome = delete_file_system(&request, &api);

        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.message.contains("Error deleting file system"));
        assert!(outcome.message.contains("NotFound"));
    }

    #[test]
    fn delete_file_system_forwards_exact_file_system_id() {
        let api = StubFileSystemApi::new();
        let request = DeleteFileSystemRequest {
            file_system_id: "fs-123".to_string(),
        };

        let outcome = delete_file_system(&request, &api);

        assert!(outcome.is_success());
        assert_eq!(api.deleted_ids(), vec!["fs-123".to_string()]);
    }

    #[test]
    fn describe_file_systems_lists_each_summary_line() {
        let mut api = StubFileSystemApi::new();
        api.describe_result = Ok(vec![
            FileSystemSummary {
                file_system_id: "fs-123".to_string(),
                life_cycle_state: "available".to_string(),
            },
            FileSystemSummary {
                file_system_id: "fs-456".to_string(),
                life_cycle_state: "creating".to_string(),
            },
        ]);

        let outcome = describe_file_systems(&DescribeFileSystemsRequest, &api);

        assert!(outcome.is_success());
        assert_eq!(
            outcome.message,
            "Found 2 file systems\n  fs-123 (available)\n  fs-456 (creating)"
        );
    }
}
