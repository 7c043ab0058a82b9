//! Command handlers for the S3 bucket and object examples.

use std::fs;

use serde_json::json;

use aws_demos_core::outcome::CommandOutcome;

use crate::adapters::buckets::BucketApi;
use crate::runtime::requests::{
    CreateBucketRequest, DeleteBucketRequest, ListBucketsRequest, PutEncryptedObjectRequest,
};
use crate::telemetry::{log_command_error, log_command_info};

pub fn create_bucket(request: &CreateBucketRequest, api: &impl BucketApi) -> CommandOutcome {
    match api.create_bucket(request) {
        Ok(()) => {
            log_command_info(
                "create_bucket",
                "command_succeeded",
                json!({ "bucket_name": request.bucket_name }),
            );
            CommandOutcome::success(format!(
                "Successfully created bucket {}",
                request.bucket_name
            ))
        }
        Err(error) => {
            log_command_error(
                "create_bucket",
                "command_failed",
                json!({ "bucket_name": request.bucket_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error creating bucket: {error}"))
        }
    }
}

pub fn delete_bucket(request: &DeleteBucketRequest, api: &impl BucketApi) -> CommandOutcome {
    match api.delete_bucket(request) {
        Ok(()) => {
            log_command_info(
                "delete_bucket",
                "command_succeeded",
                json!({ "bucket_name": request.bucket_name }),
            );
            CommandOutcome::success(format!(
                "Successfully deleted bucket {}",
                request.bucket_name
            ))
        }
        Err(error) => {
            log_command_error(
                "delete_bucket",
                "command_failed",
                json!({ "bucket_name": request.bucket_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error deleting bucket: {error}"))
        }
    }
}

pub fn list_buckets(request: &ListBucketsRequest, api: &impl BucketApi) -> CommandOutcome {
    match api.list_buckets(request) {
        Ok(summaries) => {
            log_command_info(
                "list_buckets",
                "command_succeeded",
                json!({ "bucket_count": summaries.len() }),
            );
            let mut message = format!("Found {} buckets", summaries.len());
            for summary in &summaries {
                message.push_str(&format!("\n  {}", summary.name));
            }
            CommandOutcome::success(message)
        }
        Err(error) => {
            log_command_error("list_buckets", "command_failed", json!({ "error": error }));
            CommandOutcome::failure(format!("Error listing buckets: {error}"))
        }
    }
}

/// Reads the local file, then issues the single upload call with AES-256
/// server-side encryption. A read failure is an operation failure, not a
/// usage error: the argument count was valid.
pub fn put_encrypted_object(
    request: &PutEncryptedObjectRequest,
    api: &impl BucketApi,
) -> CommandOutcome {
    let body = match fs::read(&request.file_name) {
        Ok(value) => value,
        Err(error) => {
            log_command_error(
                "put_encrypted_object",
                "command_failed",
                json!({ "file_name": request.file_name, "error": error.to_string() }),
            );
            return CommandOutcome::failure(format!(
                "Error reading {}: {error}",
                request.file_name
            ));
        }
    };

    match api.put_encrypted_object(request, &body) {
        Ok(()) => {
            log_command_info(
                "put_encrypted_object",
                "command_succeeded",
                json!({
                    "bucket_name": request.bucket_name,
                    "file_name": request.file_name,
                    "body_bytes": body.len(),
                }),
            );
            CommandOutcome::success(format!(
                "Successfully uploaded {} to {} with AES-256 encryption",
                request.file_name, request.bucket_name
            ))
        }
        Err(error) => {
            log_command_error(
                "put_encrypted_object",
                "command_failed",
                json!({ "bucket_name": request.bucket_name, "error": error }),
            );
            CommandOutcome::failure(format!("Error uploading object: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use super::*;
    use crate::runtime::requests::BucketSummary;

    struct StubBucketApi {
        create_result: Result<(), String>,
        delete_result: Result<(), String>,
        list_result: Result<Vec<BucketSummary>, String>,
        put_result: Result<(), String>,
        uploaded_bodies: Mutex<Vec<Vec<u8>>>,
    }

    impl StubBucketApi {
        fn new() -> Self {
            Self {
                create_result: Ok(()),
                delete_result: Ok(()),
                list_result: Ok(Vec::new()),
                put_result: Ok(()),
                uploaded_bodies: Mutex::new(Vec::new()),
            }
        }

        fn uploaded_bodies(&self) -> Vec<Vec<u8>> {
            self.uploaded_bodies.lock().expect("poisoned mutex").clone()
        }
    }

    impl BucketApi for StubBucketApi {
        fn create_bucket(&self, _request: &CreateBucketRequest) -> Result<(), String> {
            self.create_result.clone()
        }

        fn delete_bucket(&self, _request: &DeleteBucketRequest) -> Result<(), String> {
            self.delete_result.clone()
        }

        fn list_buckets(
            &self,
            _request: &ListBucketsRequest,
        ) -> Result<Vec<BucketSummary>, String> {
            self.list_result.clone()
        }

        fn put_encrypted_object(
            &self,
            _request: &PutEncryptedObjectRequest,
            body: &[u8],
        ) -> Result<(), String> {
            self.uploaded_bodies
                .lock()
                .expect("poisoned mutex")
                .push(body.to_vec());
            self.put_result.clone()
        }
    }

    #[test]
    fn create_bucket_success_renders_confirmation() {
        let api = StubBucketApi::new();
        let request = CreateBucketRequest {
            bucket_name: "archive-bucket".to_string(),
        };

        let outcome = create_bucket(&request, &api);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Successfully created bucket archive-bucket");
    }

    #[test]
    fn delete_bucket_failure_surfaces_collaborator_error() {
        let mut api = StubBucketApi::new();
        api.delete_result = Err("BucketNotEmpty".to_string());
        let request = DeleteBucketRequest {
            bucket_name: "archive-bucket".to_string(),
        };

        let outcome = delete_bucket(&request, &api);

        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.message, "Error deleting bucket: BucketNotEmpty");
    }

    #[test]
    fn list_buckets_lists_each_bucket_name() {
        let mut api = StubBucketApi::new();
        api.list_result = Ok(vec![
            BucketSummary {
                name: "alpha".to_string(),
            },
            BucketSummary {
                name: "beta".to_string(),
            },
        ]);

        let outcome = list_buckets(&ListBucketsRequest, &api);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Found 2 buckets\n  alpha\n  beta");
    }

    #[test]
    fn put_encrypted_object_uploads_file_contents() {
        let directory = tempfile::tempdir().expect("tempdir should create");
        let file_path = directory.path().join("report.csv");
        let mut file = fs::File::create(&file_path).expect("file should create");
        file.write_all(b"a,b,c").expect("file should write");

        let api = StubBucketApi::new();
        let request = PutEncryptedObjectRequest {
            bucket_name: "archive-bucket".to_string(),
            file_name: file_path.to_string_lossy().into_owned(),
        };

        let outcome = put_encrypted_object(&request, &api);

        assert!(outcome.is_success());
        assert!(outcome.message.contains("with AES-256 encryption"));
        assert_eq!(api.uploaded_bodies(), vec![b"a,b,c".to_vec()]);
    }

    #[test]
    fn put_encrypted_object_missing_file_fails_without_upload() {
        let api = StubBucketApi::new();
        let request = PutEncryptedObjectRequest {
            bucket_name: "archive-bucket".to_string(),
            file_name: "/nonexistent/report.csv".to_string(),
        };

        let outcome = put_encrypted_object(&request, &api);

        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.message.contains("Error reading /nonexistent/report.csv"));
        assert!(api.uploaded_bodies().is_empty());
    }
}
