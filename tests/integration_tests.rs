//! Integration tests for depbot
//!
//! These tests verify:
//! - File-based extraction and manifest routing
//! - The JSON wire shape of extracted records
//! - SCM delegation through the public API

use std::fs;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

mod extraction {
    use super::*;
    use depbot::extract::{extract_file, ExtractConfig};

    #[test]
    fn test_extract_devcontainer_from_path() {
        let temp_dir = create_test_dir();
        let dir = temp_dir.path().join(".devcontainer");
        fs::create_dir(&dir).unwrap();
        let manifest = dir.join("devcontainer.json");
        fs::write(
            &manifest,
            r#"{
                // base image with a comment
                "image": "reg.example.com/acme/devimage:2.1.0",
                "features": {
                    "ghcr.io/devcontainers/features/node:1": {"version": "22"},
                }
            }"#,
        )
        .unwrap();

        let result = extract_file(&manifest, &ExtractConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(result.deps.len(), 3);
        assert_eq!(result.deps[0].dep_name, "reg.example.com/acme/devimage");
        assert_eq!(result.deps[1].dep_name, "ghcr.io/devcontainers/features/node");
        assert_eq!(result.deps[2].dep_name, "node");
        assert_eq!(result.deps[2].current_value.as_deref(), Some("22"));
    }

    #[test]
    fn test_extract_empty_manifest_is_ok_none() {
        let temp_dir = create_test_dir();
        let manifest = temp_dir.path().join("devcontainer.json");
        fs::write(&manifest, "{}").unwrap();

        let result = extract_file(&manifest, &ExtractConfig::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_extract_unsupported_manifest_name_fails() {
        let temp_dir = create_test_dir();
        let manifest = temp_dir.path().join("package.json");
        fs::write(&manifest, "{}").unwrap();

        let result = extract_file(&manifest, &ExtractConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_missing_file_fails() {
        let temp_dir = create_test_dir();
        let manifest = temp_dir.path().join("devcontainer.json");

        let result = extract_file(&manifest, &ExtractConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_record_wire_shape() {
        let temp_dir = create_test_dir();
        let manifest = temp_dir.path().join("devcontainer.json");
        fs::write(
            &manifest,
            r#"{"features": {"ghcr.io/devcontainers/features/ruby:1": {}}}"#,
        )
        .unwrap();

        let result = extract_file(&manifest, &ExtractConfig::default())
            .unwrap()
            .unwrap();
        let json = serde_json::to_value(&result.deps).unwrap();

        assert_eq!(
            json[0]["depName"],
            "ghcr.io/devcontainers/features/ruby"
        );
        assert_eq!(json[0]["datasource"], "docker");
        assert_eq!(json[0]["depType"], "feature");
        assert_eq!(json[0]["pinDigests"], false);
        assert_eq!(json[1]["depName"], "ruby");
        assert_eq!(json[1]["datasource"], "ruby-version");
        assert_eq!(json[1]["skipReason"], "unspecified-version");
        // absent optionals are omitted, not null
        assert!(json[1].get("replaceString").is_none());
        assert!(json[1].get("depType").is_none());
    }
}

mod scm_delegation {
    use async_trait::async_trait;
    use depbot::error::GitError;
    use depbot::scm::{
        CommitSha, DefaultGitScm, GitWorker, Scm, FORK_UPSTREAM_REMOTE,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Worker counting fork-sync forwards
    struct CountingWorker {
        remotes: Vec<String>,
        sync_calls: AtomicUsize,
    }

    impl CountingWorker {
        fn new(remotes: &[&str]) -> Self {
            Self {
                remotes: remotes.iter().map(|r| r.to_string()).collect(),
                sync_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GitWorker for CountingWorker {
        async fn branch_exists(&self, _branch: &str) -> Result<bool, GitError> {
            Ok(false)
        }

        async fn get_branch_commit(
            &self,
            _branch: &str,
        ) -> Result<Option<CommitSha>, GitError> {
            Ok(None)
        }

        async fn is_branch_behind_base(
            &self,
            _branch: &str,
            _base: &str,
        ) -> Result<bool, GitError> {
            Ok(false)
        }

        async fn is_branch_conflicted(
            &self,
            _base: &str,
            _branch: &str,
        ) -> Result<bool, GitError> {
            Ok(false)
        }

        async fn is_branch_modified(
            &self,
            _branch: &str,
            _base: &str,
        ) -> Result<bool, GitError> {
            Ok(false)
        }

        async fn get_file_list(&self) -> Result<Vec<String>, GitError> {
            Ok(vec![])
        }

        async fn checkout_branch(&self, _branch: &str) -> Result<CommitSha, GitError> {
            Ok(CommitSha::new("sha"))
        }

        async fn commit_files(
            &self,
            _config: &depbot::scm::CommitFilesConfig,
        ) -> Result<Option<CommitSha>, GitError> {
            Ok(None)
        }

        async fn delete_branch(&self, _branch: &str) -> Result<(), GitError> {
            Ok(())
        }

        async fn merge_branch(&self, _branch: &str) -> Result<(), GitError> {
            Ok(())
        }

        async fn merge_to_local(&self, _branch: &str) -> Result<(), GitError> {
            Ok(())
        }

        async fn get_remotes(&self) -> Result<Vec<String>, GitError> {
            Ok(self.remotes.clone())
        }

        async fn sync_fork_with_upstream(&self, _branch: &str) -> Result<(), GitError> {
            self.sync_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fork_sync_gate_through_public_api() {
        let without_upstream = Arc::new(CountingWorker::new(&["origin"]));
        let scm = DefaultGitScm::new(without_upstream.clone());
        scm.sync_fork_with_upstream("main").await.unwrap();
        assert_eq!(without_upstream.sync_calls.load(Ordering::SeqCst), 0);

        let with_upstream =
            Arc::new(CountingWorker::new(&["origin", FORK_UPSTREAM_REMOTE]));
        let scm = DefaultGitScm::new(with_upstream.clone());
        scm.sync_fork_with_upstream("main").await.unwrap();
        assert_eq!(with_upstream.sync_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_scm_is_object_safe() {
        let worker = Arc::new(CountingWorker::new(&["origin"]));
        let scm: Box<dyn Scm> = Box::new(DefaultGitScm::new(worker));
        assert!(!scm.branch_exists("main").await.unwrap());
    }
}
