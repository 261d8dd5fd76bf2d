use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, Barrier, Notify};

use mercury_core::transfer::{
    DirEntry, FileTransfer, Progress, ProgressCallback, TransferError, UploadFile,
};
use mercury_core::uploads::{UploadEvent, UploadQueue, UploadStatus};

/// Transfer stub that lists a fixed directory and succeeds immediately.
struct InstantTransfer {
    listed: Vec<String>,
}

#[async_trait]
impl FileTransfer for InstantTransfer {
    async fn upload_multi(
        &self,
        _destination_path: &str,
        files: &[UploadFile],
        on_progress: ProgressCallback,
    ) -> Result<(), TransferError> {
        let total: u64 = files.iter().map(|f| f.size).sum();
        on_progress(Progress { loaded: total, total });
        Ok(())
    }

    async fn list(&self, _path: &str) -> Result<Vec<DirEntry>, TransferError> {
        Ok(self
            .listed
            .iter()
            .map(|name| DirEntry {
                basename: name.clone(),
                is_directory: false,
            })
            .collect())
    }
}

/// Transfer stub that fails every upload with the given error.
struct FailingTransfer {
    error: fn() -> TransferError,
}

#[async_trait]
impl FileTransfer for FailingTransfer {
    async fn upload_multi(
        &self,
        _destination_path: &str,
        _files: &[UploadFile],
        _on_progress: ProgressCallback,
    ) -> Result<(), TransferError> {
        Err((self.error)())
    }

    async fn list(&self, _path: &str) -> Result<Vec<DirEntry>, TransferError> {
        Ok(Vec::new())
    }
}

/// Transfer stub that hands its progress callback to the test and blocks
/// until released, so intermediate states can be observed.
#[derive(Default)]
struct GatedTransfer {
    callback: Mutex<Option<ProgressCallback>>,
    release: Notify,
}

#[async_trait]
impl FileTransfer for GatedTransfer {
    async fn upload_multi(
        &self,
        _destination_path: &str,
        _files: &[UploadFile],
        on_progress: ProgressCallback,
    ) -> Result<(), TransferError> {
        *self.callback.lock().unwrap() = Some(on_progress);
        self.release.notified().await;
        Ok(())
    }

    async fn list(&self, _path: &str) -> Result<Vec<DirEntry>, TransferError> {
        Ok(Vec::new())
    }
}

/// Transfer stub whose directory listing blocks until every expected
/// caller has arrived, so enqueues can be forced to race.
struct RendezvousTransfer {
    listing: Barrier,
}

#[async_trait]
impl FileTransfer for RendezvousTransfer {
    async fn upload_multi(
        &self,
        _destination_path: &str,
        _files: &[UploadFile],
        _on_progress: ProgressCallback,
    ) -> Result<(), TransferError> {
        Ok(())
    }

    async fn list(&self, _path: &str) -> Result<Vec<DirEntry>, TransferError> {
        self.listing.wait().await;
        Ok(Vec::new())
    }
}

fn queue_with(
    transfer: Arc<dyn FileTransfer>,
    retention: Duration,
    max_size: Option<u64>,
) -> (UploadQueue, mpsc::UnboundedReceiver<UploadEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UploadQueue::new(transfer, tx, retention, max_size), rx)
}

/// Poll until the condition holds or a generous deadline passes.
async fn wait_for(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not met within deadline");
}

#[tokio::test]
async fn test_enqueue_assigns_collision_free_names() {
    let transfer = Arc::new(InstantTransfer {
        listed: vec![
            "file.ext".to_string(),
            "file (1).ext".to_string(),
            "file (2).ext".to_string(),
        ],
    });
    let (queue, _rx) = queue_with(transfer, Duration::from_secs(5), None);

    let records = queue
        .enqueue("/coll", vec![UploadFile::new("file.ext", 10)])
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].destination_filename, "file (3).ext");
    assert_eq!(records[0].status, UploadStatus::Initial);
    assert_eq!(records[0].progress, 0.0);
}

#[tokio::test]
async fn test_enqueue_deduplicates_within_batch_and_against_queue() {
    let transfer = Arc::new(InstantTransfer { listed: Vec::new() });
    let (queue, _rx) = queue_with(transfer, Duration::from_secs(5), None);

    let first = queue
        .enqueue(
            "/coll",
            vec![UploadFile::new("a.txt", 1), UploadFile::new("a.txt", 2)],
        )
        .await
        .unwrap();
    assert_eq!(first[0].destination_filename, "a.txt");
    assert_eq!(first[1].destination_filename, "a (1).txt");

    // A later batch for the same destination sees the queued names too
    let second = queue
        .enqueue("/coll", vec![UploadFile::new("a.txt", 3)])
        .await
        .unwrap();
    assert_eq!(second[0].destination_filename, "a (2).txt");

    // A different destination starts fresh
    let elsewhere = queue
        .enqueue("/other", vec![UploadFile::new("a.txt", 4)])
        .await
        .unwrap();
    assert_eq!(elsewhere[0].destination_filename, "a.txt");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_enqueues_for_same_destination_get_distinct_names() {
    // Both enqueues finish listing the directory before either inserts,
    // so name assignment alone must keep them from colliding.
    let transfer = Arc::new(RendezvousTransfer {
        listing: Barrier::new(2),
    });
    let (queue, _rx) = queue_with(transfer, Duration::from_secs(5), None);

    let first = tokio::spawn({
        let queue = queue.clone();
        async move {
            queue
                .enqueue("/coll", vec![UploadFile::new("a.txt", 1)])
                .await
                .unwrap()
        }
    });
    let second = tokio::spawn({
        let queue = queue.clone();
        async move {
            queue
                .enqueue("/coll", vec![UploadFile::new("a.txt", 2)])
                .await
                .unwrap()
        }
    });

    let (first, second) = (first.await.unwrap(), second.await.unwrap());
    let mut names = vec![
        first[0].destination_filename.clone(),
        second[0].destination_filename.clone(),
    ];
    names.sort();
    assert_eq!(names, vec!["a (1).txt".to_string(), "a.txt".to_string()]);
}

#[tokio::test]
async fn test_upload_lifecycle_with_progress_and_eviction() {
    let transfer = Arc::new(GatedTransfer::default());
    let (queue, mut rx) = queue_with(transfer.clone(), Duration::from_millis(100), None);

    let records = queue
        .enqueue("/coll", vec![UploadFile::new("data.bin", 2048)])
        .await
        .unwrap();
    let id = records[0].id;
    assert_eq!(queue.get(id).unwrap().status, UploadStatus::Initial);

    let runner = tokio::spawn({
        let queue = queue.clone();
        async move { queue.start_upload(id).await }
    });

    // The transfer is now in flight and holding our gate
    wait_for(|| transfer.callback.lock().unwrap().is_some()).await;
    let upload = queue.get(id).unwrap();
    assert_eq!(upload.status, UploadStatus::InProgress);
    assert_eq!(upload.progress, 0.0);

    // Intermediate progress is observable before completion
    let callback = transfer.callback.lock().unwrap().clone().unwrap();
    callback(Progress {
        loaded: 1024,
        total: 2048,
    });
    assert_eq!(queue.get(id).unwrap().progress, 50.0);

    transfer.release.notify_one();
    runner.await.unwrap();
    assert_eq!(queue.get(id).unwrap().status, UploadStatus::Finished);
    assert_eq!(rx.recv().await, Some(UploadEvent::Finished { id }));

    // Finished uploads are evicted after the retention period
    wait_for(|| queue.get(id).is_none()).await;
}

#[tokio::test]
async fn test_removal_before_eviction_timer_leaves_queue_unchanged() {
    let transfer = Arc::new(InstantTransfer { listed: Vec::new() });
    let (queue, _rx) = queue_with(transfer, Duration::from_millis(50), None);

    let records = queue
        .enqueue(
            "/coll",
            vec![UploadFile::new("a.txt", 1), UploadFile::new("b.txt", 1)],
        )
        .await
        .unwrap();
    let (removed, kept) = (records[0].id, records[1].id);

    queue.start_upload(removed).await;
    assert_eq!(queue.get(removed).unwrap().status, UploadStatus::Finished);

    // Remove the finished record while its eviction timer is still pending
    queue.remove_upload(removed);
    assert!(queue.get(removed).is_none());

    // The timer fires against an id that is no longer tracked
    tokio::time::sleep(Duration::from_millis(150)).await;
    let remaining = queue.uploads();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept);
    assert_eq!(remaining[0].status, UploadStatus::Initial);
}

#[tokio::test]
async fn test_conflict_failure_publishes_dedicated_event() {
    let transfer = Arc::new(FailingTransfer {
        error: || TransferError::Conflict("name held by deleted file".to_string()),
    });
    let (queue, mut rx) = queue_with(transfer, Duration::from_secs(5), None);

    let records = queue
        .enqueue("/coll", vec![UploadFile::new("a.txt", 1)])
        .await
        .unwrap();
    let id = records[0].id;

    queue.start_upload(id).await;

    assert_eq!(
        rx.recv().await,
        Some(UploadEvent::ConflictWithDeleted {
            file_count: 1,
            message: "name held by deleted file".to_string(),
        })
    );
    assert_eq!(rx.recv().await, Some(UploadEvent::Failed { id }));

    // The canned dialog text is worded for one or many files
    assert!(UploadEvent::conflict_message(1).starts_with("File or folder"));
    assert!(UploadEvent::conflict_message(3).starts_with("Some of the uploaded"));

    // Error records stay until removed explicitly
    assert_eq!(queue.get(id).unwrap().status, UploadStatus::Error);
    queue.remove_upload(id);
    assert!(queue.get(id).is_none());
}

#[tokio::test]
async fn test_generic_failure_moves_record_to_error() {
    let transfer = Arc::new(FailingTransfer {
        error: || TransferError::Network("connection reset".to_string()),
    });
    let (queue, mut rx) = queue_with(transfer, Duration::from_secs(5), None);

    let records = queue
        .enqueue("/coll", vec![UploadFile::new("a.txt", 1)])
        .await
        .unwrap();
    let id = records[0].id;

    queue.start_upload(id).await;

    assert_eq!(queue.get(id).unwrap().status, UploadStatus::Error);
    assert_eq!(rx.recv().await, Some(UploadEvent::Failed { id }));
}

#[tokio::test]
async fn test_invalid_path_segment_fails_without_touching_transport() {
    let transfer = Arc::new(GatedTransfer::default());
    let (queue, mut rx) = queue_with(transfer.clone(), Duration::from_secs(5), None);

    let mut file = UploadFile::new("name.txt", 1);
    file.relative_path = "nested/../name.txt".to_string();
    let records = queue.enqueue("/coll", vec![file]).await.unwrap();
    let id = records[0].id;

    queue.start_upload(id).await;

    assert_eq!(
        rx.recv().await,
        Some(UploadEvent::InvalidFilenames {
            names: vec!["..".to_string()],
        })
    );
    assert_eq!(rx.recv().await, Some(UploadEvent::Failed { id }));
    assert_eq!(queue.get(id).unwrap().status, UploadStatus::Error);
    assert!(transfer.callback.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_size_limit_rejects_oversized_batch() {
    let transfer = Arc::new(GatedTransfer::default());
    let (queue, mut rx) = queue_with(transfer.clone(), Duration::from_secs(5), Some(100));

    let records = queue
        .enqueue("/coll", vec![UploadFile::new("big.bin", 2048)])
        .await
        .unwrap();
    let id = records[0].id;

    queue.start_upload(id).await;

    assert_eq!(
        rx.recv().await,
        Some(UploadEvent::FileTooLarge {
            limit: "100 bytes".to_string(),
        })
    );
    assert_eq!(queue.get(id).unwrap().status, UploadStatus::Error);
    assert!(transfer.callback.lock().unwrap().is_none());
}
