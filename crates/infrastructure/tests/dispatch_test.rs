//! Integration tests for the dispatch queue and the use cases it serves.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

use vellum_application::ports::{CodecError, FileSystem};
use vellum_application::use_cases::{
    LoadRequest, SaveCollection, SaveCollectionInput, SaveEnvironment, SaveRequest, ScanCollection,
};
use vellum_application::ApplicationError;
use vellum_domain::{CollectionRoot, Environment, RequestItem};
use vellum_infrastructure::{
    DispatchConfig, DispatchError, Dispatcher, Job, JobError, JobOutput, QueuedCodec,
    TokioFileSystem,
};

#[tokio::test]
async fn test_enqueue_job_built_from_operation_name() {
    let dispatcher: Dispatcher = Dispatcher::new(DispatchConfig::default());
    let job = Job::from_operation(
        "serializeRequest",
        json!({"name": "Ping", "seq": "7", "request": {"method": "get", "url": "/ping"}}),
    )
    .expect("valid payload");

    let output = dispatcher.enqueue(job).await.expect("serialize succeeds");
    let JobOutput::Text(text) = output else {
        panic!("expected text");
    };
    assert!(text.contains("seq: 7"));
    assert!(text.contains("get {\n  url: /ping\n"));
}

#[tokio::test]
async fn test_many_concurrent_parses_across_both_lanes() {
    let dispatcher: Dispatcher = Dispatcher::new(DispatchConfig::with_threshold(64));
    let small = "meta {\n  name: Small\n}".to_string();
    let large = format!("meta {{\n  name: Large\n}}\n\ndocs {{\n{}\n}}", "x".repeat(500));

    let pending: Vec<_> = (0..20)
        .map(|i| {
            let text = if i % 2 == 0 { small.clone() } else { large.clone() };
            dispatcher.enqueue(Job::ParseRequest(text))
        })
        .collect();
    let outputs = futures::future::join_all(pending).await;

    for (i, output) in outputs.into_iter().enumerate() {
        let JobOutput::Request(item) = output.expect("parse succeeds") else {
            panic!("expected a request");
        };
        let expected = if i % 2 == 0 { "Small" } else { "Large" };
        assert_eq!(item.name, expected);
    }
}

#[tokio::test]
async fn test_failed_parse_does_not_affect_neighbours() {
    let dispatcher: Dispatcher = Dispatcher::new(DispatchConfig::default());

    let bad = dispatcher.enqueue(Job::ParseRequest("nonsense {\n}".to_string()));
    let good = dispatcher.parse_request("get {\n  url: /ok\n}".to_string());

    let error = bad.await.expect_err("unknown keyword");
    assert!(matches!(
        error,
        DispatchError::Job {
            source: JobError::Parse(_),
            ..
        }
    ));
    assert_eq!(good.await.expect("parses").request.url, "/ok");
}

#[tokio::test]
async fn test_save_and_scan_collection_on_disk() {
    let temp = tempdir().expect("temp dir");
    let root = temp.path().join("api");
    let codec = QueuedCodec::start(DispatchConfig::default());
    let fs = TokioFileSystem::new();

    SaveCollection::new(codec.clone(), fs)
        .execute(
            &root.join("collection.vlm"),
            SaveCollectionInput {
                collection: CollectionRoot {
                    docs: "Shared".to_string(),
                    ..CollectionRoot::default()
                },
                is_folder: false,
            },
        )
        .await
        .expect("save collection");

    let mut environment = Environment::new();
    environment.add_variable("host", "localhost");
    SaveEnvironment::new(codec.clone(), fs)
        .execute(&root.join("environments").join("dev.vlm"), environment)
        .await
        .expect("save environment");

    let save_request = SaveRequest::new(codec.clone(), fs);
    save_request
        .execute(&root.join("ping.vlm"), RequestItem::new("Ping", "GET", "/ping"))
        .await
        .expect("save request");
    save_request
        .execute(
            &root.join("users").join("create.vlm"),
            RequestItem::new("Create", "POST", "/users"),
        )
        .await
        .expect("save request");
    fs.write_file(&root.join("users").join("broken.vlm"), b"headers {\n  oops\n}")
        .await
        .expect("write broken file");

    let loaded = LoadRequest::new(codec.clone(), fs)
        .execute(&root.join("ping.vlm"))
        .await
        .expect("load request");
    assert_eq!(loaded, RequestItem::new("Ping", "GET", "/ping"));

    let scan = ScanCollection::new(codec, fs)
        .execute(&root)
        .await
        .expect("scan");

    assert_eq!(scan.collection.expect("root").docs, "Shared");
    assert_eq!(scan.environments.len(), 1);
    assert_eq!(scan.environments[0].value.variables[0].value, "localhost");
    let names: Vec<&str> = scan.requests.iter().map(|f| f.value.name.as_str()).collect();
    assert_eq!(names, vec!["Ping", "Create"]);

    assert_eq!(scan.failures.len(), 1);
    assert!(scan.failures[0].path.ends_with(Path::new("users/broken.vlm")));
    let ApplicationError::Codec(CodecError::Parse(error)) = &scan.failures[0].error else {
        panic!("expected a parse failure");
    };
    assert_eq!(error.line, 2);
}
