mod helper;

use mockito::Server;
use serde_json::json;
use tempfile::TempDir;

use nodeshelf::install::error::InstallError;
use nodeshelf::install::platform::Platform;
use nodeshelf::install::{InstallOutcome, Installer};
use nodeshelf::store::Store;
use nodeshelf::version::identifier::VersionId;
use nodeshelf::version::registries::DistIndexRegistry;
use nodeshelf::version::resolver::VersionResolver;

use helper::{config_in, manifest_for, node_archive};

#[tokio::test]
async fn installs_latest_nightly_resolved_from_index() {
    let temp_dir = TempDir::new().unwrap();
    let mut server = Server::new_async().await;
    let version = "v9.0.0-nightly20170915";
    let filename = format!("node-{}-linux-x64.tar.gz", version);
    let archive = node_archive(version);

    let index_mock = server
        .mock("GET", "/nightly/index.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"version": "v9.0.0-nightly20170915", "date": "2017-09-15"},
                {"version": "v9.0.0-nightly20170914", "date": "2017-09-14"}
            ])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", format!("/nightly/{}/SHASUMS256.txt", version).as_str())
        .with_status(200)
        .with_body(manifest_for(&filename, &archive))
        .create_async()
        .await;
    server
        .mock("GET", format!("/nightly/{}/{}", version, filename).as_str())
        .with_status(200)
        .with_body(&archive)
        .create_async()
        .await;

    let config = config_in(&temp_dir, &server.url());
    let store = Store::new(&config);
    store.initialize().unwrap();

    let registry = DistIndexRegistry::new(&config.download_root);
    let id = VersionResolver::new()
        .resolve("nightly/latest", Some(&registry))
        .await
        .unwrap();
    assert_eq!(id, VersionId::new("nightly", version));

    let outcome = Installer::new(&config, &store)
        .with_platform(Platform::new("linux", "x86_64"))
        .install(&id)
        .await
        .unwrap();

    index_mock.assert_async().await;
    assert_eq!(outcome, InstallOutcome::Installed(id.clone()));
    assert_eq!(store.current().unwrap(), Some(id.clone()));

    let again = Installer::new(&config, &store)
        .with_platform(Platform::new("linux", "x86_64"))
        .install(&id)
        .await
        .unwrap();
    assert_eq!(again, InstallOutcome::AlreadyInstalled(id));
}

#[tokio::test]
async fn missing_release_reports_transport_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/release/v99.0.0/SHASUMS256.txt")
        .with_status(404)
        .create_async()
        .await;

    let config = config_in(&temp_dir, &server.url());
    let store = Store::new(&config);
    store.initialize().unwrap();
    let id = VersionResolver::new().resolve("99", None).await.unwrap();

    let result = Installer::new(&config, &store)
        .with_platform(Platform::new("linux", "x86_64"))
        .install(&id)
        .await;

    assert!(matches!(result, Err(InstallError::Transport { status: 404, .. })));
    assert!(store.list_installed().unwrap().is_empty());
    assert_eq!(store.current().unwrap(), None);
}
