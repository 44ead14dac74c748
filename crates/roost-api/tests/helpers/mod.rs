//! Shared fixture: assemble the full application over an in-memory
//! store and serve it on an ephemeral port.

use std::sync::Arc;

use roost_api::{router, upload::UploadGateway, AppState};
use roost_catalog::{ContactIntake, PropertyCatalog};
use roost_store::{Store, StoreConfig};

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    _upload_dir: tempfile::TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_app(admin_code: Option<&str>) -> TestApp {
    let upload_dir = tempfile::tempdir().unwrap();
    let store = Store::open(StoreConfig::Memory).await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let uploads = UploadGateway::new(upload_dir.path(), base_url.clone());
    uploads.ensure_dir().await.unwrap();

    let state = AppState {
        catalog: Arc::new(PropertyCatalog::new(store.properties)),
        intake: Arc::new(ContactIntake::new(store.contacts)),
        uploads: Arc::new(uploads),
        admin_code: admin_code.map(String::from),
    };
    let app = router(state, upload_dir.path());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url,
        client: reqwest::Client::new(),
        _upload_dir: upload_dir,
    }
}
