mod http_worker_client;

pub use http_worker_client::HttpWorkerClient;
