// Re-export network modules
pub mod api_client;
pub mod config;
pub mod transport;
pub mod workx_api;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use config::ApiConfig;
pub use transport::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, Method, RequestBody};
pub use workx_api::{parse_page_count, quote_price, view_task};
