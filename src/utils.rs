use crate::config::API_URL;

pub fn make_api_url(resource: &str) -> String {
    format!("http://{}/{}", API_URL.as_str(), resource)
}
