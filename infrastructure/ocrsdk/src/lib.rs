pub mod client;
pub mod envelope;
pub mod recognition_service;
pub mod result_downloader;

#[cfg(test)]
mod test_support;
