pub mod catalog;
pub mod chord;
pub mod config;
pub mod contract;
pub mod dispatcher;
pub mod filter;
pub mod history;
pub mod listener;
pub mod logging;
pub mod model;
pub mod palette_state;
pub mod runtime;
pub mod service;
pub mod transport;

#[cfg(test)]
mod tests {
    mod filter_latency_test {
        include!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../tests/perf/filter_latency_test.rs"
        ));
    }
}
