use std::thread;

use serde_json::{json, Value};

/// Host description used as the `platform` section of a dump.
pub fn collect_environment_info() -> Value {
    let processors = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    json!({
        "operatingSystemType": std::env::consts::OS,
        "operatingSystemFamily": std::env::consts::FAMILY,
        "operatingSystemArchitecture": std::env::consts::ARCH,
        "availableProcessors": processors,
        "buildVersion": env!("CARGO_PKG_VERSION"),
    })
}
