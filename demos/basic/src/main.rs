mod base;
mod fallbacks;

use struct_defaults::{StructDefaults, StructDefaultsRef};

fn main() {
    // Only `verbose` is decided up front; the rest comes from the layers.
    let mut options = base::Options {
        host: None,
        port: Some(8080),
        verbose: false,
    };

    let user = fallbacks::UserOptions {
        host: Some("user.local".to_string()),
        port: Some(9090),
    };
    options.defaults_ref(&user);
    // The explicitly set port survives; the unset host gets filled.
    assert_eq!(options.host, Some("user.local".to_string()));
    assert_eq!(options.port, Some(8080));

    let system = fallbacks::SystemOptions {
        host: "system.local".to_string(),
        port: Some(22),
        verbose: true,
    };
    options.defaults(system);
    // Everything was already filled by now, so the system layer is a no-op.
    // `verbose` isn't `Option`al on the destination and is never touched.
    assert_eq!(options.host, Some("user.local".to_string()));
    assert_eq!(options.port, Some(8080));
    assert!(!options.verbose);

    println!(
        "host={:?} port={:?} verbose={}",
        options.host, options.port, options.verbose
    );
}
