//! Simple command that prints one UUIDv4 string and two UUIDv5 strings derived by name
//!
//! Set `RUST_LOG=uuid45=trace` to see the library's log events on stderr.

use tracing_subscriber::EnvFilter;

const NAME: &str = "SomeRandomString";
const FIXED_NAMESPACE: &str = "1546058f-5a25-4334-85ae-e68f2a44bbaf";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let v4 = uuid45::uuid4();
    println!("v4: {}", v4);

    let generated = v4.encode();
    for namespace in [&generated as &str, FIXED_NAMESPACE] {
        match uuid45::uuid5(namespace, NAME) {
            Ok(v5) => println!("v5: {}", v5),
            Err(err) => tracing::error!(namespace, %err, "could not derive UUIDv5"),
        }
    }
}
