//! Parse a configuration document, read a few values, and write it back.
//!
//! Run with: `cargo run --example simple`

use json_config::{parse, to_string};

fn main() {
    let input = br#"
    {
        // where to listen
        "host": "0.0.0.0",
        "port": 8080,
        "tls": {
            "enabled": true,
            "cert": "/etc/certs/server.pem",
        },
        "upstreams": ["10.0.0.1", "10.0.0.2"],
    }
    "#;

    let root = parse(input);

    let host = root.get("host").map(|n| n.to_text()).unwrap_or("127.0.0.1");
    let port = root.get("port").map(|n| n.to_number()).unwrap_or_default();
    println!("binding {host}:{port}");

    if let Some(tls) = root.get("tls") {
        if tls.get("enabled").map(|n| n.to_boolean()).unwrap_or(false) {
            println!("tls cert: {}", tls.get("cert").map(|n| n.to_text()).unwrap_or(""));
        }
    }

    if let Some(upstreams) = root.get("upstreams").and_then(|n| n.to_array()) {
        for upstream in upstreams {
            println!("upstream: {}", upstream.to_text());
        }
    }

    // Comments and trailing commas are gone; the document is plain JSON now.
    println!("---\n{}", to_string(&root));
}
