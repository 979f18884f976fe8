use mdns_sd::{ServiceDaemon, ServiceEvent};

pub const SERVICE_TYPE: &str = "_token-art._tcp.local.";

/// Blocks until the token-art service resolves and returns its "addr:port".
pub fn find_token_server() -> Option<String> {
    let mdns = ServiceDaemon::new().expect("Failed to create daemon");

    let receiver = mdns.browse(SERVICE_TYPE).expect("Failed to browse");

    while let Ok(event) = receiver.recv() {
        match event {
            ServiceEvent::ServiceResolved(info) => {
                let addresses = info.get_addresses();
                let addr = addresses.iter().next().unwrap();
                mdns.shutdown().unwrap();
                let port = info.get_port();
                let s = format!("{addr}:{port}");
                return Some(s);
            }
            _ => {}
        }
    }

    mdns.shutdown().unwrap();
    None
}
