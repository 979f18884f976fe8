use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use chrono::Utc;
use local_ip_address::local_ip;
use token_art::generator::AmbientContext;
use token_art::token::Token;
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::viewer_db::ViewerDb;

mod viewer_db;

#[tokio::main]
async fn main() {
    let port = 1313;
    let my_local_ip = local_ip().unwrap();

    let seed: u64 = env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("seed must be an integer"))
        .unwrap_or(0);

    // Ambient context is read once, at mint time.
    let ctx = AmbientContext {
        timestamp: Utc::now().timestamp(),
        minter_id: Uuid::new_v4().as_u128(),
    };
    let token = Token::mint(0, seed, ctx).unwrap();
    let token = Arc::new(token);

    let token_id = token.token_id().to_string();
    let seed_str = seed.to_string();
    let properties = [("token_id", token_id.as_str()), ("seed", seed_str.as_str())];
    let _mdns = discoverable_service::register_mdns(my_local_ip, port, "token-art", &properties);

    let addr = &SocketAddr::new(IpAddr::from(Ipv4Addr::UNSPECIFIED), port);
    let listener = TcpListener::bind(addr).await.unwrap();

    println!("Token server started at ip: {my_local_ip}:{port}, token 0 minted with seed {seed}");

    let mut viewer_db = ViewerDb::new();

    loop {
        let (socket, addr) = listener.accept().await.unwrap();
        viewer_db.new_viewer(socket, addr, token.clone());
    }
}
