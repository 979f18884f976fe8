use std::net::SocketAddr;
use std::sync::Arc;

use token_art::{
    server_viewer_msg::ServerViewerMsg, token::Token, viewer_server_msg::ViewerServerMsg,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

pub struct ViewerDb {
    pub session_id_counter: u32,
}

impl ViewerDb {
    pub fn new() -> ViewerDb {
        ViewerDb {
            session_id_counter: 0,
        }
    }

    pub fn new_viewer(&mut self, socket: TcpStream, addr: SocketAddr, token: Arc<Token>) {
        let session_id = self.session_id_counter;
        spawn_viewer_process(socket, token, session_id, addr);
        self.session_id_counter += 1;
        println!("accepted viewer: {session_id} {addr}");
    }
}

pub fn spawn_viewer_process(
    mut socket: TcpStream,
    token: Arc<Token>,
    session_id: u32,
    addr: SocketAddr,
) {
    tokio::spawn(async move {
        let mut static_buffer = [0; 1024];
        let mut input_buffer = Vec::new();

        {
            let mut output_buffer = Vec::new();
            let msg = ServerViewerMsg::AssignSessionId(session_id);
            msg.pack(&mut output_buffer);
            match socket.write_all(&output_buffer).await {
                Ok(_) => {}
                Err(e) => {
                    println!("disconnecting because of error while writing to viewer: {e}");
                    return;
                }
            }
        }

        loop {
            let len = match socket.read(&mut static_buffer).await {
                Ok(len) => len,
                Err(e) => {
                    println!("error while reading from socket: {e}");
                    break;
                }
            };
            if len == 0 {
                println!("viewer died: {session_id} {addr}");
                break;
            }
            input_buffer.extend(&static_buffer[..len]);

            let mut output_buffer: Vec<u8> = Vec::new();
            let keep_alive = drain_msgs(&mut input_buffer, &token, &mut output_buffer);

            if !output_buffer.is_empty() {
                match socket.write_all(&output_buffer).await {
                    Ok(_) => {}
                    Err(e) => {
                        println!("disconnecting because of error while writing to socket: {e}");
                        break;
                    }
                }
            }

            if !keep_alive {
                println!("viewer disconnected: {session_id} {addr}");
                break;
            }
        }
    });
}

/// Decodes every complete frame in the buffer and packs the replies.
/// Returns false when the session must end: an explicit disconnect, or an
/// undecodable frame, which drops the connection rather than leaving the
/// frame wedged at the head of the buffer.
pub fn drain_msgs(
    input_buffer: &mut Vec<u8>,
    token: &Token,
    output_buffer: &mut Vec<u8>,
) -> bool {
    while let Some((cursor, msg)) = ViewerServerMsg::dequeue_and_decode(input_buffer) {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                println!("error while decoding msg: {e}");
                return false;
            }
        };

        match msg {
            ViewerServerMsg::Disconnect => return false,
            ViewerServerMsg::RequestTokenArt(_requested_id) => {
                // One collection per instance: every query is answered with
                // the minted token's art.
                let msg = ServerViewerMsg::TokenArt {
                    token_id: token.token_id(),
                    svg: token.art(),
                };
                msg.pack(output_buffer);
            }
        }

        input_buffer.drain(..cursor);
    }
    true
}
