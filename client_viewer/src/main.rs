use std::fs;

use console_cmd::ConsoleCmd;
use console_input::console_input_thread;
use token_art::{
    server_connection::spawn_server_connection_process, server_viewer_msg::ServerViewerMsg,
    viewer_server_msg::ViewerServerMsg,
};

mod console_cmd;
mod console_input;

#[tokio::main]
async fn main() {
    let (server_to_main, mut main_from_server) = tokio::sync::mpsc::channel(100);
    let to_server = spawn_server_connection_process(server_to_main);
    let mut console_receiver = console_input_thread();

    // Path of the save command whose reply has not arrived yet.
    let mut pending_save: Option<String> = None;

    loop {
        tokio::select! {
            console_str = console_receiver.recv() => {
                let Some(console_str) = console_str else { break };
                match ConsoleCmd::parse(console_str.trim()) {
                    Ok(cmd) => match cmd {
                        ConsoleCmd::Save(path) => {
                            pending_save = Some(path);
                            send_art_request(&to_server).await;
                        }
                        ConsoleCmd::Show => {
                            pending_save = None;
                            send_art_request(&to_server).await;
                        }
                        ConsoleCmd::Quit => {
                            let mut output_buffer = Vec::new();
                            ViewerServerMsg::Disconnect.pack(&mut output_buffer);
                            let _ = to_server.send(output_buffer).await;
                            break;
                        }
                    },
                    Err(err) => println!("err: {err}"),
                }
            }
            frame = main_from_server.recv() => {
                let Some(frame) = frame else { break };
                let msg = match ServerViewerMsg::decode(&frame) {
                    Ok(msg) => msg,
                    Err(e) => {
                        println!("error while decoding msg: {e}");
                        continue;
                    }
                };
                match msg {
                    ServerViewerMsg::AssignSessionId(session_id) => {
                        println!("connected with session id {session_id}");
                    }
                    ServerViewerMsg::TokenArt { token_id, svg } => {
                        match pending_save.take() {
                            Some(path) => println!("{}", save_art(&path, token_id, &svg)),
                            None => println!("{svg}"),
                        }
                    }
                }
            }
        }
    }
}

async fn send_art_request(to_server: &tokio::sync::mpsc::Sender<Vec<u8>>) {
    let mut output_buffer = Vec::new();
    ViewerServerMsg::RequestTokenArt(0).pack(&mut output_buffer);
    match to_server.send(output_buffer).await {
        Ok(_) => {}
        Err(e) => println!("error while sending to connection process: {e}"),
    }
}

/// Persists the art verbatim and reports the outcome as a console line; a
/// bad path must not take the client down.
fn save_art(path: &str, token_id: u32, svg: &str) -> String {
    match fs::write(path, svg) {
        Ok(_) => format!("saved art of token {token_id} to {path}"),
        Err(e) => format!("error while saving to {path}: {e}"),
    }
}
