use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

use crate::{dequeue::dequeue_msg, discover::find_token_server};

/// Spawns the connection process: discovers the token server over mDNS,
/// connects, forwards packed frames from main to the socket and complete
/// dequeued frames from the socket to main. Reconnects on socket errors.
pub fn spawn_server_connection_process(
    server_to_main: tokio::sync::mpsc::Sender<Vec<u8>>,
) -> tokio::sync::mpsc::Sender<Vec<u8>> {
    let (main_to_server, mut server_from_main) = tokio::sync::mpsc::channel::<Vec<u8>>(100);
    tokio::spawn(async move {
        loop {
            let addr = find_token_server().unwrap();
            println!("found token server at address: {addr}");

            let mut static_buffer = [0; 1024];
            let mut input_buffer = Vec::new();

            let mut stream = TcpStream::connect(addr).await.unwrap();

            'connected: loop {
                tokio::select! {
                    result = stream.read(&mut static_buffer) => {
                        let len = match result {
                            Ok(len) => len,
                            Err(e) => {
                                println!("error while reading from socket: {e}, restarting connection");
                                break 'connected;
                            }
                        };
                        if len == 0 {
                            println!("token server died");
                            break;
                        }
                        input_buffer.extend(&static_buffer[..len]);

                        while let Some((begin, end)) = dequeue_msg(&input_buffer) {
                            let bytes = input_buffer[begin..end].to_vec();
                            server_to_main.send(bytes).await.unwrap();
                            input_buffer.drain(..end);
                        }
                    }
                    result = server_from_main.recv() => {
                        let msg = match result {
                            Some(msg) => msg,
                            None => {
                                println!("main channel closed, stopping connection process");
                                break;
                            }
                        };

                        match stream.write_all(&msg).await {
                            Ok(_) => {},
                            Err(err) => {
                                println!("error while writing to stream: {err}, restarting connection");
                                break 'connected;
                            },
                        }
                    }
                }
            }
        }
    });
    main_to_server
}
