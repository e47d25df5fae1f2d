use std::{
    env,
    io::{BufRead, BufReader, Write},
    net::TcpListener,
};

use multicopter::server::{Response, ServerState};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Optional fixed port as the first argument, otherwise let the OS choose
    let port: u16 = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 0,
    };

    let listener = TcpListener::bind(("127.0.0.1", port))?;
    println!("PORT={}", listener.local_addr()?.port());

    let (stream, addr) = listener.accept()?;
    info!("Client connected from {}", addr);

    let mut writer = stream.try_clone()?;
    let reader = BufReader::new(stream);
    let mut server = ServerState::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = server.handle_line(&line);
        if let Response::Error { error } = &response {
            warn!("Request '{}' failed: {}", line.trim(), error);
        }

        let response_str = serde_json::to_string(&response)? + "\n";
        writer.write_all(response_str.as_bytes())?;
        writer.flush()?;

        if server.is_closed() {
            break;
        }
    }

    info!("Connection closed");
    Ok(())
}
