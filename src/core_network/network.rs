use crate::channel::Channel;
use crate::core_auth::Authenticator;
use crate::core_network::dispatcher::Dispatcher;
use anyhow::Result;
use log::{error, info};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};

/// Everything a new connection needs, shared read-only by all of them.
pub struct SessionSetup {
    pub virtual_root: PathBuf,
    pub greeting: String,
    pub authenticator: Arc<dyn Authenticator>,
    pub dispatcher: Dispatcher,
}

pub async fn start_server(listener: TcpListener, setup: Arc<SessionSetup>) -> Result<()> {
    info!("Server listening on {}", listener.local_addr()?);

    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Error accepting connection: {}", e);
                continue;
            }
        };
        info!("New connection from {}", addr);

        let setup = Arc::clone(&setup);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, addr, setup).await {
                error!("Connection error for {}: {:?}", addr, e);
            }
            info!("Connection closed for {}", addr);
        });
    }
}

/// Greets the client, then hands the connection to the dispatcher.
pub async fn handle_connection(
    socket: TcpStream,
    addr: SocketAddr,
    setup: Arc<SessionSetup>,
) -> Result<()> {
    let (read_half, write_half) = socket.into_split();
    let mut reader = BufReader::new(read_half);

    let mut channel = Channel::new(
        addr.to_string(),
        Box::new(write_half),
        setup.virtual_root.clone(),
        Arc::clone(&setup.authenticator),
    );

    channel.send(&setup.greeting).await?;
    setup.dispatcher.run(&mut reader, &mut channel).await
}
