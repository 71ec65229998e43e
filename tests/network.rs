use ftpengine::config::{Config, ServerConfig};
use ftpengine::core_network::network::start_server;
use ftpengine::server::build_session_setup;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

async fn spawn_server(banner: Option<&str>) -> (std::net::SocketAddr, tempfile::TempDir) {
    let root = tempfile::tempdir().unwrap();
    let banner_file = banner.map(|text| {
        let path = root.path().join("banner.txt");
        std::fs::write(&path, text).unwrap();
        path.to_str().unwrap().to_string()
    });

    let config = Config {
        server: ServerConfig {
            listen_address: "127.0.0.1".to_string(),
            listen_port: 0,
            chroot_dir: root.path().to_str().unwrap().to_string(),
            min_homedir: "/pub".to_string(),
            allow_anonymous: true,
            banner_file,
            ..ServerConfig::default()
        },
    };
    let setup = Arc::new(build_session_setup(&config).unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(start_server(listener, setup));
    (addr, root)
}

#[tokio::test]
async fn test_greeting_comes_first() {
    let (addr, _root) = spawn_server(None).await;

    let stream = TcpStream::connect(addr).await.unwrap();
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap();
    assert_eq!(line, "220 ftpengine ready.\r\n");
}

#[tokio::test]
async fn test_banner_precedes_greeting() {
    let (addr, _root) = spawn_server(Some("Private system\nNo loitering\n")).await;

    let stream = TcpStream::connect(addr).await.unwrap();
    let mut reader = BufReader::new(stream);
    let mut lines = Vec::new();
    for _ in 0..3 {
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        lines.push(line);
    }
    assert_eq!(
        lines,
        vec![
            "220-Private system\r\n",
            "220-No loitering\r\n",
            "220 ftpengine ready.\r\n",
        ]
    );
}

#[tokio::test]
async fn test_anonymous_session_over_tcp() {
    let (addr, root) = spawn_server(None).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"USER anonymous\r\nPASS guest@example.com\r\nMKD incoming\r\nPWD\r\nQUIT\r\n")
        .await
        .unwrap();

    let mut output = String::new();
    stream.read_to_string(&mut output).await.unwrap();
    assert_eq!(
        output,
        "220 ftpengine ready.\r\n\
331 User name okay, need password.\r\n\
230 User logged in, proceed.\r\n\
257 \"/incoming\" directory created.\r\n\
257 \"/\" is the current directory.\r\n\
221 Goodbye.\r\n"
    );
    assert!(root.path().join("pub/incoming").is_dir());
}

#[tokio::test]
async fn test_connections_are_independent() {
    let (addr, _root) = spawn_server(None).await;

    let mut first = TcpStream::connect(addr).await.unwrap();
    let mut second = TcpStream::connect(addr).await.unwrap();

    first.write_all(b"USER anonymous\r\nPASS x\r\nQUIT\r\n").await.unwrap();
    second.write_all(b"PWD\r\nQUIT\r\n").await.unwrap();

    let mut output = String::new();
    second.read_to_string(&mut output).await.unwrap();
    assert_eq!(output, "220 ftpengine ready.\r\n530 Not logged in.\r\n221 Goodbye.\r\n");

    let mut output = String::new();
    first.read_to_string(&mut output).await.unwrap();
    assert!(output.ends_with("230 User logged in, proceed.\r\n221 Goodbye.\r\n"));
}
