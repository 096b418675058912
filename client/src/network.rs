use log::{debug, info};
use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

/// A connection to a Wordle server
pub struct Client {
    stream: TcpStream,
    server_addr: SocketAddr,
}

impl Client {
    pub async fn connect(server_addr: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(server_addr).await?;
        let server_addr = stream.peer_addr()?;
        info!("Connected to {}", server_addr);

        Ok(Client {
            stream,
            server_addr,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Relays `input` lines to the server and server text to `output`.
    ///
    /// When `input` runs dry the sending side is shut down, but server output
    /// keeps flowing until the server closes the connection.
    pub async fn run<I, O>(self, input: I, mut output: O) -> io::Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let (mut reader, mut writer) = self.stream.into_split();
        let mut lines = input.lines();
        let mut input_open = true;
        let mut buffer = [0u8; shared::MAX_INPUT_LEN];

        loop {
            tokio::select! {
                read = reader.read(&mut buffer) => {
                    let len = read?;
                    if len == 0 {
                        info!("Server closed the connection");
                        break;
                    }
                    output.write_all(&buffer[..len]).await?;
                    output.flush().await?;
                }

                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) => {
                            debug!("Sending {:?}", line);
                            writer.write_all(line.as_bytes()).await?;
                            writer.write_all(b"\n").await?;
                        }
                        None => {
                            debug!("Input closed");
                            input_open = false;
                            writer.shutdown().await?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
