use clap::Parser;
use kirim::{Config, ContentLengthPolicy, Request};
use std::{io, time::Duration};
use tokio::{
    net::{TcpListener, TcpStream},
    time::timeout,
};

/// Accept connections one at a time and print the request each one sends.
#[derive(Debug, Parser)]
#[command(name = "tcplistener")]
struct Args {
    /// Address to listen on.
    #[arg(default_value = "0.0.0.0:42069")]
    addr: String,

    /// Seconds to wait for a complete request.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Treat invalid Content-Length as zero instead of rejecting the request.
    #[arg(long)]
    lenient: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let policy = match args.lenient {
        true => ContentLengthPolicy::Lenient,
        false => ContentLengthPolicy::Strict,
    };
    let config = Config::new().with_content_length(policy);
    let limit = Duration::from_secs(args.timeout);

    let listener = TcpListener::bind(&args.addr).await?;
    log::info!("listening on {}", listener.local_addr()?);

    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(ok) => ok,
            Err(err) => {
                log::error!("failed to accept connection: {err}");
                continue;
            }
        };
        log::info!("connection accepted from {addr}");

        match handle(stream, config, limit).await {
            Ok(request) => print_request(&request),
            Err(err) => log::error!("{addr}: {err}"),
        }

        log::info!("connection from {addr} closed");
    }
}

async fn handle(mut stream: TcpStream, config: Config, limit: Duration) -> io::Result<Request> {
    match timeout(limit, kirim::read_request_async_with(&mut stream, config)).await {
        Ok(Ok(request)) => Ok(request),
        Ok(Err(err)) => Err(io::Error::new(io::ErrorKind::InvalidData, err)),
        Err(_) => Err(io::ErrorKind::TimedOut.into()),
    }
}

fn print_request(request: &Request) {
    if let Some(line) = request.request_line() {
        println!("Request line:");
        println!("- Method: {}", line.method());
        println!("- Target: {}", line.target());
        println!("- Version: {}", line.version().as_number());
    }

    println!("Headers:");
    request.headers().for_each(|name, value| {
        println!("- {name}: {value}");
    });

    println!("Body:");
    println!("{}", String::from_utf8_lossy(request.body()));
}
