use crate::config::ServerConfig;
use crate::error::Error;
use crate::pool::pool;
use crate::request::{self, Request};
use crate::response::CannedResponse;
use crate::stream::DeadlineStream;
use log::{debug, info};
use std::collections::VecDeque;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// The mock responder.
///
/// Owns one TCP listener with a single catch-all route. Every request, for
/// any method and path, receives the canned response dictated by the
/// configured [`Mode`](crate::Mode); each one is also dumped to the
/// diagnostic log and recorded for inspection.
///
/// Cloning is cheap and clones share the same underlying server.
#[derive(Clone)]
pub struct MockTtsServer(Arc<Inner>);

struct Inner {
    listener: TcpListener,
    addr: SocketAddr,
    config: ServerConfig,
    canned: CannedResponse,

    /// Requests received so far, in arrival order.
    requests: Mutex<VecDeque<Request>>,

    /// Number of requests received since the server was created.
    request_counter: AtomicU32,
}

impl MockTtsServer {
    /// Bind the listener without starting to serve.
    ///
    /// The canned response is resolved here, once, so misconfiguration can
    /// never surface on a per-request path. Call [`run`](Self::run) to serve
    /// on the current thread.
    pub fn bind(config: ServerConfig) -> Result<Self, Error> {
        let listener = TcpListener::bind(config.addr)?;
        let addr = listener.local_addr()?;
        let canned = config.mode.canned();

        Ok(Self(Arc::new(Inner {
            listener,
            addr,
            config,
            canned,
            requests: Mutex::new(VecDeque::new()),
            request_counter: AtomicU32::new(0),
        })))
    }

    /// Bind the listener and serve in the background on the shared pool.
    ///
    /// This is the entry point for tests: bind to `127.0.0.1:0` and point the
    /// client under test at [`url`](Self::url). There is no shutdown; the
    /// server runs until the process exits.
    pub fn start(config: ServerConfig) -> Result<Self, Error> {
        let server = Self::bind(config)?;

        pool().execute({
            let server = server.clone();
            move || server.run()
        });

        Ok(server)
    }

    /// Accept connections forever on the current thread.
    ///
    /// Each accepted connection is handled independently on the shared pool,
    /// so concurrent requests do not serialize behind one another.
    pub fn run(&self) {
        for stream in self.0.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let server = self.clone();

                    pool().execute(move || server.handle_connection(stream));
                }
                Err(e) => debug!("accept failed: {}", e),
            }
        }
    }

    /// Get the socket address of this server.
    pub fn addr(&self) -> SocketAddr {
        self.0.addr
    }

    /// Get the HTTP URL of this server.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr())
    }

    /// Get the number of requests received so far by this server.
    pub fn requests_received(&self) -> u32 {
        self.0.request_counter.load(Ordering::SeqCst)
    }

    /// Get the first request received by this server.
    ///
    /// Panics if no request has been received, as that is always a test
    /// failure.
    pub fn request(&self) -> Request {
        let request = self.0.requests.lock().unwrap().front().cloned();

        request.expect("no request received")
    }

    /// Get all requests received by this server, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.0.requests.lock().unwrap().iter().cloned().collect()
    }

    fn handle_connection(&self, mut stream: TcpStream) {
        // Timeouts, disconnects, and unparseable heads all land here. The
        // connection is dropped without a response; nothing above the
        // transport layer is notified.
        if let Err(e) = self.try_handle(&mut stream) {
            debug!("connection dropped: {}", e);
        }
    }

    fn try_handle(&self, stream: &mut TcpStream) -> io::Result<()> {
        // Deadlines over the whole request and the whole response, not
        // per-read idle timeouts.
        let mut stream = DeadlineStream::new(
            stream,
            self.0.config.read_timeout,
            self.0.config.write_timeout,
        );

        let request = match request::read_request(&mut stream)? {
            Some(request) => request,
            None => return Ok(()),
        };

        info!("----------");
        info!("{:?}", request);

        self.0.request_counter.fetch_add(1, Ordering::SeqCst);
        self.0.requests.lock().unwrap().push_back(request);

        self.0.canned.write_to(&mut stream)
    }
}
