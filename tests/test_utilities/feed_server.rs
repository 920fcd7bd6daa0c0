//! A tiny HTTP server standing in for the NuGet OData feed
//!
//! Runs on a background thread and answers every request with a canned
//! response chosen by the request target. Each response closes the
//! connection.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// One dependant entry for [`atom_feed`]
pub struct Entry<'a> {
    pub id: &'a str,
    pub version: &'a str,
    pub downloads: &'a str,
    pub dependencies: &'a str,
}

/// Renders an Atom page in the shape the feed returns
pub fn atom_feed(entries: &[Entry], next_link: Option<&str>) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<feed xmlns:d="http://schemas.microsoft.com/ado/2007/08/dataservices"
      xmlns:m="http://schemas.microsoft.com/ado/2007/08/dataservices/metadata"
      xmlns="http://www.w3.org/2005/Atom">
  <title type="text">Packages</title>
  <link rel="self" title="Packages" href="Packages" />
"#,
    );
    for entry in entries {
        xml.push_str(&format!(
            r#"  <entry>
    <m:properties>
      <d:Id>{}</d:Id>
      <d:Version>{}</d:Version>
      <d:DownloadCount m:type="Edm.Int32">{}</d:DownloadCount>
      <d:Dependencies>{}</d:Dependencies>
    </m:properties>
  </entry>
"#,
            entry.id, entry.version, entry.downloads, entry.dependencies
        ));
    }
    if let Some(next) = next_link {
        xml.push_str(&format!("  <link rel=\"next\" href=\"{}\" />\n", next));
    }
    xml.push_str("</feed>\n");
    xml
}

/// Canned response
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Handle to a running feed server
pub struct FeedServer {
    port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FeedServer {
    /// Starts a server; `route` maps a request target (path and query) to a reply
    pub fn start<F>(route: F) -> Self
    where
        F: Fn(&str, u16) -> Reply + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let _ = handle(stream, port, &route, &log);
            }
        });

        Self { port, requests }
    }

    /// Base URL to pass as `--feed-url`
    pub fn feed_url(&self) -> String {
        format!("http://127.0.0.1:{}/Packages", self.port)
    }

    /// Request targets received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle<F>(
    mut stream: TcpStream,
    port: u16,
    route: &F,
    log: &Mutex<Vec<String>>,
) -> std::io::Result<()>
where
    F: Fn(&str, u16) -> Reply,
{
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" {
            break;
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();
    log.lock().unwrap().push(target.clone());

    let reply = route(&target, port);
    let response = format!(
        "HTTP/1.1 {} Status\r\nContent-Type: application/atom+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    stream.write_all(response.as_bytes())?;
    stream.flush()
}
