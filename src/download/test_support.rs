//! 单元测试用的内存镜像。

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::Mutex;

use crossbeam_channel::Receiver;

use crate::network::{FetchError, MirrorClient};

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Body(Vec<u8>),
    Status(u16),
    /// 先返回一部分字节，然后连接中断。
    Truncated(Vec<u8>),
}

#[derive(Default)]
pub(crate) struct FakeMirrors {
    routes: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<String>>,
    gate: Option<Receiver<()>>,
}

impl FakeMirrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 每次请求前先从 `gate` 取一个令牌；发送端 drop 后不再阻塞。
    pub(crate) fn gated(gate: Receiver<()>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub(crate) fn route(self, url: impl Into<String>, reply: Reply) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(url.into(), reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

struct BrokenReader {
    head: Cursor<Vec<u8>>,
}

impl Read for BrokenReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.head.read(buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ));
        }
        Ok(n)
    }
}

impl MirrorClient for FakeMirrors {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        if let Some(gate) = &self.gate {
            let _ = gate.recv();
        }
        self.requests.lock().unwrap().push(url.to_string());
        let reply = self.routes.lock().unwrap().get(url).cloned();
        match reply {
            Some(Reply::Body(bytes)) => Ok(Box::new(Cursor::new(bytes))),
            Some(Reply::Truncated(bytes)) => Ok(Box::new(BrokenReader {
                head: Cursor::new(bytes),
            })),
            Some(Reply::Status(code)) => Err(FetchError::Status(code)),
            None => Err(FetchError::Other(format!("connection refused: {url}"))),
        }
    }
}
