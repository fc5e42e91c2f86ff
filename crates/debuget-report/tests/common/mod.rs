#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use debuget_core::errors::ResolveError;
use debuget_core::models::{ErrorDescriptor, Frame, Theme};
use debuget_core::traits::IStackResolver;
use debuget_report::{MemorySink, Reporter};

/// Always fails.
pub struct FailingResolver;

impl IStackResolver for FailingResolver {
    async fn resolve(&self, _descriptor: &ErrorDescriptor) -> Result<Vec<Frame>, ResolveError> {
        Err(ResolveError::Unavailable {
            reason: "source maps offline".to_string(),
        })
    }
}

/// Returns a fixed frame list and counts calls.
pub struct FixedResolver {
    pub frames: Vec<Frame>,
    pub calls: AtomicUsize,
}

impl FixedResolver {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IStackResolver for FixedResolver {
    async fn resolve(&self, _descriptor: &ErrorDescriptor) -> Result<Vec<Frame>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.frames.clone())
    }
}

pub fn frame(function: &str, file: &str, line: u32) -> Frame {
    Frame::new(Some(function.to_string()), Some(file.to_string()), Some(line))
}

/// `count` application frames named `f0..`, with a dependency frame after every second one.
pub fn mixed_frames(count: usize) -> Vec<Frame> {
    let mut frames = Vec::new();
    for i in 0..count {
        frames.push(frame(&format!("f{i}"), &format!("/app/src/m{i}.js"), i as u32 + 1));
        if i % 2 == 1 {
            frames.push(frame("dep", "/app/node_modules/lib/index.js", 9));
        }
    }
    frames
}

pub fn plain_theme() -> Theme {
    Theme {
        colors: false,
        ..Theme::default()
    }
}

pub fn memory_reporter<R: IStackResolver>(resolver: R, theme: Theme) -> (Reporter<R>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::new(resolver, theme, sink.clone());
    (reporter, sink)
}

pub fn with_stack(descriptor: ErrorDescriptor) -> ErrorDescriptor {
    let header = descriptor.error_line();
    descriptor.with_stack(format!("{header}\n    at main (/app/src/main.js:1:1)"))
}
