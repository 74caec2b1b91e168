use std::{process, thread};

use anyhow::Result;
use nix::sys::signal::{SigSet, Signal};

/// Blocks SIGINT/SIGTERM on the calling thread and forwards the first one
/// delivered to the process over the returned channel. A second signal exits
/// the process straight away with status 0, so an interrupt still works while
/// the main thread is stuck in a request or a panel refresh.
///
/// Must run before any other thread is spawned, so that every thread inherits
/// the mask and the listener is the only one to see the signal.
pub fn listen_for_shutdown() -> Result<flume::Receiver<Signal>> {
    let mut mask = SigSet::empty();
    mask.add(Signal::SIGINT);
    mask.add(Signal::SIGTERM);
    mask.thread_block()?;

    let (tx, rx) = flume::bounded(1);
    thread::Builder::new()
        .name("signal-listener".into())
        .spawn(move || {
            let mut forwarded = false;
            loop {
                match mask.wait() {
                    Ok(signal) if !forwarded => {
                        log::debug!("Received {:?}", signal);
                        tx.send(signal).ok();
                        forwarded = true;
                    }
                    Ok(signal) => {
                        log::warn!("Received {:?} again, exiting now", signal);
                        process::exit(0);
                    }
                    Err(e) => {
                        log::error!("Waiting for signals failed: {}", e);
                        return;
                    }
                }
            }
        })?;
    Ok(rx)
}
