//! Helpers shared by the logging tests

use std::io::{self, Write};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone};

use super::clock::Clock;

/// Console stand-in that can be read back after the logger is done
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Clock that advances one second on every reading
pub struct SteppingClock {
    start: DateTime<Local>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// 2024-05-01 14:05:02 local time
pub fn may_first_2pm() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 1, 14, 5, 2).single().unwrap()
}
