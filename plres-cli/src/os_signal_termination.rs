use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use plres_core::termination::TerminationCondition;

/// Stops the saturation once SIGINT or SIGTERM has been received.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Register the signal handlers which set the flag polled by this condition.
    pub(crate) fn install() -> std::io::Result<OsSignal> {
        const TERMINATION_SIGNALS: &[std::ffi::c_int] =
            &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

        let signal_received = Arc::new(AtomicBool::new(false));

        for &signal in TERMINATION_SIGNALS {
            let _ = signal_hook::flag::register(signal, Arc::clone(&signal_received))?;
        }

        Ok(OsSignal { signal_received })
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}
