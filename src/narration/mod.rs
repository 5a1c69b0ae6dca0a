//! Narration coordination: at most one utterance is active system-wide.
//!
//! Any number of views may call [`NarrationCoordinator::speak`]; every call
//! preempts whatever was playing (hard preemption, no queue). Completion is
//! observed through the shared `is_speaking` flag, never awaited. Synthesis
//! failures are swallowed here — narration is an enhancement, and no caller
//! ever sees an error from it.

pub mod voice;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Sender},
    Arc, Mutex, MutexGuard,
};
use std::thread;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use uuid::Uuid;

use self::voice::ChimeVoice;

/// Platform speech capability. Implementations own the actual audio
/// objects and report lifecycle transitions through [`UtteranceEvents`].
pub trait SpeechSynthesizer {
    /// Begin synthesizing `text`. Must call `events.started()` when audio
    /// begins and exactly one of `events.finished()` / `events.failed(..)`
    /// afterwards (possibly from another thread).
    fn speak(&mut self, text: &str, events: UtteranceEvents) -> Result<()>;

    /// Cancel any in-flight utterance. Must be safe to call when idle.
    fn cancel(&mut self);
}

/// Silent synthesizer for hosts without audio output: every request
/// completes immediately without ever raising `is_speaking`.
pub struct NullVoice;

impl SpeechSynthesizer for NullVoice {
    fn speak(&mut self, text: &str, events: UtteranceEvents) -> Result<()> {
        debug!("narration unavailable, dropping {} chars", text.len());
        events.finished();
        Ok(())
    }

    fn cancel(&mut self) {}
}

/// Builds the synthesizer on the worker thread, so implementations may
/// hold non-Send audio handles.
pub type VoiceFactory = Box<dyn FnOnce() -> Box<dyn SpeechSynthesizer> + Send>;

enum NarrationCommand {
    Speak { text: String, request: Uuid },
    Stop,
}

struct NarrationShared {
    enabled: AtomicBool,
    speaking: AtomicBool,
    active: Mutex<Option<Uuid>>,
}

impl NarrationShared {
    fn active_guard(&self) -> MutexGuard<'_, Option<Uuid>> {
        match self.active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn clear_if_active(&self, request: Uuid) {
        let mut active = self.active_guard();
        if *active == Some(request) {
            *active = None;
            self.speaking.store(false, Ordering::SeqCst);
        }
    }
}

/// Handle for one utterance, given to the synthesizer so its callbacks can
/// update the shared state. Transitions for a superseded request are
/// ignored: a stale completion can never clobber the current utterance.
#[derive(Clone)]
pub struct UtteranceEvents {
    shared: Arc<NarrationShared>,
    request: Uuid,
}

impl UtteranceEvents {
    /// Synthesis started producing audio.
    pub fn started(&self) {
        let active = self.shared.active_guard();
        if *active == Some(self.request) {
            self.shared.speaking.store(true, Ordering::SeqCst);
        }
    }

    /// Synthesis completed naturally or was interrupted.
    pub fn finished(&self) {
        self.shared.clear_if_active(self.request);
    }

    /// Synthesis failed. Normalized to not-speaking; never propagated.
    pub fn failed(&self, err: &anyhow::Error) {
        warn!("speech synthesis failed: {err:#}");
        self.shared.clear_if_active(self.request);
    }
}

/// Shared, cloneable narration handle. Created once at the application
/// root and passed to every consuming view; independent instances (e.g.
/// in tests) do not interfere with each other.
#[derive(Clone)]
pub struct NarrationCoordinator {
    tx: Arc<Mutex<Option<Sender<NarrationCommand>>>>,
    shared: Arc<NarrationShared>,
    factory: Arc<Mutex<Option<VoiceFactory>>>,
}

impl NarrationCoordinator {
    pub fn new(factory: VoiceFactory) -> Self {
        Self {
            tx: Arc::new(Mutex::new(None)),
            shared: Arc::new(NarrationShared {
                enabled: AtomicBool::new(true),
                speaking: AtomicBool::new(false),
                active: Mutex::new(None),
            }),
            factory: Arc::new(Mutex::new(Some(factory))),
        }
    }

    /// Coordinator speaking through the default tone voice, with the
    /// given pacing rate and output volume.
    pub fn with_chime_voice(rate: f32, volume: f32) -> Self {
        Self::new(Box::new(move || Box::new(ChimeVoice::new(rate, volume))))
    }

    /// Coordinator that produces no audio at all.
    pub fn silent() -> Self {
        Self::new(Box::new(|| Box::new(NullVoice)))
    }

    fn ensure_thread(&self) -> Result<Sender<NarrationCommand>> {
        let mut tx_guard = self
            .tx
            .lock()
            .map_err(|_| anyhow!("narration sender lock poisoned"))?;
        if let Some(tx) = tx_guard.as_ref() {
            return Ok(tx.clone());
        }

        let factory = self
            .factory
            .lock()
            .map_err(|_| anyhow!("narration factory lock poisoned"))?
            .take()
            .ok_or_else(|| anyhow!("narration thread previously failed to start"))?;

        let (tx, rx) = mpsc::channel::<NarrationCommand>();
        let shared = Arc::clone(&self.shared);

        // Dedicated thread holding the non-Send synthesis objects.
        thread::Builder::new()
            .name("narration".to_string())
            .spawn(move || {
                let mut voice = factory();
                while let Ok(cmd) = rx.recv() {
                    match cmd {
                        NarrationCommand::Speak { text, request } => {
                            voice.cancel();
                            let events = UtteranceEvents {
                                shared: Arc::clone(&shared),
                                request,
                            };
                            if let Err(err) = voice.speak(&text, events.clone()) {
                                events.failed(&err);
                            }
                        }
                        NarrationCommand::Stop => {
                            voice.cancel();
                        }
                    }
                }
            })
            .map_err(|err| anyhow!("failed to spawn narration thread: {err}"))?;

        let tx_clone = tx.clone();
        *tx_guard = Some(tx);
        Ok(tx_clone)
    }

    /// Request narration of `text`. Fire-and-forget: preempts any active
    /// utterance, returns immediately, and swallows every failure. A
    /// disabled coordinator or blank text makes this a no-op.
    pub fn speak(&self, text: &str) {
        if !self.is_enabled() {
            return;
        }
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let request = Uuid::new_v4();
        *self.shared.active_guard() = Some(request);

        let tx = match self.ensure_thread() {
            Ok(tx) => tx,
            Err(err) => {
                warn!("narration unavailable: {err:#}");
                self.shared.clear_if_active(request);
                return;
            }
        };

        if tx
            .send(NarrationCommand::Speak {
                text: text.to_string(),
                request,
            })
            .is_err()
        {
            warn!("narration thread is gone, dropping utterance");
            self.shared.clear_if_active(request);
        }
    }

    /// Cancel any active utterance. Idempotent; never spawns the worker.
    pub fn stop(&self) {
        *self.shared.active_guard() = None;
        self.shared.speaking.store(false, Ordering::SeqCst);

        if let Ok(guard) = self.tx.lock() {
            if let Some(tx) = guard.as_ref() {
                let _ = tx.send(NarrationCommand::Stop);
            }
        }
    }

    /// Whether an utterance is currently being synthesized.
    pub fn is_speaking(&self) -> bool {
        self.shared.speaking.load(Ordering::SeqCst)
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::SeqCst)
    }

    /// Enable or disable narration. Disabling also stops the active
    /// utterance, so content falls silent immediately.
    pub fn set_enabled(&self, enabled: bool) {
        self.shared.enabled.store(enabled, Ordering::SeqCst);
        if !enabled {
            self.stop();
        }
    }

    /// Id of the utterance currently considered active, if any.
    pub fn active_request(&self) -> Option<Uuid> {
        *self.shared.active_guard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    enum VoiceCall {
        Cancel,
        Speak { text: String, events: UtteranceEvents },
    }

    /// Synthesizer double that hands every call back to the test thread,
    /// which then drives the utterance callbacks itself.
    struct ScriptedVoice {
        calls: Sender<VoiceCall>,
    }

    impl SpeechSynthesizer for ScriptedVoice {
        fn speak(&mut self, text: &str, events: UtteranceEvents) -> Result<()> {
            let _ = self.calls.send(VoiceCall::Speak {
                text: text.to_string(),
                events,
            });
            Ok(())
        }

        fn cancel(&mut self) {
            let _ = self.calls.send(VoiceCall::Cancel);
        }
    }

    struct FailingVoice;

    impl SpeechSynthesizer for FailingVoice {
        fn speak(&mut self, _text: &str, _events: UtteranceEvents) -> Result<()> {
            Err(anyhow!("no voice available"))
        }

        fn cancel(&mut self) {}
    }

    fn scripted() -> (NarrationCoordinator, mpsc::Receiver<VoiceCall>) {
        let (calls, rx) = mpsc::channel();
        let coordinator =
            NarrationCoordinator::new(Box::new(move || Box::new(ScriptedVoice { calls })));
        (coordinator, rx)
    }

    fn next_speak(rx: &mpsc::Receiver<VoiceCall>) -> (String, UtteranceEvents) {
        let deadline = Duration::from_secs(2);
        loop {
            match rx.recv_timeout(deadline) {
                Ok(VoiceCall::Speak { text, events }) => return (text, events),
                Ok(VoiceCall::Cancel) => continue,
                Err(err) => panic!("no speak call arrived: {err}"),
            }
        }
    }

    #[test]
    fn utterance_lifecycle_drives_is_speaking() {
        let (coordinator, rx) = scripted();
        assert!(!coordinator.is_speaking());

        coordinator.speak("hello cosmos");
        let (text, events) = next_speak(&rx);
        assert_eq!(text, "hello cosmos");
        assert!(!coordinator.is_speaking());

        events.started();
        assert!(coordinator.is_speaking());
        events.finished();
        assert!(!coordinator.is_speaking());
        assert_eq!(coordinator.active_request(), None);
    }

    #[test]
    fn latest_speak_preempts_and_stale_callbacks_are_ignored() {
        let (coordinator, rx) = scripted();

        coordinator.speak("A");
        coordinator.speak("B");

        let (first, a) = next_speak(&rx);
        let (second, b) = next_speak(&rx);
        assert_eq!(first, "A");
        assert_eq!(second, "B");

        // B superseded A before A's callbacks ran.
        a.started();
        assert!(!coordinator.is_speaking());
        b.started();
        assert!(coordinator.is_speaking());

        // A completing late must not clear B's speaking state.
        a.finished();
        assert!(coordinator.is_speaking());
        b.finished();
        assert!(!coordinator.is_speaking());
    }

    #[test]
    fn stop_is_idempotent() {
        let (coordinator, rx) = scripted();
        coordinator.stop();
        coordinator.stop();
        assert!(!coordinator.is_speaking());

        coordinator.speak("something");
        let (_, events) = next_speak(&rx);
        events.started();
        assert!(coordinator.is_speaking());

        coordinator.stop();
        assert!(!coordinator.is_speaking());
        coordinator.stop();
        assert!(!coordinator.is_speaking());

        // The stopped utterance finishing later changes nothing.
        events.finished();
        assert!(!coordinator.is_speaking());
    }

    #[test]
    fn blank_text_is_a_no_op() {
        let (coordinator, rx) = scripted();
        coordinator.speak("");
        coordinator.speak("   ");
        assert!(!coordinator.is_speaking());
        assert_eq!(coordinator.active_request(), None);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn disabled_coordinator_ignores_speak() {
        let (coordinator, rx) = scripted();
        coordinator.set_enabled(false);
        assert!(!coordinator.is_enabled());

        coordinator.speak("test");
        assert!(!coordinator.is_speaking());
        assert_eq!(coordinator.active_request(), None);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

        coordinator.set_enabled(true);
        coordinator.speak("test");
        let (text, _) = next_speak(&rx);
        assert_eq!(text, "test");
    }

    #[test]
    fn disabling_stops_active_utterance() {
        let (coordinator, rx) = scripted();
        coordinator.speak("long narration");
        let (_, events) = next_speak(&rx);
        events.started();
        assert!(coordinator.is_speaking());

        coordinator.set_enabled(false);
        assert!(!coordinator.is_speaking());
        assert_eq!(coordinator.active_request(), None);
    }

    #[test]
    fn synthesis_error_normalizes_to_not_speaking() {
        let coordinator = NarrationCoordinator::new(Box::new(|| Box::new(FailingVoice)));
        coordinator.speak("doomed");

        let deadline = Instant::now() + Duration::from_secs(2);
        while coordinator.active_request().is_some() {
            assert!(Instant::now() < deadline, "error was never normalized");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!coordinator.is_speaking());
    }

    #[test]
    fn null_voice_never_raises_is_speaking() {
        let coordinator = NarrationCoordinator::silent();
        coordinator.speak("anything");

        let deadline = Instant::now() + Duration::from_secs(2);
        while coordinator.active_request().is_some() {
            assert!(Instant::now() < deadline, "null voice never completed");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!coordinator.is_speaking());
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let (a, rx_a) = scripted();
        let (b, _rx_b) = scripted();

        a.speak("only a");
        let (_, events) = next_speak(&rx_a);
        events.started();

        assert!(a.is_speaking());
        assert!(!b.is_speaking());
    }
}
