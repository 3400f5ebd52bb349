// Scripted audio engine shared by the integration tests.
//
// Every call the glue makes is appended to a shared journal so tests can
// check ordering without a browser.

#![allow(dead_code)]

use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Wake, Waker};

use abc_playback::{
    AudioEngine, ControlOptions, CursorController, EngineError, MemoryScene, MidiOptions, NodeId, SceneError, Synth,
    SynthController,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ControllerCreated,
    SynthCreated,
    Load { selector: String, cursor_root: String, cursor_class: String, options: ControlOptions },
    Disable(bool),
    SynthInit(String),
    SetTune { tune: String, user_action: bool },
    MidiFile { tune: String, options: MidiOptions },
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

#[derive(Clone)]
pub struct MockEngine {
    pub supported: bool,
    pub fail_init: Option<String>,
    pub fail_set_tune: Option<String>,
    pub midi: Result<String, EngineError>,
    pub scene: MemoryScene,
    pub journal: Journal,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            supported: true,
            fail_init: None,
            fail_set_tune: None,
            midi: Ok("<a download=\"music.midi\" href=\"data:audio/midi,x\">download midi</a>".to_string()),
            scene: page_scene(),
            journal: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }
}

#[derive(Debug)]
pub struct MockController {
    journal: Journal,
    fail_set_tune: Option<String>,
    pub cursor: Option<CursorController<MemoryScene>>,
    pub disabled: bool,
}

impl SynthController for MockController {
    type Tune = String;
    type Scene = MemoryScene;

    fn load(
        &mut self,
        audio_selector: &str,
        cursor: CursorController<MemoryScene>,
        options: &ControlOptions,
    ) -> Result<(), EngineError> {
        self.journal.borrow_mut().push(Call::Load {
            selector: audio_selector.to_string(),
            cursor_root: cursor.root_selector().to_string(),
            cursor_class: cursor.style().cursor_class.clone(),
            options: *options,
        });
        self.cursor = Some(cursor);
        Ok(())
    }

    fn disable(&mut self, disabled: bool) {
        self.journal.borrow_mut().push(Call::Disable(disabled));
        self.disabled = disabled;
    }

    async fn set_tune(&mut self, tune: &String, user_action: bool) -> Result<(), EngineError> {
        self.journal.borrow_mut().push(Call::SetTune { tune: tune.clone(), user_action });
        match &self.fail_set_tune {
            Some(msg) => Err(EngineError::new(msg.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct MockSynth {
    journal: Journal,
    fail_init: Option<String>,
}

impl Synth for MockSynth {
    type Tune = String;

    async fn init(&mut self, tune: &String) -> Result<(), EngineError> {
        self.journal.borrow_mut().push(Call::SynthInit(tune.clone()));
        match &self.fail_init {
            Some(msg) => Err(EngineError::new(msg.clone())),
            None => Ok(()),
        }
    }
}

impl AudioEngine for MockEngine {
    type Tune = String;
    type Scene = MemoryScene;
    type Controller = MockController;
    type Synth = MockSynth;

    fn supports_audio(&self) -> bool {
        self.supported
    }

    fn scene(&self) -> Result<MemoryScene, SceneError> {
        Ok(self.scene.clone())
    }

    fn synth_controller(&self) -> Result<MockController, EngineError> {
        self.journal.borrow_mut().push(Call::ControllerCreated);
        Ok(MockController {
            journal: self.journal.clone(),
            fail_set_tune: self.fail_set_tune.clone(),
            cursor: None,
            disabled: false,
        })
    }

    fn create_synth(&self) -> Result<MockSynth, EngineError> {
        self.journal.borrow_mut().push(Call::SynthCreated);
        Ok(MockSynth {
            journal: self.journal.clone(),
            fail_init: self.fail_init.clone(),
        })
    }

    fn midi_file(&self, tune: &String, options: &MidiOptions) -> Result<String, EngineError> {
        self.journal.borrow_mut().push(Call::MidiFile {
            tune: tune.clone(),
            options: *options,
        });
        self.midi.clone()
    }
}

/// Page with a rendered tune in `#paper`, an empty `#audio` and an empty `#midi`
pub fn page_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    let body = scene.body();
    let paper = scene.add_element_with_id(body, "div", "paper");
    scene.add_element(paper, "svg");
    scene.add_element_with_id(body, "div", "audio");
    scene.add_element_with_id(body, "div", "midi");
    scene
}

/// Scene with one rendered tune under `#<id>`; returns the scene and its svg
pub fn tune_scene(id: &str) -> (MemoryScene, NodeId) {
    let mut scene = MemoryScene::new();
    let body = scene.body();
    let paper = scene.add_element_with_id(body, "div", id);
    let svg = scene.add_element(paper, "svg");
    (scene, svg)
}

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

/// Drive a future on the current thread. The mock engine never suspends,
/// so this returns after the first poll in practice.
pub fn block_on<F: Future>(future: F) -> F::Output {
    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut future = pin!(future);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
        std::thread::yield_now();
    }
}

/// `log` backend that keeps every record for later inspection
struct CaptureLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger. Safe to call from every test.
pub fn capture_logs() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
}

/// Whether a record with exactly `message` was logged at `level`
pub fn logged(level: log::Level, message: &str) -> bool {
    LOGGER
        .records
        .lock()
        .map(|records| records.iter().any(|(l, m)| *l == level && m == message))
        .unwrap_or(false)
}
