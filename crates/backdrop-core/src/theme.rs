use crate::palette::ThemeMode;

type Subscriber = Box<dyn FnMut(ThemeMode)>;

/// Tracks the active theme and notifies subscribers when it changes.
///
/// Front-ends feed raw attribute values in through [`ThemeWatch::notify`]
/// whenever the page signals a possible change. Values that resolve to the
/// mode already active are dropped, so subscribers only run on a real switch.
pub struct ThemeWatch {
    current: ThemeMode,
    subscribers: Vec<Subscriber>,
}

impl ThemeWatch {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn subscribe(&mut self, f: impl FnMut(ThemeMode) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Resolve `raw` and notify subscribers if the mode changed. Returns
    /// whether subscribers ran.
    pub fn notify(&mut self, raw: Option<&str>) -> bool {
        self.set(ThemeMode::from_attribute(raw))
    }

    pub fn set(&mut self, mode: ThemeMode) -> bool {
        if mode == self.current {
            log::debug!("[theme] mutation kept mode {}; skipping", mode.as_str());
            return false;
        }
        self.current = mode;
        for s in self.subscribers.iter_mut() {
            s(mode);
        }
        true
    }
}
