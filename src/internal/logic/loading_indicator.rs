use crate::prelude::*;

/// Tracks whether this call showed the host loading indicator, so that it is
/// hidden exactly once: either explicitly before the outcome is reported, or
/// on drop if the call future was dropped midway.
pub(crate) struct LoadingIndicator {
    ui: Arc<dyn FFIUIHandler>,
    shown: bool,
}

impl LoadingIndicator {
    pub(crate) fn show_if(needed: bool, ui: Arc<dyn FFIUIHandler>, title: &str) -> Self {
        if needed {
            ui.show_loading(title.to_owned());
        }
        Self { ui, shown: needed }
    }

    pub(crate) fn retract(&mut self) {
        if std::mem::take(&mut self.shown) {
            self.ui.hide_loading();
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.retract();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingUI {
        shown: Mutex<u8>,
        hidden: Mutex<u8>,
    }

    impl FFIUIHandler for CountingUI {
        fn show_loading(&self, _title: String) {
            *self.shown.lock().unwrap() += 1;
        }
        fn hide_loading(&self) {
            *self.hidden.lock().unwrap() += 1;
        }
        fn show_modal(&self, _modal: FFIModal) {}
    }

    #[test]
    fn hides_exactly_once() {
        let ui = Arc::new(CountingUI::default());
        let mut indicator = LoadingIndicator::show_if(true, ui.clone(), "Loading");
        indicator.retract();
        indicator.retract();
        drop(indicator);
        assert_eq!(*ui.shown.lock().unwrap(), 1);
        assert_eq!(*ui.hidden.lock().unwrap(), 1);
    }

    #[test]
    fn hides_on_drop() {
        let ui = Arc::new(CountingUI::default());
        drop(LoadingIndicator::show_if(true, ui.clone(), "Loading"));
        assert_eq!(*ui.hidden.lock().unwrap(), 1);
    }

    #[test]
    fn untouched_when_not_needed() {
        let ui = Arc::new(CountingUI::default());
        let mut indicator = LoadingIndicator::show_if(false, ui.clone(), "Loading");
        indicator.retract();
        drop(indicator);
        assert_eq!(*ui.shown.lock().unwrap(), 0);
        assert_eq!(*ui.hidden.lock().unwrap(), 0);
    }
}
