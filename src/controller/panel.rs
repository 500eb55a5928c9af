/// Single text region showing the active or hovered thought.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentPanel {
    text: Option<String>,
}

impl ContentPanel {
    pub fn show(&mut self, text: &str) {
        self.text = Some(text.to_owned());
    }

    pub fn hide(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }
}
