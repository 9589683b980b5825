use crate::evaluate_expression;

/// The literal marker shown when evaluation fails; the single observable
/// error outcome at this layer.
pub const ERROR_MARKER: &str = "Error";

/// Replaces the display-only operator glyphs with their canonical
/// characters before the string reaches the evaluator.
pub fn canonicalize(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

/// One independent calculator instance: the accumulated expression, the
/// last evaluated expression, and the text currently on the display.
#[derive(Debug, Clone)]
pub struct Session {
    expression: String,
    history: String,
    display: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            history: String::new(),
            display: String::from("0"),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn press(&mut self, key: &str) {
        match key {
            "C" => self.clear(),
            "=" => self.equals(),
            _ => self.append(key),
        }
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.history.clear();
        self.display = String::from("0");
    }

    /// Appends a key to the expression. A display showing "0" or the error
    /// marker is stale, so the key replaces the expression instead.
    pub fn append(&mut self, key: &str) {
        if self.display == "0" || self.display == ERROR_MARKER {
            self.expression = key.to_string();
        } else {
            self.expression.push_str(key);
        }
        self.display = self.expression.clone();
    }

    /// Evaluates the current expression. On success the expression is
    /// replaced by its stringified result so further keys chain onto it;
    /// on failure the display shows the error marker and the expression is
    /// cleared so the next key starts fresh. Either way the old expression
    /// becomes the history line.
    pub fn equals(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let result = evaluate_expression(&canonicalize(&self.expression));
        self.history = std::mem::take(&mut self.expression);

        match result {
            Ok(value) => {
                self.expression = value.to_string();
                self.display = self.expression.clone();
            }
            Err(_) => {
                self.display = String::from(ERROR_MARKER);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tab {
    pub title: String,
    pub session: Session,
}

/// Ordered collection of independent calculator sessions. Titles count up
/// monotonically, so closing tabs never reuses a name.
#[derive(Debug)]
pub struct Notebook {
    tabs: Vec<Tab>,
    active: usize,
    created: usize,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    pub fn new() -> Self {
        let mut notebook = Self {
            tabs: Vec::new(),
            active: 0,
            created: 0,
        };
        notebook.add_tab();
        notebook
    }

    pub fn add_tab(&mut self) {
        self.created += 1;
        self.tabs.push(Tab {
            title: format!("P-{}", self.created),
            session: Session::new(),
        });
        self.active = self.tabs.len() - 1;
    }

    /// Closes the active tab. The last remaining tab cannot be closed.
    pub fn close_tab(&mut self) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }

        let _ = self.tabs.remove(self.active);
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        }

        true
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn active_session_mut(&mut self) -> &mut Session {
        &mut self.tabs[self.active].session
    }
}
